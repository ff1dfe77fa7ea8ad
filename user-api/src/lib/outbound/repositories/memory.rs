use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local credential store.
///
/// Uniqueness checks and writes happen under one write lock, so they are
/// atomic with respect to each other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Reject `candidate` if another user already holds its username or email.
fn ensure_unique(users: &HashMap<UserId, User>, candidate: &User) -> Result<(), UserError> {
    for other in users.values().filter(|other| other.id != candidate.id) {
        if other.username == candidate.username {
            return Err(UserError::UsernameAlreadyExists(
                candidate.username.to_string(),
            ));
        }
        if other.email == candidate.email {
            return Err(UserError::EmailAlreadyExists(candidate.email.to_string()));
        }
    }
    Ok(())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        ensure_unique(&users, &user)?;
        users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| &user.email == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(users)
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        ensure_unique(&users, &user)?;
        users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        self.users
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;
    use crate::domain::user::models::Username;

    fn user(username: &str, email: &str) -> User {
        User {
            id: UserId::new(),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repository = InMemoryUserRepository::new();
        let created = repository
            .create(user("chansec", "chanse@chanse.com"))
            .await
            .unwrap();

        assert_eq!(
            repository.find_by_id(&created.id).await.unwrap(),
            Some(created.clone())
        );
        assert_eq!(
            repository.find_by_email(&created.email).await.unwrap(),
            Some(created)
        );
        assert_eq!(repository.find_by_id(&UserId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicates() {
        let repository = InMemoryUserRepository::new();
        repository
            .create(user("chansec", "chanse@chanse.com"))
            .await
            .unwrap();

        let same_username = repository.create(user("chansec", "other@chanse.com")).await;
        assert!(matches!(
            same_username,
            Err(UserError::UsernameAlreadyExists(_))
        ));

        let same_email = repository.create(user("other", "chanse@chanse.com")).await;
        assert!(matches!(same_email, Err(UserError::EmailAlreadyExists(_))));

        assert_eq!(repository.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_checks_uniqueness_against_others_only() {
        let repository = InMemoryUserRepository::new();
        let first = repository
            .create(user("first", "first@example.com"))
            .await
            .unwrap();
        repository
            .create(user("second", "second@example.com"))
            .await
            .unwrap();

        // Re-saving unchanged is fine
        assert!(repository.update(first.clone()).await.is_ok());

        let mut clash = first.clone();
        clash.email = EmailAddress::new("second@example.com".to_string()).unwrap();
        assert!(matches!(
            repository.update(clash).await,
            Err(UserError::EmailAlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let repository = InMemoryUserRepository::new();
        let ghost = user("ghost", "ghost@example.com");

        assert!(matches!(
            repository.update(ghost.clone()).await,
            Err(UserError::NotFound(_))
        ));
        assert!(matches!(
            repository.delete(&ghost.id).await,
            Err(UserError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let repository = InMemoryUserRepository::new();
        let mut older = user("older", "older@example.com");
        older.created_at = Utc::now() - Duration::hours(1);
        repository.create(older).await.unwrap();
        repository
            .create(user("newer", "newer@example.com"))
            .await
            .unwrap();

        let names: Vec<String> = repository
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|user| user.username.to_string())
            .collect();
        assert_eq!(names, vec!["newer", "older"]);
    }
}
