pub mod claims;
pub mod errors;
pub mod service;

pub use claims::Claims;
pub use claims::IdentityRef;
pub use errors::TokenError;
pub use service::TokenConfig;
pub use service::TokenService;
pub use service::DEFAULT_TOKEN_TTL_SECONDS;
