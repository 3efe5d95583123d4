pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_algorithm;
pub mod jwt_validator;
pub mod login_rate_limiter;
pub mod password;
pub mod rate_limit_config;
pub mod token_issuer;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_algorithm::JwtAlgorithm;
pub use jwt_validator::JwtValidator;
pub use login_rate_limiter::LoginRateLimiter;
pub use rate_limit_config::RateLimitConfig;
pub use token_issuer::{IssuedToken, TokenIssuer};
