use crate::UserDto;

use tm_auth::IssuedToken;
use tm_core::User;

use serde::Serialize;

pub const TOKEN_TYPE: &str = "bearer";

/// Body returned by register and login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub user: UserDto,
    pub access_token: String,
    pub token_type: String,
    /// Unix seconds
    pub expires_at: i64,
}

impl TokenResponse {
    pub fn new(user: User, issued: IssuedToken) -> Self {
        Self {
            user: user.into(),
            access_token: issued.token,
            token_type: TOKEN_TYPE.to_string(),
            expires_at: issued.expires_at.timestamp(),
        }
    }
}
