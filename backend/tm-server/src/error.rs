use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] tm_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] tm_db::DbError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] tm_auth::AuthError),

    #[error("auth.secret_key is not configured")]
    MissingSecret,

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
