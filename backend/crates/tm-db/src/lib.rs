pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{MIGRATOR, connect};
pub use error::{DbError, Result};
pub use repositories::match_repository::MatchRepository;
pub use repositories::notification_repository::NotificationRepository;
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::user_repository::UserRepository;
