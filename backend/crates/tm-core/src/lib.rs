pub mod error;
pub mod models;
pub mod recommend;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::experience_level::ExperienceLevel;
pub use models::notification::Notification;
pub use models::notification_kind::NotificationKind;
pub use models::profile::Profile;
pub use models::profile_filter::ProfileFilter;
pub use models::role::Role;
pub use models::team_match::TeamMatch;
pub use models::user::User;
pub use recommend::{Recommendation, RoleBucket, recommend};

#[cfg(test)]
mod tests;
