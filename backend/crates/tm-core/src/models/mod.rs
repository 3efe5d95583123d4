pub mod experience_level;
pub mod notification;
pub mod notification_kind;
pub mod profile;
pub mod profile_filter;
pub mod role;
pub mod team_match;
pub mod user;
