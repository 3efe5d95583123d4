pub mod auth;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod matches;
pub mod notifications;
pub mod profiles;
pub mod recommendations;
pub mod users;
