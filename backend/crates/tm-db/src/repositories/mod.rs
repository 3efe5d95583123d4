pub mod match_repository;
pub mod notification_repository;
pub mod profile_repository;
pub mod user_repository;

mod row;
