mod experience_level;
mod notification;
mod profile;
mod profile_filter;
mod role;
mod team_match;
mod user;
