use crate::ProfileDto;

use serde::Serialize;

/// A confirmed teammate
#[derive(Debug, Serialize)]
pub struct MatchDto {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
    pub matched_at: i64,
    /// None when the teammate has not created a profile
    pub profile: Option<ProfileDto>,
}
