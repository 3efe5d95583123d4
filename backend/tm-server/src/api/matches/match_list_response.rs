use crate::MatchDto;

use serde::Serialize;

/// The caller's roster, oldest match first
#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub matches: Vec<MatchDto>,
}
