use crate::RoleBucketDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    /// One bucket per role, always in the same role order
    pub buckets: Vec<RoleBucketDto>,
}
