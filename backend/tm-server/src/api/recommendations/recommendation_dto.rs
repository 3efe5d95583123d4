use crate::ProfileDto;

use tm_core::{Recommendation, Role, RoleBucket};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RecommendationDto {
    pub profile: ProfileDto,
    pub similarity: f64,
}

impl From<Recommendation> for RecommendationDto {
    fn from(r: Recommendation) -> Self {
        Self {
            profile: r.profile.into(),
            similarity: r.similarity,
        }
    }
}

/// Candidates whose primary role is `role`, least similar first
#[derive(Debug, Serialize)]
pub struct RoleBucketDto {
    pub role: Role,
    pub recommendations: Vec<RecommendationDto>,
}

impl From<RoleBucket> for RoleBucketDto {
    fn from(b: RoleBucket) -> Self {
        Self {
            role: b.role,
            recommendations: b
                .recommendations
                .into_iter()
                .map(RecommendationDto::from)
                .collect(),
        }
    }
}
