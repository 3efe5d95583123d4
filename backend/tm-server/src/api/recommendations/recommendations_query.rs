use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationsQuery {
    /// Maximum entries per role bucket (default: 10)
    pub limit: Option<usize>,
}
