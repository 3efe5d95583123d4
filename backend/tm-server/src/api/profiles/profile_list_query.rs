use serde::Deserialize;

/// Query parameters for browsing profiles. Filters combine with AND.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileListQuery {
    /// Matches the primary or the secondary role
    pub role: Option<String>,
    /// Case-insensitive exact language match
    pub skill: Option<String>,
    pub experience: Option<String>,
    /// Leave the caller's own profile out (default: false)
    #[serde(default)]
    pub exclude_self: bool,
}
