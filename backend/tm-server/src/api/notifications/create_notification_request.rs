use serde::Deserialize;

/// Express interest in teaming up with another user
#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    pub recipient_id: String,

    /// Defaults to "<your name> is interested in teaming up"
    #[serde(default)]
    pub message: Option<String>,
}
