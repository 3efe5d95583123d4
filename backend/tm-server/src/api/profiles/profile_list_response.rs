use crate::ProfileDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileListResponse {
    pub profiles: Vec<ProfileDto>,
}
