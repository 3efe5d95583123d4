pub mod create_profile_request;
pub mod profile_dto;
pub mod profile_input;
pub mod profile_list_query;
pub mod profile_list_response;
pub mod profile_response;
#[allow(clippy::module_inception)]
pub mod profiles;
pub mod update_profile_request;
