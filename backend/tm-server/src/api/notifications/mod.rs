pub mod create_notification_request;
pub mod express_interest_response;
pub mod notification_dto;
pub mod notification_list_query;
pub mod notification_list_response;
pub mod notification_response;
#[allow(clippy::module_inception)]
pub mod notifications;
