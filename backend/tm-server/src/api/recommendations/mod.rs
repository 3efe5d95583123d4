pub mod recommendation_dto;
#[allow(clippy::module_inception)]
pub mod recommendations;
pub mod recommendations_query;
pub mod recommendations_response;
