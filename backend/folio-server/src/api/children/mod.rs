pub mod child_list_response;
pub mod child_response;
pub mod children;
pub mod create_child_request;
pub mod image_dto;
pub mod post_dto;
pub mod reorder_request;
pub mod update_child_request;
