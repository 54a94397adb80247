pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    children::{
        child_list_response::ChildListResponse,
        child_response::ChildResponse,
        children::{
            create_child, delete_child, get_child, list_children, reorder_children, update_child,
        },
        create_child_request::{CreateImageRequest, CreatePostRequest},
        image_dto::ImageDto,
        post_dto::PostDto,
        reorder_request::ReorderRequest,
        update_child_request::{UpdateImageRequest, UpdatePostRequest},
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    path_ids::{parse_child_kind, parse_uuid, parse_uuid_list},
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{create_project, delete_project, get_project, list_projects, update_project},
        update_project_request::UpdateProjectRequest,
    },
};

pub use crate::routes::build_router;
