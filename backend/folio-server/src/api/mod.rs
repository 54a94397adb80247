pub mod children;
pub mod delete_response;
pub mod error;
pub mod path_ids;
pub mod projects;
