pub mod child_kind;
pub mod ordered_child;
pub mod project;
pub mod project_image;
pub mod project_post;
