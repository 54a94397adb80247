pub mod ordered_rows;
pub mod ordered_table;
pub mod project_image_repository;
pub mod project_post_repository;
pub mod project_repository;
pub(crate) mod row_decode;
