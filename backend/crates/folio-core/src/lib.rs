pub mod error;
pub mod models;
pub mod ordering;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::child_kind::ChildKind;
pub use models::ordered_child::OrderedChild;
pub use models::project::Project;
pub use models::project_image::ProjectImage;
pub use models::project_post::ProjectPost;
pub use ordering::ordered_collection_service::OrderedCollectionService;
pub use ordering::ordered_store::OrderedStore;
pub use ordering::reorder_validator::{validate_explicit_order, validate_reorder_payload};
pub use ordering::store_error::{StoreError, StoreResult};
