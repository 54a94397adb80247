//! Parent-scoped ordering for child collections.
//!
//! Children of one parent carry a positive `order` that is unique among
//! siblings. A reorder always rewrites every sibling to its 1-based position
//! in the submitted list, so after a successful reorder the orders are
//! exactly `1..=N`. Inserts append at `max + 1`. Deletes leave gaps that the
//! next reorder closes.

pub mod ordered_collection_service;
pub mod ordered_store;
pub mod reorder_validator;
pub mod store_error;
