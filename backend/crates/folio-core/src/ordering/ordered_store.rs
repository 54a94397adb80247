use crate::{OrderedChild, StoreResult};

use std::collections::HashSet;

use async_trait::async_trait;
use uuid::Uuid;

/// Transactional storage for one kind of ordered child.
///
/// Every method is scoped to a single parent. `apply_orders` must be atomic:
/// either every listed child receives its new order or none does.
#[async_trait]
pub trait OrderedStore: Send + Sync {
    type Child: OrderedChild + Send;

    /// Ids of every child currently owned by `parent_id`.
    async fn child_ids(&self, parent_id: Uuid) -> StoreResult<HashSet<Uuid>>;

    /// Highest order among the parent's children, `0` when there are none.
    async fn max_order(&self, parent_id: Uuid) -> StoreResult<i32>;

    /// Whether a sibling other than `exclude` already holds `order`.
    async fn order_taken(
        &self,
        parent_id: Uuid,
        order: i32,
        exclude: Option<Uuid>,
    ) -> StoreResult<bool>;

    /// Set `order = index + 1` for each id, matching on both id and parent.
    /// Fails with [`StoreError::Stale`](crate::StoreError::Stale) if any id
    /// no longer belongs to `parent_id`; nothing is written in that case.
    async fn apply_orders(&self, parent_id: Uuid, ordered_ids: &[Uuid]) -> StoreResult<()>;

    /// All children of the parent, ascending by order.
    async fn list_ordered(&self, parent_id: Uuid) -> StoreResult<Vec<Self::Child>>;
}
