use crate::{
    CoreError, CoreResult, OrderedChild, OrderedStore, validate_explicit_order,
    validate_reorder_payload,
};

use uuid::Uuid;

/// Ordering rules for one kind of parent-scoped child collection.
///
/// Kind-agnostic: the store decides which table (or map) holds the children.
pub struct OrderedCollectionService<S> {
    store: S,
}

impl<S: OrderedStore> OrderedCollectionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Order for a child appended to `parent_id`: current max plus one.
    pub async fn next_order(&self, parent_id: Uuid) -> CoreResult<i32> {
        let max_order = self.store.max_order(parent_id).await?;

        max_order.checked_add(1).ok_or_else(|| {
            CoreError::validation(
                format!(
                    "no {} order values left for parent {}",
                    S::Child::KIND,
                    parent_id
                ),
                Some("order"),
            )
        })
    }

    /// Use `explicit` if it is free, otherwise append.
    pub async fn resolve_order(&self, parent_id: Uuid, explicit: Option<i32>) -> CoreResult<i32> {
        match explicit {
            Some(order) => {
                self.ensure_order_available(parent_id, order, None).await?;
                Ok(order)
            }
            None => self.next_order(parent_id).await,
        }
    }

    /// Reject non-positive orders and orders held by another sibling.
    pub async fn ensure_order_available(
        &self,
        parent_id: Uuid,
        order: i32,
        exclude: Option<Uuid>,
    ) -> CoreResult<()> {
        validate_explicit_order(order)?;

        if self.store.order_taken(parent_id, order, exclude).await? {
            return Err(CoreError::validation(
                format!(
                    "order {} is already used by another {} in this project",
                    order,
                    S::Child::KIND
                ),
                Some("order"),
            ));
        }

        Ok(())
    }

    /// Write positions for an already validated id list and return the
    /// collection in its new order.
    pub async fn apply_reorder(
        &self,
        parent_id: Uuid,
        validated_ids: &[Uuid],
    ) -> CoreResult<Vec<S::Child>> {
        self.store.apply_orders(parent_id, validated_ids).await?;

        let children = self.store.list_ordered(parent_id).await?;
        Ok(children)
    }

    /// Validate `submitted_ids` against the parent's current children, then
    /// rewrite every order to match.
    pub async fn reorder(
        &self,
        parent_id: Uuid,
        submitted_ids: &[Uuid],
    ) -> CoreResult<Vec<S::Child>> {
        // Fetched at call time so a concurrent add/delete invalidates the payload
        let existing_ids = self.store.child_ids(parent_id).await?;
        let validated_ids = validate_reorder_payload(&existing_ids, submitted_ids)?;

        log::debug!(
            "Reordering {} {} children of parent {}",
            validated_ids.len(),
            S::Child::KIND,
            parent_id
        );

        self.apply_reorder(parent_id, &validated_ids).await
    }
}
