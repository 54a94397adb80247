use crate::tests::memory_store::MemoryStore;
use crate::{CoreError, OrderedCollectionService};

use googletest::prelude::*;
use uuid::Uuid;

/// Parent with children a(1), b(2), c(3).
fn seeded() -> (OrderedCollectionService<MemoryStore>, Uuid, [Uuid; 3]) {
    let store = MemoryStore::default();
    let parent_id = Uuid::new_v4();
    let a = store.insert(parent_id, 1);
    let b = store.insert(parent_id, 2);
    let c = store.insert(parent_id, 3);
    (OrderedCollectionService::new(store), parent_id, [a, b, c])
}

// =========================================================================
// next_order / resolve_order
// =========================================================================

#[tokio::test]
async fn given_no_children_when_next_order_then_one() {
    let service = OrderedCollectionService::new(MemoryStore::default());

    let order = service.next_order(Uuid::new_v4()).await.unwrap();

    assert_that!(order, eq(1));
}

#[tokio::test]
async fn given_max_order_k_when_next_order_then_k_plus_one() {
    // Given: orders with a gap, max is 7
    let store = MemoryStore::default();
    let parent_id = Uuid::new_v4();
    store.insert(parent_id, 2);
    store.insert(parent_id, 7);
    store.insert(Uuid::new_v4(), 40);
    let service = OrderedCollectionService::new(store);

    // When
    let order = service.next_order(parent_id).await.unwrap();

    // Then: siblings under other parents are ignored
    assert_that!(order, eq(8));
}

#[tokio::test]
async fn given_max_order_at_limit_when_next_order_then_validation_error() {
    let store = MemoryStore::default();
    let parent_id = Uuid::new_v4();
    store.insert(parent_id, i32::MAX);
    let service = OrderedCollectionService::new(store);

    let result = service.next_order(parent_id).await;

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[tokio::test]
async fn given_free_explicit_order_when_resolved_then_used() {
    let (service, parent_id, _) = seeded();

    let order = service.resolve_order(parent_id, Some(10)).await.unwrap();

    assert_that!(order, eq(10));
}

#[tokio::test]
async fn given_taken_explicit_order_when_resolved_then_validation_error() {
    let (service, parent_id, _) = seeded();

    let result = service.resolve_order(parent_id, Some(2)).await;

    assert!(
        matches!(result, Err(CoreError::Validation { ref field, .. }) if field.as_deref() == Some("order"))
    );
}

#[tokio::test]
async fn given_own_order_when_checking_availability_excluding_self_then_ok() {
    let (service, parent_id, [_, b, _]) = seeded();

    let result = service.ensure_order_available(parent_id, 2, Some(b)).await;

    assert_that!(result, ok(anything()));
}

// =========================================================================
// reorder
// =========================================================================

#[tokio::test]
async fn given_three_children_when_reordered_c_a_b_then_orders_follow_positions() {
    // Given
    let (service, parent_id, [a, b, c]) = seeded();

    // When
    let children = service.reorder(parent_id, &[c, a, b]).await.unwrap();

    // Then
    let returned: Vec<Uuid> = children.iter().map(|child| child.id).collect();
    assert_that!(returned, eq(&vec![c, a, b]));
    assert_that!(service.store().order_of(a), some(eq(2)));
    assert_that!(service.store().order_of(b), some(eq(3)));
    assert_that!(service.store().order_of(c), some(eq(1)));
}

#[tokio::test]
async fn given_missing_id_when_reordered_then_invalid_payload_and_nothing_written() {
    // Given
    let (service, parent_id, [a, b, c]) = seeded();

    // When
    let result = service.reorder(parent_id, &[c, a]).await;

    // Then
    assert!(matches!(result, Err(CoreError::InvalidPayload { .. })));
    assert_that!(service.store().apply_calls(), eq(0));
    assert_that!(service.store().order_of(a), some(eq(1)));
    assert_that!(service.store().order_of(b), some(eq(2)));
    assert_that!(service.store().order_of(c), some(eq(3)));
}

#[tokio::test]
async fn given_sibling_from_other_parent_when_reordered_then_invalid_payload() {
    // Given
    let (service, parent_id, [a, b, _]) = seeded();
    let other_parent = Uuid::new_v4();
    let stranger = service.store().insert(other_parent, 1);

    // When
    let result = service.reorder(parent_id, &[a, b, stranger]).await;

    // Then
    assert!(matches!(result, Err(CoreError::InvalidPayload { .. })));
    assert_that!(service.store().order_of(stranger), some(eq(1)));
}

#[tokio::test]
async fn given_duplicate_padding_when_reordered_then_invalid_payload() {
    let (service, parent_id, [a, b, c]) = seeded();

    let result = service.reorder(parent_id, &[c, a, b, a]).await;

    assert!(matches!(result, Err(CoreError::InvalidPayload { .. })));
    assert_that!(service.store().apply_calls(), eq(0));
}

#[tokio::test]
async fn given_same_reorder_twice_when_applied_then_state_matches_single_apply() {
    // Given
    let (service, parent_id, [a, b, c]) = seeded();
    let first = service.reorder(parent_id, &[b, c, a]).await.unwrap();

    // When
    let second = service.reorder(parent_id, &[b, c, a]).await.unwrap();

    // Then
    assert_that!(second, eq(&first));
}

#[tokio::test]
async fn given_child_deleted_after_fetch_when_reordered_with_old_ids_then_invalid_payload() {
    // Given: client loaded [a, b, c], then b is deleted
    let (service, parent_id, [a, b, c]) = seeded();
    service.store().remove(b);

    // When
    let result = service.reorder(parent_id, &[c, b, a]).await;

    // Then
    assert!(matches!(result, Err(CoreError::InvalidPayload { .. })));
}

#[tokio::test]
async fn given_gap_after_delete_when_reordered_then_orders_repacked() {
    // Given: a(1), c(3) after b is removed
    let (service, parent_id, [a, b, c]) = seeded();
    service.store().remove(b);

    // When
    service.reorder(parent_id, &[a, c]).await.unwrap();

    // Then
    assert_that!(service.store().order_of(a), some(eq(1)));
    assert_that!(service.store().order_of(c), some(eq(2)));
}

#[tokio::test]
async fn given_store_write_failure_when_reordered_then_store_failure_and_orders_unchanged() {
    // Given
    let (service, parent_id, [a, b, c]) = seeded();
    service.store().fail_writes();

    // When
    let result = service.reorder(parent_id, &[c, b, a]).await;

    // Then
    assert!(matches!(result, Err(CoreError::StoreFailure { .. })));
    assert_that!(service.store().order_of(a), some(eq(1)));
    assert_that!(service.store().order_of(c), some(eq(3)));
}

#[tokio::test]
async fn given_stale_id_reaching_the_store_when_applied_then_invalid_payload() {
    // Given: bypass validation with an id the store does not hold
    let (service, parent_id, [a, b, _]) = seeded();

    // When
    let result = service
        .apply_reorder(parent_id, &[a, b, Uuid::new_v4()])
        .await;

    // Then
    assert!(matches!(result, Err(CoreError::InvalidPayload { .. })));
    assert_that!(service.store().order_of(a), some(eq(1)));
}

#[tokio::test]
async fn given_empty_collection_when_reordered_with_empty_payload_then_empty_list() {
    let service = OrderedCollectionService::new(MemoryStore::default());

    let children = service.reorder(Uuid::new_v4(), &[]).await.unwrap();

    assert!(children.is_empty());
}
