use crate::{CoreError, validate_explicit_order, validate_reorder_payload};

use std::collections::HashSet;

use googletest::prelude::*;
use uuid::Uuid;

fn ids(n: u128) -> Vec<Uuid> {
    (1..=n).map(Uuid::from_u128).collect()
}

fn set_of(ids: &[Uuid]) -> HashSet<Uuid> {
    ids.iter().copied().collect()
}

// =========================================================================
// Accepted payloads
// =========================================================================

#[test]
fn given_permutation_when_validated_then_returns_submitted_order() {
    // Given
    let [a, b, c] = [Uuid::from_u128(1), Uuid::from_u128(2), Uuid::from_u128(3)];
    let existing = set_of(&[a, b, c]);

    // When
    let result = validate_reorder_payload(&existing, &[c, a, b]);

    // Then
    assert_that!(result.unwrap(), eq(&vec![c, a, b]));
}

#[test]
fn given_empty_collection_when_empty_payload_then_ok() {
    let result = validate_reorder_payload(&HashSet::new(), &[]);

    assert!(result.unwrap().is_empty());
}

// =========================================================================
// Rejected payloads
// =========================================================================

#[test]
fn given_missing_id_when_validated_then_invalid_payload() {
    // Given
    let all = ids(3);
    let existing = set_of(&all);

    // When
    let result = validate_reorder_payload(&existing, &[all[2], all[0]]);

    // Then
    assert!(matches!(result, Err(CoreError::InvalidPayload { .. })));
}

#[test]
fn given_extra_foreign_id_when_validated_then_invalid_payload() {
    // Given
    let all = ids(3);
    let existing = set_of(&all);
    let mut submitted = all.clone();
    submitted.push(Uuid::new_v4());

    // When
    let result = validate_reorder_payload(&existing, &submitted);

    // Then
    assert!(matches!(result, Err(CoreError::InvalidPayload { .. })));
}

#[test]
fn given_foreign_id_replacing_member_when_validated_then_invalid_payload() {
    // Given: same length as the collection, one id swapped for a stranger
    let all = ids(3);
    let existing = set_of(&all);
    let foreign = Uuid::new_v4();

    // When
    let result = validate_reorder_payload(&existing, &[all[0], all[1], foreign]);

    // Then
    let err = result.unwrap_err();
    assert!(matches!(err, CoreError::InvalidPayload { .. }));
    assert!(err.to_string().contains(&foreign.to_string()));
}

#[test]
fn given_duplicate_with_omission_when_validated_then_invalid_payload() {
    // Given: [a, a, c] has the right length but omits b
    let all = ids(3);
    let existing = set_of(&all);

    // When
    let result = validate_reorder_payload(&existing, &[all[0], all[0], all[2]]);

    // Then
    assert!(matches!(result, Err(CoreError::InvalidPayload { .. })));
}

#[test]
fn given_full_set_plus_duplicate_when_validated_then_invalid_payload() {
    // Given: [c, a, b, a] collapses to {a, b, c} but is still malformed
    let [a, b, c] = [Uuid::from_u128(1), Uuid::from_u128(2), Uuid::from_u128(3)];
    let existing = set_of(&[a, b, c]);

    // When
    let result = validate_reorder_payload(&existing, &[c, a, b, a]);

    // Then
    assert!(matches!(result, Err(CoreError::InvalidPayload { .. })));
}

#[test]
fn given_invalid_payload_when_displayed_then_message_has_marker() {
    let result = validate_reorder_payload(&set_of(&ids(2)), &[]);

    let message = result.unwrap_err().to_string();
    assert!(message.contains("Invalid reorder payload"));
}

// =========================================================================
// Explicit orders
// =========================================================================

#[test]
fn given_positive_order_when_validated_then_ok() {
    assert_that!(validate_explicit_order(1).unwrap(), eq(1));
    assert_that!(validate_explicit_order(42).unwrap(), eq(42));
}

#[test]
fn given_zero_or_negative_order_when_validated_then_validation_error() {
    for order in [0, -1, i32::MIN] {
        let result = validate_explicit_order(order);
        assert!(
            matches!(result, Err(CoreError::Validation { ref field, .. }) if field.as_deref() == Some("order"))
        );
    }
}
