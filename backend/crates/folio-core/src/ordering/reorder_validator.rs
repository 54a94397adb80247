use crate::{CoreError, CoreResult};

use std::collections::HashSet;

use uuid::Uuid;

/// Check that `submitted_ids` is an exact permutation of `existing_ids`.
///
/// The raw length must equal the number of existing children, no id may
/// repeat, and every id must belong to the parent. Duplicates are rejected
/// outright rather than collapsed, so `[c, a, b, a]` against `{a, b, c}` fails.
///
/// Returns the submitted ids in their submitted order.
pub fn validate_reorder_payload(
    existing_ids: &HashSet<Uuid>,
    submitted_ids: &[Uuid],
) -> CoreResult<Vec<Uuid>> {
    if submitted_ids.len() != existing_ids.len() {
        return Err(CoreError::invalid_payload(format!(
            "expected {} child ids, got {}",
            existing_ids.len(),
            submitted_ids.len()
        )));
    }

    let mut seen = HashSet::with_capacity(submitted_ids.len());
    for id in submitted_ids {
        if !seen.insert(*id) {
            return Err(CoreError::invalid_payload(format!(
                "child id {} appears more than once",
                id
            )));
        }
        if !existing_ids.contains(id) {
            return Err(CoreError::invalid_payload(format!(
                "child id {} does not belong to this parent",
                id
            )));
        }
    }

    Ok(submitted_ids.to_vec())
}

/// Caller-supplied orders must be positive.
pub fn validate_explicit_order(order: i32) -> CoreResult<i32> {
    if order < 1 {
        return Err(CoreError::validation(
            format!("order must be at least 1, got {}", order),
            Some("order"),
        ));
    }

    Ok(order)
}
