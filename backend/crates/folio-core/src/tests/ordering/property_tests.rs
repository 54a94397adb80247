use crate::validate_reorder_payload;

use std::collections::HashSet;

use proptest::prelude::*;
use uuid::Uuid;

fn shuffled_ids() -> impl Strategy<Value = Vec<Uuid>> {
    (0u128..24).prop_flat_map(|n| Just((1..=n).map(Uuid::from_u128).collect::<Vec<_>>()).prop_shuffle())
}

proptest! {
    #[test]
    fn given_any_permutation_when_validated_then_accepted_in_submitted_order(submitted in shuffled_ids()) {
        let existing: HashSet<Uuid> = submitted.iter().copied().collect();

        let validated = validate_reorder_payload(&existing, &submitted);

        prop_assert_eq!(validated.ok(), Some(submitted));
    }

    #[test]
    fn given_permutation_missing_one_when_validated_then_rejected(
        submitted in shuffled_ids().prop_filter("needs a child", |ids| !ids.is_empty()),
        drop_index in any::<prop::sample::Index>(),
    ) {
        let existing: HashSet<Uuid> = submitted.iter().copied().collect();
        let mut short = submitted.clone();
        short.remove(drop_index.index(short.len()));

        prop_assert!(validate_reorder_payload(&existing, &short).is_err());
    }

    #[test]
    fn given_permutation_with_one_id_repeated_when_validated_then_rejected(
        submitted in shuffled_ids().prop_filter("needs two children", |ids| ids.len() >= 2),
        from in any::<prop::sample::Index>(),
        to in any::<prop::sample::Index>(),
    ) {
        let existing: HashSet<Uuid> = submitted.iter().copied().collect();
        let from = from.index(submitted.len());
        let mut to = to.index(submitted.len());
        if to == from {
            to = (to + 1) % submitted.len();
        }
        let mut duplicated = submitted.clone();
        duplicated[to] = duplicated[from];

        prop_assert!(validate_reorder_payload(&existing, &duplicated).is_err());
    }

    #[test]
    fn given_permutation_with_foreign_id_appended_when_validated_then_rejected(submitted in shuffled_ids()) {
        let existing: HashSet<Uuid> = submitted.iter().copied().collect();
        let mut padded = submitted.clone();
        padded.push(Uuid::from_u128(u128::MAX));

        prop_assert!(validate_reorder_payload(&existing, &padded).is_err());
    }
}
