use crate::{ApiError, parse_child_kind, parse_uuid, parse_uuid_list};

use folio_core::ChildKind;

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_valid_uuid_when_parsed_then_ok() {
    let id = Uuid::new_v4();

    let parsed = parse_uuid(&id.to_string(), "projectId").unwrap();

    assert_that!(parsed, eq(id));
}

#[test]
fn given_malformed_uuid_when_parsed_then_validation_error_names_field() {
    let result = parse_uuid("not-a-uuid", "childId");

    match result {
        Err(ApiError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("childId")),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn given_list_with_one_bad_id_when_parsed_then_error() {
    let ids = vec![Uuid::new_v4().to_string(), "oops".to_string()];

    let result = parse_uuid_list(&ids, "childIds");

    assert!(result.is_err());
}

#[test]
fn given_list_when_parsed_then_order_preserved() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    let parsed = parse_uuid_list(&[b.to_string(), a.to_string()], "childIds").unwrap();

    assert_that!(parsed, eq(&vec![b, a]));
}

#[test]
fn given_collection_segments_when_parsed_then_kinds() {
    assert_that!(parse_child_kind("images").unwrap(), eq(ChildKind::Image));
    assert_that!(parse_child_kind("posts").unwrap(), eq(ChildKind::Post));
    assert!(parse_child_kind("videos").is_err());
}
