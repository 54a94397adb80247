use crate::{ChildKind, CoreError};

use std::str::FromStr;

#[test]
fn test_child_kind_as_str() {
    assert_eq!(ChildKind::Image.as_str(), "image");
    assert_eq!(ChildKind::Post.as_str(), "post");
}

#[test]
fn test_child_kind_from_str_accepts_singular_and_plural() {
    assert_eq!(ChildKind::from_str("image").unwrap(), ChildKind::Image);
    assert_eq!(ChildKind::from_str("images").unwrap(), ChildKind::Image);
    assert_eq!(ChildKind::from_str("post").unwrap(), ChildKind::Post);
    assert_eq!(ChildKind::from_str("posts").unwrap(), ChildKind::Post);
}

#[test]
fn test_child_kind_from_str_rejects_unknown() {
    let result = ChildKind::from_str("videos");
    assert!(matches!(result, Err(CoreError::InvalidChildKind { value, .. }) if value == "videos"));
}
