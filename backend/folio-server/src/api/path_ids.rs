use crate::{ApiError, ApiResult};

use folio_core::ChildKind;

use uuid::Uuid;

/// Parse an id from a path segment or payload, naming the offending field.
#[track_caller]
pub fn parse_uuid(value: &str, field: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(value.trim()).map_err(|_| {
        ApiError::validation(
            format!("{} '{}' is not a valid UUID", field, value),
            Some(field),
        )
    })
}

#[track_caller]
pub fn parse_uuid_list(values: &[String], field: &str) -> ApiResult<Vec<Uuid>> {
    values.iter().map(|v| parse_uuid(v, field)).collect()
}

#[track_caller]
pub fn parse_child_kind(value: &str) -> ApiResult<ChildKind> {
    Ok(value.parse::<ChildKind>()?)
}
