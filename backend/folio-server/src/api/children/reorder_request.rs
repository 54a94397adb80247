use serde::Deserialize;

/// Body of `PATCH /projects/{id}/{childKind}/reorder`: the complete target
/// ordering, first id gets order 1.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub child_ids: Vec<String>,
}
