//! REST handlers for a project's ordered children.
//!
//! One set of handlers serves both collections; the `{child_kind}` path
//! segment picks the manager.

use crate::{
    ApiError, ApiResult, ChildListResponse, ChildResponse, CreateImageRequest, CreatePostRequest,
    DeleteResponse, ReorderRequest, UpdateImageRequest, UpdatePostRequest, parse_child_kind,
    parse_uuid, parse_uuid_list,
};

use folio_cms::AppState;
use folio_core::ChildKind;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

fn decode_body<T: DeserializeOwned>(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<T> {
    let Json(value) = payload.map_err(ApiError::from)?;
    Ok(serde_json::from_value(value)?)
}

/// GET /api/v1/projects/{project_id}/{child_kind}
pub async fn list_children(
    State(state): State<AppState>,
    Path((project_id, child_kind)): Path<(String, String)>,
) -> ApiResult<Json<ChildListResponse>> {
    let project_id = parse_uuid(&project_id, "projectId")?;

    let response: ChildListResponse = match parse_child_kind(&child_kind)? {
        ChildKind::Image => state.images.list(project_id).await?.into(),
        ChildKind::Post => state.posts.list(project_id).await?.into(),
    };

    Ok(Json(response))
}

/// GET /api/v1/projects/{project_id}/{child_kind}/{child_id}
pub async fn get_child(
    State(state): State<AppState>,
    Path((project_id, child_kind, child_id)): Path<(String, String, String)>,
) -> ApiResult<Json<ChildResponse>> {
    let kind = parse_child_kind(&child_kind)?;
    let project_id = parse_uuid(&project_id, "projectId")?;
    let child_id = parse_uuid(&child_id, "childId")?;

    let response: ChildResponse = match kind {
        ChildKind::Image => state.images.get(project_id, child_id).await?.into(),
        ChildKind::Post => state.posts.get(project_id, child_id).await?.into(),
    };

    Ok(Json(response))
}

/// POST /api/v1/projects/{project_id}/{child_kind}
///
/// Without an explicit `order` the child is appended after its last sibling.
pub async fn create_child(
    State(state): State<AppState>,
    Path((project_id, child_kind)): Path<(String, String)>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ChildResponse>)> {
    let kind = parse_child_kind(&child_kind)?;
    let project_id = parse_uuid(&project_id, "projectId")?;

    let response: ChildResponse = match kind {
        ChildKind::Image => {
            let req: CreateImageRequest = decode_body(payload)?;
            state.images.create(project_id, req.into()).await?.into()
        }
        ChildKind::Post => {
            let req: CreatePostRequest = decode_body(payload)?;
            state.posts.create(project_id, req.into()).await?.into()
        }
    };

    log::info!("Created {} in project {} via REST API", kind, project_id);

    Ok((StatusCode::CREATED, Json(response)))
}

/// PATCH /api/v1/projects/{project_id}/{child_kind}/{child_id}
///
/// Partial update of kind-specific fields; not a reorder.
pub async fn update_child(
    State(state): State<AppState>,
    Path((project_id, child_kind, child_id)): Path<(String, String, String)>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ChildResponse>> {
    let kind = parse_child_kind(&child_kind)?;
    let project_id = parse_uuid(&project_id, "projectId")?;
    let child_id = parse_uuid(&child_id, "childId")?;

    let response: ChildResponse = match kind {
        ChildKind::Image => {
            let req: UpdateImageRequest = decode_body(payload)?;
            state
                .images
                .update(project_id, child_id, req.into())
                .await?
                .into()
        }
        ChildKind::Post => {
            let req: UpdatePostRequest = decode_body(payload)?;
            state
                .posts
                .update(project_id, child_id, req.into())
                .await?
                .into()
        }
    };

    Ok(Json(response))
}

/// DELETE /api/v1/projects/{project_id}/{child_kind}/{child_id}
pub async fn delete_child(
    State(state): State<AppState>,
    Path((project_id, child_kind, child_id)): Path<(String, String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let kind = parse_child_kind(&child_kind)?;
    let project_id = parse_uuid(&project_id, "projectId")?;
    let child_id = parse_uuid(&child_id, "childId")?;

    match kind {
        ChildKind::Image => state.images.delete(project_id, child_id).await?,
        ChildKind::Post => state.posts.delete(project_id, child_id).await?,
    }

    Ok(Json(DeleteResponse {
        deleted_id: child_id.to_string(),
    }))
}

/// PATCH /api/v1/projects/{project_id}/{child_kind}/reorder
///
/// Body `{ "childIds": [...] }` must list every current child exactly once.
pub async fn reorder_children(
    State(state): State<AppState>,
    Path((project_id, child_kind)): Path<(String, String)>,
    payload: Result<Json<ReorderRequest>, JsonRejection>,
) -> ApiResult<Json<ChildListResponse>> {
    let kind = parse_child_kind(&child_kind)?;
    let project_id = parse_uuid(&project_id, "projectId")?;
    let Json(req) = payload.map_err(ApiError::from)?;
    let child_ids = parse_uuid_list(&req.child_ids, "childIds")?;

    let response: ChildListResponse = match kind {
        ChildKind::Image => state.images.reorder(project_id, &child_ids).await?.into(),
        ChildKind::Post => state.posts.reorder(project_id, &child_ids).await?.into(),
    };

    Ok(Json(response))
}
