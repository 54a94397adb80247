//! Project REST API handlers

use crate::{
    ApiError, ApiResult, CreateProjectRequest, DeleteResponse, ProjectDto, ProjectListResponse,
    ProjectResponse, UpdateProjectRequest, parse_uuid,
};

use folio_cms::AppState;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

/// GET /api/v1/projects
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<ProjectListResponse>> {
    let projects = state.projects.list().await?;

    Ok(Json(ProjectListResponse {
        projects: projects.into_iter().map(ProjectDto::from).collect(),
    }))
}

/// GET /api/v1/projects/{project_id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = parse_uuid(&project_id, "projectId")?;

    let project = state.projects.get(project_id).await?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

/// POST /api/v1/projects
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let Json(req) = payload.map_err(ApiError::from)?;

    let project = state.projects.create(req.into()).await?;

    log::info!("Created project {} via REST API", project.id);

    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse {
            project: project.into(),
        }),
    ))
}

/// PATCH /api/v1/projects/{project_id}
pub async fn update_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    payload: Result<Json<UpdateProjectRequest>, JsonRejection>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = parse_uuid(&project_id, "projectId")?;
    let Json(req) = payload.map_err(ApiError::from)?;

    let project = state.projects.update(project_id, req.into()).await?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

/// DELETE /api/v1/projects/{project_id}
///
/// Removes the project together with its images and posts.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let project_id = parse_uuid(&project_id, "projectId")?;

    state.projects.delete(project_id).await?;

    Ok(Json(DeleteResponse {
        deleted_id: project_id.to_string(),
    }))
}
