use crate::{
    create_child, create_project, delete_child, delete_project, get_child, get_project, health,
    list_children, list_projects, reorder_children, update_child, update_project,
};

use folio_cms::AppState;

use axum::{
    Router,
    routing::{get, patch},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{project_id}",
            get(get_project).patch(update_project).delete(delete_project),
        )
        .route(
            "/projects/{project_id}/{child_kind}",
            get(list_children).post(create_child),
        )
        // Static segment wins over {child_id}
        .route(
            "/projects/{project_id}/{child_kind}/reorder",
            patch(reorder_children),
        )
        .route(
            "/projects/{project_id}/{child_kind}/{child_id}",
            get(get_child).patch(update_child).delete(delete_child),
        )
}
