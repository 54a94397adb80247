#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{create_test_image, create_test_post, create_test_project};

use folio_core::Project;
use folio_db::ProjectRepository;

use sqlx::SqlitePool;

/// In-memory SQLite pool with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    folio_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Insert a project and return it
pub async fn insert_project(pool: &SqlitePool, slug: &str) -> Project {
    let project = create_test_project(slug);
    ProjectRepository::create(pool, &project)
        .await
        .expect("Failed to create test project");
    project
}
