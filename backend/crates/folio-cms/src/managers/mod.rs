//! Entity managers: CRUD for projects and their ordered children.
//!
//! Child managers own field validation; listing, ownership checks, delete and
//! reorder live in `ChildCollection`, which hands every ordering decision to
//! `OrderedCollectionService`.

mod child_collection;
pub mod project_image_manager;
pub mod project_manager;
pub mod project_post_manager;

use crate::{CmsError, CmsResult};

use folio_core::{OrderedChild, Project};
use folio_db::ProjectRepository;

use sqlx::SqlitePool;
use uuid::Uuid;

pub(crate) async fn require_project(pool: &SqlitePool, project_id: Uuid) -> CmsResult<Project> {
    ProjectRepository::find_by_id(pool, project_id)
        .await?
        .ok_or_else(|| CmsError::not_found(format!("Project {} not found", project_id)))
}

#[track_caller]
pub(crate) fn ensure_owned<C: OrderedChild>(child: &C, project_id: Uuid) -> CmsResult<()> {
    if child.parent_id() != project_id {
        return Err(CmsError::not_owned(format!(
            "{} {} does not belong to project {}",
            C::KIND,
            child.id(),
            project_id
        )));
    }
    Ok(())
}
