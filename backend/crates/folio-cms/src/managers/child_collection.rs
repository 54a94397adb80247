//! Operations every ordered child collection shares, whatever the kind.

use crate::managers::{ensure_owned, require_project};
use crate::{ChangeNotifier, CmsError, CmsResult};

use folio_core::{OrderedChild, OrderedCollectionService};
use folio_db::repositories::ordered_rows;
use folio_db::{OrderedTable, SqliteOrderedStore};

use std::sync::Arc;

use sqlx::SqlitePool;
use uuid::Uuid;

pub(crate) struct ChildCollection<T: OrderedTable> {
    pool: SqlitePool,
    ordering: OrderedCollectionService<SqliteOrderedStore<T>>,
    notifier: Arc<dyn ChangeNotifier>,
}

impl<T: OrderedTable> ChildCollection<T> {
    pub(crate) fn new(pool: SqlitePool, notifier: Arc<dyn ChangeNotifier>) -> Self {
        let ordering = OrderedCollectionService::new(SqliteOrderedStore::new(pool.clone()));
        Self {
            pool,
            ordering,
            notifier,
        }
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub(crate) fn ordering(&self) -> &OrderedCollectionService<SqliteOrderedStore<T>> {
        &self.ordering
    }

    pub(crate) fn changed(&self, project_id: Uuid) {
        self.notifier
            .children_changed(project_id, <T::Child as OrderedChild>::KIND);
    }

    /// Children of `project_id`, ascending by order.
    pub(crate) async fn list(&self, project_id: Uuid) -> CmsResult<Vec<T::Child>> {
        require_project(&self.pool, project_id).await?;
        Ok(ordered_rows::find_by_project::<T, _>(&self.pool, project_id).await?)
    }

    pub(crate) async fn get(&self, project_id: Uuid, child_id: Uuid) -> CmsResult<T::Child> {
        require_project(&self.pool, project_id).await?;
        self.find_owned(project_id, child_id).await
    }

    /// `NotFound` for a missing row, `NotOwned` for another project's row.
    pub(crate) async fn find_owned(&self, project_id: Uuid, child_id: Uuid) -> CmsResult<T::Child> {
        let child = ordered_rows::find_by_id::<T, _>(&self.pool, child_id)
            .await?
            .ok_or_else(|| not_found::<T>(child_id))?;

        ensure_owned(&child, project_id)?;
        Ok(child)
    }

    /// Remove one child. Siblings keep their order values.
    pub(crate) async fn delete(&self, project_id: Uuid, child_id: Uuid) -> CmsResult<()> {
        require_project(&self.pool, project_id).await?;
        self.find_owned(project_id, child_id).await?;

        if !ordered_rows::delete::<T, _>(&self.pool, project_id, child_id).await? {
            return Err(not_found::<T>(child_id));
        }

        self.changed(project_id);
        log::info!(
            "Deleted {} {} from project {}",
            <T::Child as OrderedChild>::KIND,
            child_id,
            project_id
        );

        Ok(())
    }

    /// Apply a full target ordering and return the children in their new order.
    pub(crate) async fn reorder(
        &self,
        project_id: Uuid,
        child_ids: &[Uuid],
    ) -> CmsResult<Vec<T::Child>> {
        require_project(&self.pool, project_id).await?;

        let children = self.ordering.reorder(project_id, child_ids).await?;

        self.changed(project_id);
        log::info!(
            "Reordered {} {}s in project {}",
            children.len(),
            <T::Child as OrderedChild>::KIND,
            project_id
        );

        Ok(children)
    }
}

#[track_caller]
pub(crate) fn not_found<T: OrderedTable>(child_id: Uuid) -> CmsError {
    CmsError::not_found(format!(
        "{} {} not found",
        <T::Child as OrderedChild>::KIND,
        child_id
    ))
}
