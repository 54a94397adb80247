//! SQLite implementation of the ordered-collection store.

use crate::repositories::ordered_rows;
use crate::{DbError, ImageTable, OrderedTable, PostTable, Result as DbErrorResult};

use folio_core::{OrderedStore, StoreResult};

use std::collections::HashSet;
use std::marker::PhantomData;
use std::panic::Location;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

pub type SqliteImageStore = SqliteOrderedStore<ImageTable>;
pub type SqlitePostStore = SqliteOrderedStore<PostTable>;

pub struct SqliteOrderedStore<T> {
    pool: SqlitePool,
    _table: PhantomData<T>,
}

impl<T: OrderedTable> SqliteOrderedStore<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _table: PhantomData,
        }
    }

    /// Rewrite orders inside one transaction.
    ///
    /// `(project_id, sort_order)` is unique and SQLite checks it per
    /// statement, so rows first move to `-(position)` and then flip to
    /// `position`. Every statement matches on id and project, and the final
    /// row count must equal the list length; otherwise the transaction is
    /// dropped and rolls back.
    async fn write_orders(&self, project_id: Uuid, ordered_ids: &[Uuid]) -> DbErrorResult<()> {
        let now = Utc::now().timestamp();
        let mut tx = self.pool.begin().await?;

        for sign in [-1_i64, 1] {
            for (index, id) in ordered_ids.iter().enumerate() {
                let position = index as i64 + 1;
                let matched =
                    ordered_rows::set_order::<T, _>(&mut *tx, project_id, *id, sign * position, now)
                        .await?;

                if matched != 1 {
                    return Err(DbError::StaleRow {
                        table: T::TABLE,
                        message: format!("child {} does not belong to project {}", id, project_id),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            }
        }

        // The list must still cover the whole collection; a sibling created
        // after validation would otherwise keep an order outside 1..N.
        let current = ordered_rows::count_for_project::<T, _>(&mut *tx, project_id).await?;
        if current != ordered_ids.len() as u64 {
            return Err(DbError::StaleRow {
                table: T::TABLE,
                message: format!(
                    "project {} now has {} children, reorder listed {}",
                    project_id,
                    current,
                    ordered_ids.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        tx.commit().await?;

        log::debug!(
            "Rewrote {} orders in {} for project {}",
            ordered_ids.len(),
            T::TABLE,
            project_id
        );

        Ok(())
    }
}

impl<T> Clone for SqliteOrderedStore<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _table: PhantomData,
        }
    }
}

#[async_trait]
impl<T: OrderedTable> OrderedStore for SqliteOrderedStore<T> {
    type Child = T::Child;

    async fn child_ids(&self, parent_id: Uuid) -> StoreResult<HashSet<Uuid>> {
        Ok(ordered_rows::ids_for_project::<T, _>(&self.pool, parent_id).await?)
    }

    async fn max_order(&self, parent_id: Uuid) -> StoreResult<i32> {
        Ok(ordered_rows::max_order::<T, _>(&self.pool, parent_id).await?)
    }

    async fn order_taken(
        &self,
        parent_id: Uuid,
        order: i32,
        exclude: Option<Uuid>,
    ) -> StoreResult<bool> {
        Ok(ordered_rows::order_taken::<T, _>(&self.pool, parent_id, order, exclude).await?)
    }

    async fn apply_orders(&self, parent_id: Uuid, ordered_ids: &[Uuid]) -> StoreResult<()> {
        Ok(self.write_orders(parent_id, ordered_ids).await?)
    }

    async fn list_ordered(&self, parent_id: Uuid) -> StoreResult<Vec<T::Child>> {
        Ok(ordered_rows::find_by_project::<T, _>(&self.pool, parent_id).await?)
    }
}
