//! Queries shared by every ordered child table. All of them are scoped by
//! `project_id`.

use crate::{OrderedTable, Result};

use std::collections::HashSet;

use sqlx::{Executor, Row, Sqlite};
use uuid::Uuid;

pub async fn find_by_project<'e, T, E>(executor: E, project_id: Uuid) -> Result<Vec<T::Child>>
where
    T: OrderedTable,
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "SELECT {} FROM {} WHERE project_id = ? ORDER BY sort_order ASC",
        T::COLUMNS,
        T::TABLE
    );

    let rows = sqlx::query(&sql)
        .bind(project_id.to_string())
        .fetch_all(executor)
        .await?;

    rows.iter().map(T::from_row).collect()
}

pub async fn find_by_id<'e, T, E>(executor: E, id: Uuid) -> Result<Option<T::Child>>
where
    T: OrderedTable,
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!("SELECT {} FROM {} WHERE id = ?", T::COLUMNS, T::TABLE);

    let row = sqlx::query(&sql)
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

    row.as_ref().map(T::from_row).transpose()
}

pub async fn ids_for_project<'e, T, E>(executor: E, project_id: Uuid) -> Result<HashSet<Uuid>>
where
    T: OrderedTable,
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!("SELECT id FROM {} WHERE project_id = ?", T::TABLE);

    let rows = sqlx::query(&sql)
        .bind(project_id.to_string())
        .fetch_all(executor)
        .await?;

    rows.iter()
        .map(|row| {
            let raw: String = row.try_get("id")?;
            Uuid::parse_str(&raw).map_err(|e| {
                crate::DbError::invalid_row(T::TABLE, format!("Invalid UUID in id: {}", e))
            })
        })
        .collect()
}

pub async fn count_for_project<'e, T, E>(executor: E, project_id: Uuid) -> Result<u64>
where
    T: OrderedTable,
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!("SELECT COUNT(*) FROM {} WHERE project_id = ?", T::TABLE);

    let count: i64 = sqlx::query_scalar(&sql)
        .bind(project_id.to_string())
        .fetch_one(executor)
        .await?;

    Ok(count.max(0) as u64)
}

pub async fn max_order<'e, T, E>(executor: E, project_id: Uuid) -> Result<i32>
where
    T: OrderedTable,
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "SELECT COALESCE(MAX(sort_order), 0) FROM {} WHERE project_id = ?",
        T::TABLE
    );

    let max: i64 = sqlx::query_scalar(&sql)
        .bind(project_id.to_string())
        .fetch_one(executor)
        .await?;

    i32::try_from(max).map_err(|_| {
        crate::DbError::invalid_row(T::TABLE, format!("sort_order out of range: {}", max))
    })
}

pub async fn order_taken<'e, T, E>(
    executor: E,
    project_id: Uuid,
    order: i32,
    exclude: Option<Uuid>,
) -> Result<bool>
where
    T: OrderedTable,
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "SELECT COUNT(*) FROM {} WHERE project_id = ? AND sort_order = ? AND id IS NOT ?",
        T::TABLE
    );

    let count: i64 = sqlx::query_scalar(&sql)
        .bind(project_id.to_string())
        .bind(order)
        .bind(exclude.map(|id| id.to_string()))
        .fetch_one(executor)
        .await?;

    Ok(count > 0)
}

/// Set one child's order. Returns the number of rows matched, which is `0`
/// when the id does not exist under `project_id`.
pub async fn set_order<'e, T, E>(
    executor: E,
    project_id: Uuid,
    id: Uuid,
    order: i64,
    updated_at: i64,
) -> Result<u64>
where
    T: OrderedTable,
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "UPDATE {} SET sort_order = ?, updated_at = ? WHERE id = ? AND project_id = ?",
        T::TABLE
    );

    let result = sqlx::query(&sql)
        .bind(order)
        .bind(updated_at)
        .bind(id.to_string())
        .bind(project_id.to_string())
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

/// Remove one child. Returns `false` if nothing matched.
pub async fn delete<'e, T, E>(executor: E, project_id: Uuid, id: Uuid) -> Result<bool>
where
    T: OrderedTable,
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!("DELETE FROM {} WHERE id = ? AND project_id = ?", T::TABLE);

    let result = sqlx::query(&sql)
        .bind(id.to_string())
        .bind(project_id.to_string())
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
