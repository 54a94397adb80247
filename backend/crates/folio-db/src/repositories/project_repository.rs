//! Project repository. Projects only scope their images and posts; deleting
//! one cascades to its children through the foreign keys.

use crate::repositories::row_decode::{timestamp_column, uuid_column};
use crate::Result as DbErrorResult;

use folio_core::Project;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const TABLE: &str = "projects";

pub struct ProjectRepository;

impl ProjectRepository {
    pub async fn create<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO projects (id, slug, title, description, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.slug)
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.created_at.timestamp())
        .bind(project.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, slug, title, description, created_at, updated_at
                FROM projects
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    pub async fn find_by_slug<'e, E>(executor: E, slug: &str) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, slug, title, description, created_at, updated_at
                FROM projects
                WHERE slug = ?
            "#,
        )
        .bind(slug)
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    pub async fn list<'e, E>(executor: E) -> DbErrorResult<Vec<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, slug, title, description, created_at, updated_at
                FROM projects
                ORDER BY created_at DESC, slug ASC
            "#,
        )
        .fetch_all(executor)
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    /// Returns `false` when the project does not exist.
    pub async fn update<'e, E>(executor: E, project: &Project) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE projects
                SET slug = ?, title = ?, description = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&project.slug)
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.updated_at.timestamp())
        .bind(project.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete; images and posts go with it.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn from_row(row: &SqliteRow) -> DbErrorResult<Project> {
        Ok(Project {
            id: uuid_column(row, TABLE, "id")?,
            slug: row.try_get("slug")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            created_at: timestamp_column(row, TABLE, "created_at")?,
            updated_at: timestamp_column(row, TABLE, "updated_at")?,
        })
    }
}
