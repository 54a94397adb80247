use crate::repositories::ordered_rows;
use crate::{ImageTable, Result as DbErrorResult};

use folio_core::ProjectImage;

use uuid::Uuid;

pub struct ProjectImageRepository;

impl ProjectImageRepository {
    pub async fn create<'e, E>(executor: E, image: &ProjectImage) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO project_images (
                    id, project_id, url, alt, caption, sort_order, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(image.id.to_string())
        .bind(image.project_id.to_string())
        .bind(&image.url)
        .bind(&image.alt)
        .bind(&image.caption)
        .bind(image.order)
        .bind(image.created_at.timestamp())
        .bind(image.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<ProjectImage>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        ordered_rows::find_by_id::<ImageTable, _>(executor, id).await
    }

    pub async fn find_by_project<'e, E>(
        executor: E,
        project_id: Uuid,
    ) -> DbErrorResult<Vec<ProjectImage>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        ordered_rows::find_by_project::<ImageTable, _>(executor, project_id).await
    }

    /// Write every field of `image`, scoped to its project. Returns `false`
    /// when no row matched.
    pub async fn update<'e, E>(executor: E, image: &ProjectImage) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE project_images
                SET url = ?, alt = ?, caption = ?, sort_order = ?, updated_at = ?
                WHERE id = ? AND project_id = ?
            "#,
        )
        .bind(&image.url)
        .bind(&image.alt)
        .bind(&image.caption)
        .bind(image.order)
        .bind(image.updated_at.timestamp())
        .bind(image.id.to_string())
        .bind(image.project_id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete<'e, E>(executor: E, project_id: Uuid, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        ordered_rows::delete::<ImageTable, _>(executor, project_id, id).await
    }
}
