use crate::repositories::ordered_rows;
use crate::{OrderedTable, PostTable, Result as DbErrorResult};

use folio_core::ProjectPost;

use uuid::Uuid;

pub struct ProjectPostRepository;

impl ProjectPostRepository {
    pub async fn create<'e, E>(executor: E, post: &ProjectPost) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO project_posts (
                    id, project_id, slug, title, content, published,
                    sort_order, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(post.id.to_string())
        .bind(post.project_id.to_string())
        .bind(&post.slug)
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.published)
        .bind(post.order)
        .bind(post.created_at.timestamp())
        .bind(post.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<ProjectPost>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        ordered_rows::find_by_id::<PostTable, _>(executor, id).await
    }

    pub async fn find_by_slug<'e, E>(
        executor: E,
        project_id: Uuid,
        slug: &str,
    ) -> DbErrorResult<Option<ProjectPost>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "SELECT {} FROM {} WHERE project_id = ? AND slug = ?",
            PostTable::COLUMNS,
            PostTable::TABLE
        );

        let row = sqlx::query(&sql)
            .bind(project_id.to_string())
            .bind(slug)
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(PostTable::from_row).transpose()
    }

    pub async fn find_by_project<'e, E>(
        executor: E,
        project_id: Uuid,
    ) -> DbErrorResult<Vec<ProjectPost>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        ordered_rows::find_by_project::<PostTable, _>(executor, project_id).await
    }

    /// Write every field of `post`, scoped to its project. Returns `false`
    /// when no row matched.
    pub async fn update<'e, E>(executor: E, post: &ProjectPost) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE project_posts
                SET slug = ?, title = ?, content = ?, published = ?, sort_order = ?, updated_at = ?
                WHERE id = ? AND project_id = ?
            "#,
        )
        .bind(&post.slug)
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.published)
        .bind(post.order)
        .bind(post.updated_at.timestamp())
        .bind(post.id.to_string())
        .bind(post.project_id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete<'e, E>(executor: E, project_id: Uuid, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        ordered_rows::delete::<PostTable, _>(executor, project_id, id).await
    }
}
