//! Table descriptions for the ordered child kinds.
//!
//! The generic queries in [`ordered_rows`](super::ordered_rows) and the
//! [`SqliteOrderedStore`](crate::SqliteOrderedStore) only need a table name,
//! a column list and a row decoder, so both child kinds share them.

use crate::Result;
use crate::repositories::row_decode::{timestamp_column, uuid_column};

use folio_core::{OrderedChild, ProjectImage, ProjectPost};

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

pub trait OrderedTable: Send + Sync + 'static {
    type Child: OrderedChild + Send + Sync + Unpin;

    const TABLE: &'static str;
    const COLUMNS: &'static str;

    fn from_row(row: &SqliteRow) -> Result<Self::Child>;
}

pub struct ImageTable;

impl OrderedTable for ImageTable {
    type Child = ProjectImage;

    const TABLE: &'static str = "project_images";
    const COLUMNS: &'static str =
        "id, project_id, url, alt, caption, sort_order, created_at, updated_at";

    fn from_row(row: &SqliteRow) -> Result<ProjectImage> {
        Ok(ProjectImage {
            id: uuid_column(row, Self::TABLE, "id")?,
            project_id: uuid_column(row, Self::TABLE, "project_id")?,
            url: row.try_get("url")?,
            alt: row.try_get("alt")?,
            caption: row.try_get("caption")?,
            order: row.try_get("sort_order")?,
            created_at: timestamp_column(row, Self::TABLE, "created_at")?,
            updated_at: timestamp_column(row, Self::TABLE, "updated_at")?,
        })
    }
}

pub struct PostTable;

impl OrderedTable for PostTable {
    type Child = ProjectPost;

    const TABLE: &'static str = "project_posts";
    const COLUMNS: &'static str =
        "id, project_id, slug, title, content, published, sort_order, created_at, updated_at";

    fn from_row(row: &SqliteRow) -> Result<ProjectPost> {
        Ok(ProjectPost {
            id: uuid_column(row, Self::TABLE, "id")?,
            project_id: uuid_column(row, Self::TABLE, "project_id")?,
            slug: row.try_get("slug")?,
            title: row.try_get("title")?,
            content: row.try_get("content")?,
            published: row.try_get("published")?,
            order: row.try_get("sort_order")?,
            created_at: timestamp_column(row, Self::TABLE, "created_at")?,
            updated_at: timestamp_column(row, Self::TABLE, "updated_at")?,
        })
    }
}
