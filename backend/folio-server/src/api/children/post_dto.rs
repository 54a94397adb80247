use folio_core::ProjectPost;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: String,
    pub project_id: String,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<ProjectPost> for PostDto {
    fn from(p: ProjectPost) -> Self {
        Self {
            id: p.id.to_string(),
            project_id: p.project_id.to_string(),
            slug: p.slug,
            title: p.title,
            content: p.content,
            published: p.published,
            order: p.order,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
