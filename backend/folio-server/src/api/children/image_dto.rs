use folio_core::ProjectImage;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub id: String,
    pub project_id: String,
    pub url: String,
    pub alt: Option<String>,
    pub caption: Option<String>,
    pub order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<ProjectImage> for ImageDto {
    fn from(i: ProjectImage) -> Self {
        Self {
            id: i.id.to_string(),
            project_id: i.project_id.to_string(),
            url: i.url,
            alt: i.alt,
            caption: i.caption,
            order: i.order,
            created_at: i.created_at.timestamp(),
            updated_at: i.updated_at.timestamp(),
        }
    }
}
