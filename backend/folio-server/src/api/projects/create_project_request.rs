use folio_cms::CreateProjectInput;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// URL slug, e.g. "harbor-house" (required)
    #[serde(default)]
    pub slug: String,

    /// Display title (required)
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreateProjectRequest> for CreateProjectInput {
    fn from(req: CreateProjectRequest) -> Self {
        Self {
            slug: req.slug,
            title: req.title,
            description: req.description,
        }
    }
}
