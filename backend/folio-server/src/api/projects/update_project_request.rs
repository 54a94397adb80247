use folio_cms::UpdateProjectInput;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    /// Empty string clears the description
    #[serde(default)]
    pub description: Option<String>,
}

impl From<UpdateProjectRequest> for UpdateProjectInput {
    fn from(req: UpdateProjectRequest) -> Self {
        Self {
            slug: req.slug,
            title: req.title,
            description: req.description,
        }
    }
}
