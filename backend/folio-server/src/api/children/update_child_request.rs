use folio_cms::{UpdateImageInput, UpdatePostInput};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImageRequest {
    #[serde(default)]
    pub url: Option<String>,

    /// Empty string clears the alt text
    #[serde(default)]
    pub alt: Option<String>,

    /// Empty string clears the caption
    #[serde(default)]
    pub caption: Option<String>,

    #[serde(default)]
    pub order: Option<i32>,
}

impl From<UpdateImageRequest> for UpdateImageInput {
    fn from(req: UpdateImageRequest) -> Self {
        Self {
            url: req.url,
            alt: req.alt,
            caption: req.caption,
            order: req.order,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub published: Option<bool>,

    #[serde(default)]
    pub order: Option<i32>,
}

impl From<UpdatePostRequest> for UpdatePostInput {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            slug: req.slug,
            title: req.title,
            content: req.content,
            published: req.published,
            order: req.order,
        }
    }
}
