use folio_cms::{CreateImageInput, CreatePostInput};

use serde::Deserialize;

/// Body of `POST /projects/{id}/images`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateImageRequest {
    /// Required; an empty or missing url is rejected by validation
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub alt: Option<String>,

    #[serde(default)]
    pub caption: Option<String>,

    /// Appended after the last image when absent
    #[serde(default)]
    pub order: Option<i32>,
}

impl From<CreateImageRequest> for CreateImageInput {
    fn from(req: CreateImageRequest) -> Self {
        Self {
            url: req.url,
            alt: req.alt,
            caption: req.caption,
            order: req.order,
        }
    }
}

/// Body of `POST /projects/{id}/posts`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub published: bool,

    #[serde(default)]
    pub order: Option<i32>,
}

impl From<CreatePostRequest> for CreatePostInput {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            slug: req.slug,
            title: req.title,
            content: req.content,
            published: req.published,
            order: req.order,
        }
    }
}
