use crate::{ImageDto, PostDto};

use folio_core::{ProjectImage, ProjectPost};

use serde::Serialize;

/// `{ "images": [...] }` or `{ "posts": [...] }`, ascending by order
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ChildListResponse {
    Images { images: Vec<ImageDto> },
    Posts { posts: Vec<PostDto> },
}

impl From<Vec<ProjectImage>> for ChildListResponse {
    fn from(images: Vec<ProjectImage>) -> Self {
        Self::Images {
            images: images.into_iter().map(ImageDto::from).collect(),
        }
    }
}

impl From<Vec<ProjectPost>> for ChildListResponse {
    fn from(posts: Vec<ProjectPost>) -> Self {
        Self::Posts {
            posts: posts.into_iter().map(PostDto::from).collect(),
        }
    }
}
