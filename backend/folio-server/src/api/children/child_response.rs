use crate::{ImageDto, PostDto};

use folio_core::{ProjectImage, ProjectPost};

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ChildResponse {
    Image { image: ImageDto },
    Post { post: PostDto },
}

impl From<ProjectImage> for ChildResponse {
    fn from(image: ProjectImage) -> Self {
        Self::Image {
            image: image.into(),
        }
    }
}

impl From<ProjectPost> for ChildResponse {
    fn from(post: ProjectPost) -> Self {
        Self::Post { post: post.into() }
    }
}
