//! Typed inputs accepted by the managers. Absent `Option` fields in the
//! update inputs leave the stored value untouched.

#[derive(Debug, Clone, Default)]
pub struct CreateProjectInput {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProjectInput {
    pub slug: Option<String>,
    pub title: Option<String>,
    /// Blank clears the description
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateImageInput {
    pub url: String,
    pub alt: Option<String>,
    pub caption: Option<String>,
    /// Appended after the last sibling when absent
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateImageInput {
    pub url: Option<String>,
    /// Blank clears the alt text
    pub alt: Option<String>,
    /// Blank clears the caption
    pub caption: Option<String>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct CreatePostInput {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePostInput {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
    pub order: Option<i32>,
}
