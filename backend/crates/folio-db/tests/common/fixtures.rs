use folio_core::{Project, ProjectImage, ProjectPost};

use uuid::Uuid;

/// Creates a test Project with the given slug
pub fn create_test_project(slug: &str) -> Project {
    Project::new(
        slug.to_string(),
        format!("Project {}", slug),
        Some("Test project description".to_string()),
    )
}

/// Creates a test ProjectImage at the given order
pub fn create_test_image(project_id: Uuid, order: i32) -> ProjectImage {
    ProjectImage::new(
        project_id,
        format!("https://cdn.example.com/{}.webp", Uuid::new_v4()),
        Some("Alt text".to_string()),
        None,
        order,
    )
}

/// Creates a test ProjectPost at the given order
pub fn create_test_post(project_id: Uuid, slug: &str, order: i32) -> ProjectPost {
    ProjectPost::new(
        project_id,
        slug.to_string(),
        format!("Post {}", slug),
        "Body text".to_string(),
        false,
        order,
    )
}
