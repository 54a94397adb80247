#![allow(dead_code)]

//! Test infrastructure for folio-cms manager tests

use folio_cms::{
    ChangeNotifier, CreateImageInput, CreatePostInput, CreateProjectInput, InputValidator,
    ProjectImageManager, ProjectManager, ProjectPostManager,
};
use folio_config::ValidationConfig;
use folio_core::{ChildKind, Project, ProjectImage, ProjectPost};

use std::sync::{Arc, Mutex};

use sqlx::SqlitePool;
use uuid::Uuid;

/// Notifier that remembers every event it was given
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<(Uuid, ChildKind)>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<(Uuid, ChildKind)> {
        self.events.lock().unwrap().clone()
    }
}

impl ChangeNotifier for RecordingNotifier {
    fn children_changed(&self, parent_id: Uuid, kind: ChildKind) {
        self.events.lock().unwrap().push((parent_id, kind));
    }
}

pub struct TestContext {
    pub pool: SqlitePool,
    pub notifier: Arc<RecordingNotifier>,
    pub projects: ProjectManager,
    pub images: ProjectImageManager,
    pub posts: ProjectPostManager,
}

/// Managers over a fresh in-memory database
pub async fn setup() -> TestContext {
    let pool = folio_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    let notifier = Arc::new(RecordingNotifier::default());
    let validator = InputValidator::new(ValidationConfig::default());

    TestContext {
        projects: ProjectManager::new(pool.clone(), notifier.clone(), validator.clone()),
        images: ProjectImageManager::new(pool.clone(), notifier.clone(), validator.clone()),
        posts: ProjectPostManager::new(pool.clone(), notifier.clone(), validator),
        pool,
        notifier,
    }
}

impl TestContext {
    pub async fn project(&self, slug: &str) -> Project {
        self.projects
            .create(CreateProjectInput {
                slug: slug.to_string(),
                title: format!("Project {}", slug),
                description: None,
            })
            .await
            .expect("Failed to create test project")
    }

    pub async fn image(&self, project_id: Uuid) -> ProjectImage {
        self.images
            .create(
                project_id,
                CreateImageInput {
                    url: format!("https://cdn.example.com/{}.webp", Uuid::new_v4()),
                    ..Default::default()
                },
            )
            .await
            .expect("Failed to create test image")
    }

    pub async fn post(&self, project_id: Uuid, slug: &str) -> ProjectPost {
        self.posts
            .create(
                project_id,
                CreatePostInput {
                    slug: slug.to_string(),
                    title: format!("Post {}", slug),
                    content: "Body".to_string(),
                    ..Default::default()
                },
            )
            .await
            .expect("Failed to create test post")
    }

    /// (id, order) pairs of the project's images, ascending by order
    pub async fn image_orders(&self, project_id: Uuid) -> Vec<(Uuid, i32)> {
        self.images
            .list(project_id)
            .await
            .expect("Failed to list images")
            .into_iter()
            .map(|i| (i.id, i.order))
            .collect()
    }
}
