use crate::{
    ChangeNotifier, InputValidator, ProjectImageManager, ProjectManager, ProjectPostManager,
};

use folio_config::ValidationConfig;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state handed to every HTTP handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub projects: Arc<ProjectManager>,
    pub images: Arc<ProjectImageManager>,
    pub posts: Arc<ProjectPostManager>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        validation: ValidationConfig,
        notifier: Arc<dyn ChangeNotifier>,
    ) -> Self {
        let validator = InputValidator::new(validation);

        Self {
            projects: Arc::new(ProjectManager::new(
                pool.clone(),
                notifier.clone(),
                validator.clone(),
            )),
            images: Arc::new(ProjectImageManager::new(
                pool.clone(),
                notifier.clone(),
                validator.clone(),
            )),
            posts: Arc::new(ProjectPostManager::new(pool.clone(), notifier, validator)),
            pool,
        }
    }
}
