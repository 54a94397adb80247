use crate::managers::require_project;
use crate::{
    ChangeNotifier, CmsError, CmsResult, CreateProjectInput, InputValidator, UpdateProjectInput,
};

use folio_core::{ChildKind, Project};
use folio_db::ProjectRepository;

use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Projects scope images and posts; they carry no ordering of their own.
pub struct ProjectManager {
    pool: SqlitePool,
    notifier: Arc<dyn ChangeNotifier>,
    validator: InputValidator,
}

impl ProjectManager {
    pub fn new(
        pool: SqlitePool,
        notifier: Arc<dyn ChangeNotifier>,
        validator: InputValidator,
    ) -> Self {
        Self {
            pool,
            notifier,
            validator,
        }
    }

    pub async fn list(&self) -> CmsResult<Vec<Project>> {
        Ok(ProjectRepository::list(&self.pool).await?)
    }

    pub async fn get(&self, project_id: Uuid) -> CmsResult<Project> {
        require_project(&self.pool, project_id).await
    }

    pub async fn create(&self, input: CreateProjectInput) -> CmsResult<Project> {
        let slug = self.validator.slug(&input.slug)?;
        let title = self.validator.title(&input.title)?;
        let description = self.validator.optional(
            input.description.as_deref(),
            "description",
            self.validator.limits().max_content_length,
        )?;
        self.ensure_slug_free(&slug, None).await?;

        let project = Project::new(slug, title, description);
        ProjectRepository::create(&self.pool, &project).await?;

        log::info!("Created project {} ({})", project.id, project.slug);
        Ok(project)
    }

    pub async fn update(&self, project_id: Uuid, input: UpdateProjectInput) -> CmsResult<Project> {
        let mut project = require_project(&self.pool, project_id).await?;

        if let Some(ref slug) = input.slug {
            let slug = self.validator.slug(slug)?;
            if slug != project.slug {
                self.ensure_slug_free(&slug, Some(project_id)).await?;
            }
            project.slug = slug;
        }
        if let Some(ref title) = input.title {
            project.title = self.validator.title(title)?;
        }
        if let Some(ref description) = input.description {
            project.description = self.validator.optional(
                Some(description),
                "description",
                self.validator.limits().max_content_length,
            )?;
        }
        project.updated_at = Utc::now();

        if !ProjectRepository::update(&self.pool, &project).await? {
            return Err(CmsError::not_found(format!(
                "Project {} not found",
                project_id
            )));
        }

        log::info!("Updated project {}", project_id);
        Ok(project)
    }

    /// Delete the project together with all of its images and posts.
    pub async fn delete(&self, project_id: Uuid) -> CmsResult<()> {
        if !ProjectRepository::delete(&self.pool, project_id).await? {
            return Err(CmsError::not_found(format!(
                "Project {} not found",
                project_id
            )));
        }

        self.notifier.children_changed(project_id, ChildKind::Image);
        self.notifier.children_changed(project_id, ChildKind::Post);
        log::info!("Deleted project {} and its children", project_id);

        Ok(())
    }

    async fn ensure_slug_free(&self, slug: &str, exclude: Option<Uuid>) -> CmsResult<()> {
        match ProjectRepository::find_by_slug(&self.pool, slug).await? {
            Some(other) if Some(other.id) != exclude => Err(CmsError::conflict(format!(
                "Project slug '{}' already exists",
                slug
            ))),
            _ => Ok(()),
        }
    }
}
