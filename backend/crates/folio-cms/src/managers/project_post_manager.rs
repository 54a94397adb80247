use crate::managers::child_collection::{ChildCollection, not_found};
use crate::managers::require_project;
use crate::{ChangeNotifier, CmsError, CmsResult, CreatePostInput, InputValidator, UpdatePostInput};

use folio_core::ProjectPost;
use folio_db::{PostTable, ProjectPostRepository};

use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct ProjectPostManager {
    posts: ChildCollection<PostTable>,
    validator: InputValidator,
}

impl ProjectPostManager {
    pub fn new(
        pool: SqlitePool,
        notifier: Arc<dyn ChangeNotifier>,
        validator: InputValidator,
    ) -> Self {
        Self {
            posts: ChildCollection::new(pool, notifier),
            validator,
        }
    }

    pub async fn list(&self, project_id: Uuid) -> CmsResult<Vec<ProjectPost>> {
        self.posts.list(project_id).await
    }

    pub async fn get(&self, project_id: Uuid, post_id: Uuid) -> CmsResult<ProjectPost> {
        self.posts.get(project_id, post_id).await
    }

    pub async fn create(&self, project_id: Uuid, input: CreatePostInput) -> CmsResult<ProjectPost> {
        let pool = self.posts.pool();
        require_project(pool, project_id).await?;

        let slug = self.validator.slug(&input.slug)?;
        let title = self.validator.title(&input.title)?;
        let content = self.validator.content(&input.content, "content")?;
        self.ensure_slug_free(project_id, &slug, None).await?;

        let order = self
            .posts
            .ordering()
            .resolve_order(project_id, input.order)
            .await?;

        let post = ProjectPost::new(project_id, slug, title, content, input.published, order);
        ProjectPostRepository::create(pool, &post).await?;

        self.posts.changed(project_id);
        log::info!(
            "Created post {} ({}) in project {} at order {}",
            post.id,
            post.slug,
            project_id,
            post.order
        );

        Ok(post)
    }

    pub async fn update(
        &self,
        project_id: Uuid,
        post_id: Uuid,
        input: UpdatePostInput,
    ) -> CmsResult<ProjectPost> {
        let pool = self.posts.pool();
        require_project(pool, project_id).await?;
        let mut post = self.posts.find_owned(project_id, post_id).await?;

        if let Some(ref slug) = input.slug {
            let slug = self.validator.slug(slug)?;
            if slug != post.slug {
                self.ensure_slug_free(project_id, &slug, Some(post_id)).await?;
            }
            post.slug = slug;
        }
        if let Some(ref title) = input.title {
            post.title = self.validator.title(title)?;
        }
        if let Some(ref content) = input.content {
            post.content = self.validator.content(content, "content")?;
        }
        if let Some(published) = input.published {
            post.published = published;
        }
        if let Some(order) = input.order
            && order != post.order
        {
            self.posts
                .ordering()
                .ensure_order_available(project_id, order, Some(post_id))
                .await?;
            post.order = order;
        }
        post.updated_at = Utc::now();

        if !ProjectPostRepository::update(pool, &post).await? {
            return Err(not_found::<PostTable>(post_id));
        }

        self.posts.changed(project_id);
        log::info!("Updated post {} in project {}", post_id, project_id);

        Ok(post)
    }

    pub async fn delete(&self, project_id: Uuid, post_id: Uuid) -> CmsResult<()> {
        self.posts.delete(project_id, post_id).await
    }

    pub async fn reorder(&self, project_id: Uuid, post_ids: &[Uuid]) -> CmsResult<Vec<ProjectPost>> {
        self.posts.reorder(project_id, post_ids).await
    }

    async fn ensure_slug_free(
        &self,
        project_id: Uuid,
        slug: &str,
        exclude: Option<Uuid>,
    ) -> CmsResult<()> {
        let existing =
            ProjectPostRepository::find_by_slug(self.posts.pool(), project_id, slug).await?;

        match existing {
            Some(other) if Some(other.id) != exclude => Err(CmsError::conflict(format!(
                "Post slug '{}' already exists in project {}",
                slug, project_id
            ))),
            _ => Ok(()),
        }
    }
}
