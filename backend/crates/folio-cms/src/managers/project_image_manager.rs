use crate::managers::child_collection::{ChildCollection, not_found};
use crate::managers::require_project;
use crate::{ChangeNotifier, CmsResult, CreateImageInput, InputValidator, UpdateImageInput};

use folio_core::ProjectImage;
use folio_db::{ImageTable, ProjectImageRepository};

use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct ProjectImageManager {
    images: ChildCollection<ImageTable>,
    validator: InputValidator,
}

impl ProjectImageManager {
    pub fn new(
        pool: SqlitePool,
        notifier: Arc<dyn ChangeNotifier>,
        validator: InputValidator,
    ) -> Self {
        Self {
            images: ChildCollection::new(pool, notifier),
            validator,
        }
    }

    /// Images of `project_id`, ascending by order.
    pub async fn list(&self, project_id: Uuid) -> CmsResult<Vec<ProjectImage>> {
        self.images.list(project_id).await
    }

    pub async fn get(&self, project_id: Uuid, image_id: Uuid) -> CmsResult<ProjectImage> {
        self.images.get(project_id, image_id).await
    }

    pub async fn create(
        &self,
        project_id: Uuid,
        input: CreateImageInput,
    ) -> CmsResult<ProjectImage> {
        let pool = self.images.pool();
        require_project(pool, project_id).await?;

        let limits = self.validator.limits();
        let url = self.validator.url(&input.url)?;
        let alt = self
            .validator
            .optional(input.alt.as_deref(), "alt", limits.max_alt_length)?;
        let caption =
            self.validator
                .optional(input.caption.as_deref(), "caption", limits.max_caption_length)?;

        let order = self
            .images
            .ordering()
            .resolve_order(project_id, input.order)
            .await?;

        let image = ProjectImage::new(project_id, url, alt, caption, order);
        ProjectImageRepository::create(pool, &image).await?;

        self.images.changed(project_id);
        log::info!(
            "Created image {} in project {} at order {}",
            image.id,
            project_id,
            image.order
        );

        Ok(image)
    }

    /// Partial update. `order` is only touched when the input carries one.
    pub async fn update(
        &self,
        project_id: Uuid,
        image_id: Uuid,
        input: UpdateImageInput,
    ) -> CmsResult<ProjectImage> {
        let pool = self.images.pool();
        require_project(pool, project_id).await?;
        let mut image = self.images.find_owned(project_id, image_id).await?;

        let limits = self.validator.limits();
        if let Some(ref url) = input.url {
            image.url = self.validator.url(url)?;
        }
        if let Some(ref alt) = input.alt {
            image.alt = self
                .validator
                .optional(Some(alt), "alt", limits.max_alt_length)?;
        }
        if let Some(ref caption) = input.caption {
            image.caption =
                self.validator
                    .optional(Some(caption), "caption", limits.max_caption_length)?;
        }
        if let Some(order) = input.order
            && order != image.order
        {
            self.images
                .ordering()
                .ensure_order_available(project_id, order, Some(image_id))
                .await?;
            image.order = order;
        }
        image.updated_at = Utc::now();

        if !ProjectImageRepository::update(pool, &image).await? {
            return Err(not_found::<ImageTable>(image_id));
        }

        self.images.changed(project_id);
        log::info!("Updated image {} in project {}", image_id, project_id);

        Ok(image)
    }

    /// Remove one image. Siblings keep their order values.
    pub async fn delete(&self, project_id: Uuid, image_id: Uuid) -> CmsResult<()> {
        self.images.delete(project_id, image_id).await
    }

    /// Apply a full target ordering and return the images in their new order.
    pub async fn reorder(
        &self,
        project_id: Uuid,
        image_ids: &[Uuid],
    ) -> CmsResult<Vec<ProjectImage>> {
        self.images.reorder(project_id, image_ids).await
    }
}
