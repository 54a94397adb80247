use crate::{ChildKind, OrderedChild};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub id: Uuid,
    pub project_id: Uuid,

    pub url: String,
    pub alt: Option<String>,
    pub caption: Option<String>,
    pub order: i32,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectImage {
    pub fn new(
        project_id: Uuid,
        url: String,
        alt: Option<String>,
        caption: Option<String>,
        order: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            url,
            alt,
            caption,
            order,
            created_at: now,
            updated_at: now,
        }
    }
}

impl OrderedChild for ProjectImage {
    const KIND: ChildKind = ChildKind::Image;

    fn id(&self) -> Uuid {
        self.id
    }

    fn parent_id(&self) -> Uuid {
        self.project_id
    }

    fn order(&self) -> i32 {
        self.order
    }
}
