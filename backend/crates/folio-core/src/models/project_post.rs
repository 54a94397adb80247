use crate::{ChildKind, OrderedChild};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPost {
    pub id: Uuid,
    pub project_id: Uuid,

    /// Unique within the owning project
    pub slug: String,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub order: i32,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectPost {
    pub fn new(
        project_id: Uuid,
        slug: String,
        title: String,
        content: String,
        published: bool,
        order: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            slug,
            title,
            content,
            published,
            order,
            created_at: now,
            updated_at: now,
        }
    }
}

impl OrderedChild for ProjectPost {
    const KIND: ChildKind = ChildKind::Post;

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
