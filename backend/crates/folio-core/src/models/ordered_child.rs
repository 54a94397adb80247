use crate::ChildKind;

use uuid::Uuid;

/// A row that sits in a parent-scoped, 1-based ordering.
pub trait OrderedChild {
    const KIND: ChildKind;

    fn id(&self) -> Uuid;
    fn parent_id(&self) -> Uuid;
    fn order(&self) -> i32;
}
