pub mod connection;
pub mod error;
pub mod repositories;
pub mod sqlite_ordered_store;

pub use connection::database::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::ordered_table::{ImageTable, OrderedTable, PostTable};
pub use repositories::project_image_repository::ProjectImageRepository;
pub use repositories::project_post_repository::ProjectPostRepository;
pub use repositories::project_repository::ProjectRepository;
pub use sqlite_ordered_store::{SqliteImageStore, SqliteOrderedStore, SqlitePostStore};
