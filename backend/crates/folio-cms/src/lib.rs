pub mod app_state;
pub mod change_notifier;
pub mod error;
pub mod input_validator;
pub mod inputs;
pub mod managers;


pub use app_state::AppState;
pub use change_notifier::{BroadcastNotifier, ChangeEvent, ChangeNotifier, LogNotifier};
pub use error::{CmsError, Result as CmsResult};
pub use input_validator::{InputValidator, sanitize_optional, sanitize_string};
pub use inputs::{
    CreateImageInput, CreatePostInput, CreateProjectInput, UpdateImageInput, UpdatePostInput,
    UpdateProjectInput,
};
pub use managers::project_image_manager::ProjectImageManager;
pub use managers::project_manager::ProjectManager;
pub use managers::project_post_manager::ProjectPostManager;
