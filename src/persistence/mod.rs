pub mod files;
pub mod json_store;
pub mod service;
pub mod settings;

pub use files::{atomic_write, ensure_ember_dir, get_ember_dir, init_local_ember, read_file};
pub use json_store::JsonTaskService;
pub use service::{ServiceError, ServiceResult, TaskService};
pub use settings::{load_settings, save_settings, Settings};
