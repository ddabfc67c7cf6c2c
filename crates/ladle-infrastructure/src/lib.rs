pub mod config_service;
pub mod paths;
pub mod session_store;

pub use config_service::ConfigService;
pub use paths::{LadlePaths, ServiceType};
pub use session_store::FileSessionStore;
