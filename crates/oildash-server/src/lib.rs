pub mod app;
pub mod config;
pub mod page;

pub use app::{router, AppState};
pub use config::ServerConfig;
