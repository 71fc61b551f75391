// Export our modules for use in binaries and tests
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod http;
pub mod logging;
pub mod ui;

pub use app::Directory;
pub use domain::Genre;
pub use error::{AppError, AppResult};
