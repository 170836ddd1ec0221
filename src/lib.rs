pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::HttpDreamService;
pub use crate::config::file_config::FileConfig;
pub use crate::config::CliConfig;
pub use crate::core::controller::FlowController;
pub use crate::core::session::Session;
pub use crate::utils::error::{DreamError, Result};
