pub mod controller;
pub mod loading;
pub mod session;

pub use crate::domain::model::{DreamVerdict, FlowState, Submission};
pub use crate::domain::ports::{ConfigProvider, DreamService};
pub use crate::utils::error::Result;
