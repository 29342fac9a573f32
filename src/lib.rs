pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{layout::LayoutConfig, storage::LocalStorage};
pub use core::audit::HealthAudit;
pub use utils::error::{Result, ToolError};
