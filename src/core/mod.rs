pub mod audit;
pub mod checks;
pub mod glyph;
pub mod icon;

pub use crate::domain::model::{
    FileCheck, FileGroup, FileStatus, GroupReport, HealthReport, JsonCheck, KeyCheck, SizeReport,
    StructureReport,
};
pub use crate::domain::ports::{GlyphStrategy, LayoutProvider, Storage};
pub use crate::utils::error::Result;
