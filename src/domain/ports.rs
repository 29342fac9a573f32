use crate::domain::model::FileGroup;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// Read side of the expected extension layout. The audit only ever consumes
/// this view, so configs and test fixtures can both stand behind it.
pub trait LayoutProvider: Send + Sync {
    fn manifest_file(&self) -> &str;
    fn groups(&self) -> &[FileGroup];
    fn ignore_dirs(&self) -> &[String];
    fn size_extensions(&self) -> &[String];
}

/// One attempt at putting the glyph on an icon canvas. Returns false when
/// the attempt could not draw, so the caller can fall through to the next
/// strategy in the chain.
pub trait GlyphStrategy {
    fn label(&self) -> &str;
    fn draw(&self, canvas: &mut image::RgbImage) -> bool;
}
