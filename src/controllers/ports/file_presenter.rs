use crate::core::data::pixel_buffer::PixelBuffer;
use std::path::Path;

/// Writes a rendered buffer to a file in the presenter's format.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()>;
}
