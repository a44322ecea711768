use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::write_ppm::write_ppm;
use std::path::Path;

#[derive(Debug, Default)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        write_ppm(buffer, filepath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid::GridSpec;

    #[test]
    fn test_present_writes_ppm_file() {
        let grid = GridSpec::new(2, 1).unwrap();
        let buffer = PixelBuffer::from_data(grid, vec![9, 9, 9, 8, 8, 8]).unwrap();
        let path = std::env::temp_dir().join("multibrot_ppm_presenter_test.ppm");

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let contents = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(contents.starts_with(b"P6\n2 1\n255\n"));
    }
}
