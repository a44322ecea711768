use crate::core::data::grid::GridSpec;
use std::error::Error;
use std::fmt;

pub type PixelBufferData = Vec<u8>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    BoundsMismatch {
        expected_bytes: usize,
        buffer_bytes: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_bytes,
                buffer_bytes,
            } => {
                write!(
                    f,
                    "grid needs {} bytes but buffer holds {}",
                    expected_bytes, buffer_bytes
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// RGB bytes for one rendered field, three bytes per sample, row-major in
/// field order (row 0 is the bottom of the window). Presenters flip rows
/// when handing the image to a top-down surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    grid: GridSpec,
    buffer: PixelBufferData,
}

fn grid_to_buffer_size(grid: GridSpec) -> usize {
    grid.sample_count() * 3
}

impl PixelBuffer {
    pub fn from_data(grid: GridSpec, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected_bytes = grid_to_buffer_size(grid);

        if expected_bytes != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_bytes,
                buffer_bytes: buffer.len(),
            });
        }

        Ok(Self { grid, buffer })
    }

    #[must_use]
    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// One row of RGB bytes, indexed in field order.
    #[must_use]
    pub fn row(&self, row: u32) -> &[u8] {
        let stride = self.grid.width() as usize * 3;
        let start = row as usize * stride;
        &self.buffer[start..start + stride]
    }
}
