use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_field::IterationField;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratePixelBufferError {
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<ColourMapError> for GeneratePixelBufferError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

/// Streams an iteration field through a colour map into an RGB buffer.
///
/// The buffer keeps field order (row 0 at the bottom); orientation is a
/// presenter concern.
pub fn generate_pixel_buffer<CMap: ColourMap>(
    field: &IterationField,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let grid = field.grid();
    let mut buffer = Vec::with_capacity(grid.sample_count() * 3);

    for &count in field.counts() {
        let Colour { r, g, b } = mapper.map(count)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    PixelBuffer::from_data(grid, buffer).map_err(GeneratePixelBufferError::PixelBuffer)
}
