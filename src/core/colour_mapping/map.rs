use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::colour::Colour;

/// Maps an iteration count to a display colour.
///
/// Implementations are configured with the iteration budget in force; a
/// count above it is a caller error, reported as a typed failure rather
/// than clamped.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError>;

    fn kind(&self) -> ColourMapKinds;

    fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }
}

impl ColourMap for Box<dyn ColourMap> {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        (**self).map(iterations)
    }

    fn kind(&self) -> ColourMapKinds {
        (**self).kind()
    }
}
