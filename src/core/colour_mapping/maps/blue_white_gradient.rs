use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::map::ColourMap;
use crate::core::data::colour::Colour;

/// Linear ramp from deep blue to white; the interior stays black.
#[derive(Debug)]
pub struct BlueWhiteGradient {
    max_iterations: u32,
}

const BASE_BLUE: f64 = 96.0;

impl ColourMap for BlueWhiteGradient {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        if iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(Colour { r: 0, g: 0, b: 0 });
        }

        let t = f64::from(iterations) / f64::from(self.max_iterations);
        let channel = (t * 255.0) as u8;
        let blue = (BASE_BLUE + t * (255.0 - BASE_BLUE)) as u8;

        Ok(Colour {
            r: channel,
            g: channel,
            b: blue,
        })
    }

    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::BlueWhiteGradient
    }
}

impl BlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_black_at_max_iterations() {
        let mapper = BlueWhiteGradient::new(64);
        let colour = mapper.map(64).unwrap();

        assert_eq!(colour, Colour { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_map_starts_deep_blue() {
        let mapper = BlueWhiteGradient::new(64);
        let colour = mapper.map(0).unwrap();

        assert_eq!(colour.r, 0);
        assert_eq!(colour.g, 0);
        assert_eq!(colour.b, BASE_BLUE as u8);
    }

    #[test]
    fn test_map_brightens_towards_white() {
        let mapper = BlueWhiteGradient::new(64);
        let colour = mapper.map(63).unwrap();

        assert!(colour.r > 240);
        assert!(colour.g > 240);
        assert!(colour.b > 240);
    }

    #[test]
    fn test_map_returns_error_when_iterations_exceed_max() {
        let mapper = BlueWhiteGradient::new(64);

        assert_eq!(
            mapper.map(65),
            Err(ColourMapError::IterationsExceedMax {
                iterations: 65,
                max_iterations: 64
            })
        );
    }
}
