use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::map::ColourMap;
use crate::core::data::colour::Colour;

/// Black-body style gradient: black through red and yellow to white, with
/// the interior (points that never escaped) solid black.
#[derive(Debug)]
pub struct HeatGradient {
    max_iterations: u32,
}

const RED_RAMP_END: f64 = 0.36;
const YELLOW_RAMP_END: f64 = 0.75;

impl ColourMap for HeatGradient {
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

        let (r, g, b) = if t < RED_RAMP_END {
            let local_t = t / RED_RAMP_END;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < YELLOW_RAMP_END {
            let local_t = (t - RED_RAMP_END) / (YELLOW_RAMP_END - RED_RAMP_END);
            (255, (local_t * 255.0) as u8, 0)
        } else {
            let local_t = (t - YELLOW_RAMP_END) / (1.0 - YELLOW_RAMP_END);
            (255, 255, (local_t * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::HeatGradient
    }
}

impl HeatGradient {
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
        let mapper = HeatGradient::new(100);
        let colour = mapper.map(100).unwrap();

        assert_eq!(colour, Colour { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_map_returns_black_at_zero_iterations() {
        let mapper = HeatGradient::new(100);
        let colour = mapper.map(0).unwrap();

        assert_eq!(colour, Colour { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_map_red_ramp_saturates_before_yellow_ramp() {
        let mapper = HeatGradient::new(100);
        let colour = mapper.map(40).unwrap();

        assert_eq!(colour.r, 255);
        assert!(colour.g > 0);
        assert_eq!(colour.b, 0);
    }

    #[test]
    fn test_map_approaches_white_near_max() {
        let mapper = HeatGradient::new(100);
        let colour = mapper.map(99).unwrap();

        assert_eq!(colour.r, 255);
        assert_eq!(colour.g, 255);
        assert!(colour.b > 200);
    }

    #[test]
    fn test_map_returns_error_when_iterations_exceed_max() {
        let mapper = HeatGradient::new(100);

        assert_eq!(
            mapper.map(101),
            Err(ColourMapError::IterationsExceedMax {
                iterations: 101,
                max_iterations: 100
            })
        );
    }
}
