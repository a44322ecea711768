use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SampleWindowError {
    InvalidSpan { width: f64, height: f64 },
}

impl fmt::Display for SampleWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpan { width, height } => {
                write!(f, "sample window span must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for SampleWindowError {}

/// A rectangular region of the complex plane to be sampled.
///
/// Bounds are ordered (`x_min < x_max`, `y_min < y_max`) and immutable once
/// constructed; parameter changes build a fresh window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleWindow {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl SampleWindow {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, SampleWindowError> {
        let width = x_max - x_min;
        let height = y_max - y_min;

        if !(width > 0.0) || !(height > 0.0) {
            return Err(SampleWindowError::InvalidSpan { width, height });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Derives a new window with this window's extent scaled uniformly by
    /// `zoom` and centred on `centre`.
    ///
    /// A zoom below 1.0 narrows the view, above 1.0 widens it. Non-positive
    /// or non-finite zoom factors collapse the span and are rejected by the
    /// constructor.
    pub fn rescaled_about(
        &self,
        zoom: f64,
        centre: Complex,
    ) -> Result<Self, SampleWindowError> {
        let half_width = self.width() * zoom / 2.0;
        let half_height = self.height() * zoom / 2.0;

        Self::new(
            centre.real - half_width,
            centre.real + half_width,
            centre.imag - half_height,
            centre.imag + half_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_window_new_valid() {
        let window = SampleWindow::new(-2.0, 2.0, -1.0, 1.0).unwrap();

        assert_eq!(window.x_min(), -2.0);
        assert_eq!(window.x_max(), 2.0);
        assert_eq!(window.y_min(), -1.0);
        assert_eq!(window.y_max(), 1.0);
        assert_eq!(window.width(), 4.0);
        assert_eq!(window.height(), 2.0);
    }

    #[test]
    fn test_sample_window_spans_must_be_positive() {
        let zero_width = SampleWindow::new(1.0, 1.0, -1.0, 1.0);
        let reversed_x = SampleWindow::new(2.0, -2.0, -1.0, 1.0);
        let zero_height = SampleWindow::new(-1.0, 1.0, 0.5, 0.5);
        let reversed_y = SampleWindow::new(-1.0, 1.0, 1.0, -1.0);

        assert_eq!(
            zero_width,
            Err(SampleWindowError::InvalidSpan {
                width: 0.0,
                height: 2.0
            })
        );
        assert_eq!(
            reversed_x,
            Err(SampleWindowError::InvalidSpan {
                width: -4.0,
                height: 2.0
            })
        );
        assert_eq!(
            zero_height,
            Err(SampleWindowError::InvalidSpan {
                width: 2.0,
                height: 0.0
            })
        );
        assert_eq!(
            reversed_y,
            Err(SampleWindowError::InvalidSpan {
                width: 2.0,
                height: -2.0
            })
        );
    }

    #[test]
    fn test_sample_window_rejects_nan_bounds() {
        assert!(SampleWindow::new(f64::NAN, 1.0, -1.0, 1.0).is_err());
        assert!(SampleWindow::new(-1.0, 1.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_rescaled_about_scales_extent_and_recentres() {
        let base = SampleWindow::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        let centre = Complex {
            real: 0.5,
            imag: -0.25,
        };

        let derived = base.rescaled_about(0.5, centre).unwrap();

        assert_eq!(derived.x_min(), -0.5);
        assert_eq!(derived.x_max(), 1.5);
        assert_eq!(derived.y_min(), -1.25);
        assert_eq!(derived.y_max(), 0.75);
        assert_eq!(derived.width(), 2.0);
        assert_eq!(derived.height(), 2.0);
    }

    #[test]
    fn test_rescaled_about_unit_zoom_keeps_extent() {
        let base = SampleWindow::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        let derived = base.rescaled_about(1.0, Complex::ZERO).unwrap();

        assert_eq!(derived, base);
    }

    #[test]
    fn test_rescaled_about_rejects_degenerate_zoom() {
        let base = SampleWindow::new(-2.0, 2.0, -2.0, 2.0).unwrap();

        assert!(base.rescaled_about(0.0, Complex::ZERO).is_err());
        assert!(base.rescaled_about(-1.0, Complex::ZERO).is_err());
        assert!(base.rescaled_about(f64::NAN, Complex::ZERO).is_err());
    }
}
