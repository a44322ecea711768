use crate::controllers::interactive::data::field_config::FieldConfig;
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::complex::Complex;
use crate::core::data::grid::GridSpec;
use crate::core::data::recurrence::RecurrenceParams;
use crate::core::data::sample_window::{SampleWindow, SampleWindowError};
use crate::core::evaluator::{EscapeTimeError, EscapeTimeEvaluator};

pub const DEFAULT_GRID_WIDTH: u32 = 400;
pub const DEFAULT_GRID_HEIGHT: u32 = 400;

const DEFAULT_MAX_ITERATIONS: u32 = 100;
const DEFAULT_POWER: f64 = 2.0;
const DEFAULT_ZOOM: f64 = 1.0;

fn default_constant() -> Complex {
    Complex {
        real: 0.355,
        imag: 0.355,
    }
}

pub(crate) fn base_window() -> SampleWindow {
    SampleWindow::new(-2.0, 2.0, -2.0, 2.0).expect("base sample window is valid")
}

/// User-adjustable explorer state: the recurrence constant and power, the
/// iteration budget, the zoom factor, the colour map, and the current
/// sample window.
///
/// The window only moves on a zoom change: `set_zoom` rederives it from the
/// base window's extent and the constant `c` at that moment. Changing `c`,
/// the power, or the budget alone leaves the view where it is. Recentring
/// on the current constant at every zoom change is intentional, if
/// surprising; see DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub c: Complex,
    pub power: f64,
    pub max_iterations: u32,
    pub colour_map_kind: ColourMapKinds,
    zoom: f64,
    window: SampleWindow,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            c: default_constant(),
            power: DEFAULT_POWER,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_map_kind: ColourMapKinds::default(),
            zoom: DEFAULT_ZOOM,
            window: base_window(),
        }
    }
}

impl ExplorerConfig {
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn window(&self) -> SampleWindow {
        self.window
    }

    /// Applies a new zoom factor, rederiving the window from the base
    /// extent centred on the current constant.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), SampleWindowError> {
        self.window = base_window().rescaled_about(zoom, self.c)?;
        self.zoom = zoom;

        Ok(())
    }

    /// Snapshots the current state into an immutable render request.
    pub fn build_field_config(&self, grid: GridSpec) -> Result<FieldConfig, EscapeTimeError> {
        let params = RecurrenceParams::new(self.c, self.power);
        let evaluator = EscapeTimeEvaluator::new(self.window, grid, self.max_iterations, params)?;
        let colour_map = colour_map_factory(self.colour_map_kind, self.max_iterations);

        Ok(FieldConfig::new(evaluator, colour_map))
    }

    pub fn reset_view(&mut self) {
        *self = Self::default();
    }
}
