use crate::core::data::complex::Complex;
use crate::core::data::grid::GridSpec;
use crate::core::data::iteration_field::IterationField;
use crate::core::data::recurrence::RecurrenceParams;
use crate::core::data::sample_window::SampleWindow;
use std::error::Error;
use std::fmt;

/// Modulus beyond which a point is classified as diverging. Kept at 2.0 for
/// every power, matching the degree-2 escape bound.
pub const ESCAPE_RADIUS: f64 = 2.0;

const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeTimeError {
    ZeroIterationBudget,
}

impl fmt::Display for EscapeTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIterationBudget => {
                write!(f, "iteration budget must be greater than zero")
            }
        }
    }
}

impl Error for EscapeTimeError {}

/// Escape-time evaluation of `z ← z^power + c` over a sample lattice.
///
/// One evaluation runs the recurrence for exactly `budget` sweeps over the
/// set of still-bounded points and reports, per point, how many sweeps it
/// survived with modulus at most [`ESCAPE_RADIUS`]. Escape is irreversible:
/// an escaped point is dropped from the active set and its value frozen.
/// The evaluation is deterministic and holds no state across calls.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeEvaluator {
    window: SampleWindow,
    grid: GridSpec,
    budget: u32,
    params: RecurrenceParams,
}

impl EscapeTimeEvaluator {
    pub fn new(
        window: SampleWindow,
        grid: GridSpec,
        budget: u32,
        params: RecurrenceParams,
    ) -> Result<Self, EscapeTimeError> {
        if budget == 0 {
            return Err(EscapeTimeError::ZeroIterationBudget);
        }

        Ok(Self {
            window,
            grid,
            budget,
            params,
        })
    }

    #[must_use]
    pub fn window(&self) -> SampleWindow {
        self.window
    }

    #[must_use]
    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    #[must_use]
    pub fn budget(&self) -> u32 {
        self.budget
    }

    #[must_use]
    pub fn params(&self) -> RecurrenceParams {
        self.params
    }

    /// Evaluates the full lattice sequentially.
    ///
    /// For the data-parallel version see
    /// [`crate::core::actions::evaluate_field_rayon::evaluate_field_rayon`];
    /// both produce identical fields.
    #[must_use]
    pub fn evaluate(&self) -> IterationField {
        let lattice = sample_lattice(self.window, self.grid);
        let counts = escape_counts(&lattice, self.budget, self.params);

        IterationField::from_counts(self.grid, counts)
            .expect("escape counts match the lattice shape")
    }
}

/// Evenly spaced samples across `[start, end]`, endpoint included.
///
/// A single-sample axis collapses to `start`. The endpoint is pinned to
/// `end` exactly rather than left to accumulated rounding.
fn linspace(start: f64, end: f64, samples: u32) -> Vec<f64> {
    if samples == 1 {
        return vec![start];
    }

    let step = (end - start) / f64::from(samples - 1);
    let mut values: Vec<f64> = (0..samples).map(|i| start + f64::from(i) * step).collect();
    values[samples as usize - 1] = end;

    values
}

/// The lattice of initial values `z0`, row-major with row 0 at `y_min`
/// (origin-at-bottom image orientation).
pub(crate) fn sample_lattice(window: SampleWindow, grid: GridSpec) -> Vec<Complex> {
    let xs = linspace(window.x_min(), window.x_max(), grid.width());
    let ys = linspace(window.y_min(), window.y_max(), grid.height());

    let mut lattice = Vec::with_capacity(grid.sample_count());
    for &imag in &ys {
        for &real in &xs {
            lattice.push(Complex { real, imag });
        }
    }

    lattice
}

/// The masked iteration kernel over an arbitrary slice of lattice points.
///
/// Keeps a compacted list of still-active indices so escaped points are
/// never revisited; an exhausted active set ends the sweep loop early with
/// the same output. A point's count increments only while it remains
/// bounded after its update, so the final count excludes the escaping
/// sweep; points that never escape reach exactly `budget`. Non-finite
/// magnitudes fail the bound check and are classified as escaped.
pub(crate) fn escape_counts(
    lattice: &[Complex],
    budget: u32,
    params: RecurrenceParams,
) -> Vec<u32> {
    let mut z: Vec<Complex> = lattice.to_vec();
    let mut counts = vec![0u32; lattice.len()];
    let mut active: Vec<usize> = (0..lattice.len()).collect();

    for _ in 0..budget {
        if active.is_empty() {
            break;
        }

        active.retain(|&index| {
            let next = z[index].powf(params.power) + params.c;
            z[index] = next;

            if next.magnitude_squared() <= ESCAPE_RADIUS_SQUARED {
                counts[index] += 1;
                true
            } else {
                false
            }
        });
    }

    counts
}
