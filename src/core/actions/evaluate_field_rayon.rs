use rayon::prelude::*;

use crate::core::data::iteration_field::IterationField;
use crate::core::evaluator::{EscapeTimeEvaluator, escape_counts, sample_lattice};

/// Evaluates the field in parallel using rayon's work-stealing scheduler.
///
/// The lattice is split into row bands and each band runs the same masked
/// kernel as the sequential path. Points are independent, so the result is
/// identical to [`EscapeTimeEvaluator::evaluate`] regardless of how the
/// bands are scheduled.
#[must_use]
pub fn evaluate_field_rayon(evaluator: &EscapeTimeEvaluator) -> IterationField {
    let grid = evaluator.grid();
    let lattice = sample_lattice(evaluator.window(), grid);
    let row_width = grid.width() as usize;

    let bands: Vec<Vec<u32>> = lattice
        .par_chunks(row_width)
        .map(|band| escape_counts(band, evaluator.budget(), evaluator.params()))
        .collect();

    IterationField::from_counts(grid, bands.concat())
        .expect("escape counts match the lattice shape")
}
