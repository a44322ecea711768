mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use controllers::interactive::InteractiveController;
pub use controllers::interactive::debounce::{Clock, DEBOUNCE_INTERVAL, SystemClock, UpdateGate};
pub use controllers::snapshot::SnapshotController;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;

pub use crate::core::actions::evaluate_field_rayon::evaluate_field_rayon;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid::GridSpec;
pub use crate::core::data::iteration_field::IterationField;
pub use crate::core::data::recurrence::RecurrenceParams;
pub use crate::core::data::sample_window::SampleWindow;
pub use crate::core::evaluator::{ESCAPE_RADIUS, EscapeTimeEvaluator};
pub use crate::core::explorer_config::ExplorerConfig;
