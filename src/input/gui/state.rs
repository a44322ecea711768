use crate::controllers::interactive::data::field_config::FieldConfig;
use crate::core::data::grid::GridSpec;
use crate::core::evaluator::EscapeTimeError;
use crate::core::explorer_config::ExplorerConfig;
use std::sync::Arc;

/// Slider-backed explorer state plus submission bookkeeping.
///
/// The zoom slider writes into `zoom_input`; `apply_zoom` pushes it into
/// the configuration, which is the only path that moves the window.
pub struct GuiState {
    pub config: ExplorerConfig,
    pub zoom_input: f64,
    last_submitted_request: Option<Arc<FieldConfig>>,
    pub latest_submitted_generation: u64,
}

impl Default for GuiState {
    fn default() -> Self {
        let config = ExplorerConfig::default();

        Self {
            zoom_input: config.zoom(),
            config,
            last_submitted_request: None,
            latest_submitted_generation: 0,
        }
    }
}

impl GuiState {
    pub fn apply_zoom(&mut self) {
        if self.zoom_input != self.config.zoom() {
            // Slider range keeps the factor positive.
            let _ = self.config.set_zoom(self.zoom_input);
        }
    }

    pub fn build_render_request(&self, grid: GridSpec) -> Result<FieldConfig, EscapeTimeError> {
        self.config.build_field_config(grid)
    }

    #[must_use]
    pub fn should_submit(&self, request: &FieldConfig) -> bool {
        self.last_submitted_request
            .as_ref()
            .is_none_or(|last| last.as_ref() != request)
    }

    pub fn record_submission(&mut self, request: Arc<FieldConfig>, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }

    pub fn reset_view(&mut self) {
        self.config.reset_view();
        self.zoom_input = self.config.zoom();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn grid() -> GridSpec {
        GridSpec::new(8, 8).unwrap()
    }

    #[test]
    fn test_should_submit_detects_changes() {
        let mut state = GuiState::default();

        let request = state.build_render_request(grid()).unwrap();
        assert!(state.should_submit(&request));

        state.record_submission(Arc::new(request), 1);
        let same_request = state.build_render_request(grid()).unwrap();
        assert!(!state.should_submit(&same_request));

        state.config.max_iterations += 1;
        let changed_request = state.build_render_request(grid()).unwrap();
        assert!(state.should_submit(&changed_request));
    }

    #[test]
    fn test_record_submission_updates_generation() {
        let mut state = GuiState::default();
        let request = state.build_render_request(grid()).unwrap();

        state.record_submission(Arc::new(request), 42);

        assert_eq!(state.latest_submitted_generation, 42);
    }

    #[test]
    fn test_apply_zoom_moves_window_only_on_change() {
        let mut state = GuiState::default();
        let before = state.config.window();

        state.config.c = Complex {
            real: 1.0,
            imag: 0.0,
        };
        state.apply_zoom();
        assert_eq!(state.config.window(), before);

        state.zoom_input = 0.5;
        state.apply_zoom();
        assert_ne!(state.config.window(), before);
    }

    #[test]
    fn test_reset_view_restores_zoom_input() {
        let mut state = GuiState::default();
        state.zoom_input = 0.5;
        state.apply_zoom();

        state.reset_view();

        assert_eq!(state.zoom_input, 1.0);
        assert_eq!(state.config, ExplorerConfig::default());
    }
}
