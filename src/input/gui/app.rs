//! Main GUI application loop.

use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::debounce::{SystemClock, UpdateGate};
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::grid::GridSpec;
use crate::core::explorer_config::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use crate::input::gui::state::GuiState;
use crate::presenters::pixels::presenter::PixelsPresenter;
use egui::Context;
use egui_winit::State as EguiWinitState;
use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

struct App {
    presenter: PixelsPresenter,
    controller: InteractiveController,
    state: GuiState,
    gate: UpdateGate<SystemClock>,
    field_grid: GridSpec,
    scale_factor: f64,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl App {
    fn new(window: &'static Window, event_loop: &EventLoop<()>) -> Self {
        let field_grid = GridSpec::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
            .expect("reference field grid is valid");
        let presenter = PixelsPresenter::new(window, field_grid);
        let controller = InteractiveController::new(presenter.share_mailbox());
        let scale_factor = window.scale_factor();

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            controller,
            state: GuiState::default(),
            gate: UpdateGate::default(),
            field_grid,
            scale_factor,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs the egui frame: the parameter sliders and the diagnostics
    /// panel.
    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let state = &mut self.state;
        let presenter = &self.presenter;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Explorer")
                .default_pos([10.0, 10.0])
                .default_size([280.0, 260.0])
                .show(ctx, |ui| {
                    ui.heading("Multibrot Explorer");
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Re(c):");
                        ui.add(egui::Slider::new(&mut state.config.c.real, -2.0..=2.0));
                    });

                    ui.horizontal(|ui| {
                        ui.label("Im(c):");
                        ui.add(egui::Slider::new(&mut state.config.c.imag, -2.0..=2.0));
                    });

                    ui.horizontal(|ui| {
                        ui.label("Power (z^x):");
                        ui.add(egui::Slider::new(&mut state.config.power, 1.0..=4.0));
                    });

                    ui.horizontal(|ui| {
                        ui.label("Zoom:");
                        ui.add(egui::Slider::new(&mut state.zoom_input, 0.5..=2.0));
                    });

                    ui.horizontal(|ui| {
                        ui.label("Max iterations:");
                        ui.add(egui::Slider::new(
                            &mut state.config.max_iterations,
                            50..=500,
                        ));
                    });

                    ui.horizontal(|ui| {
                        ui.label("Colour map:");
                        egui::ComboBox::from_id_source("field_colour_map")
                            .selected_text(state.config.colour_map_kind.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in ColourMapKinds::ALL {
                                    ui.selectable_value(
                                        &mut state.config.colour_map_kind,
                                        kind,
                                        kind.display_name(),
                                    );
                                }
                            });
                    });

                    ui.separator();
                    ui.label("Sample window:");
                    // Label the frame on screen, falling back to the
                    // pending configuration before the first render lands.
                    let window = presenter
                        .last_window()
                        .unwrap_or_else(|| state.config.window());
                    ui.label(format!("Re: [{:.4}, {:.4}]", window.x_min(), window.x_max()));
                    ui.label(format!("Im: [{:.4}, {:.4}]", window.y_min(), window.y_max()));

                    if ui.button("Reset view").clicked() {
                        state.reset_view();
                    }

                    ui.separator();
                    ui.label(format!(
                        "Latest generation: {}",
                        state.latest_submitted_generation
                    ));
                    ui.label(format!(
                        "Displayed generation: {}",
                        presenter.last_presented_generation()
                    ));
                    if let Some(render_duration) = presenter.last_render_duration() {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = presenter.last_error_message() {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }

    /// Builds the desired request from the current sliders and submits it
    /// if it differs from the last submission and the debounce gate opens.
    fn submit_render_request_if_needed(&mut self) {
        self.state.apply_zoom();

        let request = match self.state.build_render_request(self.field_grid) {
            Ok(request) => request,
            // Slider ranges keep the budget positive; nothing to submit
            // for a transiently invalid configuration.
            Err(_) => return,
        };

        if self.state.should_submit(&request) && self.gate.try_accept() {
            let request = Arc::new(request);
            let generation = self.controller.submit_request(Arc::clone(&request));
            self.state.record_submission(request, generation);
        }
    }

    fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.drain_events();
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        response.consumed
    }
}

/// Runs the GUI application.
///
/// This function does not return until the window is closed.
pub fn run_gui() {
    let event_loop = EventLoop::new().expect("Failed to create event loop");

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Multibrot Explorer")
            .with_inner_size(LogicalSize::new(
                DEFAULT_GRID_WIDTH as f64,
                DEFAULT_GRID_HEIGHT as f64,
            ))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let mut app = App::new(window, &event_loop);
    let mut redraw_pending = true;

    event_loop
        .run(|event, elwt| {
            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    let egui_consumed = app.handle_window_event(window, event);

                    match event {
                        WindowEvent::CloseRequested => {
                            elwt.exit();
                        }
                        WindowEvent::RedrawRequested => {
                            redraw_pending = false;

                            let egui_output = app.update_ui(window);

                            app.egui_state
                                .handle_platform_output(window, egui_output.platform_output.clone());

                            if egui_output
                                .viewport_output
                                .values()
                                .any(|v| v.repaint_delay.is_zero())
                            {
                                redraw_pending = true;
                            }

                            app.submit_render_request_if_needed();

                            if let Err(e) = app.render(egui_output) {
                                eprintln!("Render error: {e}");
                                elwt.exit();
                            }

                            // Keep polling while a render is outstanding so
                            // its frame is picked up promptly.
                            if app.state.latest_submitted_generation
                                > app.controller.last_completed_generation()
                            {
                                redraw_pending = true;
                            }
                        }
                        WindowEvent::Resized(size) => {
                            app.presenter.resize_surface(size.width, size.height);
                            redraw_pending = true;
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.scale_factor = *scale_factor;
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            let size = window.inner_size();
                            app.presenter.resize_surface(size.width, size.height);
                            redraw_pending = true;
                        }
                        _ => {
                            if egui_consumed {
                                redraw_pending = true;
                            }
                        }
                    }
                }
                Event::AboutToWait => {
                    if redraw_pending {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}
