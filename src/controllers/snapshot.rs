use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::evaluate_field_rayon::evaluate_field_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::grid::GridSpec;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::explorer_config::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, ExplorerConfig};

/// One-shot headless render of the default explorer configuration.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let grid = GridSpec::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)?;
        self.generate_with_grid(grid)
    }

    pub fn generate_with_grid(&mut self, grid: GridSpec) -> Result<(), Box<dyn std::error::Error>> {
        let config = ExplorerConfig::default();
        let request = config.build_field_config(grid)?;

        println!("Rendering multibrot field...");
        println!("Grid: {}x{}", grid.width(), grid.height());
        println!("Max iterations: {}", config.max_iterations);
        println!(
            "Recurrence: z^{} + ({} + {}i)",
            config.power, config.c.real, config.c.imag
        );

        let start = Instant::now();
        let field = evaluate_field_rayon(request.evaluator());
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);

        self.buffer = Some(generate_pixel_buffer(&field, request.colour_map())?);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(buffer) = &self.buffer {
            if let Some(parent) = filepath.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }

            self.presenter.present(buffer, filepath)?;
        }

        Ok(())
    }
}
