use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderPresenterPort;
use crate::core::data::grid::GridSpec;
use crate::core::data::sample_window::SampleWindow;
use crate::presenters::pixels::adapter::FrameMailbox;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use std::time::Duration;
use winit::window::Window;

/// Blits rendered fields into a fixed-size pixels framebuffer and
/// composites the egui layer on top.
///
/// The framebuffer keeps the field grid's dimensions; pixels scales it to
/// whatever size the surface currently has.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    mailbox: Arc<FrameMailbox>,
    field_grid: GridSpec,
    surface_width: u32,
    surface_height: u32,
    has_frame: bool,
    last_presented_generation: u64,
    last_window: Option<SampleWindow>,
    last_render_duration: Option<Duration>,
    last_error_message: Option<String>,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, field_grid: GridSpec) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(field_grid.width(), field_grid.height(), surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Self {
            pixels,
            egui_renderer,
            mailbox: Arc::new(FrameMailbox::default()),
            field_grid,
            surface_width: size.width,
            surface_height: size.height,
            has_frame: false,
            last_presented_generation: 0,
            last_window: None,
            last_render_duration: None,
            last_error_message: None,
        }
    }

    #[must_use]
    pub fn share_mailbox(&self) -> Arc<dyn RenderPresenterPort> {
        Arc::clone(&self.mailbox) as Arc<dyn RenderPresenterPort>
    }

    #[must_use]
    pub fn last_presented_generation(&self) -> u64 {
        self.last_presented_generation
    }

    #[must_use]
    pub fn last_window(&self) -> Option<SampleWindow> {
        self.last_window
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    #[must_use]
    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    /// Pulls the latest completion out of the mailbox, dropping stale
    /// generations.
    pub fn drain_events(&mut self) {
        if let Some(event) = self.mailbox.take() {
            match event {
                RenderEvent::Frame(frame) => {
                    if frame.generation > self.last_presented_generation
                        && frame.pixel_buffer.grid() == self.field_grid
                    {
                        self.copy_field_into_frame(&frame);
                        self.has_frame = true;
                        self.last_presented_generation = frame.generation;
                        self.last_window = Some(frame.window);
                        self.last_render_duration = Some(frame.render_duration);
                        self.last_error_message = None;
                    }
                }
                RenderEvent::Error(error) => {
                    if error.generation >= self.last_presented_generation {
                        self.last_error_message = Some(error.message);
                    }
                }
            }
        }
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        if !self.has_frame {
            self.draw_placeholder();
        }

        self.pixels.render_with(|encoder, render_target, context| {
            // First, render the pixels framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            // Upload new/changed egui textures
            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            // Update egui buffers (vertices, indices)
            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Render egui on top of the pixels framebuffer
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // Keep pixels content
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            // Free textures no longer needed
            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    /// Resizes the window surface; the field framebuffer keeps its fixed
    /// grid size and is scaled to fit.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        self.surface_width = width;
        self.surface_height = height;

        if width > 0 && height > 0 {
            self.pixels
                .resize_surface(width, height)
                .expect("Failed to resize surface");
        }
    }

    fn draw_placeholder(&mut self) {
        let frame = self.pixels.frame_mut();
        for pixel in frame.chunks_exact_mut(4) {
            pixel[0] = 0;
            pixel[1] = 0;
            pixel[2] = 0;
            pixel[3] = 255;
        }
    }

    /// RGB field rows arrive bottom-up; the framebuffer is top-down, so
    /// rows are flipped during the copy.
    fn copy_field_into_frame(&mut self, frame: &FrameData) {
        let grid = frame.pixel_buffer.grid();
        let height = grid.height();
        let stride = grid.width() as usize * 4;
        let dest = self.pixels.frame_mut();

        for surface_row in 0..height {
            let field_row = height - 1 - surface_row;
            let src = frame.pixel_buffer.row(field_row);
            let start = surface_row as usize * stride;
            let dest_row = &mut dest[start..start + stride];

            for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dest_row.chunks_exact_mut(4)) {
                dst_pixel[0] = src_pixel[0];
                dst_pixel[1] = src_pixel[1];
                dst_pixel[2] = src_pixel[2];
                dst_pixel[3] = 255;
            }
        }
    }
}
