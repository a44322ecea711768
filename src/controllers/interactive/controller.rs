use crate::controllers::interactive::data::field_config::FieldConfig;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render::{RenderError, RenderEvent};
use crate::controllers::interactive::ports::presenter::RenderPresenterPort;
use crate::core::actions::evaluate_field_rayon::evaluate_field_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<FieldConfig>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn RenderPresenterPort>,
}

/// Owns the render worker thread.
///
/// Submissions go through a latest-wins mailbox: a request that arrives
/// while an older one is still queued replaces it, and a render that
/// finishes after a newer submission is discarded unseen. Each render runs
/// the evaluator to completion; there is no mid-render cancellation, the
/// coalescing happens strictly between evaluations.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn RenderPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    pub fn submit_request(&self, request: Arc<FieldConfig>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_request.lock().unwrap();
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            let start = Instant::now();
            let result = Self::render_request(&request);
            let render_duration = start.elapsed();

            let current_generation = shared.generation.load(Ordering::Acquire);
            if job_generation != current_generation {
                // A newer request superseded this one while it rendered.
                continue;
            }

            match result {
                Ok(frame) => {
                    shared.presenter_port.present(RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        window: request.evaluator().window(),
                        pixel_buffer: frame,
                        render_duration,
                    }));
                }
                Err(message) => {
                    shared
                        .presenter_port
                        .present(RenderEvent::Error(RenderError {
                            generation: job_generation,
                            message,
                        }));
                }
            }

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }

    fn render_request(request: &FieldConfig) -> Result<PixelBuffer, String> {
        let field = evaluate_field_rayon(request.evaluator());

        generate_pixel_buffer(&field, request.colour_map()).map_err(|err| err.to_string())
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
