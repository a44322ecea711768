use crate::controllers::interactive::events::render::RenderEvent;

/// Receives render completions from the interactive controller's worker
/// thread.
pub trait RenderPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
