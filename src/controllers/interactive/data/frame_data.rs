use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::sample_window::SampleWindow;
use std::time::Duration;

/// A completed render: the colour-mapped field plus the window it was
/// sampled from, for axis labelling.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub window: SampleWindow,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
