use crate::controllers::interactive::data::frame_data::FrameData;

#[derive(Debug)]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}

#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderError),
}
