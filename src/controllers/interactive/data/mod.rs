pub mod field_config;
pub mod frame_data;
