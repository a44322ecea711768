pub mod evaluate_field_rayon;
pub mod generate_pixel_buffer;
