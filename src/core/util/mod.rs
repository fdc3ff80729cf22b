pub mod calculate_worker_count;
pub mod complex_to_pixel;
pub mod hsl_to_colour;
