pub mod engine_config;
pub mod generate_points_parallel;
pub mod generate_points_sequential;
pub mod ports;
pub(crate) mod shared_quota;
