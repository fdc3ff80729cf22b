pub mod generate_points;
pub mod plot_points;
