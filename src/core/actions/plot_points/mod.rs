pub mod plane;
pub mod plot_points;
