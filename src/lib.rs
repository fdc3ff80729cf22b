mod controllers;
mod core;
mod logging;
mod presenters;

pub use crate::controllers::compute::{compute, run_engine};
pub use crate::controllers::map_point::{MapPointError, map_point};
pub use crate::controllers::normalize_count::normalize_count;
pub use crate::controllers::plot::PlotController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::responses::{ComputeResponse, MapPointResponse};
pub use crate::core::actions::generate_points::engine_config::EngineConfig;
pub use crate::core::actions::generate_points::generate_points_parallel::{
    GeneratePointsError, generate_points_parallel,
};
pub use crate::core::actions::generate_points::generate_points_sequential::generate_points_sequential;
pub use crate::core::actions::generate_points::ports::point_factory::PointFactory;
pub use crate::core::actions::plot_points::plane::Plane;
pub use crate::core::actions::plot_points::plot_points::{PlotPointsError, plot_points};
pub use crate::core::data::batch::{Batch, GenerationMode};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel::Pixel;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::mapping::conformal_map::map_z_to_w;
pub use crate::core::mapping::errors::MappingError;
pub use crate::core::sampling::decorator::Decorator;
pub use crate::core::sampling::point_factory::{ConformalPointFactory, Rejection};
pub use crate::core::sampling::sampling_domain::{ExclusionBand, SamplingDomain};
pub use crate::logging::{InitError, init_tracing};
pub use crate::presenters::file::ppm::PpmFilePresenter;
