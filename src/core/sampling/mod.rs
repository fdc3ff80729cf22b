pub mod decorator;
pub mod point_factory;
pub mod sampling_domain;
