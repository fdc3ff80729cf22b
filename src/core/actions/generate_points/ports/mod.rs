pub mod point_factory;
