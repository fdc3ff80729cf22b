pub mod actions;
pub mod data;
pub mod mapping;
pub mod sampling;
pub mod util;
