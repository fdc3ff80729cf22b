pub mod conformal_map;
pub mod errors;
