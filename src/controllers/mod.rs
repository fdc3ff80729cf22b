pub mod compute;
pub mod map_point;
pub mod normalize_count;
pub mod plot;
pub mod ports;
pub mod responses;
