pub mod spawn;
pub mod surface;
