pub mod area;
pub mod ids;

pub use area::*;
pub use ids::*;
