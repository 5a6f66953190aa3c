pub mod age_group;
pub mod fixture;
pub mod recommendation;
pub mod stats;

pub use age_group::*;
pub use fixture::*;
pub use recommendation::*;
pub use stats::*;
