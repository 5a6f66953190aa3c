pub mod availability;
pub mod badge;
pub mod referee;
pub mod registration;

pub use availability::*;
pub use badge::*;
pub use referee::*;
pub use registration::*;
