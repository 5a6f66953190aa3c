pub mod action;
pub mod error;
pub mod session;
pub mod state;

pub use action::*;
pub use error::*;
pub use session::*;
pub use state::*;
