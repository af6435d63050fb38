#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod navigation;
pub mod session;

pub use error::Error;
pub use navigation::{NavAction, Screen};
pub use session::SessionState;
