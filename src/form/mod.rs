//! Product editor: input validation, write-mode selection and session state.

pub mod controller;
pub mod error;
pub mod fields;
pub mod outcome;
pub mod session;

pub use controller::*;
pub use error::*;
pub use fields::*;
pub use outcome::*;
pub use session::*;
