//! The product table as a store actor: entity binding and error type.

pub mod entity;
pub mod error;

pub use error::*;
