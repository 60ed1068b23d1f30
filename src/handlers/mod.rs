//! HTTP handlers for bookmark CRUD.

pub mod bookmark;
pub use bookmark::*;
