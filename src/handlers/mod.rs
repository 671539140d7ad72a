//! HTTP handlers for product CRUD and service diagnostics.

pub mod common;
pub mod product;
pub use common::*;
pub use product::*;
