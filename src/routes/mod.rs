//! Route tables: product CRUD under `/api/products`, diagnostics at the root.

pub mod common;
pub mod products;

pub use common::common_routes;
pub use products::product_routes;
