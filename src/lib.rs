//! Products API: CRUD REST backend for a single product resource.

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod validation;

pub use app::app;
pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use model::{NewProduct, Product, ProductUpdate};
pub use openapi::ApiDoc;
pub use response::{success_many, success_one, success_one_ok};
pub use routes::{common_routes, product_routes};
pub use state::AppState;
pub use store::{ensure_products_table, PgProductStore, ProductStore};
pub use validation::{FieldError, ValidationErrors};
