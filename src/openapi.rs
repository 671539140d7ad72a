//! OpenAPI document generated from the handler annotations.

use crate::error::{ErrorBody, ValidationBody};
use crate::handlers::product;
use crate::model::{NewProduct, Product, ProductUpdate};
use crate::validation::{FieldError, Location};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "REST API Rust / Axum",
        version = "1.0",
        description = "API Docs for Products"
    ),
    paths(
        product::get_products,
        product::get_product_by_id,
        product::create_product,
        product::update_product,
        product::update_availability,
        product::delete_product,
    ),
    components(schemas(Product, NewProduct, ProductUpdate, FieldError, Location, ValidationBody, ErrorBody)),
    tags(
        (name = "Products", description = "API operations related to products")
    )
)]
pub struct ApiDoc;

/// `GET /docs/openapi.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
