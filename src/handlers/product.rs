//! Product CRUD handlers. Inputs have already passed the route's validation rules.

use crate::error::{AppError, ErrorBody, ValidationBody, NOT_FOUND_MSG};
use crate::model::{NewProduct, Product, ProductUpdate};
use crate::response::{success_many, success_one, success_one_ok};
use crate::state::AppState;
use crate::validation::ValidatedJson;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub const DELETED_MSG: &str = "Producto eliminado";

fn not_found() -> AppError {
    AppError::NotFound(NOT_FOUND_MSG.into())
}

/// Get a list of products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "Successful response", body = [Product])
    )
)]
pub async fn get_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state.products.list().await?;
    Ok(success_many(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The ID of the product to retrieve")),
    responses(
        (status = 200, description = "Successful response", body = Product),
        (status = 400, description = "Bad request - invalid ID", body = ValidationBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let product = state.products.get(id).await?.ok_or_else(not_found)?;
    Ok(success_one_ok(product))
}

/// Creates a new product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Bad request - invalid input data", body = ValidationBody)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<NewProduct>,
) -> Result<impl IntoResponse, AppError> {
    let product = state.products.create(&body).await?;
    tracing::info!(id = product.id, "product created");
    Ok(success_one(product))
}

/// Updates a product with user input
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The ID of the product to update")),
    request_body = ProductUpdate,
    responses(
        (status = 200, description = "Successful response", body = Product),
        (status = 400, description = "Bad request - invalid ID or input data", body = ValidationBody),
        (status = 404, description = "Product not found", body = ErrorBody)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<ProductUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let product = state.products.update(id, &body).await?.ok_or_else(not_found)?;
    Ok(success_one_ok(product))
}

/// Toggles product availability
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The ID of the product to update")),
    responses(
        (status = 200, description = "Successful response", body = Product),
        (status = 400, description = "Bad request - invalid ID", body = ValidationBody),
        (status = 404, description = "Product not found", body = ErrorBody)
    )
)]
pub async fn update_availability(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let product = state.products.toggle_availability(id).await?.ok_or_else(not_found)?;
    Ok(success_one_ok(product))
}

/// Deletes a product by a given ID
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The ID of the product to delete")),
    responses(
        (status = 200, description = "Successful response", body = String),
        (status = 400, description = "Bad request - invalid ID", body = ValidationBody),
        (status = 404, description = "Product not found", body = ErrorBody)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !state.products.delete(id).await? {
        return Err(not_found());
    }
    tracing::info!(id, "product deleted");
    Ok(success_one_ok(DELETED_MSG))
}
