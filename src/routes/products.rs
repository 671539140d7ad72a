//! Product CRUD routes. Each method carries its own rule table, evaluated in declaration order.

use crate::handlers::product::{
    create_product, delete_product, get_product_by_id, get_products, update_availability,
    update_product,
};
use crate::state::AppState;
use crate::validation::{validated, Check, Rule};
use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

const ID_MSG: &str = "ID no válido";
const NAME_MSG: &str = "El nombre del producto no puede ir vacio";
const PRICE_VALUE_MSG: &str = "Valor no válido";
const PRICE_EMPTY_MSG: &str = "El precio del producto no puede ir vacio";
const PRICE_MSG: &str = "Precio no válido";
const AVAILABILITY_MSG: &str = "Valor para disponibilidad no válido";

pub const ID_RULES: &[Rule] = &[Rule::param("id", Check::Int, ID_MSG)];

pub const CREATE_RULES: &[Rule] = &[
    Rule::body("name", Check::NotEmpty, NAME_MSG),
    Rule::body("price", Check::Numeric, PRICE_VALUE_MSG),
    Rule::body("price", Check::NotEmpty, PRICE_EMPTY_MSG),
    Rule::body("price", Check::Positive, PRICE_MSG),
];

pub const UPDATE_RULES: &[Rule] = &[
    Rule::param("id", Check::Int, ID_MSG),
    Rule::body("name", Check::NotEmpty, NAME_MSG),
    Rule::body("price", Check::Numeric, PRICE_VALUE_MSG),
    Rule::body("price", Check::NotEmpty, PRICE_EMPTY_MSG),
    Rule::body("price", Check::Positive, PRICE_MSG),
    Rule::body("availability", Check::Boolean, AVAILABILITY_MSG),
];

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(get_products).merge(validated(post(create_product), CREATE_RULES)),
        )
        .route(
            "/:id",
            validated(get(get_product_by_id), ID_RULES)
                .merge(validated(put(update_product), UPDATE_RULES))
                .merge(validated(patch(update_availability), ID_RULES))
                .merge(validated(delete(delete_product), ID_RULES)),
        )
        .with_state(state)
}
