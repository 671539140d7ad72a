#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use products_api::{app, AppError, AppState, NewProduct, Product, ProductStore, ProductUpdate, Settings};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// In-process store with the same contract as the PostgreSQL one.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    last_id: i64,
    rows: BTreeMap<i64, Product>,
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, AppError> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, AppError> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        let row = Product {
            id: inner.last_id,
            name: product.name.clone(),
            price: product.price,
            availability: true,
        };
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, update: &ProductUpdate) -> Result<Option<Product>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.rows.get_mut(&id).map(|row| {
            row.name = update.name.clone();
            row.price = update.price;
            row.availability = update.availability;
            row.clone()
        }))
    }

    async fn toggle_availability(&self, id: i64) -> Result<Option<Product>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.rows.get_mut(&id).map(|row| {
            row.availability = !row.availability;
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.lock().unwrap().rows.remove(&id).is_some())
    }
}

/// Store whose every call fails the way an unreachable database does.
pub struct UnreachableStore;

#[async_trait]
impl ProductStore for UnreachableStore {
    async fn ping(&self) -> Result<(), AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn list(&self) -> Result<Vec<Product>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn get(&self, _id: i64) -> Result<Option<Product>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn create(&self, _product: &NewProduct) -> Result<Product, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update(&self, _id: i64, _update: &ProductUpdate) -> Result<Option<Product>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn toggle_availability(&self, _id: i64) -> Result<Option<Product>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _id: i64) -> Result<bool, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

pub fn setup_test_app() -> Router {
    setup_app_with(Arc::new(MemoryStore::default()))
}

pub fn setup_app_with(store: Arc<dyn ProductStore>) -> Router {
    app(AppState { products: store }, &Settings::default())
}

pub fn json_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send one request and decode the JSON response.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Create a product through the API and return its JSON representation.
pub async fn create_product(app: &Router, name: &str, price: f64) -> Value {
    let (status, body) = send(
        app,
        json_request("POST", "/api/products", Some(serde_json::json!({"name": name, "price": price}))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"].clone()
}

pub fn error_messages(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["msg"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

pub fn error_params(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["param"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
