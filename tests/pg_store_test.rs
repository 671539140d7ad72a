//! `PgProductStore` against a real Postgres. Needs `DATABASE_URL`; run with
//! `cargo test --test pg_store_test -- --ignored`. Each test gets a fresh database.

use products_api::{ensure_products_table, NewProduct, PgProductStore, ProductStore, ProductUpdate};
use sqlx::PgPool;

async fn seeded_store(pool: PgPool) -> PgProductStore {
    ensure_products_table(&pool).await.unwrap();
    PgProductStore::new(pool)
}

fn new_product(name: &str, price: f64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price,
    }
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn test_toggle_availability_negates_in_place(pool: PgPool) {
    let store = seeded_store(pool).await;
    let created = store.create(&new_product("Monitor", 300.0)).await.unwrap();
    assert!(created.availability);

    let toggled = store.toggle_availability(created.id).await.unwrap().unwrap();
    assert!(!toggled.availability);
    assert_eq!(toggled.id, created.id);
    assert_eq!(toggled.name, "Monitor");
    assert_eq!(toggled.price, 300.0);

    let back = store.toggle_availability(created.id).await.unwrap().unwrap();
    assert!(back.availability);
    assert_eq!(store.get(created.id).await.unwrap(), Some(back));
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn test_delete_reports_affected_rows(pool: PgPool) {
    let store = seeded_store(pool).await;
    let created = store.create(&new_product("Teclado", 45.5)).await.unwrap();

    assert!(store.delete(created.id).await.unwrap());
    assert!(!store.delete(created.id).await.unwrap());
    assert_eq!(store.get(created.id).await.unwrap(), None);
    assert!(store.list().await.unwrap().is_empty());
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn test_writes_to_missing_id_return_none(pool: PgPool) {
    let store = seeded_store(pool).await;
    let update = ProductUpdate {
        name: "Mouse".to_string(),
        price: 12.0,
        availability: false,
    };

    assert_eq!(store.update(9999, &update).await.unwrap(), None);
    assert_eq!(store.toggle_availability(9999).await.unwrap(), None);
    assert!(!store.delete(9999).await.unwrap());
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn test_check_constraints_reject_bad_rows(pool: PgPool) {
    let store = seeded_store(pool).await;

    assert!(store.create(&new_product("   ", 10.0)).await.is_err());
    assert!(store.create(&new_product("Monitor", 0.0)).await.is_err());
    assert!(store.list().await.unwrap().is_empty());
}
