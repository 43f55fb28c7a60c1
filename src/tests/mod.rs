// src/tests/mod.rs

mod memory;

use std::sync::Arc;

use axum_test::TestServer;
use rust_decimal::Decimal;

use crate::config::AppState;
use crate::db::Store;
use crate::handlers::app;
use crate::models::{Company, Invoice};
use memory::MemStore;

/// Sobe o router completo sobre um MemStore e devolve também o store,
/// para os testes poderem semear dados diretamente.
fn test_server() -> (TestServer, Arc<MemStore>) {
    let store = Arc::new(MemStore::default());
    let state = AppState {
        store: Arc::clone(&store) as Arc<dyn Store>,
    };
    let server = TestServer::new(app().with_state(state));
    (server, store)
}

/// Mesmo seed do conjunto de testes original: a empresa "google" com uma
/// fatura de 500.
async fn seed(store: &MemStore) -> (Company, Invoice) {
    let company = store
        .insert_company("google", "Google", Some("Developers of Chrome"))
        .await
        .unwrap();
    let invoice = store
        .insert_invoice("google", Decimal::from(500))
        .await
        .unwrap();
    (company, invoice)
}

#[tokio::test]
async fn health() {
    let (server, _) = test_server();

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), axum::http::StatusCode::OK);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (server, _) = test_server();

    let response = server.get("/api-docs/openapi.json").await;
    assert_eq!(response.status_code(), axum::http::StatusCode::OK);

    let doc = response.json::<serde_json::Value>();
    assert!(doc["paths"]["/companies/{code}"].is_object());
    assert!(doc["paths"]["/invoices/{id}"].is_object());
}
