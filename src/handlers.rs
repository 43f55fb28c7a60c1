// src/handlers.rs

pub mod companies;
pub mod invoices;

use axum::{
    routing::get,
    Json, Router,
};
use utoipa::OpenApi;

use crate::{config::AppState, docs::ApiDoc};

/// Monta o router completo da aplicação. Fica fora do `main` para os
/// testes poderem servir o mesmo router com outro Store.
pub fn app() -> Router<AppState> {
    let company_routes = Router::new()
        .route(
            "/",
            get(companies::list_companies).post(companies::create_company),
        )
        .route(
            "/{code}",
            get(companies::get_company)
                .put(companies::update_company)
                .delete(companies::delete_company),
        );

    let invoice_routes = Router::new()
        .route(
            "/",
            get(invoices::list_invoices).post(invoices::create_invoice),
        )
        .route(
            "/{id}",
            get(invoices::get_invoice)
                .put(invoices::update_invoice)
                .delete(invoices::delete_invoice),
        )
        // Visão "empresa com as suas faturas", montada sob /invoices como
        // no contrato original da API.
        .route("/companies/{code}", get(invoices::company_invoices));

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest("/companies", company_routes)
        .nest("/invoices", invoice_routes)
}
