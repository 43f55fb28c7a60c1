// src/handlers/invoices.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{CompanyWithInvoices, Invoice, InvoiceDetail},
};

// ---
// Payloads
// ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInvoicePayload {
    #[validate(length(min = 1, message = "O código da empresa é obrigatório."))]
    #[schema(example = "nvidia")]
    pub comp_code: String,

    #[schema(example = "500.00")]
    pub amt: Decimal,
}

// `paid` só participa do update quando vem tipado como booleano no corpo;
// qualquer outra coisa é rejeitada pelo serde. Ausente, só o valor muda.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateInvoicePayload {
    #[schema(example = "1000.00")]
    pub amt: Decimal,
    pub paid: Option<bool>,
}

// ---
// Handlers
// ---

// GET /invoices
#[utoipa::path(
    get,
    path = "/invoices",
    tag = "Invoices",
    responses(
        (status = 200, description = "Lista de faturas", body = Vec<Invoice>)
    )
)]
pub async fn list_invoices(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let invoices = app_state.store.list_invoices().await?;

    Ok((StatusCode::OK, Json(json!({ "invoices": invoices }))))
}

// GET /invoices/{id}
#[utoipa::path(
    get,
    path = "/invoices/{id}",
    tag = "Invoices",
    params(
        ("id" = i32, Path, description = "ID da fatura")
    ),
    responses(
        (status = 200, description = "Fatura com a empresa dona", body = InvoiceDetail),
        (status = 404, description = "Fatura não encontrada")
    )
)]
pub async fn get_invoice(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = app_state.store.invoice_detail(id).await?.ok_or_else(|| {
        AppError::NotFound(format!(
            "Not found: unable to find the requested invoice {{{id}}}"
        ))
    })?;

    Ok((StatusCode::OK, Json(json!({ "invoice": invoice }))))
}

// POST /invoices
#[utoipa::path(
    post,
    path = "/invoices",
    tag = "Invoices",
    request_body = CreateInvoicePayload,
    responses(
        (status = 201, description = "Fatura criada", body = Invoice),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_invoice(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateInvoicePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let invoice = app_state
        .store
        .insert_invoice(&payload.comp_code, payload.amt)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "invoice": invoice }))))
}

// PUT /invoices/{id}
#[utoipa::path(
    put,
    path = "/invoices/{id}",
    tag = "Invoices",
    params(
        ("id" = i32, Path, description = "ID da fatura")
    ),
    request_body = UpdateInvoicePayload,
    responses(
        (status = 200, description = "Fatura atualizada", body = Invoice),
        (status = 404, description = "Fatura não encontrada")
    )
)]
pub async fn update_invoice(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInvoicePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // Tabela de decisão do `paid`:
    //   Some(true)  -> amt, paid=true,  paid_date = hoje
    //   Some(false) -> amt, paid=false, paid_date = NULL
    //   None        -> só amt; paid/paid_date ficam como estão
    let invoice = match payload.paid {
        Some(paid) => {
            let paid_date = paid.then(|| Utc::now().date_naive());
            app_state
                .store
                .settle_invoice(id, payload.amt, paid, paid_date)
                .await?
        }
        None => app_state.store.update_invoice_amount(id, payload.amt).await?,
    };

    let invoice = invoice.ok_or_else(|| {
        AppError::NotFound(format!(
            "Not found: unable to update invoice with id of {{{id}}}"
        ))
    })?;

    Ok((StatusCode::OK, Json(json!({ "invoice": invoice }))))
}

// DELETE /invoices/{id}
#[utoipa::path(
    delete,
    path = "/invoices/{id}",
    tag = "Invoices",
    params(
        ("id" = i32, Path, description = "ID da fatura")
    ),
    responses(
        (status = 200, description = "Fatura removida"),
        (status = 404, description = "Fatura não encontrada")
    )
)]
pub async fn delete_invoice(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.store.get_invoice(id).await?.ok_or_else(|| {
        AppError::NotFound(format!(
            "Not found: unable to delete invoice with id of {{{id}}}"
        ))
    })?;

    app_state.store.delete_invoice(id).await?;

    Ok((StatusCode::OK, Json(json!({ "stats": "deleted" }))))
}

// GET /invoices/companies/{code}
#[utoipa::path(
    get,
    path = "/invoices/companies/{code}",
    tag = "Invoices",
    params(
        ("code" = String, Path, description = "Código da empresa")
    ),
    responses(
        (status = 200, description = "Empresa com as suas faturas", body = CompanyWithInvoices),
        (status = 404, description = "Empresa não encontrada ou sem faturas")
    )
)]
pub async fn company_invoices(
    State(app_state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let company = app_state
        .store
        .company_invoices(&code)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Not found: unable to find the requested company {{{code}}}"
            ))
        })?;

    Ok((StatusCode::OK, Json(json!({ "company": company }))))
}
