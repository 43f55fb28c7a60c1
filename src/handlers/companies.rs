// src/handlers/companies.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::{error::AppError, slug::slugify},
    config::AppState,
    models::Company,
};

// ---
// Payloads
// ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCompanyPayload {
    #[validate(length(min = 1, message = "O nome da empresa é obrigatório."))]
    #[schema(example = "Nvidia")]
    pub name: String,

    #[schema(example = "Developers of GeForce graphics cards")]
    pub description: Option<String>,

    // Quando ausente, o código é derivado do nome via slug.
    #[schema(example = "nvidia")]
    pub code: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCompanyPayload {
    #[validate(length(min = 1, message = "O nome da empresa é obrigatório."))]
    pub name: String,
    pub description: Option<String>,
}

// ---
// Handlers
// ---

// GET /companies
#[utoipa::path(
    get,
    path = "/companies",
    tag = "Companies",
    responses(
        (status = 200, description = "Lista de empresas", body = Vec<Company>)
    )
)]
pub async fn list_companies(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let companies = app_state.store.list_companies().await?;

    Ok((StatusCode::OK, Json(json!({ "companies": companies }))))
}

// GET /companies/{code}
#[utoipa::path(
    get,
    path = "/companies/{code}",
    tag = "Companies",
    params(
        ("code" = String, Path, description = "Código da empresa")
    ),
    responses(
        (status = 200, description = "Empresa encontrada", body = Company),
        (status = 404, description = "Empresa não encontrada")
    )
)]
pub async fn get_company(
    State(app_state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let company = app_state.store.get_company(&code).await?.ok_or_else(|| {
        AppError::NotFound(format!(
            "Not found: unable to find the requested company {{{code}}}"
        ))
    })?;

    Ok((StatusCode::OK, Json(json!({ "company": company }))))
}

// POST /companies
#[utoipa::path(
    post,
    path = "/companies",
    tag = "Companies",
    request_body = CreateCompanyPayload,
    responses(
        (status = 201, description = "Empresa criada", body = Company),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_company(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCompanyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // Sem pré-checagem de código duplicado: a constraint UNIQUE do banco
    // rejeita colisões e o erro sobe como 500 opaco.
    let code = match payload.code {
        Some(code) => code,
        None => slugify(&payload.name),
    };

    let company = app_state
        .store
        .insert_company(&code, &payload.name, payload.description.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}

// PUT /companies/{code}
#[utoipa::path(
    put,
    path = "/companies/{code}",
    tag = "Companies",
    params(
        ("code" = String, Path, description = "Código da empresa")
    ),
    request_body = UpdateCompanyPayload,
    responses(
        (status = 200, description = "Empresa atualizada", body = Company),
        (status = 404, description = "Empresa não encontrada")
    )
)]
pub async fn update_company(
    State(app_state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<UpdateCompanyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // O código é imutável depois da criação: só nome e descrição mudam.
    let company = app_state
        .store
        .update_company(&code, &payload.name, payload.description.as_deref())
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Not found: unable to update company with code of {{{code}}}"
            ))
        })?;

    Ok((StatusCode::OK, Json(json!({ "company": company }))))
}

// DELETE /companies/{code}
#[utoipa::path(
    delete,
    path = "/companies/{code}",
    tag = "Companies",
    params(
        ("code" = String, Path, description = "Código da empresa")
    ),
    responses(
        (status = 200, description = "Empresa removida"),
        (status = 404, description = "Empresa não encontrada")
    )
)]
pub async fn delete_company(
    State(app_state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    // Checagem de existência e delete são duas chamadas independentes;
    // um delete concorrente entre as duas vira um no-op de zero linhas.
    app_state.store.get_company(&code).await?.ok_or_else(|| {
        AppError::NotFound(format!(
            "Not found: unable to delete company with code of {{{code}}}"
        ))
    })?;

    app_state.store.delete_company(&code).await?;

    Ok((StatusCode::OK, Json(json!({ "stats": "deleted" }))))
}
