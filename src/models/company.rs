// src/models/company.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::invoice::InvoiceSummary;

// A linha da tabela `companies`, tal como sai do banco.
// Os nomes dos campos são também o formato de resposta da API (snake_case).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Company {
    #[schema(example = "nvidia")]
    pub code: String,

    #[schema(example = "Nvidia")]
    pub name: String,

    #[schema(example = "Developers of GeForce graphics cards")]
    pub description: Option<String>,
}

// Visão "empresa com as suas faturas" (GET /invoices/companies/{code}).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CompanyWithInvoices {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<InvoiceSummary>,
}
