// src/models/invoice.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::company::Company;

// A linha da tabela `invoices`.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Invoice {
    pub id: i32,

    #[schema(example = "nvidia")]
    pub comp_code: String,

    #[schema(example = "500.00")]
    pub amt: Decimal,

    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

// Visão detalhada (GET /invoices/{id}): a fatura com a empresa dona
// aninhada, sem o `comp_code` repetido.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Company,
}

// Resumo usado na visão "empresa com faturas".
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvoiceSummary {
    pub id: i32,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

impl From<Invoice> for InvoiceSummary {
    fn from(inv: Invoice) -> Self {
        Self {
            id: inv.id,
            amt: inv.amt,
            paid: inv.paid,
            add_date: inv.add_date,
            paid_date: inv.paid_date,
        }
    }
}
