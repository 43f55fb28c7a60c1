// src/db.rs

pub mod pg_store;
pub use pg_store::PgStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    models::{Company, CompanyWithInvoices, Invoice, InvoiceDetail},
};

// ---
// A interface de acesso a dados.
// ---
// Os handlers só conhecem este trait; a implementação concreta (Postgres)
// é construída no arranque e injetada via AppState. Leituras que podem não
// encontrar nada devolvem Option — é o handler que decide a mensagem do 404.
#[async_trait]
pub trait Store: Send + Sync {
    // --- Empresas ---
    async fn list_companies(&self) -> Result<Vec<Company>, AppError>;
    async fn get_company(&self, code: &str) -> Result<Option<Company>, AppError>;
    async fn insert_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Company, AppError>;
    async fn update_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Company>, AppError>;
    async fn delete_company(&self, code: &str) -> Result<(), AppError>;

    // --- Faturas ---
    async fn list_invoices(&self) -> Result<Vec<Invoice>, AppError>;
    async fn get_invoice(&self, id: i32) -> Result<Option<Invoice>, AppError>;
    async fn invoice_detail(&self, id: i32) -> Result<Option<InvoiceDetail>, AppError>;
    async fn insert_invoice(&self, comp_code: &str, amt: Decimal) -> Result<Invoice, AppError>;
    async fn update_invoice_amount(
        &self,
        id: i32,
        amt: Decimal,
    ) -> Result<Option<Invoice>, AppError>;
    async fn settle_invoice(
        &self,
        id: i32,
        amt: Decimal,
        paid: bool,
        paid_date: Option<NaiveDate>,
    ) -> Result<Option<Invoice>, AppError>;
    async fn delete_invoice(&self, id: i32) -> Result<(), AppError>;

    // --- Junção empresa ↔ faturas ---
    async fn company_invoices(&self, code: &str)
        -> Result<Option<CompanyWithInvoices>, AppError>;
}
