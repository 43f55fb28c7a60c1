// src/db/pg_store.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::{
    common::error::AppError,
    db::Store,
    models::{Company, CompanyWithInvoices, Invoice, InvoiceDetail, InvoiceSummary},
};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Linha da junção fatura ↔ empresa. O `id` da fatura fica de fora de
// propósito: ele é ecoado do contexto da chamada para não se confundir
// com qualquer coluna id-like da empresa.
#[derive(FromRow)]
struct InvoiceCompanyRow {
    amt: Decimal,
    paid: bool,
    add_date: NaiveDate,
    paid_date: Option<NaiveDate>,
    code: String,
    name: String,
    description: Option<String>,
}

// Linha da junção empresa ↔ faturas.
#[derive(FromRow)]
struct CompanyInvoiceRow {
    code: String,
    name: String,
    description: Option<String>,
    id: i32,
    amt: Decimal,
    paid: bool,
    add_date: NaiveDate,
    paid_date: Option<NaiveDate>,
}

#[async_trait]
impl Store for PgStore {
    // =========================================================================
    //  EMPRESAS
    // =========================================================================

    async fn list_companies(&self) -> Result<Vec<Company>, AppError> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(companies)
    }

    async fn get_company(&self, code: &str) -> Result<Option<Company>, AppError> {
        let company = sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    async fn insert_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Company, AppError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (code, name, description)
            VALUES ($1, $2, $3)
            RETURNING code, name, description
            "#,
        )
        .bind(code)
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(company)
    }

    async fn update_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Company>, AppError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies SET name = $1, description = $2
            WHERE code = $3
            RETURNING code, name, description
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    async fn delete_company(&self, code: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // =========================================================================
    //  FATURAS
    // =========================================================================

    async fn list_invoices(&self) -> Result<Vec<Invoice>, AppError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            "SELECT id, comp_code, amt, paid, add_date, paid_date FROM invoices",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    async fn get_invoice(&self, id: i32) -> Result<Option<Invoice>, AppError> {
        let invoice = sqlx::query_as::<_, Invoice>(
            "SELECT id, comp_code, amt, paid, add_date, paid_date FROM invoices WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invoice)
    }

    async fn invoice_detail(&self, id: i32) -> Result<Option<InvoiceDetail>, AppError> {
        let row = sqlx::query_as::<_, InvoiceCompanyRow>(
            r#"
            SELECT i.amt, i.paid, i.add_date, i.paid_date,
                   c.code, c.name, c.description
            FROM invoices i
            JOIN companies c ON c.code = i.comp_code
            WHERE i.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| InvoiceDetail {
            id,
            amt: r.amt,
            paid: r.paid,
            add_date: r.add_date,
            paid_date: r.paid_date,
            company: Company {
                code: r.code,
                name: r.name,
                description: r.description,
            },
        }))
    }

    async fn insert_invoice(&self, comp_code: &str, amt: Decimal) -> Result<Invoice, AppError> {
        // comp_code não é pré-validado: a foreign key do banco rejeita
        // referências órfãs.
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (comp_code, amt)
            VALUES ($1, $2)
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
        )
        .bind(comp_code)
        .bind(amt)
        .fetch_one(&self.pool)
        .await?;

        Ok(invoice)
    }

    async fn update_invoice_amount(
        &self,
        id: i32,
        amt: Decimal,
    ) -> Result<Option<Invoice>, AppError> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            UPDATE invoices SET amt = $1
            WHERE id = $2
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
        )
        .bind(amt)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invoice)
    }

    async fn settle_invoice(
        &self,
        id: i32,
        amt: Decimal,
        paid: bool,
        paid_date: Option<NaiveDate>,
    ) -> Result<Option<Invoice>, AppError> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            UPDATE invoices SET amt = $1, paid = $2, paid_date = $3
            WHERE id = $4
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
        )
        .bind(amt)
        .bind(paid)
        .bind(paid_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invoice)
    }

    async fn delete_invoice(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // =========================================================================
    //  JUNÇÃO EMPRESA ↔ FATURAS
    // =========================================================================

    async fn company_invoices(
        &self,
        code: &str,
    ) -> Result<Option<CompanyWithInvoices>, AppError> {
        // Junção interna: empresa sem faturas produz zero linhas e é
        // indistinguível de empresa inexistente.
        let rows = sqlx::query_as::<_, CompanyInvoiceRow>(
            r#"
            SELECT c.code, c.name, c.description,
                   i.id, i.amt, i.paid, i.add_date, i.paid_date
            FROM companies c
            JOIN invoices i ON i.comp_code = c.code
            WHERE c.code = $1
            ORDER BY i.id
            "#,
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await?;

        let Some(first) = rows.first() else {
            return Ok(None);
        };

        let company = CompanyWithInvoices {
            code: first.code.clone(),
            name: first.name.clone(),
            description: first.description.clone(),
            invoices: rows
                .iter()
                .map(|r| InvoiceSummary {
                    id: r.id,
                    amt: r.amt,
                    paid: r.paid,
                    add_date: r.add_date,
                    paid_date: r.paid_date,
                })
                .collect(),
        };

        Ok(Some(company))
    }
}
