// src/tests/memory.rs

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::common::error::AppError;
use crate::db::Store;
use crate::models::{Company, CompanyWithInvoices, Invoice, InvoiceDetail, InvoiceSummary};

// Store em memória para os testes: replica as constraints do esquema
// (código único, foreign key em comp_code, delete em cascata, id serial,
// add_date = hoje) sem precisar de um Postgres vivo.
pub struct MemStore {
    companies: Mutex<Vec<Company>>,
    invoices: Mutex<Vec<Invoice>>,
    next_id: AtomicI32,
}

impl Default for MemStore {
    fn default() -> Self {
        Self {
            companies: Mutex::new(Vec::new()),
            invoices: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl Store for MemStore {
    async fn list_companies(&self) -> Result<Vec<Company>, AppError> {
        Ok(self.companies.lock().unwrap().clone())
    }

    async fn get_company(&self, code: &str) -> Result<Option<Company>, AppError> {
        let companies = self.companies.lock().unwrap();
        Ok(companies.iter().find(|c| c.code == code).cloned())
    }

    async fn insert_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Company, AppError> {
        let mut companies = self.companies.lock().unwrap();
        if companies.iter().any(|c| c.code == code) {
            return Err(AppError::InternalServerError(anyhow!(
                "duplicate key value violates unique constraint \"companies_pkey\""
            )));
        }

        let company = Company {
            code: code.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
        };
        companies.push(company.clone());
        Ok(company)
    }

    async fn update_company(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<Company>, AppError> {
        let mut companies = self.companies.lock().unwrap();
        Ok(companies.iter_mut().find(|c| c.code == code).map(|c| {
            c.name = name.to_string();
            c.description = description.map(str::to_string);
            c.clone()
        }))
    }

    async fn delete_company(&self, code: &str) -> Result<(), AppError> {
        let mut companies = self.companies.lock().unwrap();
        let before = companies.len();
        companies.retain(|c| c.code != code);

        // ON DELETE CASCADE
        if companies.len() < before {
            self.invoices.lock().unwrap().retain(|i| i.comp_code != code);
        }
        Ok(())
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>, AppError> {
        Ok(self.invoices.lock().unwrap().clone())
    }

    async fn get_invoice(&self, id: i32) -> Result<Option<Invoice>, AppError> {
        let invoices = self.invoices.lock().unwrap();
        Ok(invoices.iter().find(|i| i.id == id).cloned())
    }

    async fn invoice_detail(&self, id: i32) -> Result<Option<InvoiceDetail>, AppError> {
        let Some(invoice) = self.get_invoice(id).await? else {
            return Ok(None);
        };
        let company = self
            .get_company(&invoice.comp_code)
            .await?
            .expect("fatura sem empresa dona");

        Ok(Some(InvoiceDetail {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        }))
    }

    async fn insert_invoice(&self, comp_code: &str, amt: Decimal) -> Result<Invoice, AppError> {
        {
            let companies = self.companies.lock().unwrap();
            if !companies.iter().any(|c| c.code == comp_code) {
                return Err(AppError::InternalServerError(anyhow!(
                    "insert or update on table \"invoices\" violates foreign key constraint"
                )));
            }
        }

        let invoice = Invoice {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            comp_code: comp_code.to_string(),
            amt,
            paid: false,
            add_date: Utc::now().date_naive(),
            paid_date: None,
        };
        self.invoices.lock().unwrap().push(invoice.clone());
        Ok(invoice)
    }

    async fn update_invoice_amount(
        &self,
        id: i32,
        amt: Decimal,
    ) -> Result<Option<Invoice>, AppError> {
        let mut invoices = self.invoices.lock().unwrap();
        Ok(invoices.iter_mut().find(|i| i.id == id).map(|i| {
            i.amt = amt;
            i.clone()
        }))
    }

    async fn settle_invoice(
        &self,
        id: i32,
        amt: Decimal,
        paid: bool,
        paid_date: Option<NaiveDate>,
    ) -> Result<Option<Invoice>, AppError> {
        let mut invoices = self.invoices.lock().unwrap();
        Ok(invoices.iter_mut().find(|i| i.id == id).map(|i| {
            i.amt = amt;
            i.paid = paid;
            i.paid_date = paid_date;
            i.clone()
        }))
    }

    async fn delete_invoice(&self, id: i32) -> Result<(), AppError> {
        self.invoices.lock().unwrap().retain(|i| i.id != id);
        Ok(())
    }

    async fn company_invoices(
        &self,
        code: &str,
    ) -> Result<Option<CompanyWithInvoices>, AppError> {
        // Junção interna, como no Postgres: empresa sem faturas produz
        // zero linhas e portanto None.
        let invoices: Vec<InvoiceSummary> = {
            let invoices = self.invoices.lock().unwrap();
            invoices
                .iter()
                .filter(|i| i.comp_code == code)
                .cloned()
                .map(InvoiceSummary::from)
                .collect()
        };

        if invoices.is_empty() {
            return Ok(None);
        }

        let company = self.get_company(code).await?.expect("fatura sem empresa dona");

        Ok(Some(CompanyWithInvoices {
            code: company.code,
            name: company.name,
            description: company.description,
            invoices,
        }))
    }
}
