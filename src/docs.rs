// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Companies ---
        handlers::companies::list_companies,
        handlers::companies::get_company,
        handlers::companies::create_company,
        handlers::companies::update_company,
        handlers::companies::delete_company,

        // --- Invoices ---
        handlers::invoices::list_invoices,
        handlers::invoices::get_invoice,
        handlers::invoices::create_invoice,
        handlers::invoices::update_invoice,
        handlers::invoices::delete_invoice,
        handlers::invoices::company_invoices,
    ),
    components(
        schemas(
            models::company::Company,
            models::company::CompanyWithInvoices,
            models::invoice::Invoice,
            models::invoice::InvoiceDetail,
            models::invoice::InvoiceSummary,

            // --- PAYLOADS ---
            handlers::companies::CreateCompanyPayload,
            handlers::companies::UpdateCompanyPayload,
            handlers::invoices::CreateInvoicePayload,
            handlers::invoices::UpdateInvoicePayload,
        )
    ),
    tags(
        (name = "Companies", description = "CRUD de empresas"),
        (name = "Invoices", description = "CRUD de faturas e junções com empresas")
    )
)]
pub struct ApiDoc;
