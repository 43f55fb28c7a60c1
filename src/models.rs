pub mod company;
pub use company::{Company, CompanyWithInvoices};
pub mod invoice;
pub use invoice::{Invoice, InvoiceDetail, InvoiceSummary};
