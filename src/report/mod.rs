//! Request/response contracts of the remote report service and the client
//! that carries them.
//!
//! Two payload shapes coexist by design: the full category snapshot sent to
//! `/calculate` and the narrower single-expense income form sent to
//! `/financial-report`. The service decides how they merge; this crate
//! implements both contracts as-is.

pub mod client;
pub mod payload;

pub use client::{
    CancelToken, RawResponse, ReportClient, ReportTransport, RequestOptions, CALCULATE_PATH,
    DEFAULT_TIMEOUT, FINANCIAL_REPORT_PATH,
};
pub use payload::{
    build_financial_request, interpret_budget_report, interpret_financial_report, BudgetReport,
    BudgetSnapshot, CategoryReportLine, ExpenseLine, FinancialReport, FinancialRequest,
};
