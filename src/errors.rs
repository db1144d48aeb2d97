use std::time::Duration;

use thiserror::Error;

/// Failure to read a monetary value out of a raw text field.
///
/// Recoverable per field: strict callers surface it, permissive callers
/// substitute zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("Please enter an amount")]
    EmptyInput,
    #[error("Not a valid number")]
    NotANumber,
}

/// Blocking validation failures surfaced to the user as alerts.
///
/// An operation that returns one of these has committed no mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a category name")]
    EmptyName,
    #[error("Please enter a budget title")]
    EmptyTitle,
    #[error("Start and end dates required")]
    MissingDates,
    #[error("Start and end dates must be unique")]
    IdenticalDates,
    #[error("Date range must be at least 7 days")]
    RangeTooShort,
    #[error("Provide a wage or a monthly salary")]
    MissingIncome,
    #[error("Enter either a wage or a salary, not both")]
    AmbiguousIncome,
    #[error("Expense must be a positive amount")]
    InvalidExpense,
    #[error("Please describe the expense")]
    MissingDescription,
}

/// Failures from whatever carries a report request over the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("request cancelled")]
    Cancelled,
    #[error("network error: {0}")]
    Io(String),
}

/// Failures surfaced by the report client. Local ledgers are never touched;
/// the caller may retry.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A request was already outstanding; this one was dropped, not queued.
    #[error("a report request is already in flight")]
    InFlight,
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Non-2xx response; the body is surfaced verbatim.
    #[error("server error {status}: {body}")]
    Status { status: u16, body: String },
    /// The outbound request body failed to encode; nothing was sent.
    #[error("failed to encode report request: {0}")]
    Encode(serde_json::Error),
    #[error("malformed report response: {0}")]
    Malformed(#[from] serde_json::Error),
}
