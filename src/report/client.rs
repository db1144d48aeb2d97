use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::errors::{ReportError, TransportError};

use super::payload::{
    interpret_budget_report, interpret_financial_report, BudgetReport, BudgetSnapshot,
    FinancialReport, FinancialRequest,
};

/// Path of the budget aggregation endpoint.
pub const CALCULATE_PATH: &str = "/calculate";

/// Path of the income/expense report endpoint.
pub const FINANCIAL_REPORT_PATH: &str = "/financial-report";

/// Deadline applied to every outbound report request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shareable flag that aborts a pending report request.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Options handed to the transport with every dispatch.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Hard deadline the transport must honor.
    pub timeout: Duration,
    /// Cooperative cancellation; transports should poll it while waiting.
    pub cancel: CancelToken,
}

/// Raw response handed back by a transport.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over whatever actually carries report requests to the
/// service. Implementations must honor `options.timeout` and should poll
/// `options.cancel` while waiting.
pub trait ReportTransport {
    fn post(
        &mut self,
        path: &str,
        body: &str,
        options: &RequestOptions,
    ) -> Result<RawResponse, TransportError>;
}

/// Client for the remote report service.
///
/// At most one request is in flight at a time; an attempt made while one is
/// outstanding is dropped, never queued. Failures of any kind leave the
/// local ledgers untouched and the caller free to retry.
pub struct ReportClient<T: ReportTransport> {
    transport: T,
    timeout: Duration,
    cancel: CancelToken,
    in_flight: bool,
}

impl<T: ReportTransport> ReportClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            timeout: DEFAULT_TIMEOUT,
            cancel: CancelToken::new(),
            in_flight: false,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Token shared with callers that need to abort the pending request.
    /// A fresh token is issued once a cancelled request settles.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Sends the budget snapshot to [`CALCULATE_PATH`].
    pub fn calculate(&mut self, snapshot: &BudgetSnapshot) -> Result<BudgetReport, ReportError> {
        let body = serde_json::to_string(snapshot).map_err(ReportError::Encode)?;
        let body = self.dispatch(CALCULATE_PATH, body)?;
        interpret_budget_report(&body)
    }

    /// Sends the income/expense request to [`FINANCIAL_REPORT_PATH`].
    pub fn financial_report(
        &mut self,
        request: &FinancialRequest,
    ) -> Result<FinancialReport, ReportError> {
        let body = serde_json::to_string(request).map_err(ReportError::Encode)?;
        let body = self.dispatch(FINANCIAL_REPORT_PATH, body)?;
        interpret_financial_report(&body)
    }

    fn dispatch(&mut self, path: &str, body: String) -> Result<String, ReportError> {
        if self.in_flight {
            tracing::debug!(path, "report request dropped: one already in flight");
            return Err(ReportError::InFlight);
        }
        // A token cancelled before dispatch aborts here; the transport is
        // never invoked and a fresh token is issued.
        if self.cancel.is_cancelled() {
            self.cancel = CancelToken::new();
            return Err(TransportError::Cancelled.into());
        }
        let options = RequestOptions {
            timeout: self.timeout,
            cancel: self.cancel.clone(),
        };
        self.in_flight = true;
        let result = self.transport.post(path, &body, &options);
        self.in_flight = false;
        if self.cancel.is_cancelled() {
            self.cancel = CancelToken::new();
        }
        let response = result?;
        if !response.is_success() {
            tracing::warn!(path, status = response.status, "report request failed");
            return Err(ReportError::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response.body)
    }
}
