#![doc(test(attr(deny(warnings))))]

//! Tracker Core is the budget computation and validation engine behind a
//! personal-finance tracking client: money input parsing, category and
//! timeline ledgers, savings plan validation, and the request/response
//! contracts of the remote report service.

pub mod errors;
pub mod ledger;
pub mod money;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tracker Core tracing initialized.");
    });
}
