//! In-memory ledgers owning the per-session budget collections.
//!
//! Each ledger exclusively owns its collection for the lifetime of the
//! session; nothing is persisted. Iteration order is display order and is
//! always most-recent-first.

pub mod category;
pub mod savings;
pub mod timeline;

pub use category::{BudgetTotals, Category, CategoryLedger};
pub use savings::{
    SavingsForm, SavingsLedger, SavingsSubmission, SubmitStatus, MIN_PLAN_DAYS, SUBMIT_COOLDOWN_MS,
};
pub use timeline::{split_goal, TimelineLedger, TimelinePin, GOAL_SPLIT_PARTS};
