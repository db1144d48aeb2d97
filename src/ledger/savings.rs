use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::money::{parse_money_or_zero, Money};

/// Minimum span of a savings plan, in days. Exactly this many is accepted.
pub const MIN_PLAN_DAYS: i64 = 7;

/// Cool-down after an accepted submission during which further submissions
/// are dropped. Resets by time alone, independent of any network activity.
pub const SUBMIT_COOLDOWN_MS: i64 = 300;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw text fields of the savings plan form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SavingsForm {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub amount: String,
}

impl SavingsForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// An accepted savings plan; immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsSubmission {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub amount: Money,
}

/// Outcome of a submit call that passed every validation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Stored at the head of the history; the form was cleared.
    Accepted,
    /// Silently ignored: the previous submission's cool-down is still open.
    Dropped,
}

/// Owns the savings submission history, most recent first, plus the
/// double-submit guard state.
#[derive(Debug, Default, Clone)]
pub struct SavingsLedger {
    submissions: Vec<SavingsSubmission>,
    cooldown_until: Option<DateTime<Utc>>,
}

impl SavingsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a submission, timing the double-submit guard
    /// against the system clock.
    pub fn submit(&mut self, form: &mut SavingsForm) -> Result<SubmitStatus, ValidationError> {
        self.submit_at(form, Utc::now())
    }

    /// Validation runs in a fixed, short-circuiting order; nothing mutates
    /// until every check passes. Dates are expected as `YYYY-MM-DD`.
    pub fn submit_at(
        &mut self,
        form: &mut SavingsForm,
        now: DateTime<Utc>,
    ) -> Result<SubmitStatus, ValidationError> {
        if form.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if form.start_date.is_empty() || form.end_date.is_empty() {
            return Err(ValidationError::MissingDates);
        }
        // Raw string equality, before any parsing.
        if form.start_date == form.end_date {
            return Err(ValidationError::IdenticalDates);
        }
        let start = parse_plan_date(&form.start_date);
        let end = parse_plan_date(&form.end_date);
        let (start, end) = match (start, end) {
            (Some(start), Some(end)) if (end - start).num_days() >= MIN_PLAN_DAYS => (start, end),
            _ => return Err(ValidationError::RangeTooShort),
        };

        if self.cooldown_until.is_some_and(|until| now < until) {
            tracing::debug!(title = %form.title, "savings submission dropped during cool-down");
            return Ok(SubmitStatus::Dropped);
        }

        self.submissions.insert(
            0,
            SavingsSubmission {
                title: form.title.clone(),
                start_date: start,
                end_date: end,
                amount: parse_money_or_zero(&form.amount),
            },
        );
        self.cooldown_until = Some(now + Duration::milliseconds(SUBMIT_COOLDOWN_MS));
        form.clear();
        Ok(SubmitStatus::Accepted)
    }

    pub fn submissions(&self) -> &[SavingsSubmission] {
        &self.submissions
    }
}

fn parse_plan_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}
