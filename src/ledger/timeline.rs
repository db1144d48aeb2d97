use serde::{Deserialize, Serialize};

use crate::money::{parse_money_or_zero, Money};

/// Number of even parts a savings goal is split into.
pub const GOAL_SPLIT_PARTS: u32 = 5;

/// A dated, amount-tagged timeline marker. The date is stored exactly as
/// entered; pins carry whatever the user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePin {
    pub date: String,
    pub amount: Money,
    pub note: Option<String>,
}

/// Owns the pin sequence, most recent first.
#[derive(Debug, Default, Clone)]
pub struct TimelineLedger {
    pins: Vec<TimelinePin>,
}

impl TimelineLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a pin at the head of the sequence.
    ///
    /// An empty date is silently rejected with no mutation; the amount
    /// parses permissively, falling back to zero.
    pub fn add_pin(&mut self, date: &str, amount_raw: &str, note: &str) -> Option<&TimelinePin> {
        if date.is_empty() {
            return None;
        }
        let pin = TimelinePin {
            date: date.to_string(),
            amount: parse_money_or_zero(amount_raw),
            note: (!note.is_empty()).then(|| note.to_string()),
        };
        self.pins.insert(0, pin);
        self.pins.first()
    }

    pub fn pins(&self) -> &[TimelinePin] {
        &self.pins
    }
}

/// Evenly divides a savings goal into [`GOAL_SPLIT_PARTS`] parts.
///
/// Zero or unreadable goals split to zero; there is no remainder
/// distribution, just a linear division.
pub fn split_goal(goal_raw: &str) -> Money {
    let goal = parse_money_or_zero(goal_raw);
    if goal.value() == 0.0 {
        Money::ZERO
    } else {
        goal / GOAL_SPLIT_PARTS as f64
    }
}
