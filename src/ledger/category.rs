use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::money::{parse_money_or_zero, Money};

/// A named budget line with planned and actual spend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub planned: Money,
    pub spent: Money,
}

impl Category {
    pub fn new(name: impl Into<String>, planned: Money, spent: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            planned,
            spent,
        }
    }

    /// Planned minus spent for this line alone.
    pub fn remaining(&self) -> Money {
        self.planned - self.spent
    }

    /// Share of the plan already spent, as a percentage.
    ///
    /// Lines with no planned amount report zero rather than dividing by
    /// zero; that is a policy choice, not an error.
    pub fn percent_spent(&self) -> f64 {
        if self.planned.value() > 0.0 {
            self.spent.value() / self.planned.value() * 100.0
        } else {
            0.0
        }
    }
}

/// Aggregates over the full category list, recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetTotals {
    pub total_planned: Money,
    pub total_spent: Money,
    pub income: Money,
    pub remaining: Money,
}

/// Owns the session's budget categories in display order, newest first.
#[derive(Debug, Default, Clone)]
pub struct CategoryLedger {
    categories: Vec<Category>,
}

impl CategoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a new category built from raw field text.
    ///
    /// Planned and spent amounts parse permissively: unreadable input becomes
    /// zero rather than a hard failure. Nothing mutates on error.
    pub fn add_category(
        &mut self,
        name: &str,
        planned_raw: &str,
        spent_raw: &str,
    ) -> Result<&Category, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let category = Category::new(
            name,
            parse_money_or_zero(planned_raw),
            parse_money_or_zero(spent_raw),
        );
        tracing::debug!(name = %category.name, "category added");
        self.categories.insert(0, category);
        Ok(&self.categories[0])
    }

    /// Removes the category with the given id; absent ids are a no-op.
    pub fn remove_category(&mut self, id: Uuid) {
        self.categories.retain(|category| category.id != id);
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Sums the current list against the entered income.
    ///
    /// Intentionally O(n) with no caching; the list is small and this keeps
    /// every read consistent with the collection.
    pub fn totals(&self, income: Money) -> BudgetTotals {
        let total_planned = self.categories.iter().map(|c| c.planned).sum();
        let total_spent: Money = self.categories.iter().map(|c| c.spent).sum();
        BudgetTotals {
            total_planned,
            total_spent,
            income,
            remaining: income - total_spent,
        }
    }
}
