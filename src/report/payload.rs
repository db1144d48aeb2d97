use serde::{Deserialize, Serialize};

use crate::errors::{ReportError, ValidationError};
use crate::ledger::{Category, CategoryLedger};
use crate::money::{parse_money, Money};

/// Serialized view of the budget screen sent to `/calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub income: Money,
    pub categories: Vec<Category>,
}

impl BudgetSnapshot {
    /// Captures the ledger in display order together with the entered income.
    pub fn capture(income: Money, ledger: &CategoryLedger) -> Self {
        Self {
            income,
            categories: ledger.categories().to_vec(),
        }
    }
}

/// One expense line of the financial report exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub name: String,
    pub amount: Money,
}

/// Income and expenses sent to `/financial-report`.
///
/// Exactly one of `hourly_rate` and `salary_monthly` is present; the server
/// rejects anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_monthly: Option<Money>,
    /// Weekly hours behind an hourly rate; the server assumes 40 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_week: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_income_monthly: Option<Money>,
    pub expenses: Vec<ExpenseLine>,
}

impl FinancialRequest {
    /// Overrides the server's default 40-hour week.
    pub fn with_hours_per_week(mut self, hours: f64) -> Self {
        self.hours_per_week = Some(hours);
        self
    }

    pub fn with_other_income(mut self, amount: Money) -> Self {
        self.other_income_monthly = Some(amount);
        self
    }
}

/// Builds the `/financial-report` request from raw form text.
///
/// Checks run in a fixed order and the first failure wins. Wage and salary
/// are mutually exclusive income sources: a submission with both fields
/// filled in is ambiguous even when only one of them parses.
pub fn build_financial_request(
    wage_raw: &str,
    salary_raw: &str,
    expense_raw: &str,
    expense_label: &str,
) -> Result<FinancialRequest, ValidationError> {
    let wage = parse_money(wage_raw).ok().filter(|m| m.is_positive());
    let salary = parse_money(salary_raw).ok().filter(|m| m.is_positive());
    if wage.is_none() && salary.is_none() {
        return Err(ValidationError::MissingIncome);
    }
    if !wage_raw.trim().is_empty() && !salary_raw.trim().is_empty() {
        return Err(ValidationError::AmbiguousIncome);
    }
    let expense = parse_money(expense_raw).map_err(|_| ValidationError::InvalidExpense)?;
    if !expense.is_positive() {
        return Err(ValidationError::InvalidExpense);
    }
    let label = expense_label.trim();
    if label.is_empty() {
        return Err(ValidationError::MissingDescription);
    }
    Ok(FinancialRequest {
        hourly_rate: wage,
        salary_monthly: salary,
        hours_per_week: None,
        other_income_monthly: None,
        expenses: vec![ExpenseLine {
            name: label.to_string(),
            amount: expense,
        }],
    })
}

/// Remote-computed financial report; shape-validated here, otherwise opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub gross_monthly: f64,
    pub total_expenses: f64,
    pub net_monthly: f64,
    pub savings_rate_pct: f64,
    pub expenses: Vec<ExpenseLine>,
}

/// Per-category aggregates inside a [`BudgetReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReportLine {
    pub name: String,
    pub planned: f64,
    pub spent: f64,
    pub remaining: f64,
    pub pct_spent: f64,
}

/// Remote-computed budget aggregates returned by `/calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetReport {
    pub income: f64,
    pub total_planned: f64,
    pub total_spent: f64,
    pub remaining: f64,
    pub categories: Vec<CategoryReportLine>,
}

/// Validates a success body into a typed financial report.
///
/// A missing or non-numeric field surfaces as [`ReportError::Malformed`]
/// instead of reaching the presentation layer half-parsed.
pub fn interpret_financial_report(body: &str) -> Result<FinancialReport, ReportError> {
    Ok(serde_json::from_str(body)?)
}

/// Validates a success body into typed budget aggregates.
pub fn interpret_budget_report(body: &str) -> Result<BudgetReport, ReportError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_income_and_categories_in_order() {
        let mut ledger = CategoryLedger::new();
        ledger.add_category("Rent", "1000", "950").expect("valid");
        ledger.add_category("Groceries", "200", "50").expect("valid");

        let snapshot = BudgetSnapshot::capture(Money::new(3000.0), &ledger);
        let json = serde_json::to_value(&snapshot).expect("serializes");
        assert_eq!(json["income"], 3000.0);
        assert_eq!(json["categories"][0]["name"], "Groceries");
        assert_eq!(json["categories"][1]["name"], "Rent");
        assert_eq!(json["categories"][0]["planned"], 200.0);
    }

    #[test]
    fn builder_requires_some_income() {
        let err = build_financial_request("", "", "100", "Rent").expect_err("no income");
        assert_eq!(err, ValidationError::MissingIncome);

        let err = build_financial_request("0", "", "100", "Rent").expect_err("zero wage");
        assert_eq!(err, ValidationError::MissingIncome);
    }

    #[test]
    fn builder_rejects_wage_and_salary_together() {
        let err = build_financial_request("20", "3000", "100", "Rent").expect_err("ambiguous");
        assert_eq!(err, ValidationError::AmbiguousIncome);

        // Both fields filled is ambiguous even if one of them is junk.
        let err = build_financial_request("20", "n/a", "100", "Rent").expect_err("ambiguous");
        assert_eq!(err, ValidationError::AmbiguousIncome);
    }

    #[test]
    fn builder_validates_the_expense_entry() {
        let err = build_financial_request("20", "", "-5", "Rent").expect_err("negative");
        assert_eq!(err, ValidationError::InvalidExpense);

        let err = build_financial_request("20", "", "", "Rent").expect_err("empty expense");
        assert_eq!(err, ValidationError::InvalidExpense);

        let err = build_financial_request("20", "", "100", "   ").expect_err("no label");
        assert_eq!(err, ValidationError::MissingDescription);
    }

    #[test]
    fn builder_emits_exactly_one_income_field() {
        let request = build_financial_request("", "$3,000", "1000", " Rent ").expect("valid");
        assert_eq!(request.hourly_rate, None);
        assert_eq!(request.salary_monthly, Some(Money::new(3000.0)));
        assert_eq!(request.expenses.len(), 1);
        assert_eq!(request.expenses[0].name, "Rent");

        let json = serde_json::to_value(&request).expect("serializes");
        assert!(json.get("hourly_rate").is_none(), "absent field not sent");
        assert!(json.get("hours_per_week").is_none());
        assert_eq!(json["salary_monthly"], 3000.0);
    }

    #[test]
    fn hours_per_week_is_opt_in() {
        let request = build_financial_request("20", "", "200", "Bill")
            .expect("valid")
            .with_hours_per_week(40.0);
        let json = serde_json::to_value(&request).expect("serializes");
        assert_eq!(json["hourly_rate"], 20.0);
        assert_eq!(json["hours_per_week"], 40.0);
    }

    #[test]
    fn interpreter_accepts_the_documented_shape() {
        let body = r#"{
            "gross_monthly": 3000.0,
            "total_expenses": 1300.0,
            "net_monthly": 1700.0,
            "savings_rate_pct": 56.67,
            "expenses": [{"name": "Rent", "amount": 1000.0}, {"name": "Food", "amount": 300.0}]
        }"#;
        let report = interpret_financial_report(body).expect("well-formed");
        assert_eq!(report.net_monthly, 1700.0);
        assert_eq!(report.expenses.len(), 2);
    }

    #[test]
    fn interpreter_flags_missing_or_mistyped_fields() {
        let missing = r#"{"gross_monthly": 3000.0, "expenses": []}"#;
        let err = interpret_financial_report(missing).expect_err("fields missing");
        assert!(matches!(err, ReportError::Malformed(_)));

        let mistyped = r#"{
            "gross_monthly": "lots",
            "total_expenses": 0,
            "net_monthly": 0,
            "savings_rate_pct": 0,
            "expenses": []
        }"#;
        let err = interpret_financial_report(mistyped).expect_err("string gross");
        assert!(matches!(err, ReportError::Malformed(_)));
    }

    #[test]
    fn budget_report_parses_category_lines() {
        let body = r#"{
            "income": 3000.0,
            "total_planned": 1200.0,
            "total_spent": 1000.0,
            "remaining": 2000.0,
            "categories": [
                {"name": "Rent", "planned": 1000.0, "spent": 950.0, "remaining": 50.0, "pct_spent": 95.0}
            ]
        }"#;
        let report = interpret_budget_report(body).expect("well-formed");
        assert_eq!(report.remaining, 2000.0);
        assert_eq!(report.categories[0].pct_spent, 95.0);
    }
}
