//! Transaction record types shared across the pipeline.

use serde::{Deserialize, Serialize};

/// A transaction under construction: date and amount are fixed when the
/// start line is seen, details keep accumulating continuation lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftTransaction {
    pub date: String,
    pub details: String,
    pub amount: f64,
}

/// A finalized, categorized transaction record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// ISO `YYYY-MM-DD`, or the raw date token when strict parsing failed
    pub date: String,
    pub details: String,
    /// Non-negative = income, negative = expense
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Transaction {
    /// Non-negative amounts take the income rule path.
    pub fn is_income(&self) -> bool {
        self.amount >= 0.0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}
