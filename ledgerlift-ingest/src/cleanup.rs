//! Post-processing: description cleanup and categorization.
//!
//! Assembled descriptions still carry card-reference and value-date
//! artifacts that belong to the statement layout, not the merchant:
//!   "POS AUTHORISATION NETFLIX.COM Card xx4821 Value Date: 03/01/2024"
//! Both are removed before the rules run.

use anyhow::Result;
use ledgerlift_core::{DraftTransaction, Transaction};
use ledgerlift_rules::RuleSet;
use regex::Regex;

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean each draft's details, pick the rule polarity from the amount sign,
/// and attach category/type. Record order is preserved.
pub fn finalize(drafts: Vec<DraftTransaction>, rules: &RuleSet) -> Result<Vec<Transaction>> {
    let card_ref = Regex::new(r"Card xx\d{4}")?;
    let value_date = Regex::new(r"Value Date: \d{2}/\d{2}/\d{4}")?;

    let mut records = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let details = collapse_whitespace(&draft.details);
        let details = card_ref.replace_all(&details, "");
        let details = value_date.replace_all(&details, "");
        let details = collapse_whitespace(&details);

        let is_income = draft.amount >= 0.0;
        let matched = rules.categorize(&details, is_income);

        records.push(Transaction {
            date: draft.date,
            details,
            amount: draft.amount,
            category: matched.category,
            kind: matched.kind,
        });
    }

    Ok(records)
}
