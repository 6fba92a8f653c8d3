//! Rule file loading and description matching.
//!
//! Expected rules JSON:
//!   {
//!     "income_rules":  [ {"keyword": "SALARY", "category": "Salary", "type": "Income"} ],
//!     "expense_rules": [ {"keyword": "UBER EATS", "category": "Takeaway", "type": "Not Fixed"} ]
//!   }
//!
//! Income keywords match by case-insensitive substring. Expense keywords are
//! regex patterns, compiled case-insensitive with their whitespace removed so
//! they still match descriptions that text extraction ran together.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A rule entry as it appears in the rules file
#[derive(Debug, Clone, Deserialize)]
pub struct RawRule {
    pub keyword: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The rules file: either section may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRuleFile {
    #[serde(default)]
    pub income_rules: Vec<RawRule>,
    #[serde(default)]
    pub expense_rules: Vec<RawRule>,
}

#[derive(Debug, Clone)]
struct IncomeRule {
    keyword_upper: String,
    category: String,
    kind: String,
}

#[derive(Debug, Clone)]
struct ExpenseRule {
    pattern: Regex,
    category: String,
    kind: String,
}

/// Compiled rule set. Immutable after load; first matching rule wins, in
/// file order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    income: Vec<IncomeRule>,
    expense: Vec<ExpenseRule>,
}

/// Category and type assigned to one description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub category: String,
    pub kind: String,
}

impl RuleMatch {
    fn new(category: &str, kind: &str) -> Self {
        Self {
            category: category.to_string(),
            kind: kind.to_string(),
        }
    }
}

impl RuleSet {
    /// Load and compile a rules JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let file: RawRuleFile = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
        Self::compile(file)
    }

    /// Compile a parsed rules file. A keyword whose pattern fails to compile
    /// is a load error; nothing is matched lazily afterwards.
    pub fn compile(file: RawRuleFile) -> Result<Self> {
        let income = file
            .income_rules
            .into_iter()
            .map(|r| IncomeRule {
                keyword_upper: r.keyword.to_uppercase(),
                category: r.category,
                kind: r.kind,
            })
            .collect();

        let mut expense = Vec::with_capacity(file.expense_rules.len());
        for r in file.expense_rules {
            let source: String = r.keyword.split_whitespace().collect();
            let pattern = RegexBuilder::new(&source)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("compiling expense rule pattern '{}'", r.keyword))?;
            expense.push(ExpenseRule {
                pattern,
                category: r.category,
                kind: r.kind,
            });
        }

        Ok(Self { income, expense })
    }

    pub fn income_count(&self) -> usize {
        self.income.len()
    }

    pub fn expense_count(&self) -> usize {
        self.expense.len()
    }

    /// Classify a cleaned description. `is_income` selects which rule list
    /// applies; unmatched descriptions get the polarity's default.
    pub fn categorize(&self, details: &str, is_income: bool) -> RuleMatch {
        let details_upper = details.to_uppercase();

        if is_income {
            for rule in &self.income {
                if details_upper.contains(&rule.keyword_upper) {
                    return RuleMatch::new(&rule.category, &rule.kind);
                }
            }
            RuleMatch::new("Income", "Income")
        } else {
            let squashed: String = details_upper.split_whitespace().collect();
            for rule in &self.expense {
                if rule.pattern.is_match(&squashed) {
                    return RuleMatch::new(&rule.category, &rule.kind);
                }
            }
            RuleMatch::new("Other Expense", "Not Fixed")
        }
    }
}
