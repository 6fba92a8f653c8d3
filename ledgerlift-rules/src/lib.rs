//! ledgerlift-rules: categorization rules loaded from JSON and compiled once
//! for repeated matching against transaction descriptions.

pub mod ruleset;

pub use ruleset::{RawRule, RawRuleFile, RuleMatch, RuleSet};
