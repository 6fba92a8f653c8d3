//! Transaction reconstruction from extracted statement text.
//!
//! Expected text, per page:
//!   Transaction details
//!   Date        Description                          Amount    Balance
//!   01 Jan 2024 EFTPOS WOOLWORTHS 1234               $45.67-   2,454.33
//!   02 Jan 2024 DIRECT CREDIT SALARY ACME PTY LTD    $1,850.00 4,304.33
//!
//! There is no reliable per-transaction delimiter: a description may wrap
//! onto following lines, and a running-balance column shows up as a trailing
//! numeric token on both start and continuation lines. A trailing number is
//! stripped only when it differs from the amount already extracted for the
//! open transaction.

use anyhow::Result;
use ledgerlift_core::{DraftTransaction, clean_amount, to_iso_date};
use regex::Regex;

use crate::cleanup::collapse_whitespace;
use crate::scan::ScanOptions;

/// Concatenate, in document order, the pages that carry a transaction
/// section. `None` means no usable pages: the caller aborts the run.
pub fn collect_transaction_pages(pages: &[String], opts: &ScanOptions) -> Option<String> {
    let mut full_text = String::new();
    for page in pages {
        if opts.is_transaction_page(page) {
            full_text.push_str(page);
            full_text.push('\n');
        }
    }

    if full_text.is_empty() {
        None
    } else {
        Some(full_text)
    }
}

/// Walk the filtered lines once, assembling draft transactions.
///
/// A line starting with `DD Mon YYYY` opens a new draft and seals the
/// previous one. Any other non-junk line while a draft is open is a
/// description continuation. Junk lines and stray lines outside any
/// transaction are dropped.
pub fn parse_statement_text(text: &str, opts: &ScanOptions) -> Result<Vec<DraftTransaction>> {
    let date_anchor = Regex::new(r"^\d{2}\s\w{3}\s\d{4}")?;
    let amount_re = Regex::new(r"(-?\$?[\d,]+\.\d{2}-?)")?;

    let mut drafts = Vec::new();
    let mut current: Option<DraftTransaction> = None;

    for line in text.lines() {
        if opts.is_junk(line) {
            continue;
        }

        if date_anchor.is_match(line) {
            let parts: Vec<&str> = line.split_whitespace().collect();
            // A date anchor with nothing behind it is a mangled row; skip it
            // without touching the open transaction.
            if parts.len() < 4 {
                continue;
            }

            if let Some(done) = current.take() {
                drafts.push(done);
            }

            let date_raw = parts[..3].join(" ");
            let date = to_iso_date(&date_raw).unwrap_or(date_raw);

            let rest = parts[3..].join(" ");
            let mut amount = 0.0;
            let mut details = rest.clone();

            if let Some(m) = amount_re.find(&rest) {
                amount = clean_amount(m.as_str());
                details = rest.replace(m.as_str(), " ").trim().to_string();

                // After removing the amount, a leftover trailing number that
                // differs from it is the balance column, not description text.
                let tokens: Vec<&str> = details.split_whitespace().collect();
                if let Some(&last) = tokens.last() {
                    let trailing = clean_amount(last);
                    if trailing != 0.0 && trailing != amount {
                        details = tokens[..tokens.len() - 1].join(" ");
                    }
                }
            }

            current = Some(DraftTransaction {
                date,
                details: collapse_whitespace(&details),
                amount,
            });
        } else if let Some(cur) = current.as_mut() {
            let parts: Vec<&str> = line.split_whitespace().collect();
            cur.details.push(' ');
            if parts.len() > 1 {
                let trailing = clean_amount(parts[parts.len() - 1]);
                if trailing != 0.0 && trailing != cur.amount {
                    cur.details.push_str(&parts[..parts.len() - 1].join(" "));
                } else {
                    cur.details.push_str(&parts.join(" "));
                }
            } else {
                cur.details.push_str(line.trim());
            }
        }
    }

    // Input ended mid-transaction: the open draft still counts.
    if let Some(done) = current.take() {
        drafts.push(done);
    }

    Ok(drafts)
}
