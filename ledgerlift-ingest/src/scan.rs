//! Page and line filters applied before reconstruction.

/// Markers controlling which pages and lines are considered at all.
/// The defaults cover the statement layout this tool was written against;
/// both lists can be overridden from the CLI config.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// A page is only scanned when its text contains one of these.
    pub section_markers: Vec<String>,
    /// Lines containing any of these (case-insensitive) are dropped outright,
    /// even when they carry a date anchor.
    pub junk_markers: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            section_markers: vec![
                "Transaction details".to_string(),
                "Transaction Date".to_string(),
            ],
            junk_markers: vec![
                "Created".to_string(),
                "While this letter".to_string(),
                "we're not responsible".to_string(),
                "Transaction Summary".to_string(),
                "Account Number".to_string(),
                "Page".to_string(),
                "Opening Balance".to_string(),
                "Closing Balance".to_string(),
            ],
        }
    }
}

impl ScanOptions {
    pub fn is_junk(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.junk_markers
            .iter()
            .any(|m| lower.contains(&m.to_lowercase()))
    }

    /// Section markers are matched case-sensitively, as printed.
    pub fn is_transaction_page(&self, page: &str) -> bool {
        self.section_markers.iter().any(|m| page.contains(m))
    }
}
