//! ledgerlift-ingest: statement text scanning and transaction reconstruction.

pub mod cleanup;
pub mod scan;
pub mod statement;

pub use cleanup::finalize;
pub use scan::ScanOptions;
pub use statement::{collect_transaction_pages, parse_statement_text};
