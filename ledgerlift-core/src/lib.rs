//! ledgerlift-core: shared transaction record types and token normalization.

pub mod amount;
pub mod dates;
pub mod transaction;

pub use amount::clean_amount;
pub use dates::to_iso_date;
pub use transaction::{DraftTransaction, Transaction};
