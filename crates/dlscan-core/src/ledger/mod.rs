//! Persistent per-license scan counts and the repeat-scan policy.
//!
//! The ledger is loaded once at startup, updated after every scan that
//! carries a license number, and rewritten in full on each save. There is
//! no locking: one process per ledger file.

mod file;
mod store;
mod types;

pub use store::ScanLedger;
pub use types::{SaveOutcome, ScanDecision, ScanLimit, ScanOutcome, ScanRecord};
