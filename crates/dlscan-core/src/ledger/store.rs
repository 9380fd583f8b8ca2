//! `ScanLedger` — in-memory scan counts with an optional backing file.

use std::path::{Path, PathBuf};

use crate::error::CoreError;

use super::file::{read_counts, write_counts, Counts};
use super::types::{SaveOutcome, ScanLimit, ScanOutcome, ScanRecord};

pub struct ScanLedger {
    counts: Counts,
    path: Option<PathBuf>,
    limit: ScanLimit,
}

impl ScanLedger {
    /// A ledger with no backing file. Saves are skipped.
    pub fn in_memory(limit: ScanLimit) -> Self {
        Self {
            counts: Counts::new(),
            path: None,
            limit,
        }
    }

    /// Load the ledger persisted at `path`. A missing or blank file starts
    /// an empty ledger that will be created on the first save.
    pub fn load(path: impl Into<PathBuf>, limit: ScanLimit) -> Result<Self, CoreError> {
        let path = path.into();
        let counts = read_counts(&path)?;
        tracing::debug!(path = %path.display(), entries = counts.len(), "loaded scan ledger");
        Ok(Self {
            counts,
            path: Some(path),
            limit,
        })
    }

    // ========================================================================
    // Recording
    // ========================================================================

    /// Count one scan of `license_number` and decide whether it is allowed.
    ///
    /// The count is incremented and saved whether the scan is allowed or
    /// denied. A blank license number leaves the ledger untouched.
    pub fn record_scan(&mut self, license_number: &str) -> ScanOutcome {
        if license_number.trim().is_empty() {
            return ScanOutcome::NoIdentifier;
        }

        let entry = self.counts.entry(license_number.to_string()).or_insert(0);
        let previous_count = *entry;
        let decision = self.limit.decide(previous_count);
        *entry = previous_count.saturating_add(1);
        let count = *entry;

        tracing::info!(
            license_number,
            count,
            decision = %decision,
            "recorded scan"
        );

        let save = self.save();
        ScanOutcome::Recorded(ScanRecord {
            license_number: license_number.to_string(),
            previous_count,
            count,
            decision,
            save,
        })
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Rewrite the backing file with the current counts.
    ///
    /// Failures are logged and returned as [`SaveOutcome::Failed`]; the
    /// in-memory counts are kept and written again on the next save.
    pub fn save(&self) -> SaveOutcome {
        let Some(path) = &self.path else {
            return SaveOutcome::Skipped;
        };

        match write_counts(path, &self.counts) {
            Ok(()) => SaveOutcome::Saved,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "could not write scan ledger"
                );
                SaveOutcome::Failed(err.to_string())
            }
        }
    }

    // ========================================================================
    // Query
    // ========================================================================

    pub fn count(&self, license_number: &str) -> u64 {
        self.counts.get(license_number).copied().unwrap_or(0)
    }

    /// All counts, ordered by license number.
    pub fn counts(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(id, count)| (id.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn limit(&self) -> ScanLimit {
        self.limit
    }
}
