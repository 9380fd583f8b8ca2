//! The per-scan pipeline: parse, map, count, evaluate.

use time::Date;

use crate::catalog::{TagBindings, TagCatalog};
use crate::eligibility::{evaluate, EligibilityPolicy};
use crate::ledger::{ScanLedger, ScanOutcome};
use crate::mapper::map_record_with;
use crate::parser::parse;
use crate::types::{DriverLicense, Eligibility};

/// Everything learned from one scan.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub license: DriverLicense,
    pub eligibility: Eligibility,
    pub ledger: ScanOutcome,
}

/// Owns the catalog, bindings, policy, and ledger for a scanning session.
pub struct Scanner {
    catalog: TagCatalog,
    bindings: TagBindings,
    policy: EligibilityPolicy,
    ledger: ScanLedger,
}

impl Scanner {
    /// Build a scanner. `catalog` is extended with any bound tag it lacks,
    /// so every field the mapper reads can be found by the parser.
    pub fn new(
        catalog: TagCatalog,
        bindings: TagBindings,
        policy: EligibilityPolicy,
        ledger: ScanLedger,
    ) -> Self {
        let catalog = bindings.extend_catalog(catalog);
        Self {
            catalog,
            bindings,
            policy,
            ledger,
        }
    }

    /// Process one raw payload as of `today`. Never fails: malformed input
    /// degrades to empty fields and the ineligible defaults.
    pub fn process(&mut self, raw: &str, today: Date) -> ScanReport {
        let fields = parse(raw, &self.catalog);
        let license = map_record_with(&fields, raw, &self.bindings);
        tracing::debug!(tags = fields.len(), "parsed scan payload");

        let ledger = self.ledger.record_scan(&license.license_number);
        let eligibility = evaluate(&license, today, &self.policy);

        ScanReport {
            license,
            eligibility,
            ledger,
        }
    }

    pub fn ledger(&self) -> &ScanLedger {
        &self.ledger
    }

    pub fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }
}
