//! Scan decisions, per-scan ledger outcomes, and the repeat-scan limit.

// ==============================================================================
// Policy
// ==============================================================================

/// How many earlier scans of one license are tolerated before entry is
/// denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLimit {
    pub max_allowed: u64,
}

impl ScanLimit {
    pub fn decide(&self, previous_count: u64) -> ScanDecision {
        if previous_count >= self.max_allowed {
            ScanDecision::Deny
        } else {
            ScanDecision::Allow
        }
    }
}

impl Default for ScanLimit {
    fn default() -> Self {
        Self { max_allowed: 2 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDecision {
    Allow,
    Deny,
}

impl std::fmt::Display for ScanDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Deny => write!(f, "deny"),
        }
    }
}

// ==============================================================================
// Outcomes
// ==============================================================================

/// Result of a best-effort save. Failures are reported, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The ledger has no backing file.
    Skipped,
    Failed(String),
}

impl SaveOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// A counted scan of one license number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRecord {
    pub license_number: String,
    /// Stored count before this scan.
    pub previous_count: u64,
    /// Stored count including this scan.
    pub count: u64,
    pub decision: ScanDecision,
    pub save: SaveOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The scan carried no license number; the ledger was not touched.
    NoIdentifier,
    Recorded(ScanRecord),
}

impl ScanOutcome {
    pub fn decision(&self) -> Option<ScanDecision> {
        match self {
            Self::NoIdentifier => None,
            Self::Recorded(record) => Some(record.decision),
        }
    }

    pub fn is_denied(&self) -> bool {
        self.decision() == Some(ScanDecision::Deny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_denies_third_scan() {
        let limit = ScanLimit::default();
        assert_eq!(limit.decide(0), ScanDecision::Allow);
        assert_eq!(limit.decide(1), ScanDecision::Allow);
        assert_eq!(limit.decide(2), ScanDecision::Deny);
        assert_eq!(limit.decide(10), ScanDecision::Deny);
    }

    #[test]
    fn zero_limit_denies_everything() {
        assert_eq!(ScanLimit { max_allowed: 0 }.decide(0), ScanDecision::Deny);
    }

    #[test]
    fn no_identifier_has_no_decision() {
        assert_eq!(ScanOutcome::NoIdentifier.decision(), None);
        assert!(!ScanOutcome::NoIdentifier.is_denied());
    }
}
