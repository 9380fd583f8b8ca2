use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("cannot read scan ledger {}: {source}", .path.display())]
    LedgerRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode scan ledger {}: {source}", .path.display())]
    LedgerDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode scan ledger: {0}")]
    LedgerEncode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid tag `{0}`: expected three uppercase ASCII letters or digits")]
    InvalidTag(String),
}
