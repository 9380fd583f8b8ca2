pub mod catalog;
pub mod eligibility;
pub mod error;
pub mod ledger;
pub mod mapper;
pub mod parser;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_util;

pub use catalog::{Tag, TagBindings, TagCatalog};
pub use error::{CatalogError, CoreError};
pub use parser::{parse, FieldMap};
pub use scan::{ScanReport, Scanner};
pub use types::{DriverLicense, Eligibility};
