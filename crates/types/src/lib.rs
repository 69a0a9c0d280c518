//! Record data model for the Folio document engine.
//!
//! Records arrive from a data-access layer as JSON and are validated once, at
//! this boundary. Everything downstream (pagination, row formatting, template
//! population) trusts the shapes defined here.

pub mod error;
pub mod ids;
pub mod item;
pub mod ledger;
pub mod party;
pub mod record;

pub use error::RecordError;
pub use ids::{OrderNumber, RecordId};
pub use item::LineItem;
pub use ledger::{LedgerEntry, LedgerStatement};
pub use party::{CompanyInfo, Party};
pub use record::{Adjustment, PaymentBreakdown, TaxLine, TransactionRecord};

pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Returns the value if it holds something other than whitespace.
///
/// Optional text attributes treat `""` the same as an absent value.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// A record that can be produced from raw JSON at the data-access boundary.
pub trait Record: DeserializeOwned + Sized {
    /// Stable identifier, used to name output directories and log lines.
    fn id(&self) -> &RecordId;

    /// Checks invariants that deserialization alone cannot express.
    fn validate(&self) -> Result<(), RecordError>;

    /// Deserializes and validates a record from a JSON value.
    fn from_value(value: Value) -> Result<Self, RecordError> {
        let record: Self = serde_json::from_value(value)?;
        record.validate()?;
        Ok(record)
    }

    /// Deserializes and validates a record from a JSON string.
    fn from_json_str(source: &str) -> Result<Self, RecordError> {
        let record: Self = serde_json::from_str(source)?;
        record.validate()?;
        Ok(record)
    }
}
