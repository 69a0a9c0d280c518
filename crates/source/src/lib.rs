//! Record sources for batch generation.
//!
//! A `DataSource` hands out raw JSON records one at a time; [`records`] turns
//! them into validated, typed records. Turning raw input into records happens
//! here, at the data-access boundary, so the engine itself never sees
//! malformed data.
//!
//! ## Example
//!
//! ```ignore
//! use folio_source::{VecDataSource, records};
//! use folio_types::TransactionRecord;
//!
//! let mut source = VecDataSource::from_json_str(&input)?;
//! for (index, record) in records::<TransactionRecord, _>(&mut source) {
//!     // ...
//! }
//! ```

use folio_types::{Record, RecordError};
use serde_json::Value;
use std::io::Read;
use std::marker::PhantomData;

/// A source of raw JSON records.
pub trait DataSource: Send {
    /// Returns `None` when the source is exhausted.
    fn next(&mut self) -> Option<Value>;

    /// Total number of records, if known up front.
    fn size_hint(&self) -> Option<usize> {
        None
    }

    fn has_known_size(&self) -> bool {
        self.size_hint().is_some()
    }
}

/// Records held in memory, typically parsed from one input file.
#[derive(Debug)]
pub struct VecDataSource {
    data: std::vec::IntoIter<Value>,
    len: usize,
}

impl VecDataSource {
    pub fn new(data: Vec<Value>) -> Self {
        let len = data.len();
        Self {
            data: data.into_iter(),
            len,
        }
    }

    /// Parses input holding either one record object or an array of them.
    pub fn from_json_str(input: &str) -> Result<Self, RecordError> {
        Self::from_value(serde_json::from_str(input)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RecordError> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    fn from_value(value: Value) -> Result<Self, RecordError> {
        match value {
            Value::Array(items) => Ok(Self::new(items)),
            object @ Value::Object(_) => Ok(Self::new(vec![object])),
            _ => Err(RecordError::invalid(
                "input",
                "expected a record object or an array of records",
            )),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn remaining(&self) -> usize {
        self.data.len()
    }
}

impl DataSource for VecDataSource {
    fn next(&mut self) -> Option<Value> {
        self.data.next()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.len)
    }
}

/// Iterator over the typed records of a source, paired with their position.
///
/// Each raw record is deserialized and validated independently: one bad
/// record yields an `Err` at its position and does not stop the rest.
pub struct Records<'a, R, S: ?Sized> {
    source: &'a mut S,
    index: usize,
    _record: PhantomData<fn() -> R>,
}

impl<R, S> Iterator for Records<'_, R, S>
where
    R: Record,
    S: DataSource + ?Sized,
{
    type Item = (usize, Result<R, RecordError>);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.source.next()?;
        let index = self.index;
        self.index += 1;

        let record = R::from_value(value);
        if let Err(e) = &record {
            log::debug!("Record #{index} rejected: {e}");
        }
        Some((index, record))
    }
}

pub fn records<R, S>(source: &mut S) -> Records<'_, R, S>
where
    R: Record,
    S: DataSource + ?Sized,
{
    Records {
        source,
        index: 0,
        _record: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{LedgerStatement, TransactionRecord};
    use serde_json::json;

    fn invoice(id: &str, party: &str) -> Value {
        json!({
            "id": id,
            "date": "2026-10-05",
            "orderNumber": 7,
            "party": { "name": party },
            "subtotal": 10,
            "grandTotal": 10,
            "items": [{ "brand": "Acme", "model": "X1", "unitCost": 10 }]
        })
    }

    #[test]
    fn test_vec_data_source() {
        let mut source = VecDataSource::new(vec![json!({"id": 1}), json!({"id": 2})]);

        assert_eq!(source.len(), 2);
        assert_eq!(source.size_hint(), Some(2));
        assert!(source.has_known_size());

        assert_eq!(source.next(), Some(json!({"id": 1})));
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.next(), Some(json!({"id": 2})));
        assert_eq!(source.next(), None);
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_single_object_input_is_one_record() {
        let source = VecDataSource::from_json_str(r#"{ "id": "a" }"#).unwrap();
        assert_eq!(source.len(), 1);

        let source = VecDataSource::from_json_str("[]").unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn test_scalar_input_is_rejected() {
        assert!(matches!(
            VecDataSource::from_json_str("42"),
            Err(RecordError::Invalid { field: "input", .. })
        ));
        assert!(matches!(
            VecDataSource::from_reader("[{".as_bytes()),
            Err(RecordError::Json(_))
        ));
    }

    #[test]
    fn test_records_validates_each_entry_independently() {
        let mut source = VecDataSource::new(vec![
            invoice("a", "Harbor Phones"),
            invoice("b", "  "),
            json!({ "id": "c" }),
            invoice("d", "Bayside Mobile"),
        ]);

        let results: Vec<_> = records::<TransactionRecord, _>(&mut source).collect();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].1.as_ref().unwrap().id.as_str(), "a");
        assert!(matches!(results[1].1, Err(RecordError::Invalid { .. })));
        assert!(matches!(results[2].1, Err(RecordError::Json(_))));
        assert_eq!(results[3].0, 3);
        assert!(results[3].1.is_ok());
    }

    #[test]
    fn test_records_through_a_trait_object() {
        let mut source: Box<dyn DataSource> = Box::new(VecDataSource::new(vec![json!({
            "id": "ledger-1",
            "statementDate": "2026-09-30",
            "party": { "name": "Harbor Phones" },
            "closingBalance": 0
        })]));

        let statements: Vec<LedgerStatement> = records(source.as_mut())
            .filter_map(|(_, record)| record.ok())
            .collect();
        assert_eq!(statements.len(), 1);
    }
}
