use crate::error::RecordError;
use crate::ids::{OrderNumber, RecordId};
use crate::party::Party;
use crate::Record;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An account statement listing every transaction with one party.
///
/// Running balances are computed by the data-access layer; the statement only
/// carries them for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStatement {
    pub id: RecordId,
    pub statement_date: NaiveDate,
    pub party: Party,
    #[serde(default)]
    pub period_start: Option<NaiveDate>,
    #[serde(default)]
    pub period_end: Option<NaiveDate>,
    #[serde(default)]
    pub opening_balance: Decimal,
    pub closing_balance: Decimal,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub entries: Vec<LedgerEntry>,
}

/// One transaction row on a ledger statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub order_number: Option<OrderNumber>,
    #[serde(default)]
    pub description: String,
    /// Signed amount; negative values are payments or credits.
    pub amount: Decimal,
    /// Balance owed after this entry is applied.
    pub balance: Decimal,
}

impl Record for LedgerStatement {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn validate(&self) -> Result<(), RecordError> {
        if self.party.name.trim().is_empty() {
            return Err(RecordError::invalid("party.name", "must not be empty"));
        }
        if let (Some(start), Some(end)) = (self.period_start, self.period_end)
            && start > end
        {
            return Err(RecordError::invalid(
                "periodStart",
                format!("{start} is after the period end {end}"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_statement_deserializes_entries() {
        let statement = LedgerStatement::from_value(json!({
            "id": "ledger-3",
            "statementDate": "2026-09-30",
            "party": { "name": "Harbor Phones" },
            "openingBalance": 250,
            "closingBalance": "100.00",
            "entries": [
                { "date": "2026-09-02", "orderNumber": 88, "description": "Purchase", "amount": 350, "balance": 600 },
                { "date": "2026-09-20", "description": "Bank transfer", "amount": -500, "balance": 100 }
            ]
        }))
        .unwrap();

        assert_eq!(statement.entries.len(), 2);
        assert_eq!(statement.entries[0].order_number, Some(OrderNumber::new(88)));
        assert_eq!(statement.entries[1].order_number, None);
        assert_eq!(statement.closing_balance, Decimal::new(100, 0));
    }

    #[test]
    fn test_inverted_period_is_rejected() {
        let err = LedgerStatement::from_value(json!({
            "id": "ledger-4",
            "statementDate": "2026-09-30",
            "party": { "name": "Harbor Phones" },
            "periodStart": "2026-09-30",
            "periodEnd": "2026-09-01",
            "closingBalance": 0
        }))
        .unwrap_err();
        assert!(matches!(err, RecordError::Invalid { field: "periodStart", .. }));
    }
}
