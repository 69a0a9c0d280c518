use crate::error::RecordError;
use crate::ids::{OrderNumber, RecordId};
use crate::item::LineItem;
use crate::party::Party;
use crate::Record;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// A purchase or sale snapshot, as handed over by the data-access layer.
///
/// The grand total is expected to be reconciled with the subtotal, taxes and
/// adjustment already; it is displayed, never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: RecordId,
    pub date: NaiveDate,
    pub order_number: OrderNumber,
    pub party: Party,
    pub subtotal: Decimal,
    #[serde(default)]
    pub primary_tax: TaxLine,
    #[serde(default)]
    pub secondary_tax: TaxLine,
    #[serde(default)]
    pub adjustment: Adjustment,
    pub grand_total: Decimal,
    #[serde(default)]
    pub notes: String,
    #[serde(default, alias = "paymentMethods")]
    pub payments: PaymentBreakdown,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// A tax applied to the subtotal, with its percentage rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxLine {
    #[serde(default)]
    pub label: String,
    pub rate: Decimal,
    pub amount: Decimal,
}

impl TaxLine {
    pub fn new(label: impl Into<String>, rate: Decimal, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            rate,
            amount,
        }
    }
}

/// A discount or surcharge, with the unit it is expressed in (`%`, `$`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub amount: Decimal,
    #[serde(default)]
    pub unit: String,
}

/// Amounts paid per payment method.
///
/// Absent methods are zero. Values of an unexpected type (a stray `null`, an
/// unparsable string) are read as zero as well, since older records stored
/// these as a free-form map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentBreakdown {
    #[serde(deserialize_with = "lenient_amount")]
    pub cash: Decimal,
    #[serde(deserialize_with = "lenient_amount")]
    pub bank: Decimal,
    #[serde(alias = "credit_card", deserialize_with = "lenient_amount")]
    pub credit_card: Decimal,
    #[serde(alias = "total_paid", deserialize_with = "lenient_amount")]
    pub total_paid: Decimal,
    #[serde(alias = "remaining_credit", deserialize_with = "lenient_amount")]
    pub remaining_credit: Decimal,
}

/// Reads any amount that is not a number or numeric string as zero.
pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value).unwrap_or(Decimal::ZERO))
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

impl Record for TransactionRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn validate(&self) -> Result<(), RecordError> {
        if self.party.name.trim().is_empty() {
            return Err(RecordError::invalid("party.name", "must not be empty"));
        }
        if self.subtotal < Decimal::ZERO {
            return Err(RecordError::invalid(
                "subtotal",
                format!("must not be negative, got {}", self.subtotal),
            ));
        }
        for (field, tax) in [
            ("primaryTax.rate", &self.primary_tax),
            ("secondaryTax.rate", &self.secondary_tax),
        ] {
            if tax.rate < Decimal::ZERO || tax.rate > Decimal::ONE_HUNDRED {
                return Err(RecordError::invalid(
                    field,
                    format!("must be within 0..=100, got {}", tax.rate),
                ));
            }
        }
        if let Some(position) = self.items.iter().position(|i| i.unit_cost < Decimal::ZERO) {
            return Err(RecordError::invalid(
                "items.unitCost",
                format!("item {} has a negative unit cost", position + 1),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": "po-7",
            "date": "2026-10-05",
            "orderNumber": 1042,
            "party": { "name": "Northside Mobile", "phone": "555-0100" },
            "subtotal": 1000,
            "primaryTax": { "label": "GST", "rate": 5, "amount": 50 },
            "secondaryTax": { "label": "PST", "rate": 7, "amount": "70.00" },
            "adjustment": { "amount": 10, "unit": "$" },
            "grandTotal": 1110,
            "notes": "",
            "paymentMethods": { "cash": 500, "bank": 610 },
            "items": [
                { "brand": "Acme", "model": "X1", "imei": "1", "unitCost": 1000 }
            ]
        })
    }

    #[test]
    fn test_from_value_accepts_well_formed_record() {
        let record = TransactionRecord::from_value(sample()).unwrap();
        assert_eq!(record.order_number.to_string(), "ORD-1042");
        assert_eq!(record.secondary_tax.amount, Decimal::new(70, 0));
        assert_eq!(record.payments.bank, Decimal::new(610, 0));
        assert_eq!(record.items.len(), 1);
    }

    #[test]
    fn test_missing_payment_methods_default_to_zero() {
        let mut value = sample();
        value["paymentMethods"] = json!({ "cash": 20 });
        let record = TransactionRecord::from_value(value).unwrap();
        assert_eq!(record.payments.bank, Decimal::ZERO);
        assert_eq!(record.payments.credit_card, Decimal::ZERO);
        assert_eq!(record.payments.cash, Decimal::new(20, 0));
    }

    #[test]
    fn test_payment_amounts_of_unexpected_type_read_as_zero() {
        let payments: PaymentBreakdown = serde_json::from_value(json!({
            "cash": "not a number",
            "bank": null,
            "creditCard": [1, 2],
            "total_paid": "12.5",
            "remainingCredit": -3
        }))
        .unwrap();
        assert_eq!(payments.cash, Decimal::ZERO);
        assert_eq!(payments.bank, Decimal::ZERO);
        assert_eq!(payments.credit_card, Decimal::ZERO);
        assert_eq!(payments.total_paid, Decimal::new(125, 1));
        assert_eq!(payments.remaining_credit, Decimal::new(-3, 0));
    }

    #[test]
    fn test_missing_grand_total_is_rejected() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("grandTotal");
        let err = TransactionRecord::from_value(value).unwrap_err();
        assert!(matches!(err, RecordError::Json(_)));
    }

    #[test]
    fn test_out_of_range_tax_rate_is_rejected() {
        let mut value = sample();
        value["primaryTax"]["rate"] = json!(140);
        let err = TransactionRecord::from_value(value).unwrap_err();
        assert!(err.to_string().contains("primaryTax.rate"));
    }

    #[test]
    fn test_blank_party_name_is_rejected() {
        let mut value = sample();
        value["party"]["name"] = json!("  ");
        let err = TransactionRecord::from_value(value).unwrap_err();
        assert!(matches!(err, RecordError::Invalid { field: "party.name", .. }));
    }

    #[test]
    fn test_negative_unit_cost_is_rejected() {
        let mut value = sample();
        value["items"][0]["unitCost"] = json!(-1);
        let err = TransactionRecord::from_value(value).unwrap_err();
        assert!(err.to_string().contains("item 1"));
    }
}
