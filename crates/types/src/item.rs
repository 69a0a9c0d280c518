use crate::non_empty;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One physical catalog unit (a single phone) on a purchase record.
///
/// Every attribute except the unit cost is optional. There is no quantity:
/// bulk purchases are recorded as one item per unit, so the line total is
/// always the unit cost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub capacity: Option<String>,
    pub capacity_unit: Option<String>,
    pub color: Option<String>,
    pub carrier: Option<String>,
    /// Unique identifier of the unit, usually its IMEI.
    #[serde(alias = "imei")]
    pub identifier: Option<String>,
    /// Zero when absent, null or unreadable.
    #[serde(default, alias = "cost", deserialize_with = "crate::record::lenient_amount")]
    pub unit_cost: Decimal,
}

impl LineItem {
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: Some(brand.into()),
            model: Some(model.into()),
            ..Default::default()
        }
    }

    pub fn with_capacity(mut self, capacity: impl Into<String>, unit: impl Into<String>) -> Self {
        self.capacity = Some(capacity.into());
        self.capacity_unit = Some(unit.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_carrier(mut self, carrier: impl Into<String>) -> Self {
        self.carrier = Some(carrier.into());
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_unit_cost(mut self, unit_cost: Decimal) -> Self {
        self.unit_cost = unit_cost;
        self
    }

    pub fn brand(&self) -> Option<&str> {
        non_empty(self.brand.as_deref())
    }

    pub fn model(&self) -> Option<&str> {
        non_empty(self.model.as_deref())
    }

    pub fn capacity(&self) -> Option<&str> {
        non_empty(self.capacity.as_deref())
    }

    pub fn capacity_unit(&self) -> Option<&str> {
        non_empty(self.capacity_unit.as_deref())
    }

    pub fn color(&self) -> Option<&str> {
        non_empty(self.color.as_deref())
    }

    pub fn carrier(&self) -> Option<&str> {
        non_empty(self.carrier.as_deref())
    }

    pub fn identifier(&self) -> Option<&str> {
        non_empty(self.identifier.as_deref())
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_cost
    }
}
