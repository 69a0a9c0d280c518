use crate::format::{CurrencyFormat, NOT_AVAILABLE, format_date};
use folio_types::{LedgerEntry, LineItem, non_empty};
use handlebars::html_escape;

/// Renders one table row of a page.
pub trait RowFormat {
    fn format_row(&self, currency: &CurrencyFormat) -> String;
}

impl RowFormat for LineItem {
    fn format_row(&self, currency: &CurrencyFormat) -> String {
        format!(
            "<tr><td class=\"description\">{}</td><td class=\"identifier\">{}</td>\
             <td class=\"amount\">{}</td><td class=\"amount\">{}</td></tr>\n",
            html_escape(&describe_item(self)),
            html_escape(self.identifier().unwrap_or(NOT_AVAILABLE)),
            currency.currency(self.unit_cost),
            currency.currency(self.line_total()),
        )
    }
}

impl RowFormat for LedgerEntry {
    fn format_row(&self, currency: &CurrencyFormat) -> String {
        let reference = self
            .order_number
            .map(|n| n.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        format!(
            "<tr><td class=\"date\">{}</td><td class=\"reference\">{}</td>\
             <td class=\"description\">{}</td><td class=\"amount\">{}</td>\
             <td class=\"amount\">{}</td></tr>\n",
            format_date(self.date),
            reference,
            html_escape(non_empty(Some(self.description.as_str())).unwrap_or(NOT_AVAILABLE)),
            currency.amount(self.amount),
            currency.amount(self.balance),
        )
    }
}

/// The human-readable description of a line item.
///
/// `brand model`, then `, capacity unit` unless the capacity is missing or
/// `N/A`, then `, color` and `, carrier` when present.
pub fn describe_item(item: &LineItem) -> String {
    let mut description = format!(
        "{} {}",
        item.brand().unwrap_or(NOT_AVAILABLE),
        item.model().unwrap_or(NOT_AVAILABLE)
    );
    if let Some(capacity) = item.capacity().filter(|c| *c != NOT_AVAILABLE) {
        description.push_str(", ");
        description.push_str(capacity);
        if let Some(unit) = item.capacity_unit() {
            description.push(' ');
            description.push_str(unit);
        }
    }
    for part in [item.color(), item.carrier()].into_iter().flatten() {
        description.push_str(", ");
        description.push_str(part);
    }
    description
}

/// Formats a line item with the default currency.
pub fn format_row(item: &LineItem) -> String {
    item.format_row(&CurrencyFormat::default())
}

/// Concatenates the rows of one page slice.
pub fn format_rows<R: RowFormat>(rows: &[R], currency: &CurrencyFormat) -> String {
    rows.iter().map(|row| row.format_row(currency)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{Decimal, NaiveDate, OrderNumber};

    #[test]
    fn test_description_omits_empty_carrier() {
        let item = LineItem::new("Acme", "X1")
            .with_capacity("128", "GB")
            .with_color("Black")
            .with_carrier("");
        assert_eq!(describe_item(&item), "Acme X1, 128 GB, Black");
    }

    #[test]
    fn test_description_full() {
        let item = LineItem::new("Acme", "X1")
            .with_capacity("256", "GB")
            .with_color("Blue")
            .with_carrier("Unlocked");
        assert_eq!(describe_item(&item), "Acme X1, 256 GB, Blue, Unlocked");
    }

    #[test]
    fn test_description_skips_na_capacity() {
        let item = LineItem::new("Acme", "X1").with_capacity("N/A", "GB");
        assert_eq!(describe_item(&item), "Acme X1");
    }

    #[test]
    fn test_description_missing_brand_and_model() {
        let item = LineItem::default().with_color("Red");
        assert_eq!(describe_item(&item), "N/A N/A, Red");
    }

    #[test]
    fn test_line_item_row() {
        let item = LineItem::new("Acme", "X1")
            .with_identifier("356938035643809")
            .with_unit_cost(Decimal::new(129999, 2));
        let row = format_row(&item);
        assert!(row.starts_with("<tr>"));
        assert!(row.contains("<td class=\"description\">Acme X1</td>"));
        assert!(row.contains("<td class=\"identifier\">356938035643809</td>"));
        assert_eq!(row.matches("$1,299.99").count(), 2);
    }

    #[test]
    fn test_line_item_row_defaults() {
        let row = format_row(&LineItem::default());
        assert!(row.contains("<td class=\"identifier\">N/A</td>"));
        assert_eq!(row.matches("$0.00").count(), 2);
    }

    #[test]
    fn test_row_escapes_markup_in_attributes() {
        let item = LineItem::new("A&B", "<X1>");
        assert!(format_row(&item).contains("A&amp;B &lt;X1&gt;"));
    }

    #[test]
    fn test_ledger_entry_row_styles_negative_amount() {
        let entry = LedgerEntry {
            date: NaiveDate::from_ymd_opt(2026, 9, 20).unwrap(),
            order_number: Some(OrderNumber::new(88)),
            description: "Bank transfer".to_string(),
            amount: Decimal::new(-500, 0),
            balance: Decimal::new(100, 0),
        };
        let row = entry.format_row(&CurrencyFormat::default());
        assert!(row.contains("Sep 20, 2026"));
        assert!(row.contains("ORD-88"));
        assert!(row.contains("<span class=\"negative\">$500.00</span>"));
        assert!(row.contains("<td class=\"amount\">$100.00</td>"));
    }

    #[test]
    fn test_format_rows_concatenates_in_order() {
        let items = vec![LineItem::new("A", "1"), LineItem::new("B", "2")];
        let rows = format_rows(&items, &CurrencyFormat::default());
        let first = rows.find("A 1").unwrap();
        let second = rows.find("B 2").unwrap();
        assert!(first < second);
        assert_eq!(rows.matches("<tr>").count(), 2);
        assert_eq!(format_rows::<LineItem>(&[], &CurrencyFormat::default()), "");
    }
}
