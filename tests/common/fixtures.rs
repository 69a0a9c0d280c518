use folio::{LedgerStatement, PageKind, Record, TransactionRecord};
use folio_traits::InMemoryResourceProvider;
use serde_json::{Value, json};

/// A phone line item as the data-access layer sends it.
pub fn item(index: usize) -> Value {
    json!({
        "brand": "Acme",
        "model": format!("X{index}"),
        "capacity": "128",
        "capacityUnit": "GB",
        "color": "Black",
        "imei": format!("35000000000{index:04}"),
        "unitCost": "199.99"
    })
}

pub fn invoice_json(id: &str, item_count: usize) -> Value {
    json!({
        "id": id,
        "date": "2026-10-05",
        "orderNumber": 1042,
        "party": {
            "name": "Harbor Phones",
            "phone": "555-0100",
            "address": "12 Pier Road"
        },
        "subtotal": "1999.90",
        "primaryTax": { "label": "GST", "rate": 5, "amount": "99.99" },
        "secondaryTax": { "label": "PST", "rate": 7, "amount": "139.99" },
        "adjustment": { "amount": -10, "unit": "$" },
        "grandTotal": "2229.88",
        "notes": "Deliver to loading bay",
        "paymentMethods": {
            "cash": 1000,
            "creditCard": "500.00",
            "totalPaid": 1500,
            "remainingCredit": "-729.88"
        },
        "items": (0..item_count).map(item).collect::<Vec<_>>()
    })
}

pub fn invoice(item_count: usize) -> TransactionRecord {
    TransactionRecord::from_value(invoice_json("po-1042", item_count))
        .expect("fixture invoice is valid")
}

pub fn ledger_json(id: &str, entry_count: usize) -> Value {
    let entries: Vec<Value> = (0..entry_count)
        .map(|i| {
            json!({
                "date": "2026-09-15",
                "orderNumber": 2000 + i,
                "description": format!("Order {i}"),
                "amount": if i % 2 == 0 { "150.00" } else { "-50.00" },
                "balance": format!("{}.00", 100 + (i / 2) * 100)
            })
        })
        .collect();
    json!({
        "id": id,
        "statementDate": "2026-09-30",
        "party": { "name": "Harbor Phones" },
        "periodStart": "2026-09-01",
        "periodEnd": "2026-09-30",
        "openingBalance": 0,
        "closingBalance": "-75.00",
        "entries": entries
    })
}

pub fn ledger(entry_count: usize) -> LedgerStatement {
    LedgerStatement::from_value(ledger_json("ledger-2026-09", entry_count))
        .expect("fixture ledger is valid")
}

/// One line per page: `<kind> <n>/<count> [<rows>] <totals>`.
pub fn minimal_template(page: PageKind) -> String {
    let totals = if page.carries_totals() {
        " total={{GRAND_TOTAL}} bank={{{BANK_PAID}}}"
    } else {
        ""
    };
    format!(
        "{} {{{{PAGE_NUMBER}}}}/{{{{PAGE_COUNT}}}} [{{{{{{ITEM_ROWS}}}}}}]{totals}",
        page.template_stem()
    )
}

/// Minimal invoice templates for the given page kinds.
pub fn minimal_invoice_templates(pages: &[PageKind]) -> InMemoryResourceProvider {
    let provider = InMemoryResourceProvider::new();
    for page in pages {
        provider
            .add_text(
                format!("invoice/{}.html", page.template_stem()),
                &minimal_template(*page),
            )
            .expect("in-memory store accepts templates");
    }
    provider
}
