use crate::error::TemplateError;
use crate::format::{CurrencyFormat, NO_NOTES, format_date, format_plain, format_rate};
use crate::rows::{RowFormat, format_rows};
use crate::template::Template;
use crate::tokens;
use crate::values::Substitutions;
use folio_types::{CompanyInfo, LedgerStatement, RecordId, TransactionRecord};
use std::fmt;

/// The families of documents the engine produces. Each has its own set of
/// page templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Invoice,
    Ledger,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Invoice => "invoice",
            DocumentKind::Ledger => "ledger",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-page information that does not come from the record itself.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// 1-based.
    pub page_number: usize,
    pub page_count: usize,
    pub company: &'a CompanyInfo,
    pub currency: &'a CurrencyFormat,
}

/// A record whose rows are spread across pages.
pub trait PagedDocument {
    type Row: RowFormat;

    const KIND: DocumentKind;

    fn record_id(&self) -> &RecordId;

    fn rows(&self) -> &[Self::Row];

    /// Binds the document-level tokens (party, totals, notes, ...).
    fn bind(&self, values: &mut Substitutions, currency: &CurrencyFormat);
}

impl PagedDocument for TransactionRecord {
    type Row = folio_types::LineItem;

    const KIND: DocumentKind = DocumentKind::Invoice;

    fn record_id(&self) -> &RecordId {
        &self.id
    }

    fn rows(&self) -> &[Self::Row] {
        &self.items
    }

    fn bind(&self, values: &mut Substitutions, currency: &CurrencyFormat) {
        bind_party(values, &self.party);
        values
            .text(tokens::ORDER_NUMBER, self.order_number.to_string())
            .text(tokens::DATE, format_date(self.date))
            .text(tokens::SUBTOTAL, currency.currency(self.subtotal))
            .text(tokens::TAX_LABEL_1, self.primary_tax.label.as_str())
            .text(tokens::TAX_RATE_1, format_rate(self.primary_tax.rate))
            .text(tokens::TAX_AMOUNT_1, currency.currency(self.primary_tax.amount))
            .text(tokens::TAX_LABEL_2, self.secondary_tax.label.as_str())
            .text(tokens::TAX_RATE_2, format_rate(self.secondary_tax.rate))
            .text(tokens::TAX_AMOUNT_2, currency.currency(self.secondary_tax.amount))
            .text(tokens::ADJUSTMENT_AMOUNT, format_plain(self.adjustment.amount))
            .text(tokens::ADJUSTMENT_UNIT, self.adjustment.unit.as_str())
            .text(tokens::GRAND_TOTAL, currency.currency(self.grand_total));

        let payments = &self.payments;
        values
            .markup(tokens::CASH_PAID, currency.amount(payments.cash))
            .markup(tokens::BANK_PAID, currency.amount(payments.bank))
            .markup(tokens::CREDIT_CARD_PAID, currency.amount(payments.credit_card))
            .markup(tokens::TOTAL_PAID, currency.amount(payments.total_paid))
            .markup(tokens::REMAINING_CREDIT, currency.amount(payments.remaining_credit));

        bind_notes(values, &self.notes);
    }
}

impl PagedDocument for LedgerStatement {
    type Row = folio_types::LedgerEntry;

    const KIND: DocumentKind = DocumentKind::Ledger;

    fn record_id(&self) -> &RecordId {
        &self.id
    }

    fn rows(&self) -> &[Self::Row] {
        &self.entries
    }

    fn bind(&self, values: &mut Substitutions, currency: &CurrencyFormat) {
        bind_party(values, &self.party);
        values
            .text(tokens::STATEMENT_DATE, format_date(self.statement_date))
            .optional_text(
                tokens::PERIOD_START,
                self.period_start.map(format_date).as_deref(),
            )
            .optional_text(tokens::PERIOD_END, self.period_end.map(format_date).as_deref())
            .markup(tokens::OPENING_BALANCE, currency.amount(self.opening_balance))
            .markup(tokens::CLOSING_BALANCE, currency.amount(self.closing_balance));
        bind_notes(values, &self.notes);
    }
}

fn bind_party(values: &mut Substitutions, party: &folio_types::Party) {
    values
        .text(tokens::PARTY_NAME, party.name.as_str())
        .optional_text(tokens::PARTY_PHONE, party.phone())
        .optional_text(tokens::PARTY_ADDRESS, party.address());
}

fn bind_notes(values: &mut Substitutions, notes: &str) {
    let notes = notes.trim();
    values.text(tokens::NOTES, if notes.is_empty() { NO_NOTES } else { notes });
}

fn bind_company(values: &mut Substitutions, company: &CompanyInfo) {
    values
        .optional_text(tokens::COMPANY_NAME, company.name())
        .optional_text(tokens::COMPANY_ADDRESS, company.address())
        .optional_text(tokens::COMPANY_EMAIL, company.email())
        .optional_text(tokens::COMPANY_PHONE, company.phone());
}

/// Fills `template` for one page of `document` holding `rows`.
pub fn populate<D: PagedDocument>(
    template: &Template,
    document: &D,
    rows: &[D::Row],
    page: &PageContext<'_>,
) -> Result<String, TemplateError> {
    let mut values = Substitutions::new();
    document.bind(&mut values, page.currency);
    bind_company(&mut values, page.company);
    values
        .markup(tokens::ITEM_ROWS, format_rows(rows, page.currency))
        .text(tokens::PAGE_NUMBER, page.page_number.to_string())
        .text(tokens::PAGE_COUNT, page.page_count.to_string());

    log::trace!(
        "Populating '{}' for {} {} (page {}/{}, {} rows)",
        template.name(),
        D::KIND,
        document.record_id(),
        page.page_number,
        page.page_count,
        rows.len()
    );
    template.render(&values)
}
