//! Placeholder token names understood by the page templates.
//!
//! In a template a text token is written `{{NAME}}`, a markup token
//! (`ITEM_ROWS`, payment and balance amounts) `{{{NAME}}}`, and
//! `{{default NAME "text"}}` gives the text printed when the value is empty.

pub const PARTY_NAME: &str = "PARTY_NAME";
pub const PARTY_PHONE: &str = "PARTY_PHONE";
pub const PARTY_ADDRESS: &str = "PARTY_ADDRESS";

pub const ORDER_NUMBER: &str = "ORDER_NUMBER";
pub const DATE: &str = "DATE";
pub const SUBTOTAL: &str = "SUBTOTAL";
pub const TAX_LABEL_1: &str = "TAX_LABEL_1";
pub const TAX_RATE_1: &str = "TAX_RATE_1";
pub const TAX_AMOUNT_1: &str = "TAX_AMOUNT_1";
pub const TAX_LABEL_2: &str = "TAX_LABEL_2";
pub const TAX_RATE_2: &str = "TAX_RATE_2";
pub const TAX_AMOUNT_2: &str = "TAX_AMOUNT_2";
pub const ADJUSTMENT_AMOUNT: &str = "ADJUSTMENT_AMOUNT";
pub const ADJUSTMENT_UNIT: &str = "ADJUSTMENT_UNIT";
pub const GRAND_TOTAL: &str = "GRAND_TOTAL";

pub const CASH_PAID: &str = "CASH_PAID";
pub const BANK_PAID: &str = "BANK_PAID";
pub const CREDIT_CARD_PAID: &str = "CREDIT_CARD_PAID";
pub const TOTAL_PAID: &str = "TOTAL_PAID";
pub const REMAINING_CREDIT: &str = "REMAINING_CREDIT";

pub const STATEMENT_DATE: &str = "STATEMENT_DATE";
pub const PERIOD_START: &str = "PERIOD_START";
pub const PERIOD_END: &str = "PERIOD_END";
pub const OPENING_BALANCE: &str = "OPENING_BALANCE";
pub const CLOSING_BALANCE: &str = "CLOSING_BALANCE";

pub const NOTES: &str = "NOTES";
pub const ITEM_ROWS: &str = "ITEM_ROWS";

pub const COMPANY_NAME: &str = "COMPANY_NAME";
pub const COMPANY_ADDRESS: &str = "COMPANY_ADDRESS";
pub const COMPANY_EMAIL: &str = "COMPANY_EMAIL";
pub const COMPANY_PHONE: &str = "COMPANY_PHONE";

pub const PAGE_NUMBER: &str = "PAGE_NUMBER";
pub const PAGE_COUNT: &str = "PAGE_COUNT";
