//! Template population for paginated financial documents.
//!
//! This crate turns records into page markup. It knows nothing about where
//! templates come from or how pages are planned; it only fills one template
//! for one slice of rows.
//!
//! ## Key Abstractions
//!
//! - **`Template`**: a compiled Handlebars page template
//! - **`Substitutions`**: the render context, values keyed by token name
//! - **`RowFormat`**: renders one line item or ledger entry as a table row
//! - **`PagedDocument`**: a record that can be split into pages of rows
//! - **`populate`**: fills a template for one page of a document

pub mod document;
pub mod error;
pub mod format;
pub mod rows;
pub mod template;
pub mod tokens;
pub mod values;

pub use document::{DocumentKind, PageContext, PagedDocument, populate};
pub use error::TemplateError;
pub use format::{
    CurrencyFormat, NO_NOTES, NOT_AVAILABLE, format_amount, format_currency, format_date,
    format_plain, format_rate,
};
pub use rows::{RowFormat, describe_item, format_row, format_rows};
pub use template::{DEFAULT_HELPER, Template};
pub use values::Substitutions;
