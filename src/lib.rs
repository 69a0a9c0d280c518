//! Paginated invoice and ledger generation.
//!
//! A record (an invoice-style transaction or a ledger statement) is split
//! into pages by a [`PaginationPolicy`], each page is filled from one of five
//! Handlebars templates (single, first, middle, last, footer), and the pages
//! come back as markup in print order.
//!
//! ```ignore
//! use folio::{GeneratorBuilder, TransactionRecord, Record};
//!
//! let generator = GeneratorBuilder::new().with_template_dir("templates").build()?;
//! let record = TransactionRecord::from_json_str(&input)?;
//! for page in generator.generate_invoice(&record)? {
//!     println!("{}", page.markup());
//! }
//! ```

pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod output;

pub use builder::GeneratorBuilder;
pub use config::{GeneratorConfig, TemplateSet};
pub use document::PageDocument;
pub use error::GenerationError;
pub use generator::DocumentGenerator;

pub use folio_executor::{ExecutorImpl, SyncExecutor};
#[cfg(feature = "rayon-executor")]
pub use folio_executor::RayonExecutor;
pub use folio_layout::{PageKind, PagePlan, PaginationPolicy};
pub use folio_template::{DocumentKind, PagedDocument, TemplateError};
pub use folio_types::{
    CompanyInfo, LedgerEntry, LedgerStatement, LineItem, Party, Record, RecordError, RecordId,
    TransactionRecord,
};
