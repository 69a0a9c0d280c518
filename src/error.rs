use folio_layout::LayoutError;
use folio_template::TemplateError;
use folio_traits::ResourceError;
use folio_types::RecordError;
use thiserror::Error;

/// Everything that can stop a document from being generated.
///
/// Any of these aborts the whole call; a generator never returns a partial
/// page list.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Template not found: {name}")]
    TemplateNotFound {
        name: String,
        #[source]
        source: ResourceError,
    },

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] RecordError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
