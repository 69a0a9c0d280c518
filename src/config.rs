use crate::error::GenerationError;
use folio_layout::{PageKind, PaginationPolicy};
use folio_template::{CurrencyFormat, DocumentKind};
use folio_types::CompanyInfo;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where each page template lives inside a template provider.
///
/// Paths are `<document dir>/<page stem>.<extension>`, for example
/// `invoice/first_page.html`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSet {
    pub invoice_dir: String,
    pub ledger_dir: String,
    pub extension: String,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self {
            invoice_dir: DocumentKind::Invoice.as_str().to_string(),
            ledger_dir: DocumentKind::Ledger.as_str().to_string(),
            extension: "html".to_string(),
        }
    }
}

impl TemplateSet {
    pub fn path(&self, document: DocumentKind, page: PageKind) -> String {
        let dir = match document {
            DocumentKind::Invoice => &self.invoice_dir,
            DocumentKind::Ledger => &self.ledger_dir,
        };
        let stem = page.template_stem();
        if dir.is_empty() {
            format!("{stem}.{}", self.extension)
        } else {
            format!("{dir}/{stem}.{}", self.extension)
        }
    }
}

/// Settings shared by every document a generator produces.
///
/// Every field has a default, so a config file only needs the parts it
/// changes:
///
/// ```json
/// {
///   "company": { "name": "Harbor Phones", "email": "billing@harbor.test" },
///   "currency_symbol": "$",
///   "pagination": { "continuation_page_max": 20 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub company: CompanyInfo,
    pub currency_symbol: String,
    pub pagination: PaginationPolicy,
    pub templates: TemplateSet,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            company: CompanyInfo::default(),
            currency_symbol: CurrencyFormat::default().symbol().to_string(),
            pagination: PaginationPolicy::default(),
            templates: TemplateSet::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(source: &str) -> Result<Self, GenerationError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, GenerationError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            GenerationError::Config(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        log::debug!("Loaded generator config from {}", path.display());
        Self::from_json_str(&source)
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        self.pagination.validate()?;
        if self.templates.extension.trim().is_empty() {
            return Err(GenerationError::Config(
                "templates.extension must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_symbol.as_str())
    }
}
