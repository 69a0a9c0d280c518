use folio_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::sync::Arc;

macro_rules! bundled {
    ($($path:literal),* $(,)?) => {
        &[$(($path, include_str!(concat!("../templates/", $path)))),*]
    };
}

/// The stock templates, addressed the same way as a template directory.
const BUNDLED: &[(&str, &str)] = bundled![
    "invoice/single_page.html",
    "invoice/first_page.html",
    "invoice/middle_page.html",
    "invoice/last_page.html",
    "invoice/footer_page.html",
    "ledger/single_page.html",
    "ledger/first_page.html",
    "ledger/middle_page.html",
    "ledger/last_page.html",
    "ledger/footer_page.html",
];

/// The default page templates, compiled into the binary.
///
/// Used when no template directory is configured. The row capacities of the
/// default pagination policy are tuned to these layouts.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Relative paths of every bundled template.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> {
        BUNDLED.iter().map(|(path, _)| *path)
    }

    fn find(path: &str) -> Option<&'static str> {
        BUNDLED
            .iter()
            .find(|(candidate, _)| *candidate == path)
            .map(|(_, text)| *text)
    }
}

impl ResourceProvider for EmbeddedTemplates {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        Self::find(path)
            .map(|text| Arc::new(text.as_bytes().to_vec()))
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        Self::find(path).is_some()
    }

    fn load_text(&self, path: &str) -> Result<String, ResourceError> {
        Self::find(path)
            .map(str::to_string)
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn name(&self) -> &'static str {
        "EmbeddedTemplates"
    }
}
