use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::generator::DocumentGenerator;
use folio_executor::ExecutorImpl;
use folio_layout::PaginationPolicy;
use folio_resource::{EmbeddedTemplates, FilesystemResourceProvider};
use folio_traits::ResourceProvider;
use folio_types::CompanyInfo;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A builder for creating a `DocumentGenerator`.
///
/// Templates come from, in order of preference, an explicit provider, a
/// template directory, or the templates bundled with the crate.
#[derive(Debug, Default)]
pub struct GeneratorBuilder {
    provider: Option<Arc<dyn ResourceProvider>>,
    template_dir: Option<PathBuf>,
    config: GeneratorConfig,
    executor: Option<ExecutorImpl>,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads page templates from `<dir>/<document>/<page>.html`.
    pub fn with_template_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.template_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Loads page templates from any provider (in-memory, embedded, ...).
    pub fn with_provider<R: ResourceProvider + 'static>(mut self, provider: R) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Replaces the whole configuration. Later `with_company` or
    /// `with_policy` calls still apply on top of it.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, GenerationError> {
        self.config = GeneratorConfig::from_json_file(path)?;
        Ok(self)
    }

    pub fn with_company(mut self, company: CompanyInfo) -> Self {
        self.config.company = company;
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.currency_symbol = symbol.into();
        self
    }

    pub fn with_policy(mut self, policy: PaginationPolicy) -> Self {
        self.config.pagination = policy;
        self
    }

    /// Selects the executor used by `generate_batch`. Defaults to rayon when
    /// the `rayon-executor` feature is on.
    pub fn with_executor(mut self, executor: ExecutorImpl) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Consumes the builder, validating the configuration and the template
    /// source.
    pub fn build(self) -> Result<DocumentGenerator, GenerationError> {
        let provider: Arc<dyn ResourceProvider> = match (self.provider, self.template_dir) {
            (Some(_), Some(dir)) => {
                return Err(GenerationError::Config(format!(
                    "Both a template provider and a template directory ({}) were configured",
                    dir.display()
                )));
            }
            (Some(provider), None) => provider,
            (None, Some(dir)) => {
                let provider = FilesystemResourceProvider::open(&dir).map_err(|e| {
                    GenerationError::Config(format!("Invalid template directory: {e}"))
                })?;
                Arc::new(provider)
            }
            (None, None) => Arc::new(EmbeddedTemplates::new()),
        };

        log::info!("Loading templates through {}", provider.name());
        DocumentGenerator::new(provider, self.config, self.executor.unwrap_or_default())
    }
}
