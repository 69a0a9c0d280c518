use crate::config::GeneratorConfig;
use crate::document::PageDocument;
use crate::error::GenerationError;
use folio_executor::{Executor, ExecutorImpl};
use folio_layout::{PageKind, PagePlan};
use folio_resource::EmbeddedTemplates;
use folio_template::{CurrencyFormat, PageContext, PagedDocument, Template, populate};
use folio_traits::ResourceProvider;
use folio_types::{LedgerStatement, TransactionRecord};
use std::collections::HashMap;
use std::sync::Arc;

/// Turns records into ordered page markup.
///
/// A generator is cheap to clone and safe to share between threads. Each
/// call plans its pages, loads the templates the plan needs, and renders;
/// nothing is cached between calls, so editing a template directory takes
/// effect on the next document.
#[derive(Debug, Clone)]
pub struct DocumentGenerator {
    provider: Arc<dyn ResourceProvider>,
    config: Arc<GeneratorConfig>,
    currency: CurrencyFormat,
    executor: ExecutorImpl,
}

impl DocumentGenerator {
    /// Validates `config` and pairs it with a template provider.
    pub fn new(
        provider: Arc<dyn ResourceProvider>,
        config: GeneratorConfig,
        executor: ExecutorImpl,
    ) -> Result<Self, GenerationError> {
        config.validate()?;
        log::debug!(
            "Document generator using {} with {}",
            provider.name(),
            executor.name()
        );
        Ok(Self {
            provider,
            currency: config.currency(),
            config: Arc::new(config),
            executor,
        })
    }

    /// A generator over the bundled templates with the default configuration.
    pub fn with_embedded_templates() -> Self {
        Self {
            provider: Arc::new(EmbeddedTemplates::new()),
            currency: CurrencyFormat::default(),
            config: Arc::new(GeneratorConfig::default()),
            executor: ExecutorImpl::default(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Computes the page plan `generate` would use for `document`.
    pub fn plan<D: PagedDocument>(&self, document: &D) -> PagePlan {
        self.config.pagination.plan(document.rows().len())
    }

    /// Renders every page of `document`, in print order.
    ///
    /// All templates the plan needs are loaded and compiled before the first
    /// page is rendered. A missing or unreadable template fails the call with
    /// `TemplateNotFound`, a malformed one or an unbound token with
    /// `Template`; either way nothing is returned.
    pub fn generate<D: PagedDocument>(
        &self,
        document: &D,
    ) -> Result<Vec<PageDocument>, GenerationError> {
        let rows = document.rows();
        let plan = self.plan(document);
        let templates = self.resolve_templates::<D>(&plan)?;
        let page_count = plan.len();

        let mut pages = Vec::with_capacity(page_count);
        for (index, planned) in plan.iter().enumerate() {
            let template = templates.get(&planned.kind).ok_or_else(|| {
                GenerationError::Config(format!("no template resolved for {} page", planned.kind))
            })?;
            let context = PageContext {
                page_number: index + 1,
                page_count,
                company: &self.config.company,
                currency: &self.currency,
            };
            let markup = populate(template, document, &rows[planned.items.clone()], &context)?;
            pages.push(PageDocument::new(index + 1, markup));
        }

        log::debug!(
            "Generated {} {} with {} page(s) for {} row(s)",
            D::KIND,
            document.record_id(),
            pages.len(),
            rows.len()
        );
        Ok(pages)
    }

    pub fn generate_invoice(
        &self,
        record: &TransactionRecord,
    ) -> Result<Vec<PageDocument>, GenerationError> {
        self.generate(record)
    }

    pub fn generate_ledger(
        &self,
        statement: &LedgerStatement,
    ) -> Result<Vec<PageDocument>, GenerationError> {
        self.generate(statement)
    }

    /// Generates many documents independently on the configured executor.
    ///
    /// Results are in input order. A failing document does not affect the
    /// others.
    pub fn generate_batch<D>(
        &self,
        documents: Vec<D>,
    ) -> Vec<Result<Vec<PageDocument>, GenerationError>>
    where
        D: PagedDocument + Send + 'static,
    {
        log::info!(
            "Generating {} {} document(s) on {} (parallelism {})",
            documents.len(),
            D::KIND,
            self.executor.name(),
            self.executor.parallelism()
        );
        let generator = self.clone();
        self.executor
            .execute_all_fallible(documents, move |document| generator.generate(&document))
    }

    fn resolve_templates<D: PagedDocument>(
        &self,
        plan: &PagePlan,
    ) -> Result<HashMap<PageKind, Template>, GenerationError> {
        let mut templates = HashMap::new();
        for planned in plan {
            if templates.contains_key(&planned.kind) {
                continue;
            }
            let name = self.config.templates.path(D::KIND, planned.kind);
            let source = self.provider.load_text(&name).map_err(|source| {
                log::debug!("Template '{name}' unavailable from {}: {source}", self.provider.name());
                GenerationError::TemplateNotFound {
                    name: name.clone(),
                    source,
                }
            })?;
            log::debug!("Resolved template '{name}'");
            templates.insert(planned.kind, Template::parse(name, &source)?);
        }
        Ok(templates)
    }
}
