#![allow(dead_code)]

pub mod fixtures;
pub mod page_assertions;

use folio::{DocumentGenerator, ExecutorImpl, GenerationError, GeneratorBuilder};
use folio_traits::ResourceProvider;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A generator over the bundled templates that runs batches sequentially.
pub fn embedded_generator() -> Result<DocumentGenerator, GenerationError> {
    GeneratorBuilder::new()
        .with_executor(ExecutorImpl::sequential())
        .build()
}

/// A sequential generator over the given templates.
pub fn generator_with<R: ResourceProvider + 'static>(
    templates: R,
) -> Result<DocumentGenerator, GenerationError> {
    GeneratorBuilder::new()
        .with_provider(templates)
        .with_executor(ExecutorImpl::sequential())
        .build()
}
