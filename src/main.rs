use clap::{Parser, ValueEnum};
use folio::output::{OutputNames, write_pages};
use folio::{
    ExecutorImpl, GenerationError, GeneratorBuilder, LedgerStatement, PagedDocument, Record,
    TransactionRecord,
};
use folio_source::{DataSource, VecDataSource, records};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Invoice,
    Ledger,
}

/// Render paginated invoices or ledger statements from JSON records.
#[derive(Debug, Parser)]
#[command(name = "folio", version)]
struct Cli {
    /// A JSON file holding one record or an array of records.
    input: PathBuf,

    #[arg(long, value_enum, default_value_t = Kind::Invoice)]
    kind: Kind,

    /// Template directory laid out as <kind>/<page>.html. Defaults to the
    /// bundled templates.
    #[arg(long, value_name = "DIR")]
    templates: Option<PathBuf>,

    /// Generator configuration (company details, currency, pagination).
    #[arg(long, value_name = "CONFIG.json")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "DIR", default_value = "out")]
    out: PathBuf,

    /// Generate records one after another on the calling thread.
    #[arg(long, conflicts_with = "threads")]
    sequential: bool,

    /// Size of the worker pool.
    #[arg(long, value_name = "N")]
    threads: Option<usize>,
}

fn main() -> Result<ExitCode, GenerationError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("folio=info"))
        .init();

    let cli = Cli::parse();

    let mut builder = GeneratorBuilder::new();
    if let Some(config) = &cli.config {
        builder = builder.with_config_file(config)?;
    }
    if let Some(dir) = &cli.templates {
        builder = builder.with_template_dir(dir);
    }
    if cli.sequential {
        builder = builder.with_executor(ExecutorImpl::sequential());
    } else if let Some(threads) = cli.threads {
        builder = builder.with_executor(ExecutorImpl::with_threads(threads));
    }
    let generator = builder.build()?;

    log::info!("Reading records from {}", cli.input.display());
    let mut source = VecDataSource::from_reader(BufReader::new(File::open(&cli.input)?))?;

    let failures = match cli.kind {
        Kind::Invoice => run::<TransactionRecord>(&generator, &mut source, &cli.out),
        Kind::Ledger => run::<LedgerStatement>(&generator, &mut source, &cli.out),
    };

    if failures > 0 {
        log::error!("{failures} record(s) failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Generates every record in `source` and writes each document to its own
/// directory. Returns the number of records that could not be generated or
/// written; a failure never stops the remaining records.
fn run<D>(
    generator: &folio::DocumentGenerator,
    source: &mut dyn DataSource,
    out: &Path,
) -> usize
where
    D: Record + PagedDocument + Send + 'static,
{
    let mut failures = 0;
    let mut documents = Vec::new();
    let mut positions = Vec::new();
    for (index, record) in records::<D, _>(source) {
        match record {
            Ok(document) => {
                positions.push(index);
                documents.push(document);
            }
            Err(e) => {
                log::error!("Skipping record #{index}: {e}");
                failures += 1;
            }
        }
    }

    let mut output_names = OutputNames::new();
    let names: Vec<String> = documents
        .iter()
        .zip(&positions)
        .map(|(document, &index)| output_names.assign(document.record_id(), index))
        .collect();

    for (name, result) in names.iter().zip(generator.generate_batch(documents)) {
        let written = result
            .and_then(|pages| write_pages(out, name, &pages).map_err(GenerationError::from));
        if let Err(e) = written {
            log::error!("Record '{name}' failed: {e}");
            failures += 1;
        }
    }
    failures
}
