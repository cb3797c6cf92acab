use price_lens::cli::Args;
use price_lens::config;
use price_lens::prelude::*;
use price_lens::shared::ExitCode;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments and merge config file defaults
    let args = Args::parse_args();
    let config = config::discover_config(Path::new("."))?.unwrap_or_default();

    let format = args
        .format
        .or_else(|| {
            config
                .format
                .as_deref()
                .and_then(|f| OutputFormat::from_str(f).ok())
        })
        .unwrap_or(OutputFormat::Json);
    let store = args
        .store
        .or(config.store)
        .unwrap_or_else(|| "all".to_string());
    let sort = args.sort.or_else(|| {
        config
            .sort
            .as_deref()
            .and_then(|s| SortKey::from_str(s).ok())
    });

    if store != "all" && store_by_id(&store).is_none() {
        anyhow::bail!(
            "Unknown store id: {}\n\n💡 Hint: Use 'all' or one of the catalog ids (e.g. \"amazon\", \"kabum\")",
            store
        );
    }

    // Describe the candidate image and run the caller-side validation
    let image_reader = FileSystemImageReader::new();
    let image = image_reader.describe(Path::new(&args.image))?;

    let report = ImageValidator::validate(Some(&image));
    if !report.is_valid {
        eprintln!("❌ {}", report.message);
        return Ok(ExitCode::ImageRejected);
    }

    // Scan: delay, displayable conversion, fabricated recognition
    let scan_use_case = ProcessImageUseCase::new(
        image_reader,
        ThreadRngEntropy::new(),
        TokioLatencySimulator::new(),
        StderrProgressReporter::new(),
    );
    let scanned = scan_use_case.execute(ScanRequest::new(image)).await?;

    // Search: delay, randomized offers across the catalog
    let search_use_case = SearchPricesUseCase::new(
        ThreadRngEntropy::new(),
        TokioLatencySimulator::new(),
        StderrProgressReporter::new(),
    );
    let results = search_use_case
        .execute(PriceSearchRequest::new(scanned.product_data.clone()))
        .await?;

    // Client-side filter and sort
    let criteria = FilterCriteria {
        store: StoreSelection::from_raw(&store),
        sort,
    };
    let offers = OfferFilter::apply(&results.offers, &criteria);

    // Render and present
    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatter = FormatterFactory::create(format);
    let formatted = formatter.format(&scanned.product_data, &offers)?;

    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };
    presenter.present(&formatted)?;

    Ok(ExitCode::Success)
}
