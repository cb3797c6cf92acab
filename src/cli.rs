use clap::Parser;

use crate::application::dto::OutputFormat;
use crate::pricing::domain::SortKey;

/// Scan a product photo and compare simulated store prices
#[derive(Parser, Debug)]
#[command(name = "price-lens")]
#[command(version)]
#[command(
    about = "Scan a product photo and compare simulated store prices",
    long_about = None
)]
pub struct Args {
    /// Path to the product photo (jpg, png or webp, up to 10MB)
    pub image: String,

    /// Output format: json or table (default: json, config file can override)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Only keep offers from this store id ("all" keeps every store)
    #[arg(short, long)]
    pub store: Option<String>,

    /// Sort offers: price_asc, price_desc, rating, store or shipping
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
