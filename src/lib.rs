//! price-lens - Simulated photo-to-price pipeline
//!
//! This library implements the two client-side helpers of a mock shopping
//! assistant: image intake (validation, displayable conversion, fabricated
//! product recognition, camera-frame capture) and a simulated multi-store
//! price search with client-side filtering. There is no recognition or
//! search backend; all results are randomly generated placeholder data and
//! artificial delays stand in for network latency.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layers** (`recognition`, `pricing`): Pure business logic and
//!   domain models of the two pipeline halves
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use price_lens::prelude::*;
//! use std::path::Path;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let image_reader = FileSystemImageReader::new();
//! let image = image_reader.describe(Path::new("produto-01.jpg"))?;
//!
//! // Validation is checked before processing, never thrown
//! let report = ImageValidator::validate(Some(&image));
//! assert!(report.is_valid, "{}", report.message);
//!
//! // Scan: delay, displayable conversion, fabricated recognition
//! let scan = ProcessImageUseCase::new(
//!     image_reader,
//!     ThreadRngEntropy::new(),
//!     TokioLatencySimulator::new(),
//!     StderrProgressReporter::new(),
//! );
//! let scanned = scan.execute(ScanRequest::new(image)).await?;
//!
//! // Search: delay, randomized offers across the store catalog
//! let search = SearchPricesUseCase::new(
//!     ThreadRngEntropy::new(),
//!     TokioLatencySimulator::new(),
//!     StderrProgressReporter::new(),
//! );
//! let results = search
//!     .execute(PriceSearchRequest::new(scanned.product_data.clone()))
//!     .await?;
//!
//! // Client-side filtering is pure and synchronous
//! let criteria = FilterCriteria::from_raw("all", "price_desc");
//! let offers = OfferFilter::apply(&results.offers, &criteria);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod pricing;
pub mod recognition;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::encoding::JpegFrameEncoder;
    pub use crate::adapters::outbound::entropy::ThreadRngEntropy;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemImageReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonOfferFormatter, TableOfferFormatter};
    pub use crate::adapters::outbound::timing::TokioLatencySimulator;
    pub use crate::application::dto::{
        OutputFormat, PriceSearchRequest, PriceSearchResponse, ScanRequest, ScanResponse,
    };
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::{
        CaptureFrameUseCase, ProcessImageUseCase, SearchPricesUseCase,
    };
    pub use crate::ports::outbound::{
        EntropySource, FrameEncoder, ImageReader, LatencySimulator, OfferFormatter,
        OutputPresenter, ProgressReporter,
    };
    pub use crate::pricing::domain::{
        store_by_id, FilterCriteria, Offer, SortKey, Store, StoreSelection, STORE_CATALOG,
    };
    pub use crate::pricing::services::{OfferFilter, OfferGenerator};
    pub use crate::recognition::domain::{
        CandidateImage, DisplayImage, EncodedFrame, ProductDescriptor, ValidationReport,
        VideoFrame, MAX_IMAGE_BYTES, SUPPORTED_MIME_TYPES,
    };
    pub use crate::recognition::services::{ImageValidator, ProductRecognizer};
    pub use crate::shared::Result;
}
