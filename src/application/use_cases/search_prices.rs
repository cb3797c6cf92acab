use crate::application::dto::{PriceSearchRequest, PriceSearchResponse};
use crate::ports::outbound::{EntropySource, LatencySimulator, ProgressReporter};
use crate::pricing::domain::STORE_CATALOG;
use crate::pricing::services::OfferGenerator;
use crate::shared::Result;
use std::time::Duration;

/// Artificial multi-store search latency (milliseconds)
const SEARCH_DELAY_MS: u64 = 2000;

/// SearchPricesUseCase - Core use case for the simulated price search
///
/// Simulates querying every store in the catalog: one injected delay,
/// then a freshly fabricated offer list sorted ascending by price.
/// Generation cannot fail; the Result return keeps the operation shape
/// uniform across the pipeline.
///
/// # Type Parameters
/// * `ES` - EntropySource implementation
/// * `LS` - LatencySimulator implementation
/// * `PR` - ProgressReporter implementation
pub struct SearchPricesUseCase<ES, LS, PR> {
    entropy: ES,
    latency: LS,
    progress_reporter: PR,
}

impl<ES, LS, PR> SearchPricesUseCase<ES, LS, PR>
where
    ES: EntropySource,
    LS: LatencySimulator,
    PR: ProgressReporter,
{
    /// Creates a new SearchPricesUseCase with injected dependencies
    pub fn new(entropy: ES, latency: LS, progress_reporter: PR) -> Self {
        Self {
            entropy,
            latency,
            progress_reporter,
        }
    }

    /// Executes the simulated search for the recognized product
    ///
    /// # Arguments
    /// * `request` - Search request carrying the product descriptor
    ///
    /// # Returns
    /// PriceSearchResponse with 8-15 offers sorted ascending by price
    pub async fn execute(&self, request: PriceSearchRequest) -> Result<PriceSearchResponse> {
        self.progress_reporter
            .report(&format!("🛒 Searching offers for: {}", request.product.name));
        self.progress_reporter.begin_wait(&format!(
            "🔍 Comparing prices across {} stores...",
            STORE_CATALOG.len()
        ));

        self.latency
            .simulate(Duration::from_millis(SEARCH_DELAY_MS))
            .await;

        let generator = OfferGenerator::new(&self.entropy);
        let offers = generator.generate(&request.product);

        self.progress_reporter
            .finish_wait(&format!("✅ Found {} offer(s)", offers.len()));

        Ok(PriceSearchResponse::new(offers))
    }
}
