use crate::adapters::outbound::formatters::{JsonOfferFormatter, TableOfferFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::OfferFormatter;

/// Factory for creating offer formatters
///
/// Encapsulates the selection of the formatting adapter for the requested
/// output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    pub fn create(format: OutputFormat) -> Box<dyn OfferFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonOfferFormatter::new()),
            OutputFormat::Table => Box::new(TableOfferFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering JSON output...",
            OutputFormat::Table => "📝 Rendering offer table...",
        }
    }
}
