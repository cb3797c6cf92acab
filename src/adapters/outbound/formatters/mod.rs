/// Output formatting adapters.
pub mod json_formatter;
pub mod table_formatter;

pub use json_formatter::JsonOfferFormatter;
pub use table_formatter::TableOfferFormatter;
