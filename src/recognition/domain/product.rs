use serde::Serialize;

/// Fabricated identification result standing in for a real recognition
/// backend's output.
///
/// Every field is placeholder data: category and brand are uniform draws
/// from fixed sets, the confidence is a random score formatted the way the
/// mock backend reports it, and the name is derived from the source file
/// name alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDescriptor {
    pub name: String,
    pub category: String,
    pub brand: String,
    /// Recognition confidence as a one-decimal string in 70.0-100.0
    pub confidence: String,
    pub description: String,
}
