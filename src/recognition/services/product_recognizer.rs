use crate::ports::outbound::EntropySource;
use crate::recognition::domain::ProductDescriptor;

/// Categories the mock recognizer can "detect".
const CATEGORIES: [&str; 5] = [
    "Eletrônicos",
    "Vestuário",
    "Casa e Decoração",
    "Esportes",
    "Livros",
];

/// Brands the mock recognizer can attribute.
const BRANDS: [&str; 7] = [
    "Samsung", "Nike", "Apple", "Sony", "Adidas", "LG", "Philips",
];

/// Category-specific name prefixes, aligned index-for-index with CATEGORIES.
const NAME_PREFIXES: [(&str, [&str; 6]); 5] = [
    (
        "Eletrônicos",
        [
            "Smartphone",
            "Tablet",
            "Notebook",
            "Fone de Ouvido",
            "Smartwatch",
            "Câmera Digital",
        ],
    ),
    (
        "Vestuário",
        ["Camiseta", "Calça", "Tênis", "Jaqueta", "Vestido", "Moletom"],
    ),
    (
        "Casa e Decoração",
        [
            "Luminária",
            "Cadeira",
            "Mesa",
            "Vaso Decorativo",
            "Tapete",
            "Cortina",
        ],
    ),
    (
        "Esportes",
        [
            "Bola",
            "Raquete",
            "Tênis Esportivo",
            "Equipamento",
            "Acessório",
            "Suplemento",
        ],
    ),
    (
        "Livros",
        ["Livro", "Revista", "Manual", "Guia", "Enciclopédia", "Romance"],
    ),
];

/// Prefix used when a category has no entry in the prefix table.
const FALLBACK_PREFIX: &str = "Produto";

/// ProductRecognizer - Fabricates a recognition result from a file name
///
/// Stands in for the AI backend the real application would call. Only the
/// file name seeds the output; image bytes are never inspected. Draw order
/// per call: category, brand, confidence, prefix, numeric name suffix.
pub struct ProductRecognizer<'e> {
    entropy: &'e dyn EntropySource,
}

impl<'e> ProductRecognizer<'e> {
    pub fn new(entropy: &'e dyn EntropySource) -> Self {
        Self { entropy }
    }

    /// Fabricates a ProductDescriptor for the given source file name
    pub fn recognize(&self, file_name: &str) -> ProductDescriptor {
        let category = CATEGORIES[self.entropy.pick_index(CATEGORIES.len())];
        let brand = BRANDS[self.entropy.pick_index(BRANDS.len())];
        let confidence = format!("{:.1}", self.entropy.in_range(70.0, 100.0));
        let name = self.generate_name(file_name, category);

        ProductDescriptor {
            name,
            category: category.to_string(),
            brand: brand.to_string(),
            confidence,
            description: format!(
                "Produto {} da marca {} identificado com alta precisão pela nossa IA. \
                 Características analisadas: design, cor, modelo e especificações técnicas.",
                category.to_lowercase(),
                brand
            ),
        }
    }

    /// Builds the product name: category prefix, sanitized file base name
    /// (category name when the base sanitizes to nothing), random 0-999
    /// suffix.
    fn generate_name(&self, file_name: &str, category: &str) -> String {
        let base = sanitize_base_name(file_name);
        let base = if base.is_empty() { category } else { &base };

        let prefix = match NAME_PREFIXES.iter().find(|(c, _)| *c == category) {
            Some((_, options)) => options[self.entropy.pick_index(options.len())],
            None => FALLBACK_PREFIX,
        };

        format!("{} {} {}", prefix, base, self.entropy.int_below(1000))
    }
}

/// Strips everything from the first dot on, maps each non-alphanumeric
/// character to a space, and trims the ends.
fn sanitize_base_name(file_name: &str) -> String {
    let stem = file_name.split('.').next().unwrap_or_default();
    stem.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Replays a scripted sequence of unit draws, then falls back to a
    /// neutral constant.
    struct ScriptedEntropy {
        draws: Mutex<Vec<f64>>,
        fallback: f64,
    }

    impl ScriptedEntropy {
        fn new(draws: &[f64], fallback: f64) -> Self {
            let mut reversed: Vec<f64> = draws.to_vec();
            reversed.reverse();
            Self {
                draws: Mutex::new(reversed),
                fallback,
            }
        }

        fn constant(value: f64) -> Self {
            Self::new(&[], value)
        }
    }

    impl EntropySource for ScriptedEntropy {
        fn next_unit(&self) -> f64 {
            self.draws.lock().unwrap().pop().unwrap_or(self.fallback)
        }
    }

    #[test]
    fn test_recognize_is_deterministic_under_scripted_entropy() {
        // category idx 0, brand idx 0, confidence 70.0, prefix idx 0, suffix 123
        let entropy = ScriptedEntropy::new(&[0.0, 0.0, 0.0, 0.0, 0.1234], 0.5);
        let recognizer = ProductRecognizer::new(&entropy);

        let product = recognizer.recognize("produto-01.jpg");
        assert_eq!(product.category, "Eletrônicos");
        assert_eq!(product.brand, "Samsung");
        assert_eq!(product.confidence, "70.0");
        assert_eq!(product.name, "Smartphone produto 01 123");
        assert!(product.description.contains("eletrônicos"));
        assert!(product.description.contains("Samsung"));
    }

    #[test]
    fn test_confidence_stays_in_band() {
        let entropy = ScriptedEntropy::constant(0.999);
        let recognizer = ProductRecognizer::new(&entropy);
        let product = recognizer.recognize("x.png");
        let confidence: f64 = product.confidence.parse().unwrap();
        assert!((70.0..=100.0).contains(&confidence));
    }

    #[test]
    fn test_name_falls_back_to_category_for_empty_base() {
        // "---.jpg" sanitizes to spaces only, which trims to empty
        let entropy = ScriptedEntropy::constant(0.5);
        let recognizer = ProductRecognizer::new(&entropy);
        let product = recognizer.recognize("---.jpg");
        assert!(
            product.name.contains(&product.category),
            "name {:?} should embed category {:?}",
            product.name,
            product.category
        );
    }

    #[test]
    fn test_unknown_category_uses_fallback_prefix() {
        let entropy = ScriptedEntropy::constant(0.5);
        let recognizer = ProductRecognizer::new(&entropy);
        let name = recognizer.generate_name("foto.webp", "Brinquedos");
        assert!(name.starts_with("Produto foto "));
    }

    #[test]
    fn test_sanitize_cuts_at_first_dot() {
        assert_eq!(sanitize_base_name("produto-01.jpg"), "produto 01");
        assert_eq!(sanitize_base_name("a.b.c.png"), "a");
        assert_eq!(sanitize_base_name("férias2024.jpg"), "f rias2024");
        assert_eq!(sanitize_base_name(".hidden"), "");
        assert_eq!(sanitize_base_name(""), "");
    }

    #[test]
    fn test_generated_name_shape_for_electronics() {
        // Filename "produto-01.jpg" with Eletrônicos drawn yields
        // "<electronics prefix> produto 01 <0-999>"
        let entropy = ScriptedEntropy::new(&[0.0, 0.5, 0.5, 0.9, 0.5], 0.5);
        let recognizer = ProductRecognizer::new(&entropy);
        let product = recognizer.recognize("produto-01.jpg");

        let electronics = &NAME_PREFIXES[0].1;
        let matched = electronics.iter().any(|prefix| {
            product
                .name
                .strip_prefix(&format!("{} produto 01 ", prefix))
                .is_some_and(|suffix| suffix.parse::<u32>().is_ok_and(|n| n < 1000))
        });
        assert!(matched, "unexpected name {:?}", product.name);
    }
}
