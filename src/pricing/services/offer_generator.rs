use crate::ports::outbound::EntropySource;
use crate::pricing::domain::{
    Offer, DELIVERY_FAST, DELIVERY_STANDARD, FREE_SHIPPING, STORE_CATALOG,
};
use crate::recognition::domain::ProductDescriptor;
use chrono::Utc;

/// Minimum and maximum number of offers per search.
const MIN_OFFERS: u32 = 8;
const MAX_OFFERS: u32 = 15;

/// Base price band before any discount, in currency units.
const PRICE_MIN: f64 = 50.0;
const PRICE_MAX: f64 = 850.0;

/// Probability that an offer carries a discount, and the discount ceiling.
const DISCOUNT_PROBABILITY: f64 = 0.4;
const MAX_DISCOUNT: f64 = 0.5;

/// Probability that shipping is free; paid shipping cost band.
const FREE_SHIPPING_PROBABILITY: f64 = 0.6;
const SHIPPING_MIN: f64 = 5.0;
const SHIPPING_MAX: f64 = 30.0;

/// Probability of the fast delivery window.
const FAST_DELIVERY_PROBABILITY: f64 = 0.5;

/// Probability that the first offer is flagged as featured.
const FEATURED_PROBABILITY: f64 = 0.7;

/// Title variants cycled by offer index. Round-robin, not random.
const TITLE_VARIANTS: [&str; 14] = [
    "Modelo Premium",
    "Edição Especial",
    "Kit Completo",
    "Cor Preta",
    "Cor Branca",
    "Tamanho Único",
    "Tamanho M",
    "Tamanho G",
    "Com Acessórios",
    "Versão 2024",
    "Promoção Relâmpago",
    "Últimas Unidades",
    "Frete Grátis",
    "Garantia Estendida",
];

/// OfferGenerator - Fabricates the offer list a real search would return
///
/// Draw order per offer is part of the contract so tests can script exact
/// sequences: store, base price, discount chance (then amount when it
/// hits), rating, reviews, shipping chance (then cost when paid), delivery,
/// featured (first offer only), image suffix. The returned list is sorted
/// ascending by final price.
pub struct OfferGenerator<'e> {
    entropy: &'e dyn EntropySource,
}

impl<'e> OfferGenerator<'e> {
    pub fn new(entropy: &'e dyn EntropySource) -> Self {
        Self { entropy }
    }

    /// Generates between MIN_OFFERS and MAX_OFFERS fresh offers for the
    /// recognized product
    pub fn generate(&self, product: &ProductDescriptor) -> Vec<Offer> {
        let count = MIN_OFFERS + self.entropy.int_below(MAX_OFFERS - MIN_OFFERS + 1);

        let mut offers: Vec<Offer> = (0..count as usize)
            .map(|index| self.generate_offer(product, index))
            .collect();

        offers.sort_by(|a, b| a.price.total_cmp(&b.price));
        offers
    }

    fn generate_offer(&self, product: &ProductDescriptor, index: usize) -> Offer {
        let store = STORE_CATALOG[self.entropy.pick_index(STORE_CATALOG.len())];
        let base_price = self.entropy.in_range(PRICE_MIN, PRICE_MAX);
        let (price, old_price, discount) = self.draw_pricing(base_price);
        let rating = format!("{:.1}", self.entropy.in_range(3.0, 5.0));
        let reviews = self.entropy.int_below(5000);

        let shipping = if self.entropy.chance(FREE_SHIPPING_PROBABILITY) {
            FREE_SHIPPING.to_string()
        } else {
            format!("R$ {:.2}", self.entropy.in_range(SHIPPING_MIN, SHIPPING_MAX))
        };

        let delivery = if self.entropy.chance(FAST_DELIVERY_PROBABILITY) {
            DELIVERY_FAST.to_string()
        } else {
            DELIVERY_STANDARD.to_string()
        };

        let featured = index == 0 && self.entropy.chance(FEATURED_PROBABILITY);

        Offer {
            id: format!("result-{}-{}", index, Utc::now().timestamp_millis()),
            title: format!(
                "{} - {}",
                product.name,
                TITLE_VARIANTS[index % TITLE_VARIANTS.len()]
            ),
            price,
            old_price,
            discount,
            store,
            rating,
            reviews,
            shipping,
            delivery,
            image: format!(
                "https://picsum.photos/300/200?random={}",
                index as u32 + self.entropy.int_below(1000)
            ),
            url: format!("https://{}.com/produto-{}", store.id, index),
            featured,
        }
    }

    /// Draws the price triple. An offer is discounted with probability
    /// DISCOUNT_PROBABILITY by a fraction in [0, MAX_DISCOUNT); draws whose
    /// rounded percent is 0 or whose rounded prices coincide are emitted as
    /// undiscounted so that `old_price` is Some exactly when `discount > 0`
    /// and `old_price > price`.
    fn draw_pricing(&self, base_price: f64) -> (f64, Option<f64>, u8) {
        let full = round_cents(base_price);
        if !self.entropy.chance(DISCOUNT_PROBABILITY) {
            return (full, None, 0);
        }

        let fraction = self.entropy.in_range(0.0, MAX_DISCOUNT);
        let discounted = round_cents(base_price * (1.0 - fraction));
        let percent = (fraction * 100.0).round() as u8;
        if percent > 0 && full > discounted {
            (discounted, Some(full), percent)
        } else {
            (full, None, 0)
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

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

    fn product() -> ProductDescriptor {
        ProductDescriptor {
            name: "Smartphone produto 01 123".to_string(),
            category: "Eletrônicos".to_string(),
            brand: "Samsung".to_string(),
            confidence: "92.3".to_string(),
            description: "desc".to_string(),
        }
    }

    #[test]
    fn test_offer_count_band() {
        // count draw 0.0 -> 8 offers; 0.999 -> 15 offers
        let generator_entropy = ScriptedEntropy::new(&[0.0], 0.5);
        let generator = OfferGenerator::new(&generator_entropy);
        assert_eq!(generator.generate(&product()).len(), 8);

        let generator_entropy = ScriptedEntropy::new(&[0.999], 0.5);
        let generator = OfferGenerator::new(&generator_entropy);
        assert_eq!(generator.generate(&product()).len(), 15);
    }

    #[test]
    fn test_offers_sorted_ascending_by_price() {
        let entropy = ScriptedEntropy::constant(0.37);
        let generator = OfferGenerator::new(&entropy);
        let offers = generator.generate(&product());
        for pair in offers.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn test_discount_invariant() {
        // First offer discounted: count, store, base price, discount chance
        // hit, amount 25%, then neutral draws.
        let entropy = ScriptedEntropy::new(&[0.0, 0.0, 0.5, 0.0, 0.5], 0.9);
        let generator = OfferGenerator::new(&entropy);
        let offers = generator.generate(&product());

        for offer in &offers {
            match offer.old_price {
                Some(old) => {
                    assert!(offer.discount > 0);
                    assert!(old > offer.price);
                }
                None => assert_eq!(offer.discount, 0),
            }
        }
        // The scripted 25% draw must survive as an actual discount
        let discounted = offers.iter().find(|o| o.old_price.is_some()).unwrap();
        assert_eq!(discounted.discount, 25);
        assert_eq!(discounted.old_price, Some(450.0));
        assert_eq!(discounted.price, 337.5);
    }

    #[test]
    fn test_zero_percent_draw_is_emitted_undiscounted() {
        // Discount chance hits but the amount draw is 0.0 -> 0%
        let entropy = ScriptedEntropy::new(&[0.0, 0.0, 0.5, 0.0, 0.0], 0.9);
        let generator = OfferGenerator::new(&entropy);
        let offers = generator.generate(&product());
        let first = offers.iter().find(|o| o.url.ends_with("produto-0")).unwrap();
        assert_eq!(first.discount, 0);
        assert_eq!(first.old_price, None);
    }

    #[test]
    fn test_titles_cycle_variant_list() {
        let entropy = ScriptedEntropy::new(&[0.999], 0.9);
        let generator = OfferGenerator::new(&entropy);
        let offers = generator.generate(&product());
        assert_eq!(offers.len(), 15);

        // Offer index is recoverable from the url suffix
        for offer in &offers {
            let index: usize = offer
                .url
                .rsplit('-')
                .next()
                .unwrap()
                .parse()
                .unwrap();
            let expected = TITLE_VARIANTS[index % TITLE_VARIANTS.len()];
            assert!(offer.title.ends_with(expected));
            assert!(offer.title.starts_with("Smartphone produto 01 123 - "));
        }
    }

    #[test]
    fn test_value_bands() {
        let entropy = ScriptedEntropy::constant(0.73);
        let generator = OfferGenerator::new(&entropy);
        for offer in generator.generate(&product()) {
            assert!(offer.price >= 25.0 && offer.price < 850.0);
            let rating: f64 = offer.rating.parse().unwrap();
            assert!((3.0..=5.0).contains(&rating));
            assert!(offer.reviews < 5000);
            assert!(offer.discount <= 50);
            assert!(offer.delivery == DELIVERY_FAST || offer.delivery == DELIVERY_STANDARD);
            assert!(offer.id.starts_with("result-"));
        }
    }

    #[test]
    fn test_only_first_offer_can_be_featured() {
        let entropy = ScriptedEntropy::constant(0.1);
        let generator = OfferGenerator::new(&entropy);
        let offers = generator.generate(&product());
        for offer in offers.iter().filter(|o| !o.url.ends_with("produto-0")) {
            assert!(!offer.featured);
        }
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(449.999), 450.0);
        assert_eq!(round_cents(337.504), 337.5);
    }
}
