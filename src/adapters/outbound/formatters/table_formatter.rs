use crate::ports::outbound::OfferFormatter;
use crate::pricing::domain::Offer;
use crate::recognition::domain::ProductDescriptor;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TableOfferFormatter adapter rendering results as a colored terminal table
pub struct TableOfferFormatter;

impl TableOfferFormatter {
    pub fn new() -> Self {
        Self
    }

    fn header(product: &ProductDescriptor) -> String {
        format!(
            "{}\n  {} | {} | confiança {}%\n",
            product.name.bold(),
            product.category,
            product.brand,
            product.confidence
        )
    }

    fn row(offer: &Offer) -> String {
        let price = format!("R$ {:>8.2}", offer.price);
        let price = if offer.old_price.is_some() {
            format!("{} (-{}%)", price.green(), offer.discount)
        } else {
            price.to_string()
        };

        let shipping = if offer.ships_free() {
            offer.shipping.cyan().to_string()
        } else {
            offer.shipping.clone()
        };

        let marker = if offer.featured {
            "★ ".yellow().to_string()
        } else {
            "  ".to_string()
        };

        format!(
            "{}{:<16} {}  {} ({} avaliações)  frete {}  entrega {}\n",
            marker,
            offer.store.name,
            price,
            offer.rating,
            offer.reviews,
            shipping,
            offer.delivery
        )
    }
}

impl Default for TableOfferFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OfferFormatter for TableOfferFormatter {
    fn format(&self, product: &ProductDescriptor, offers: &[Offer]) -> Result<String> {
        let mut output = Self::header(product);
        writeln!(output, "{}", "─".repeat(72))?;
        for offer in offers {
            output.push_str(&Self::row(offer));
        }
        writeln!(output, "{}", "─".repeat(72))?;
        writeln!(output, "{} oferta(s)", offers.len())?;
        Ok(output)
    }
}
