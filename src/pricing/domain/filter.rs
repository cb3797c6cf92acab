use std::str::FromStr;

/// Which stores to keep when filtering offers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoreSelection {
    /// Sentinel matching every store
    #[default]
    All,
    /// Keep only offers from the store with this catalog id
    Only(String),
}

impl StoreSelection {
    /// Parses the raw selector, where "all" is the keep-everything sentinel.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "all" {
            StoreSelection::All
        } else {
            StoreSelection::Only(raw.to_string())
        }
    }
}

/// The sort orders the offer list supports. At most one applies per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PriceAscending,
    PriceDescending,
    RatingDescending,
    StoreName,
    FreeShippingFirst,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price_asc" => Ok(SortKey::PriceAscending),
            "price_desc" => Ok(SortKey::PriceDescending),
            "rating" => Ok(SortKey::RatingDescending),
            "store" => Ok(SortKey::StoreName),
            "shipping" => Ok(SortKey::FreeShippingFirst),
            _ => Err(format!(
                "Invalid sort key: {}. Please specify one of 'price_asc', 'price_desc', 'rating', 'store', 'shipping'",
                s
            )),
        }
    }
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAscending => "price_asc",
            SortKey::PriceDescending => "price_desc",
            SortKey::RatingDescending => "rating",
            SortKey::StoreName => "store",
            SortKey::FreeShippingFirst => "shipping",
        }
    }
}

/// Client-side filter and sort settings for an offer list.
///
/// `sort: None` leaves the ordering as given, which is also where
/// unrecognized raw sort keys land.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub store: StoreSelection,
    pub sort: Option<SortKey>,
}

impl FilterCriteria {
    /// Builds criteria from raw selector strings, mapping unknown sort keys
    /// to "leave the order alone".
    pub fn from_raw(store: &str, sort: &str) -> Self {
        Self {
            store: StoreSelection::from_raw(store),
            sort: SortKey::from_str(sort).ok(),
        }
    }
}
