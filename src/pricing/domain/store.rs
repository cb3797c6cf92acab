use serde::Serialize;

/// One simulated retailer.
///
/// The catalog is fixed for the process lifetime; offers reference entries
/// by value and nothing ever mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Store {
    pub id: &'static str,
    pub name: &'static str,
    pub logo: &'static str,
    pub color: &'static str,
}

/// The fixed catalog of simulated stores, surfaced to callers.
pub const STORE_CATALOG: [Store; 8] = [
    Store {
        id: "amazon",
        name: "Amazon",
        logo: "A",
        color: "#FF9900",
    },
    Store {
        id: "mercadolivre",
        name: "Mercado Livre",
        logo: "ML",
        color: "#FFF159",
    },
    Store {
        id: "americanas",
        name: "Americanas",
        logo: "A",
        color: "#FF0000",
    },
    Store {
        id: "magazineluiza",
        name: "Magazine Luiza",
        logo: "ML",
        color: "#FF6B00",
    },
    Store {
        id: "casasbahia",
        name: "Casas Bahia",
        logo: "CB",
        color: "#0040FF",
    },
    Store {
        id: "kabum",
        name: "Kabum",
        logo: "K",
        color: "#00A650",
    },
    Store {
        id: "submarino",
        name: "Submarino",
        logo: "S",
        color: "#0000FF",
    },
    Store {
        id: "shoptime",
        name: "Shoptime",
        logo: "ST",
        color: "#FF69B4",
    },
];

/// Looks up a catalog entry by its id.
pub fn store_by_id(id: &str) -> Option<&'static Store> {
    STORE_CATALOG.iter().find(|store| store.id == id)
}
