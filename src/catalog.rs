/// Immutable catalog entry. The list is compiled in and not editable at
/// runtime; prices live separately in the price book.
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const PRODUCTS: &[Product] = &[
    Product {
        id: "p1",
        name: "Paracetamol Tablets 500mg",
        description: "Effective pain reliever and fever reducer.",
    },
    Product {
        id: "p2",
        name: "Amoxicillin Capsules",
        description: "Broad-spectrum antibiotic.",
    },
    Product {
        id: "p3",
        name: "Multivitamin Syrup",
        description: "Daily vitamins for overall health.",
    },
];

/// Whether `id` names a catalog product. Price entries for anything else
/// are discarded on load.
pub fn is_known_id(id: &str) -> bool {
    PRODUCTS.iter().any(|product| product.id == id)
}
