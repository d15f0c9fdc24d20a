// fixtures/products.rs
//
// A small jewellery-store inventory spread over four display cases.
// Twelve products: enough for three pages of five rows.

use crate::web_app::model::{Product, ProductId};

/// Build one product
pub fn product(id: ProductId, sku: &str, name: &str, display_case: &str, column: u32, row: u32) -> Product {
    Product {
        id,
        sku: sku.to_string(),
        name: name.to_string(),
        display_case: display_case.to_string(),
        column,
        row,
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, "RNG-001", "Silver ring", "I", 1, 1),
        product(2, "RNG-002", "Gold ring", "I", 1, 2),
        product(3, "RNG-003", "Rose gold ring", "I", 2, 3),
        product(4, "NCK-001", "Pearl necklace", "II", 1, 1),
        product(5, "NCK-002", "Chain necklace", "II", 2, 4),
        product(6, "BRC-001", "Charm bracelet", "III", 1, 5),
        product(7, "BRC-002", "Bangle bracelet", "III", 2, 6),
        product(8, "EAR-001", "Hoop earrings", "IV", 1, 7),
        product(9, "EAR-002", "Stud earrings", "IV", 2, 1),
        product(10, "EAR-003", "Drop earrings", "IV", 2, 2),
        product(11, "WAT-001", "Steel watch", "II", 1, 3),
        product(12, "WAT-002", "Leather watch", "II", 1, 6),
    ]
}
