//! Known product categories.
//!
//! Categories are plain strings on [`Product`](super::Product); this list is
//! the set the storefront navigates by, in display order. Nothing rejects a
//! product whose category is not listed here.

pub const CATEGORIES: [&str; 13] = [
    "Cosmetics & Personal Care",
    "Razors",
    "Toothbrush",
    "Agarbatti (Incense Sticks)",
    "Natural / Herbal Products",
    "Adhesive Tape",
    "PVC Tape",
    "Stationery",
    "Stationery Tapes",
    "Baby Products (Soothers)",
    "Cleaning Products",
    "Pest Control",
    "Craft Supplies",
];

/// Returns true if `category` is one of the known categories (exact match).
pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}
