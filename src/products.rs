//! Products

use std::fmt;

use serde::{Deserialize, Serialize};

/// Product category.
///
/// The storefront sells three disjoint catalogs. A product's identity is the
/// `(Category, id)` pair: ids are only unique within their own category, so a
/// wine and a gift may carry the same id without colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Bottled wine.
    Wine,
    /// Wine accessories: openers, glasses, decanters.
    Accessory,
    /// Gift sets and hampers.
    Gift,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Wine => write!(f, "wine"),
            Category::Accessory => write!(f, "accessory"),
            Category::Gift => write!(f, "gift"),
        }
    }
}

/// Immutable product snapshot pushed into the cart by the caller.
///
/// The price is in minor units of the storefront currency and is captured at
/// add-time; it is not refreshed against the live catalog afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    /// Category the product belongs to.
    pub category: Category,

    /// Product id, unique within its category only.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price in minor units.
    pub price: u64,
}

impl ProductRef {
    /// Creates a new product snapshot.
    #[must_use]
    pub fn new(
        category: Category,
        id: impl Into<String>,
        name: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            category,
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// The `(Category, id)` identity of this product.
    #[must_use]
    pub fn key(&self) -> (Category, &str) {
        (self.category, self.id.as_str())
    }
}
