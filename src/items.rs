//! Line Items

use serde::{Deserialize, Serialize};

use crate::products::{Category, ProductRef};

/// One cart entry: a product snapshot and how many units of it.
///
/// Only line items are ever persisted; the cart's aggregates are always
/// recomputed from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    product: ProductRef,
    quantity: u32,
}

impl LineItem {
    /// Creates a line item with quantity 1.
    #[must_use]
    pub fn new(product: ProductRef) -> Self {
        Self::with_quantity(product, 1)
    }

    /// Creates a line item with the given quantity.
    #[must_use]
    pub fn with_quantity(product: ProductRef, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Returns the product snapshot of the item.
    pub fn product(&self) -> &ProductRef {
        &self.product
    }

    /// Returns the quantity of the item.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// The `(Category, id)` identity of the underlying product.
    #[must_use]
    pub fn key(&self) -> (Category, &str) {
        self.product.key()
    }

    /// Price × quantity in minor units, saturating on overflow.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wine(price: u64) -> ProductRef {
        ProductRef::new(Category::Wine, "dalat-red", "Vang Đà Lạt", price)
    }

    #[test]
    fn new_line_item_starts_at_quantity_one() {
        let item = LineItem::new(wine(115_000));

        assert_eq!(item.quantity(), 1);
        assert_eq!(item.line_total(), 115_000);
    }

    #[test]
    fn line_total_is_price_times_quantity() {
        let item = LineItem::with_quantity(wine(115_000), 3);

        assert_eq!(item.line_total(), 345_000);
    }

    #[test]
    fn increment_adds_one_unit() {
        let mut item = LineItem::new(wine(115_000));

        item.increment();

        assert_eq!(item.quantity(), 2);
    }

    #[test]
    fn key_matches_underlying_product() {
        let item = LineItem::new(wine(115_000));

        assert_eq!(item.key(), (Category::Wine, "dalat-red"));
    }
}
