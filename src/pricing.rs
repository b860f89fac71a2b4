//! Pricing

use crate::items::LineItem;

/// Derived cart aggregates.
///
/// Always recomputed from the line items after a mutation, never stored or
/// adjusted independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line totals in minor units.
    pub total: u64,

    /// Sum of line quantities.
    pub item_count: u64,
}

/// Recomputes the aggregates for a sequence of line items.
///
/// Saturates rather than wrapping on overflow; storefront prices and
/// quantities stay far below those limits.
#[must_use]
pub fn cart_totals(items: &[LineItem]) -> CartTotals {
    items.iter().fold(CartTotals::default(), |acc, item| CartTotals {
        total: acc.total.saturating_add(item.line_total()),
        item_count: acc.item_count.saturating_add(u64::from(item.quantity())),
    })
}

#[cfg(test)]
mod tests {
    use crate::products::{Category, ProductRef};

    use super::*;

    #[test]
    fn totals_for_no_items_are_zero() {
        let totals = cart_totals(&[]);

        assert_eq!(totals, CartTotals::default());
    }

    #[test]
    fn totals_sum_line_totals_and_quantities() {
        let items = [
            LineItem::with_quantity(
                ProductRef::new(Category::Wine, "dalat-red", "Vang Đà Lạt", 100),
                2,
            ),
            LineItem::new(ProductRef::new(
                Category::Accessory,
                "corkscrew",
                "Dụng cụ khui",
                50,
            )),
        ];

        let totals = cart_totals(&items);

        assert_eq!(totals.total, 250);
        assert_eq!(totals.item_count, 3);
    }

    #[test]
    fn totals_saturate_instead_of_wrapping() {
        let items = [
            LineItem::new(ProductRef::new(Category::Gift, "a", "A", u64::MAX)),
            LineItem::new(ProductRef::new(Category::Gift, "b", "B", u64::MAX)),
        ];

        let totals = cart_totals(&items);

        assert_eq!(totals.total, u64::MAX);
    }
}
