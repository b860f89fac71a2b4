//! Cart

use smallvec::SmallVec;

use crate::{
    items::LineItem,
    pricing::{CartTotals, cart_totals},
    products::{Category, ProductRef},
};

/// Owned snapshot of the cart for the checkout handoff.
///
/// At order placement the caller submits `items` and `total` to order
/// creation and clears the cart only after the order is durably accepted; the
/// cart itself has no knowledge of orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartState {
    /// Line items in insertion order.
    pub items: Vec<LineItem>,

    /// Sum of line totals in minor units.
    pub total: u64,

    /// Sum of line quantities.
    pub item_count: u64,
}

/// The cart engine: an ordered line-item sequence plus derived aggregates.
///
/// Every mutation runs to completion synchronously and re-establishes the
/// aggregate invariants before returning. At most one line item exists per
/// `(Category, id)` at any time. The empty cart is the initial state and a
/// normal reachable one; no operation errors for ordinary input.
#[derive(Debug, Default)]
pub struct Cart {
    items: SmallVec<[LineItem; 8]>,
    totals: CartTotals,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`.
    ///
    /// Merges into the existing line item with the same `(Category, id)` when
    /// there is one; otherwise appends a new line item with quantity 1, so
    /// newly added distinct products keep insertion order.
    pub fn add_product(&mut self, product: ProductRef) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.key() == product.key())
        {
            existing.increment();
        } else {
            self.items.push(LineItem::new(product));
        }

        self.recompute();
    }

    /// Removes the line item with the given identity.
    ///
    /// A silent no-op when no such item is in the cart; calling it twice is
    /// equivalent to calling it once. Removal is scoped by `(Category, id)`:
    /// a wine and a gift sharing an id are distinct line items.
    pub fn remove_item(&mut self, category: Category, id: &str) {
        self.items.retain(|item| item.key() != (category, id));
        self.recompute();
    }

    /// Sets the quantity of the line item with the given identity.
    ///
    /// Negative quantities are clamped to 0, and a quantity of 0 removes the
    /// item in the same pass. A silent no-op when no such item is in the
    /// cart. Stock ceilings are the catalog's concern and are not checked
    /// here.
    pub fn update_quantity(&mut self, category: Category, id: &str, quantity: i64) {
        let quantity = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);

        for item in &mut self.items {
            if item.key() == (category, id) {
                item.set_quantity(quantity);
            }
        }

        self.items.retain(|item| item.quantity() > 0);
        self.recompute();
    }

    /// Resets to the empty cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    /// Replaces the whole cart with a previously serialized item sequence.
    ///
    /// Totals are recomputed from the given items; per-item prices are
    /// trusted as-is, not refreshed against the catalog. The sequence is
    /// normalized on the way in so the one-line-item-per-identity invariant
    /// holds even for hand-edited payloads: duplicate identities merge
    /// (quantities summed, first price kept) and zero quantities are dropped.
    pub fn load_items(&mut self, items: impl IntoIterator<Item = LineItem>) {
        self.items.clear();

        for incoming in items {
            if incoming.quantity() == 0 {
                continue;
            }

            if let Some(existing) = self
                .items
                .iter_mut()
                .find(|item| item.key() == incoming.key())
            {
                let merged = existing.quantity().saturating_add(incoming.quantity());

                existing.set_quantity(merged);
            } else {
                self.items.push(incoming);
            }
        }

        self.recompute();
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of line totals in minor units.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.totals.total
    }

    /// Sum of line quantities.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.totals.item_count
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Owned snapshot of the current state for the checkout handoff.
    #[must_use]
    pub fn state(&self) -> CartState {
        CartState {
            items: self.items.to_vec(),
            total: self.totals.total,
            item_count: self.totals.item_count,
        }
    }

    fn recompute(&mut self) {
        self.totals = cart_totals(&self.items);
    }
}
