//! Cart Session

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    cart::{Cart, CartState},
    items::LineItem,
    products::{Category, ProductRef},
    store::{DurableStore, StoreError},
};

/// Errors crossing the persistence bridge.
///
/// A corrupt stored payload is not an error: it is discarded and the session
/// starts empty (see [`CartSession::open`]).
#[derive(Debug, Error)]
pub enum SessionError {
    /// The durable store failed to read or write.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The item sequence could not be serialized for storage.
    #[error("failed to serialize cart items: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A cart bound to one durable store entry for the lifetime of a session.
///
/// [`CartSession::open`] hydrates the cart from the store exactly once; every
/// mutation after that mirrors the item sequence back to the store,
/// overwriting the previous value. The derived totals are never persisted,
/// only recomputed. `open` is the only constructor, so no session can issue a
/// write before its initial read has completed.
///
/// Each session owns its cart exclusively; two sessions sharing a store key
/// coordinate only through last-writer-wins overwrites.
#[derive(Debug)]
pub struct CartSession<S: DurableStore> {
    cart: Cart,
    store: S,
    key: String,
}

impl<S: DurableStore> CartSession<S> {
    /// Opens a session over `store`, hydrating from the value under `key`.
    ///
    /// A corrupt stored payload (unparseable, or not an array of line items)
    /// is discarded and its key cleared so the failure does not repeat on the
    /// next open; the session then starts from the empty cart. The recovery
    /// is silent apart from a warning log.
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` if the store itself fails to read or clear.
    pub fn open(mut store: S, key: impl Into<String>) -> Result<Self, SessionError> {
        let key = key.into();
        let mut cart = Cart::new();

        match store.read(&key)? {
            None => debug!(key = %key, "no stored cart; starting empty"),
            Some(raw) => match serde_json::from_str::<Vec<LineItem>>(&raw) {
                Ok(items) => {
                    cart.load_items(items);
                    debug!(key = %key, items = cart.len(), "hydrated cart from store");
                }
                Err(err) => {
                    warn!(key = %key, error = %err, "discarding corrupt stored cart");
                    store.clear(&key)?;
                }
            },
        }

        Ok(Self { cart, store, key })
    }

    /// Adds one unit of `product` and persists the new item sequence.
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` if persisting the mutation fails.
    pub fn add_product(&mut self, product: ProductRef) -> Result<(), SessionError> {
        self.cart.add_product(product);
        self.persist()
    }

    /// Removes the line item with the given identity and persists.
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` if persisting the mutation fails.
    pub fn remove_item(&mut self, category: Category, id: &str) -> Result<(), SessionError> {
        self.cart.remove_item(category, id);
        self.persist()
    }

    /// Sets the quantity of the line item with the given identity and
    /// persists.
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` if persisting the mutation fails.
    pub fn update_quantity(
        &mut self,
        category: Category,
        id: &str,
        quantity: i64,
    ) -> Result<(), SessionError> {
        self.cart.update_quantity(category, id, quantity);
        self.persist()
    }

    /// Resets to the empty cart and persists.
    ///
    /// Per the checkout handoff contract, call this only after a submitted
    /// order has been durably accepted.
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` if persisting the mutation fails.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.cart.clear();
        self.persist()
    }

    /// Read-only view of the underlying cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Owned snapshot of the current state for the checkout handoff.
    #[must_use]
    pub fn state(&self) -> CartState {
        self.cart.state()
    }

    /// Consumes the session, returning the store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> Result<(), SessionError> {
        let payload = serde_json::to_string(self.cart.items())?;

        self.store.write(&self.key, &payload)?;
        debug!(key = %self.key, items = self.cart.len(), "persisted cart");

        Ok(())
    }
}
