//! # Cart Manager
//!
//! The cart state container: wraps the pure `Cart` collection from
//! namma-core and persists the `{items}` snapshot after every mutation so
//! a restart preserves cart contents.
//!
//! All cart mutations are synchronous and total. Persistence failures are
//! logged and swallowed - a full disk must not make "add to cart" fail.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use namma_core::{Cart, CartItem, FulfillmentType, Money, Recipe};
use namma_store::{load_snapshot, save_snapshot, BlobStore, CartSnapshot, CART_KEY};

/// The cart state container.
pub struct CartManager {
    store: Arc<dyn BlobStore>,
    cart: Mutex<Cart>,
}

impl CartManager {
    /// Creates a manager with an empty cart.
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        CartManager {
            store,
            cart: Mutex::new(Cart::new()),
        }
    }

    /// Restores a persisted cart at startup; missing or unparseable
    /// snapshots leave the cart empty.
    pub fn restore(&self) {
        let snapshot = match load_snapshot::<CartSnapshot>(self.store.as_ref(), CART_KEY) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "cart restore failed; starting empty");
                None
            }
        };
        if let Some(snapshot) = snapshot {
            debug!(lines = snapshot.items.len(), "cart restored");
            let mut cart = self.lock();
            cart.items = snapshot.items;
        }
    }

    /// Adds a recipe under the given fulfillment type, consolidating onto
    /// an existing line when the (recipe, type) pair is already present.
    pub fn add_item(&self, recipe: &Recipe, fulfillment: FulfillmentType) {
        debug!(recipe_id = %recipe.id, %fulfillment, "add to cart");
        let mut cart = self.lock();
        cart.add_item(recipe, fulfillment);
        self.persist(&cart);
    }

    /// Removes the line with the given id; no-op when absent.
    pub fn remove_item(&self, id: &str) {
        debug!(id, "remove from cart");
        let mut cart = self.lock();
        cart.remove_item(id);
        self.persist(&cart);
    }

    /// Sets a line's quantity, clamped to a minimum of 1.
    pub fn set_quantity(&self, id: &str, quantity: u32) {
        debug!(id, quantity, "set cart quantity");
        let mut cart = self.lock();
        cart.set_quantity(id, quantity);
        self.persist(&cart);
    }

    /// Empties the cart.
    pub fn clear(&self) {
        debug!("clear cart");
        let mut cart = self.lock();
        cart.clear();
        self.persist(&cart);
    }

    /// Snapshot of the current lines, copied by value.
    ///
    /// This is what the UI hands to the order manager at checkout; later
    /// cart mutation cannot reach into it.
    pub fn items(&self) -> Vec<CartItem> {
        self.lock().items.clone()
    }

    /// Sum of price × quantity across all lines.
    pub fn total_price(&self) -> Money {
        self.lock().total_price()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Cart> {
        self.cart.lock().expect("cart mutex poisoned")
    }

    fn persist(&self, cart: &Cart) {
        let snapshot = CartSnapshot {
            items: cart.items.clone(),
        };
        if let Err(e) = save_snapshot(self.store.as_ref(), CART_KEY, &snapshot) {
            warn!(error = %e, "failed to persist cart");
        }
    }
}
