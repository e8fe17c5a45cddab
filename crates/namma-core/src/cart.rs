//! # Cart
//!
//! The pure shopping-cart collection and its consolidation rules.
//!
//! ## Invariants
//! - Lines are unique by (recipe, fulfillment type); adding the same pair
//!   again increments the quantity instead of duplicating the line.
//! - Quantity is always >= 1; `set_quantity` clamps, it never removes.
//! - Every mutation is total: there is no failure path in cart logic.
//!
//! Persistence of the cart is owned by the manager layer; this type only
//! does bookkeeping.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CartItem, FulfillmentType, Recipe};

/// The shopping cart: an ordered collection of consolidated line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a recipe to the cart under the given fulfillment type.
    ///
    /// ## Behavior
    /// - Pair already in cart: quantity increments by 1.
    /// - Otherwise: a new quantity-1 line is appended, priced by type.
    pub fn add_item(&mut self, recipe: &Recipe, fulfillment: FulfillmentType) {
        let id = CartItem::line_id(&recipe.id, fulfillment);
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity += 1;
            return;
        }
        self.items.push(CartItem::from_recipe(recipe, fulfillment));
    }

    /// Removes the line with the given id; no-op when absent.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Sets the quantity of a line, clamped to a minimum of 1.
    ///
    /// Decrementing to zero is refused (the line stays at 1); removal is
    /// an explicit, separate operation. Unknown ids are a no-op.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity.max(1);
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price × quantity across all lines. Pure query.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks whether the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
