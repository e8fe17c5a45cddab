//! # Snapshot Types & Typed Loaders
//!
//! The three persisted blob shapes and the tolerant load/save helpers the
//! managers use.
//!
//! ## Persisted Layout
//! ```text
//!   namma-recipe-user    → {"id": ..., "username": ..., "role": ...}
//!   namma-recipe-cart    → {"items": [CartItem, ...]}
//!   namma-recipe-orders  → {"orders": [Order, ...]}
//! ```
//!
//! These shapes must round-trip exactly (field names and types preserved)
//! so a restart restores session, cart, and order history.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use namma_core::{CartItem, Order};

use crate::blob::BlobStore;
use crate::error::StoreResult;

/// Key for the persisted session snapshot (a bare `User`).
pub const SESSION_KEY: &str = "namma-recipe-user";
/// Key for the persisted cart snapshot.
pub const CART_KEY: &str = "namma-recipe-cart";
/// Key for the persisted order history snapshot.
pub const ORDERS_KEY: &str = "namma-recipe-orders";

/// Persisted shape of the cart blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
}

/// Persisted shape of the order-history blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersSnapshot {
    pub orders: Vec<Order>,
}

/// Loads and decodes the snapshot under `key`.
///
/// A missing blob is `None`. A blob that fails to parse is logged and
/// also treated as `None` - corrupt state degrades to "absent", it is
/// never surfaced to restoration callers.
pub fn load_snapshot<T: DeserializeOwned>(
    store: &dyn BlobStore,
    key: &str,
) -> StoreResult<Option<T>> {
    let Some(blob) = store.load(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&blob) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(key, error = %e, "discarding unparseable snapshot");
            Ok(None)
        }
    }
}

/// Encodes `value` and stores it under `key`, replacing any prior blob.
pub fn save_snapshot<T: Serialize>(store: &dyn BlobStore, key: &str, value: &T) -> StoreResult<()> {
    let blob = serde_json::to_string(value)?;
    store.save(key, &blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::MemoryStore;
    use namma_core::{FulfillmentType, Money, Role, User};

    fn line() -> CartItem {
        CartItem {
            id: "r1-readyFood".to_string(),
            recipe_id: "r1".to_string(),
            recipe_name: "Chicken Biryani".to_string(),
            fulfillment: FulfillmentType::ReadyFood,
            price: Money::from_rupees(320),
            quantity: 2,
            image: "/images/biryani.jpg".to_string(),
        }
    }

    #[test]
    fn test_cart_snapshot_roundtrip() {
        let store = MemoryStore::new();
        let snapshot = CartSnapshot { items: vec![line()] };

        save_snapshot(&store, CART_KEY, &snapshot).unwrap();
        let restored: CartSnapshot = load_snapshot(&store, CART_KEY).unwrap().unwrap();

        assert_eq!(restored.items, snapshot.items);

        // Field names on the wire match the storefront layout.
        let blob = store.load(CART_KEY).unwrap().unwrap();
        assert!(blob.contains("\"recipeId\":\"r1\""));
        assert!(blob.contains("\"type\":\"readyFood\""));
    }

    #[test]
    fn test_session_snapshot_is_bare_user() {
        let store = MemoryStore::new();
        let user = User {
            id: "2".to_string(),
            username: "nammarecipe".to_string(),
            role: Role::Admin,
        };

        save_snapshot(&store, SESSION_KEY, &user).unwrap();
        let blob = store.load(SESSION_KEY).unwrap().unwrap();
        assert_eq!(
            blob,
            "{\"id\":\"2\",\"username\":\"nammarecipe\",\"role\":\"admin\"}"
        );

        let restored: User = load_snapshot(&store, SESSION_KEY).unwrap().unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn test_missing_snapshot_is_none() {
        let store = MemoryStore::new();
        let restored: Option<CartSnapshot> = load_snapshot(&store, CART_KEY).unwrap();
        assert!(restored.is_none());
    }

    #[test]
    fn test_corrupt_snapshot_degrades_to_absent() {
        let store = MemoryStore::new();
        store.save(ORDERS_KEY, "{not json").unwrap();

        let restored: Option<OrdersSnapshot> = load_snapshot(&store, ORDERS_KEY).unwrap();
        assert!(restored.is_none());
    }
}
