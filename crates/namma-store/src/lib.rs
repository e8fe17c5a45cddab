//! # namma-store: Persistence Layer for the NammaRecipe Storefront
//!
//! Whole-object JSON snapshot persistence behind a single seam.
//!
//! ## Responsibility
//! - The [`blob::BlobStore`] trait and its two implementations
//!   (file-backed and in-memory)
//! - The persisted snapshot shapes and keys ([`snapshot`])
//! - Tolerant typed loading: unparseable blobs degrade to "absent"
//!
//! Business logic stays in `namma-core`; which manager persists what and
//! when stays in the storefront app.

pub mod blob;
pub mod error;
pub mod snapshot;

pub use blob::{BlobStore, JsonFileStore, MemoryStore};
pub use error::{StoreError, StoreResult};
pub use snapshot::{
    load_snapshot, save_snapshot, CartSnapshot, OrdersSnapshot, CART_KEY, ORDERS_KEY, SESSION_KEY,
};
