//! # namma-storefront: The Manager Layer
//!
//! Wires the four state containers over one shared blob store and one
//! latency profile. Everything here is process-local and single-instance:
//! the managers are constructed once at startup and passed by reference
//! (`Arc`) to whichever layer needs them - explicit dependency injection
//! instead of ambient globals.

pub mod error;
pub mod latency;
pub mod seed;
pub mod state;

pub use error::{AppError, AppResult};
pub use latency::Latency;
pub use state::{CartManager, CatalogEngine, OrderManager, SessionManager};

use std::sync::Arc;

use namma_core::Recipe;
use namma_store::BlobStore;

/// The assembled storefront: one instance of each manager.
///
/// Construction runs the whole restore path (session, cart, orders), so a
/// `Storefront` built over yesterday's store comes up with yesterday's
/// state.
pub struct Storefront {
    pub session: Arc<SessionManager>,
    pub cart: Arc<CartManager>,
    pub orders: Arc<OrderManager>,
    pub catalog: Arc<CatalogEngine>,
}

impl Storefront {
    /// Builds all four managers over a shared store and restores
    /// persisted state.
    pub fn new(catalog: Vec<Recipe>, store: Arc<dyn BlobStore>, latency: Latency) -> Self {
        let session = Arc::new(SessionManager::new(store.clone(), latency));
        let cart = Arc::new(CartManager::new(store.clone()));
        let orders = Arc::new(OrderManager::new(store, latency));
        let engine = Arc::new(CatalogEngine::new(catalog, latency));

        session.restore_session();
        cart.restore();
        orders.restore();

        Storefront {
            session,
            cart,
            orders,
            catalog: engine,
        }
    }
}
