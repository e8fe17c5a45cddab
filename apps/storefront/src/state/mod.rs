//! # State Module
//!
//! The four independent state containers of the storefront.
//!
//! ```text
//!   SessionManager   identity + auth flag, session restore
//!   CartManager      line items, consolidation, persisted per mutation
//!   OrderManager     order history, status machine, revenue
//!   CatalogEngine    immutable catalog, filtered view, generator
//! ```
//!
//! Each container owns its state behind a `Mutex` and is shared by `Arc`;
//! no manager calls another. The UI layer composes them - the only
//! coupling is the cart snapshot it hands to `OrderManager::create_order`
//! at checkout.

mod cart;
mod catalog;
mod orders;
mod session;

pub use cart::CartManager;
pub use catalog::CatalogEngine;
pub use orders::OrderManager;
pub use session::SessionManager;
