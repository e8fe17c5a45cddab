//! # namma-core: Pure Business Logic for the NammaRecipe Storefront
//!
//! Every business rule of the storefront lives here as pure code with
//! zero I/O: money arithmetic, cart consolidation, the order status
//! machine, and catalog search/scoring. Persistence, latency simulation,
//! and randomness belong to the crates above this one.
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Recipe, User, CartItem, Order, ...)
//! - [`money`] - Money type with integer paise arithmetic
//! - [`cart`] - The cart collection and its consolidation rules
//! - [`search`] - Combined catalog filter and prompt scoring
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: same input, same output; no clocks, no RNG
//! 2. **No I/O**: storage and timers are forbidden in this crate
//! 3. **Integer money**: all amounts are paise (i64), never floats
//! 4. **Explicit errors**: expected negative outcomes are values, not
//!    errors; the few real violations are typed `CoreError`s

pub mod cart;
pub mod error;
pub mod money;
pub mod search;
pub mod types;

pub use cart::Cart;
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::*;
