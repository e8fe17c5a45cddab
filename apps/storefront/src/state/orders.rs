//! # Order Manager
//!
//! Owns the full order history, the order status machine, and revenue
//! aggregation.
//!
//! ## Order Lifecycle
//! ```text
//!   create_order() ──► pending ──┬──► confirmed ──► processing ──► completed
//!                                └──► rejected
//! ```
//!
//! Transitions are enforced here: the admin surface may only offer the
//! forward-legal buttons, but the manager rejects anything else too.
//! Order creation is the single operation in the system that propagates
//! hard failures to its caller.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::{debug, error, info};
use uuid::Uuid;

use namma_core::{CartItem, CoreError, Order, OrderStatus, RevenueStats};
use namma_store::{load_snapshot, save_snapshot, BlobStore, OrdersSnapshot, ORDERS_KEY};

use crate::error::{AppError, AppResult};
use crate::latency::Latency;

/// The order-history state container.
pub struct OrderManager {
    store: Arc<dyn BlobStore>,
    latency: Latency,
    orders: Mutex<Vec<Order>>,
}

impl OrderManager {
    /// Creates a manager with an empty history.
    pub fn new(store: Arc<dyn BlobStore>, latency: Latency) -> Self {
        OrderManager {
            store,
            latency,
            orders: Mutex::new(Vec::new()),
        }
    }

    /// Restores persisted order history at startup; missing or
    /// unparseable snapshots leave the history empty.
    pub fn restore(&self) {
        let snapshot = match load_snapshot::<OrdersSnapshot>(self.store.as_ref(), ORDERS_KEY) {
            Ok(s) => s,
            Err(e) => {
                error!(error = %e, "order history restore failed; starting empty");
                None
            }
        };
        if let Some(snapshot) = snapshot {
            debug!(orders = snapshot.orders.len(), "order history restored");
            let mut orders = self.lock();
            *orders = snapshot.orders;
        }
    }

    /// Creates an order from a cart snapshot.
    ///
    /// ## Behavior
    /// - Refuses an empty snapshot (`CoreError::EmptyCart`).
    /// - Total = Σ price × quantity over the snapshot at this instant;
    ///   the items are copied by value, so later cart mutation cannot
    ///   affect the placed order.
    /// - Fresh uuid, current timestamp, status `pending`.
    ///
    /// ## Errors
    /// The one hard-failure path of the system: a persistence fault is
    /// logged and rethrown to the caller.
    pub async fn create_order(
        &self,
        user_id: &str,
        items: Vec<CartItem>,
        address: &str,
        contact_number: &str,
    ) -> AppResult<String> {
        self.latency.wait_mutate().await;

        if items.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        let order = Order {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            total_amount: Order::total_of(&items),
            items,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            address: address.to_string(),
            contact_number: contact_number.to_string(),
        };
        let order_id = order.id.clone();
        info!(order_id = %order_id, user_id, total = %order.total_amount, "creating order");

        let mut orders = self.lock();
        orders.push(order);
        if let Err(e) = self.persist(&orders) {
            // Keep memory consistent with the store before rethrowing.
            orders.pop();
            error!(order_id = %order_id, error = %e, "failed to persist order");
            return Err(e);
        }

        Ok(order_id)
    }

    /// One user's orders, newest first.
    pub async fn orders_for_user(&self, user_id: &str) -> Vec<Order> {
        self.latency.wait_fetch().await;

        let orders = self.lock();
        let mut result: Vec<Order> = orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result
    }

    /// Every order, newest first. Admin view.
    pub async fn all_orders(&self) -> Vec<Order> {
        self.latency.wait_fetch().await;

        let orders = self.lock();
        let mut result = orders.clone();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result
    }

    /// Moves an order to a new status.
    ///
    /// The lifecycle is enforced: an unknown id is `OrderNotFound` and a
    /// non-forward-legal move is `InvalidStatusTransition`.
    pub async fn update_status(&self, order_id: &str, status: OrderStatus) -> AppResult<()> {
        self.latency.wait_fetch().await;

        let mut orders = self.lock();
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| AppError::OrderNotFound(order_id.to_string()))?;

        if !order.status.can_transition_to(status) {
            return Err(CoreError::InvalidStatusTransition {
                from: order.status,
                to: status,
            }
            .into());
        }

        info!(order_id, from = ?order.status, to = ?status, "order status updated");
        order.status = status;
        self.persist(&orders)
    }

    /// Revenue buckets over the whole history. Pure query, no latency.
    pub fn revenue_stats(&self) -> RevenueStats {
        let orders = self.lock();
        RevenueStats::from_orders(orders.iter())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Order>> {
        self.orders.lock().expect("orders mutex poisoned")
    }

    fn persist(&self, orders: &[Order]) -> AppResult<()> {
        let snapshot = OrdersSnapshot {
            orders: orders.to_vec(),
        };
        save_snapshot(self.store.as_ref(), ORDERS_KEY, &snapshot)?;
        Ok(())
    }
}
