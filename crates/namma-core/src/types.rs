//! # Domain Types
//!
//! Core domain types for the NammaRecipe storefront.
//!
//! ## Type Hierarchy
//! ```text
//!   Recipe ──► CartItem ──► Order
//!   (catalog,  (one recipe + (frozen cart
//!    immutable) fulfillment   snapshot +
//!               type at a     status machine)
//!               quantity)
//!
//!   User / Role          OrderStatus / RevenueStats
//!   (session identity)   (order lifecycle + aggregation)
//! ```
//!
//! All persisted types use camelCase field names so the serialized blobs
//! keep the exact shape the storefront has always written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// User & Role
// =============================================================================

/// Role attached to an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular shopper: browse, cart, checkout, own order history.
    User,
    /// Admin: all orders, status transitions, revenue stats.
    Admin,
}

/// An authenticated user.
///
/// Created by a successful login and destroyed on logout. This struct is
/// also the persisted session snapshot, so it never carries a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl User {
    /// Checks whether this user may use the admin surfaces.
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

// =============================================================================
// Recipe Catalog
// =============================================================================

/// Catalog category of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Traditional,
    Fastfood,
    Vegetarian,
    Nonvegetarian,
    Dessert,
}

/// Cooking difficulty of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    /// Human-readable amount, e.g. "500 g" or "2 cups".
    pub quantity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One preparation step of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub instruction: String,
}

/// An immutable catalog entry.
///
/// Loaded once at startup and never mutated; every other part of the
/// system only reads from it (cart lines copy the fields they need).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Image reference (URL or asset path); presentation resolves it.
    pub image: String,
    pub category: Category,
    /// Preparation time in minutes.
    pub preparation_time: u32,
    /// Cooking time in minutes.
    pub cooking_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
    /// Price of the raw ingredients kit.
    pub ingredients_price: Money,
    /// Price of the ready-made dish.
    pub ready_food_price: Money,
    /// External video reference; embedding is a presentation concern.
    pub youtube_video_id: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    /// Average rating, 1.0 - 5.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Review count backing the rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
}

impl Recipe {
    /// Total time from counter to table, in minutes.
    #[inline]
    pub fn total_time(&self) -> u32 {
        self.preparation_time + self.cooking_time
    }
}

// =============================================================================
// Cart
// =============================================================================

/// How a cart line is fulfilled: a raw-ingredients kit or the ready dish.
///
/// The variant selects which of the recipe's two prices the line freezes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FulfillmentType {
    Ingredients,
    ReadyFood,
}

impl FulfillmentType {
    /// Returns the recipe price this fulfillment type sells at.
    pub fn price_of(&self, recipe: &Recipe) -> Money {
        match self {
            FulfillmentType::Ingredients => recipe.ingredients_price,
            FulfillmentType::ReadyFood => recipe.ready_food_price,
        }
    }

    /// Stable slug used inside cart line ids.
    fn slug(&self) -> &'static str {
        match self {
            FulfillmentType::Ingredients => "ingredients",
            FulfillmentType::ReadyFood => "readyFood",
        }
    }
}

impl fmt::Display for FulfillmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A line item in the shopping cart.
///
/// Identity key is the (recipe, fulfillment type) pair; the `id` field is
/// the canonical `"{recipeId}-{type}"` encoding of that pair. Name, price
/// and image are frozen copies so later catalog edits cannot reach into an
/// existing cart or a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub recipe_id: String,
    pub recipe_name: String,
    #[serde(rename = "type")]
    pub fulfillment: FulfillmentType,
    /// Unit price frozen at the time the line was created.
    pub price: Money,
    /// Always >= 1.
    pub quantity: u32,
    pub image: String,
}

impl CartItem {
    /// Builds the line id for a (recipe, fulfillment type) pair.
    pub fn line_id(recipe_id: &str, fulfillment: FulfillmentType) -> String {
        format!("{}-{}", recipe_id, fulfillment.slug())
    }

    /// Creates a quantity-1 line from a catalog entry.
    pub fn from_recipe(recipe: &Recipe, fulfillment: FulfillmentType) -> Self {
        CartItem {
            id: Self::line_id(&recipe.id, fulfillment),
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            fulfillment,
            price: fulfillment.price_of(recipe),
            quantity: 1,
            image: recipe.image.clone(),
        }
    }

    /// Line total: unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price * i64::from(self.quantity)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle status of an order.
///
/// ```text
///               ┌──────────► rejected  (terminal)
///               │
///   pending ────┴──► confirmed ──► processing ──► completed  (terminal)
/// ```
///
/// Rejection is only reachable from `pending`; every other edge moves one
/// stage forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Completed,
    Rejected,
}

impl OrderStatus {
    /// Whether the lifecycle allows moving from `self` to `next`.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Rejected) | (Confirmed, Processing) | (Processing, Completed)
        )
    }

    /// Terminal statuses admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Rejected)
    }

    /// The statuses that admins may move this order to next.
    pub fn next_statuses(&self) -> &'static [OrderStatus] {
        use OrderStatus::*;
        match self {
            Pending => &[Confirmed, Rejected],
            Confirmed => &[Processing],
            Processing => &[Completed],
            Completed | Rejected => &[],
        }
    }

    /// Whether orders in this status count toward confirmed revenue.
    pub fn counts_as_confirmed_revenue(&self) -> bool {
        matches!(
            self,
            OrderStatus::Confirmed | OrderStatus::Processing | OrderStatus::Completed
        )
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order.
///
/// Items and total are frozen by value at checkout; only `status` ever
/// changes afterwards, and only through the admin transition operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    /// By-value snapshot of the cart lines at checkout time.
    pub items: Vec<CartItem>,
    pub total_amount: Money,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub address: String,
    pub contact_number: String,
}

impl Order {
    /// Computes the total of an item snapshot: Σ price × quantity.
    pub fn total_of(items: &[CartItem]) -> Money {
        items.iter().map(CartItem::line_total).sum()
    }
}

// =============================================================================
// Revenue Stats
// =============================================================================

/// Aggregate order totals bucketed by status group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueStats {
    /// Sum over all orders regardless of status.
    pub total: Money,
    /// Sum over confirmed, processing, and completed orders.
    pub confirmed: Money,
    /// Sum over rejected orders.
    pub rejected: Money,
}

impl RevenueStats {
    /// Folds a set of orders into the three revenue buckets.
    pub fn from_orders<'a, I>(orders: I) -> Self
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut stats = RevenueStats::default();
        for order in orders {
            stats.total += order.total_amount;
            if order.status.counts_as_confirmed_revenue() {
                stats.confirmed += order.total_amount;
            }
            if order.status == OrderStatus::Rejected {
                stats.rejected += order.total_amount;
            }
        }
        stats
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: i64, quantity: u32) -> CartItem {
        CartItem {
            id: format!("r{}-ingredients", price),
            recipe_id: format!("r{}", price),
            recipe_name: "Recipe".to_string(),
            fulfillment: FulfillmentType::Ingredients,
            price: Money::from_rupees(price),
            quantity,
            image: "/img.jpg".to_string(),
        }
    }

    fn order(total: i64, status: OrderStatus) -> Order {
        Order {
            id: format!("o-{}", total),
            user_id: "1".to_string(),
            items: vec![],
            total_amount: Money::from_rupees(total),
            status,
            created_at: Utc::now(),
            address: "12 Gandhi Road".to_string(),
            contact_number: "9876543210".to_string(),
        }
    }

    #[test]
    fn test_status_forward_edges() {
        use OrderStatus::*;

        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Rejected));
        assert!(Confirmed.can_transition_to(Processing));
        assert!(Processing.can_transition_to(Completed));
    }

    #[test]
    fn test_status_illegal_edges() {
        use OrderStatus::*;

        assert!(!Pending.can_transition_to(Completed));
        assert!(!Pending.can_transition_to(Processing));
        assert!(!Confirmed.can_transition_to(Rejected));
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Rejected.can_transition_to(Confirmed));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Rejected.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(OrderStatus::Completed.next_statuses().is_empty());
        assert_eq!(
            OrderStatus::Pending.next_statuses(),
            &[OrderStatus::Confirmed, OrderStatus::Rejected]
        );
    }

    #[test]
    fn test_order_total_of_snapshot() {
        // 100 × 2 + 50 × 1 = 250
        let items = [item(100, 2), item(50, 1)];
        assert_eq!(Order::total_of(&items), Money::from_rupees(250));
        assert_eq!(Order::total_of(&[]), Money::zero());
    }

    #[test]
    fn test_revenue_stats_buckets() {
        let orders = [
            order(100, OrderStatus::Pending),
            order(200, OrderStatus::Confirmed),
            order(50, OrderStatus::Rejected),
            order(300, OrderStatus::Completed),
        ];

        let stats = RevenueStats::from_orders(orders.iter());
        assert_eq!(stats.total, Money::from_rupees(650));
        assert_eq!(stats.confirmed, Money::from_rupees(500));
        assert_eq!(stats.rejected, Money::from_rupees(50));
    }

    #[test]
    fn test_cart_item_serde_shape() {
        let line = item(100, 2);
        let json = serde_json::to_value(&line).unwrap();

        // Persisted shape matches the storefront blob layout.
        assert_eq!(json["recipeId"], "r100");
        assert_eq!(json["recipeName"], "Recipe");
        assert_eq!(json["type"], "ingredients");
        assert_eq!(json["quantity"], 2);
    }

    #[test]
    fn test_status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            "\"processing\""
        );
        let back: OrderStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(back, OrderStatus::Rejected);
    }
}
