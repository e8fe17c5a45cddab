//! # Catalog / Search Engine
//!
//! Holds the immutable recipe catalog and the derived filtered view, plus
//! the current query string and selected ingredient set.
//!
//! `search` and `filter_by_ingredients` are two entry points into the one
//! combined filter in `namma_core::search`: each stores its input and
//! recomputes the view from the full catalog using *both* the query and
//! the ingredient selection, so neither sees the other's intermediate
//! state.
//!
//! The generator's random fallback draws from an injectable seedable RNG
//! so tests can pin the outcome.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use namma_core::{search, Recipe};

use crate::latency::Latency;

#[derive(Debug)]
struct ViewState {
    filtered: Vec<Recipe>,
    query: String,
    selected_ingredients: Vec<String>,
}

/// The catalog state container and search engine.
pub struct CatalogEngine {
    catalog: Arc<[Recipe]>,
    latency: Latency,
    rng: Mutex<StdRng>,
    view: Mutex<ViewState>,
}

impl CatalogEngine {
    /// Creates an engine over a catalog loaded at startup.
    ///
    /// The initial filtered view is the full catalog.
    pub fn new(catalog: Vec<Recipe>, latency: Latency) -> Self {
        Self::with_rng(catalog, latency, StdRng::from_os_rng())
    }

    /// Creates an engine with a fixed RNG seed, pinning the generator's
    /// random fallback. Used by tests.
    pub fn with_seed(catalog: Vec<Recipe>, latency: Latency, seed: u64) -> Self {
        Self::with_rng(catalog, latency, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Vec<Recipe>, latency: Latency, rng: StdRng) -> Self {
        let view = ViewState {
            filtered: catalog.clone(),
            query: String::new(),
            selected_ingredients: Vec::new(),
        };
        info!(recipes = catalog.len(), "catalog loaded");
        CatalogEngine {
            catalog: catalog.into(),
            latency,
            rng: Mutex::new(rng),
            view: Mutex::new(view),
        }
    }

    /// The full catalog, modeled as a remote fetch.
    pub async fn all(&self) -> Vec<Recipe> {
        self.latency.wait_fetch().await;
        self.catalog.to_vec()
    }

    /// Looks up a single catalog entry, modeled as a remote fetch.
    pub async fn recipe_by_id(&self, id: &str) -> Option<Recipe> {
        self.latency.wait_fetch().await;
        self.catalog.iter().find(|r| r.id == id).cloned()
    }

    /// The featured subset of the catalog. Pure query.
    pub fn featured(&self) -> Vec<Recipe> {
        self.catalog.iter().filter(|r| r.is_featured).cloned().collect()
    }

    /// Stores the query and recomputes the filtered view.
    pub fn search(&self, query: &str) {
        let mut view = self.lock_view();
        view.query = query.to_string();
        self.recompute(&mut view);
        debug!(query, matches = view.filtered.len(), "search");
    }

    /// Stores the ingredient selection and recomputes the filtered view.
    pub fn filter_by_ingredients(&self, ingredients: Vec<String>) {
        let mut view = self.lock_view();
        view.selected_ingredients = ingredients;
        self.recompute(&mut view);
        debug!(
            selected = view.selected_ingredients.len(),
            matches = view.filtered.len(),
            "ingredient filter"
        );
    }

    /// Generates a recipe match from free-text input.
    ///
    /// Scores every catalog entry by prompt-token containment and returns
    /// the best scorer; when nothing scores above zero, falls back to a
    /// uniformly random entry. `None` only on an empty catalog - there is
    /// no "no match" failure. Modeled as the slowest remote call.
    pub async fn generate(&self, prompt: &str) -> Option<Recipe> {
        self.latency.wait_generate().await;

        if let Some(best) = search::best_match(&self.catalog, prompt) {
            debug!(recipe_id = %best.id, "generator matched prompt");
            return Some(best.clone());
        }
        if self.catalog.is_empty() {
            return None;
        }

        let index = {
            let mut rng = self.rng.lock().expect("rng mutex poisoned");
            rng.random_range(0..self.catalog.len())
        };
        debug!(recipe_id = %self.catalog[index].id, "generator fell back to random pick");
        Some(self.catalog[index].clone())
    }

    /// Resets the view to the full catalog and clears query + selection.
    pub fn clear_filters(&self) {
        let mut view = self.lock_view();
        view.query.clear();
        view.selected_ingredients.clear();
        view.filtered = self.catalog.to_vec();
    }

    /// The current filtered view.
    pub fn filtered(&self) -> Vec<Recipe> {
        self.lock_view().filtered.clone()
    }

    /// The active query string.
    pub fn current_search(&self) -> String {
        self.lock_view().query.clone()
    }

    /// The active ingredient selection.
    pub fn selected_ingredients(&self) -> Vec<String> {
        self.lock_view().selected_ingredients.clone()
    }

    fn recompute(&self, view: &mut ViewState) {
        view.filtered =
            search::filter_catalog(&self.catalog, &view.query, &view.selected_ingredients);
    }

    fn lock_view(&self) -> std::sync::MutexGuard<'_, ViewState> {
        self.view.lock().expect("view mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namma_core::{Category, Difficulty, Ingredient, Money};

    fn recipe(id: &str, name: &str, ingredient_names: &[&str], featured: bool) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            image: String::new(),
            category: Category::Traditional,
            preparation_time: 10,
            cooking_time: 20,
            servings: 2,
            difficulty: Difficulty::Medium,
            ingredients: ingredient_names
                .iter()
                .enumerate()
                .map(|(n, name)| Ingredient {
                    id: format!("{}-i{}", id, n),
                    name: (*name).to_string(),
                    quantity: "1".to_string(),
                    notes: None,
                })
                .collect(),
            steps: vec![],
            ingredients_price: Money::from_rupees(100),
            ready_food_price: Money::from_rupees(150),
            youtube_video_id: String::new(),
            tags: vec![],
            is_featured: featured,
            rating: None,
            reviews: None,
        }
    }

    fn catalog() -> Vec<Recipe> {
        vec![
            recipe("r1", "Chicken Biryani", &["Basmati Rice", "Chicken"], true),
            recipe("r2", "Masala Dosa", &["Rice Batter", "Potato"], false),
            recipe("r3", "Paneer Tikka", &["Paneer", "Yogurt"], false),
        ]
    }

    fn engine() -> CatalogEngine {
        CatalogEngine::with_seed(catalog(), Latency::none(), 7)
    }

    #[tokio::test]
    async fn test_initial_view_is_full_catalog() {
        let engine = engine();
        assert_eq!(engine.filtered().len(), 3);
        assert_eq!(engine.all().await.len(), 3);
    }

    #[tokio::test]
    async fn test_recipe_by_id() {
        let engine = engine();
        assert_eq!(engine.recipe_by_id("r2").await.unwrap().name, "Masala Dosa");
        assert!(engine.recipe_by_id("r9").await.is_none());
    }

    #[test]
    fn test_featured_subset() {
        let engine = engine();
        let featured = engine.featured();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "r1");
    }

    #[test]
    fn test_search_then_empty_query_restores_catalog() {
        let engine = engine();

        engine.search("chicken");
        assert_eq!(engine.filtered().len(), 1);
        assert_eq!(engine.current_search(), "chicken");

        engine.search("");
        assert_eq!(engine.filtered().len(), 3);
    }

    #[test]
    fn test_entry_points_compose_into_one_filter() {
        let engine = engine();

        // Selection first, then query: the query sees the selection.
        engine.filter_by_ingredients(vec!["rice".to_string()]);
        assert_eq!(engine.filtered().len(), 2);

        engine.search("dosa");
        let view = engine.filtered();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "r2");

        // Empty query keeps the ingredient filter active.
        engine.search("");
        assert_eq!(engine.filtered().len(), 2);
    }

    #[test]
    fn test_clear_filters_resets_everything() {
        let engine = engine();
        engine.search("paneer");
        engine.filter_by_ingredients(vec!["yogurt".to_string()]);

        engine.clear_filters();
        assert_eq!(engine.filtered().len(), 3);
        assert!(engine.current_search().is_empty());
        assert!(engine.selected_ingredients().is_empty());
    }

    #[tokio::test]
    async fn test_generate_prefers_token_match() {
        let engine = engine();
        let picked = engine.generate("something with paneer please").await.unwrap();
        assert_eq!(picked.id, "r3");
    }

    #[tokio::test]
    async fn test_generate_single_entry_catalog_is_deterministic() {
        let single = vec![recipe("only", "Lemon Rice", &["Rice"], false)];
        let engine = CatalogEngine::with_seed(single, Latency::none(), 42);

        // Score 0 falls back to random-of-one, which is the entry itself.
        let picked = engine.generate("zzzz qqqq").await.unwrap();
        assert_eq!(picked.id, "only");
    }

    #[tokio::test]
    async fn test_generate_fallback_is_seed_stable() {
        let a = CatalogEngine::with_seed(catalog(), Latency::none(), 11);
        let b = CatalogEngine::with_seed(catalog(), Latency::none(), 11);

        let from_a = a.generate("xylophone").await.unwrap();
        let from_b = b.generate("xylophone").await.unwrap();
        assert_eq!(from_a.id, from_b.id);
    }

    #[tokio::test]
    async fn test_generate_empty_catalog_is_none() {
        let engine = CatalogEngine::with_seed(Vec::new(), Latency::none(), 1);
        assert!(engine.generate("anything").await.is_none());
    }
}
