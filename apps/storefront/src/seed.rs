//! # Seed Catalog
//!
//! A small built-in catalog for the demo binary and integration tests.
//! The production catalog is provided at startup as a JSON file (see
//! [`load_catalog`]); this seed keeps the demo self-contained.

use std::fs;
use std::path::Path;

use namma_core::{Category, Difficulty, Ingredient, Money, Recipe, Step};
use namma_store::StoreResult;

/// Loads a catalog from a JSON file: an array of `Recipe` objects.
pub fn load_catalog(path: &Path) -> StoreResult<Vec<Recipe>> {
    let blob = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&blob)?)
}

fn ingredient(id: &str, name: &str, quantity: &str) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        quantity: quantity.to_string(),
        notes: None,
    }
}

fn step(id: &str, instruction: &str) -> Step {
    Step {
        id: id.to_string(),
        instruction: instruction.to_string(),
    }
}

/// The built-in sample catalog.
pub fn sample_catalog() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "chicken-biryani".to_string(),
            name: "Chicken Biryani".to_string(),
            description: "Fragrant basmati rice layered with spiced chicken and saffron"
                .to_string(),
            image: "/images/chicken-biryani.jpg".to_string(),
            category: Category::Nonvegetarian,
            preparation_time: 30,
            cooking_time: 45,
            servings: 4,
            difficulty: Difficulty::Hard,
            ingredients: vec![
                ingredient("cb-1", "Basmati Rice", "2 cups"),
                ingredient("cb-2", "Chicken", "500 g"),
                ingredient("cb-3", "Yogurt", "1 cup"),
                ingredient("cb-4", "Saffron", "1 pinch"),
            ],
            steps: vec![
                step("cb-s1", "Marinate the chicken in yogurt and spices"),
                step("cb-s2", "Par-boil the rice with whole spices"),
                step("cb-s3", "Layer rice over chicken and cook on dum"),
            ],
            ingredients_price: Money::from_rupees(280),
            ready_food_price: Money::from_rupees(420),
            youtube_video_id: "95BCU1n268w".to_string(),
            tags: vec!["rice".to_string(), "spicy".to_string(), "festive".to_string()],
            is_featured: true,
            rating: Some(4.7),
            reviews: Some(182),
        },
        Recipe {
            id: "masala-dosa".to_string(),
            name: "Masala Dosa".to_string(),
            description: "Crisp fermented rice crepe wrapped around spiced potato filling"
                .to_string(),
            image: "/images/masala-dosa.jpg".to_string(),
            category: Category::Traditional,
            preparation_time: 20,
            cooking_time: 15,
            servings: 2,
            difficulty: Difficulty::Medium,
            ingredients: vec![
                ingredient("md-1", "Rice Batter", "3 cups"),
                ingredient("md-2", "Potato", "4 medium"),
                ingredient("md-3", "Mustard Seeds", "1 tsp"),
                ingredient("md-4", "Curry Leaves", "1 sprig"),
            ],
            steps: vec![
                step("md-s1", "Temper mustard seeds and curry leaves"),
                step("md-s2", "Fold in boiled mashed potato"),
                step("md-s3", "Spread the batter thin and crisp on a hot tawa"),
            ],
            ingredients_price: Money::from_rupees(120),
            ready_food_price: Money::from_rupees(180),
            youtube_video_id: "DJRGnlGUNJE".to_string(),
            tags: vec!["breakfast".to_string(), "south-indian".to_string()],
            is_featured: true,
            rating: Some(4.5),
            reviews: Some(96),
        },
        Recipe {
            id: "paneer-tikka".to_string(),
            name: "Paneer Tikka".to_string(),
            description: "Charred cottage cheese skewers in a smoky yogurt marinade".to_string(),
            image: "/images/paneer-tikka.jpg".to_string(),
            category: Category::Vegetarian,
            preparation_time: 25,
            cooking_time: 20,
            servings: 3,
            difficulty: Difficulty::Medium,
            ingredients: vec![
                ingredient("pt-1", "Paneer", "400 g"),
                ingredient("pt-2", "Yogurt", "1 cup"),
                ingredient("pt-3", "Chili Powder", "2 tsp"),
                ingredient("pt-4", "Capsicum", "1 large"),
            ],
            steps: vec![
                step("pt-s1", "Whisk the marinade and coat the paneer cubes"),
                step("pt-s2", "Thread onto skewers with capsicum and onion"),
                step("pt-s3", "Grill until the edges char"),
            ],
            ingredients_price: Money::from_rupees(220),
            ready_food_price: Money::from_rupees(320),
            youtube_video_id: "YIJhYRyMEtM".to_string(),
            tags: vec!["starter".to_string(), "grilled".to_string()],
            is_featured: false,
            rating: Some(4.3),
            reviews: Some(64),
        },
        Recipe {
            id: "gulab-jamun".to_string(),
            name: "Gulab Jamun".to_string(),
            description: "Soft milk-solid dumplings soaked in cardamom rose syrup".to_string(),
            image: "/images/gulab-jamun.jpg".to_string(),
            category: Category::Dessert,
            preparation_time: 20,
            cooking_time: 30,
            servings: 6,
            difficulty: Difficulty::Easy,
            ingredients: vec![
                ingredient("gj-1", "Khoya", "250 g"),
                ingredient("gj-2", "Sugar", "2 cups"),
                ingredient("gj-3", "Cardamom", "4 pods"),
                ingredient("gj-4", "Rose Water", "1 tsp"),
            ],
            steps: vec![
                step("gj-s1", "Knead khoya into a smooth dough and shape balls"),
                step("gj-s2", "Fry on low heat until deep golden"),
                step("gj-s3", "Rest the dumplings in warm syrup"),
            ],
            ingredients_price: Money::from_rupees(150),
            ready_food_price: Money::from_rupees(240),
            youtube_video_id: "DB1VFhWsTNs".to_string(),
            tags: vec!["sweet".to_string(), "festive".to_string()],
            is_featured: false,
            rating: Some(4.8),
            reviews: Some(211),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 4);

        // Ids are unique and every entry has both prices and ingredients.
        for recipe in &catalog {
            assert!(!recipe.ingredients.is_empty());
            assert!(recipe.ingredients_price < recipe.ready_food_price);
        }
        let mut ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_catalog_json_roundtrip() {
        let catalog = sample_catalog();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: Vec<Recipe> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
