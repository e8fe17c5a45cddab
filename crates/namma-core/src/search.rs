//! # Catalog Search
//!
//! Pure search, filtering, and prompt-matching logic over the recipe
//! catalog.
//!
//! `search(query)` and `filter_by_ingredients(terms)` in the engine are
//! two entry points into the single combined filter implemented here:
//! every recompute starts from the full catalog and applies both the text
//! query and the ingredient selection, so neither entry point ever sees
//! the other's intermediate state.
//!
//! All matching is naive case-insensitive substring containment; there is
//! deliberately no ranking beyond the generator's token count.

use crate::types::Recipe;

/// Checks whether a recipe matches the text query.
///
/// A match is a case-insensitive substring hit in the name, the
/// description, or any ingredient name. An empty query matches everything.
pub fn matches_query(recipe: &Recipe, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    recipe.name.to_lowercase().contains(&query)
        || recipe.description.to_lowercase().contains(&query)
        || recipe
            .ingredients
            .iter()
            .any(|i| i.name.to_lowercase().contains(&query))
}

/// Checks whether a recipe matches the ingredient selection.
///
/// At least one selected term must be a case-insensitive substring of at
/// least one ingredient name. An empty selection matches everything.
pub fn matches_ingredients(recipe: &Recipe, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    selected.iter().any(|term| {
        let term = term.to_lowercase();
        recipe
            .ingredients
            .iter()
            .any(|i| i.name.to_lowercase().contains(&term))
    })
}

/// Recomputes the filtered view from the full catalog.
///
/// Applies the text query and the ingredient selection together as one
/// intersection; catalog order is preserved.
pub fn filter_catalog(catalog: &[Recipe], query: &str, selected: &[String]) -> Vec<Recipe> {
    catalog
        .iter()
        .filter(|r| matches_query(r, query) && matches_ingredients(r, selected))
        .cloned()
        .collect()
}

/// Splits a free-text prompt into lowercase tokens on whitespace and commas.
pub fn tokenize(prompt: &str) -> Vec<String> {
    prompt
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scores a recipe against prompt tokens.
///
/// The score is the count of tokens that appear as a substring of the
/// concatenated name, description, and ingredient names.
pub fn score(recipe: &Recipe, tokens: &[String]) -> usize {
    let haystack = {
        let mut text = format!("{} {}", recipe.name, recipe.description);
        for ingredient in &recipe.ingredients {
            text.push(' ');
            text.push_str(&ingredient.name);
        }
        text.to_lowercase()
    };
    tokens.iter().filter(|t| haystack.contains(t.as_str())).count()
}

/// Finds the best-scoring catalog entry for a prompt.
///
/// Returns `None` when no token matches anything; ties break toward the
/// earlier catalog entry. The random fallback for the `None` case lives in
/// the engine, which owns the randomness source.
pub fn best_match<'a>(catalog: &'a [Recipe], prompt: &str) -> Option<&'a Recipe> {
    let tokens = tokenize(prompt);
    let mut best: Option<(&Recipe, usize)> = None;
    for recipe in catalog {
        let s = score(recipe, &tokens);
        // Strictly-greater keeps the first of any tied pair.
        if s > 0 && best.map_or(true, |(_, bs)| s > bs) {
            best = Some((recipe, s));
        }
    }
    best.map(|(r, _)| r)
}
