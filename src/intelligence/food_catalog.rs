// ABOUTME: Curated regional food catalog keyed by region, cuisine, and meal slot
// ABOUTME: Immutable after construction and shared read-only across requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Catalog
//!
//! Maps a normalized `(region, cuisine)` pair to four lists of dish names,
//! one per meal slot. Keys are trimmed and lower-cased on insert and on
//! lookup, so "  South India " and "south india" hit the same entry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{normalize_key, MealSlot};

/// Dish names for each meal slot of one region and cuisine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealLists {
    /// Breakfast dishes
    pub breakfast: Vec<String>,
    /// Lunch dishes
    pub lunch: Vec<String>,
    /// Dinner dishes
    pub dinner: Vec<String>,
    /// Snacks, served as the evening snack
    pub snacks: Vec<String>,
}

impl MealLists {
    /// Build lists from string slices
    #[must_use]
    pub fn new(breakfast: &[&str], lunch: &[&str], dinner: &[&str], snacks: &[&str]) -> Self {
        let owned = |items: &[&str]| items.iter().map(|&item| item.to_owned()).collect();
        Self {
            breakfast: owned(breakfast),
            lunch: owned(lunch),
            dinner: owned(dinner),
            snacks: owned(snacks),
        }
    }

    /// Dishes for one slot
    #[must_use]
    pub fn slot(&self, slot: MealSlot) -> &[String] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }
}

/// Read-only catalog of regional dishes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodCatalog {
    entries: HashMap<(String, String), MealLists>,
}

impl FoodCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the lists for `(region, cuisine)`
    #[must_use]
    pub fn with_entry(mut self, region: &str, cuisine: &str, lists: MealLists) -> Self {
        self.entries
            .insert((normalize_key(region), normalize_key(cuisine)), lists);
        self
    }

    /// Curated South and North Indian catalog served in production
    #[must_use]
    pub fn builtin() -> Self {
        Self::new()
            .with_entry(
                "south india",
                "vegetarian",
                MealLists::new(
                    &["Idli", "Dosa", "Upma", "Pongal", "Rava Dosa"],
                    &[
                        "Sambar Rice",
                        "Curd Rice",
                        "Lemon Rice",
                        "Vegetable Biryani",
                        "Dal Rice",
                    ],
                    &["Chapathi with Dal", "Ragi Dosa", "Vegetable Stew", "Upma"],
                    &["Sundal", "Fruit Salad", "Green Tea", "Coconut Water"],
                ),
            )
            .with_entry(
                "south india",
                "non-vegetarian",
                MealLists::new(
                    &["Egg Dosa", "Omelette", "Upma", "Pesarattu"],
                    &["Chicken Curry", "Fish Curry with Rice", "Mutton Biryani"],
                    &[
                        "Grilled Chicken",
                        "Fish Fry with Rice",
                        "Egg Curry with Chapathi",
                    ],
                    &["Boiled Egg", "Buttermilk", "Nuts", "Green Tea"],
                ),
            )
            .with_entry(
                "north india",
                "vegetarian",
                MealLists::new(
                    &["Poha", "Paratha", "Oats Porridge", "Besan Chilla"],
                    &[
                        "Dal Tadka with Rice",
                        "Chole with Roti",
                        "Paneer Bhurji with Roti",
                    ],
                    &["Khichdi", "Vegetable Soup", "Roti with Dal", "Quinoa Pulao"],
                    &["Fruit Bowl", "Lassi", "Green Tea"],
                ),
            )
            .with_entry(
                "north india",
                "non-vegetarian",
                MealLists::new(
                    &["Egg Paratha", "Boiled Eggs", "Oats with Milk"],
                    &[
                        "Butter Chicken",
                        "Fish Curry with Rice",
                        "Mutton Keema with Roti",
                    ],
                    &["Grilled Chicken", "Egg Curry", "Fish Fry with Chapathi"],
                    &["Boiled Egg", "Buttermilk", "Nuts"],
                ),
            )
    }

    /// Lists for `(region, cuisine)`, normalizing both keys
    #[must_use]
    pub fn lookup(&self, region: &str, cuisine: &str) -> Option<&MealLists> {
        self.entries
            .get(&(normalize_key(region), normalize_key(cuisine)))
    }

    /// Number of `(region, cuisine)` entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_four_entries() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_lookup_normalizes_keys() {
        let catalog = FoodCatalog::builtin();
        let lists = catalog.lookup("  SOUTH India ", "Vegetarian").unwrap();
        assert_eq!(lists.slot(MealSlot::Breakfast)[0], "Idli");
        assert!(catalog.lookup("north india", "NON-VEGETARIAN").is_some());
    }

    #[test]
    fn test_lookup_misses() {
        let catalog = FoodCatalog::builtin();
        assert!(catalog.lookup("atlantis", "vegetarian").is_none());
        assert!(catalog.lookup("south india", "vegan").is_none());
    }

    #[test]
    fn test_every_builtin_slot_can_be_sampled() {
        let catalog = FoodCatalog::builtin();
        for region in ["south india", "north india"] {
            for cuisine in ["vegetarian", "non-vegetarian"] {
                let lists = catalog.lookup(region, cuisine).unwrap();
                for slot in MealSlot::ALL {
                    assert!(lists.slot(slot).len() >= 2, "{region}/{cuisine}/{slot:?}");
                }
            }
        }
    }
}
