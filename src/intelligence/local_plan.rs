// ABOUTME: Local weekly plan builder sampling dishes from the food catalog
// ABOUTME: Allergen filtering, per-slot sampling, calorie split, and randomized daily nutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Local Plan Builder
//!
//! Builds Monday to Sunday from the catalog entry matching the profile's
//! region and cuisine. Each day draws two distinct dishes per slot. The
//! nutrient figures are drawn uniformly from fixed ranges; they are
//! placeholders, not computed from the dishes.

use rand::seq::index;
use rand::Rng;
use tracing::debug;

use crate::constants::meal_plan::{
    BREAKFAST_FRACTION, CARBS_G, DAY_NAMES, DINNER_FRACTION, EVENING_SNACK_FRACTION,
    EXERCISE_SUGGESTIONS, FATS_G, FIBER_G, HEALTH_TIPS, HYDRATION_REMINDER, ITEMS_PER_MEAL,
    LUNCH_FRACTION, PROTEIN_G, SODIUM_MG, SUGAR_G,
};
use crate::errors::{AppError, AppResult};
use crate::intelligence::food_catalog::{FoodCatalog, MealLists};
use crate::models::{DailyMeals, DayPlan, Meal, MealSlot, NutritionInfo, UserProfile, WeeklyPlan};

/// Drop dishes whose name contains any allergen, case-insensitively
///
/// Blank allergens are ignored. When every dish would be dropped the
/// unfiltered list is returned instead, so a non-empty input never comes
/// back empty.
#[must_use]
pub fn filter_allergens(items: &[String], allergies: &[String]) -> Vec<String> {
    let allergens: Vec<String> = allergies
        .iter()
        .map(|allergen| allergen.trim().to_lowercase())
        .filter(|allergen| !allergen.is_empty())
        .collect();

    if allergens.is_empty() {
        return items.to_vec();
    }

    let kept: Vec<String> = items
        .iter()
        .filter(|item| {
            let name = item.to_lowercase();
            !allergens.iter().any(|allergen| name.contains(allergen.as_str()))
        })
        .cloned()
        .collect();

    if kept.is_empty() {
        items.to_vec()
    } else {
        kept
    }
}

/// Catalog lists after allergen filtering, checked to be sample-able
struct FilteredMenu {
    breakfast: Vec<String>,
    lunch: Vec<String>,
    dinner: Vec<String>,
    snacks: Vec<String>,
}

impl FilteredMenu {
    fn new(lists: &MealLists, allergies: &[String]) -> AppResult<Self> {
        let filtered = |slot: MealSlot| -> AppResult<Vec<String>> {
            let items = filter_allergens(lists.slot(slot), allergies);
            if items.len() < ITEMS_PER_MEAL {
                return Err(AppError::insufficient_catalog_data(
                    slot.as_str(),
                    items.len(),
                    ITEMS_PER_MEAL,
                ));
            }
            Ok(items)
        };

        Ok(Self {
            breakfast: filtered(MealSlot::Breakfast)?,
            lunch: filtered(MealSlot::Lunch)?,
            dinner: filtered(MealSlot::Dinner)?,
            snacks: filtered(MealSlot::Snacks)?,
        })
    }
}

fn sample_items<R: Rng + ?Sized>(items: &[String], rng: &mut R) -> Vec<String> {
    index::sample(rng, items.len(), ITEMS_PER_MEAL)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}

fn meal_calories(target_calories: i32, fraction: f64) -> i32 {
    (f64::from(target_calories) * fraction) as i32
}

fn random_nutrition<R: Rng + ?Sized>(rng: &mut R) -> NutritionInfo {
    NutritionInfo {
        protein_g: rng.gen_range(PROTEIN_G),
        carbs_g: rng.gen_range(CARBS_G),
        fats_g: rng.gen_range(FATS_G),
        fiber_g: rng.gen_range(FIBER_G),
        sodium_mg: rng.gen_range(SODIUM_MG),
        sugar_g: rng.gen_range(SUGAR_G),
    }
}

fn build_day<R: Rng + ?Sized>(
    day_number: u8,
    day_name: &str,
    menu: &FilteredMenu,
    target_calories: i32,
    rng: &mut R,
) -> DayPlan {
    let breakfast = sample_items(&menu.breakfast, rng);
    let lunch = sample_items(&menu.lunch, rng);
    let dinner = sample_items(&menu.dinner, rng);
    let snacks = sample_items(&menu.snacks, rng);

    let meals = DailyMeals {
        breakfast: Meal {
            items: breakfast,
            calories: meal_calories(target_calories, BREAKFAST_FRACTION),
        },
        lunch: Meal {
            items: lunch,
            calories: meal_calories(target_calories, LUNCH_FRACTION),
        },
        evening_snack: Meal {
            items: snacks,
            calories: meal_calories(target_calories, EVENING_SNACK_FRACTION),
        },
        dinner: Meal {
            items: dinner,
            calories: meal_calories(target_calories, DINNER_FRACTION),
        },
    };

    let nutritional_breakdown = random_nutrition(rng);
    let exercise = EXERCISE_SUGGESTIONS[rng.gen_range(0..EXERCISE_SUGGESTIONS.len())];

    DayPlan {
        day_number,
        day_name: day_name.to_owned(),
        total_calories: target_calories,
        meals,
        nutritional_breakdown,
        hydration_reminder: HYDRATION_REMINDER.to_owned(),
        exercise_suggestion: exercise.to_owned(),
        health_tips: HEALTH_TIPS.iter().map(|&tip| tip.to_owned()).collect(),
    }
}

/// Build a weekly plan from the catalog
///
/// Returns `Ok(None)` when the catalog has no entry for the profile's region
/// and cuisine; the caller decides what to do instead.
///
/// # Errors
///
/// Returns `INSUFFICIENT_CATALOG_DATA` when a filtered slot has fewer than two
/// dishes.
pub fn build_local_plan<R: Rng + ?Sized>(
    catalog: &FoodCatalog,
    profile: &UserProfile,
    target_calories: i32,
    rng: &mut R,
) -> AppResult<Option<WeeklyPlan>> {
    let Some(lists) = catalog.lookup(&profile.region, &profile.cuisine_preference) else {
        return Ok(None);
    };

    let menu = FilteredMenu::new(lists, &profile.allergies)?;

    let days = (1_u8..)
        .zip(DAY_NAMES)
        .map(|(day_number, day_name)| build_day(day_number, day_name, &menu, target_calories, rng))
        .collect();

    debug!(
        region = %profile.region_key(),
        cuisine = %profile.cuisine_key(),
        target_calories,
        "Built local weekly plan"
    );

    WeeklyPlan::new(days).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn test_filter_removes_matching_items() {
        let items = strings(&["Peanut Chutney", "Idli", "Groundnut Sundal"]);
        let kept = filter_allergens(&items, &strings(&["PEANUT"]));
        assert_eq!(kept, strings(&["Idli", "Groundnut Sundal"]));
    }

    #[test]
    fn test_filter_restores_list_when_everything_matches() {
        let items = strings(&["Egg Dosa", "Boiled Egg"]);
        assert_eq!(filter_allergens(&items, &strings(&["egg"])), items);
    }

    #[test]
    fn test_filter_ignores_blank_allergens() {
        let items = strings(&["Idli", "Dosa"]);
        assert_eq!(filter_allergens(&items, &strings(&["", "   "])), items);
    }

    #[test]
    fn test_meal_calories_truncate() {
        assert_eq!(meal_calories(1269, BREAKFAST_FRACTION), 317);
        assert_eq!(meal_calories(1269, LUNCH_FRACTION), 444);
        assert_eq!(meal_calories(1269, EVENING_SNACK_FRACTION), 126);
        assert_eq!(meal_calories(1269, DINNER_FRACTION), 380);
    }
}
