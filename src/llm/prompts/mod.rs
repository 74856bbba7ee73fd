// ABOUTME: Prompt builders for diet plan generation and meal nutrition estimates
// ABOUTME: Fixed instructions are loaded at compile time; profile fields are formatted in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! Fixed prompt text lives next to this module and is loaded at compile time
//! for easy maintenance. The builders only splice request data into it.

use std::fmt::Write as _;

use crate::llm::ChatMessage;
use crate::models::{FoodPortion, UserProfile};

/// System instructions for the weekly plan fallback
pub const DIET_PLAN_SYSTEM_PROMPT: &str = include_str!("diet_plan_system.md");

/// JSON shape the nutrition estimate must follow
pub const MEAL_NUTRITION_SCHEMA: &str = include_str!("meal_nutrition_schema.json");

const NONE_LISTED: &str = "None";

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        NONE_LISTED.to_owned()
    } else {
        values.join(", ")
    }
}

/// User message asking for a 7-day plan for `profile`
#[must_use]
pub fn diet_plan_user_prompt(profile: &UserProfile, target_calories: i32) -> String {
    format!(
        "Generate a 7-day personalized Indian diet plan for {name}.\n\
         Goal: {goal}\n\
         Region: {region}\n\
         Cuisine: {cuisine}\n\
         Allergies: {allergies}\n\
         Health conditions: {conditions}\n\
         Target calories: {target_calories}\n\
         \n\
         Each day (Monday to Sunday) must include:\n\
         - breakfast\n\
         - lunch\n\
         - dinner\n\
         - evening snack\n\
         - daily nutrition info (protein, carbs, fat, fiber, sugar, sodium)\n\
         Return the full plan as structured JSON with \"weekly_plan\" and \"summary\" keys.",
        name = profile.name,
        goal = profile.goal,
        region = profile.region,
        cuisine = profile.cuisine_preference,
        allergies = join_or_none(&profile.allergies),
        conditions = join_or_none(&profile.health_conditions),
    )
}

/// System then user message for the weekly plan fallback
#[must_use]
pub fn diet_plan_messages(profile: &UserProfile, target_calories: i32) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(DIET_PLAN_SYSTEM_PROMPT.trim_end()),
        ChatMessage::user(diet_plan_user_prompt(profile, target_calories)),
    ]
}

/// Single user message asking for the nutrition of a meal
#[must_use]
pub fn meal_nutrition_prompt(foods: &[FoodPortion]) -> String {
    let mut prompt = String::from(
        "You are a certified dietitian AI. Estimate the total calories and macronutrients for this meal:\n\n",
    );
    for food in foods {
        // Writing to a String cannot fail
        let _ = writeln!(prompt, "- {} ({})", food.item, food.quantity);
    }
    prompt.push_str("\nReturn ONLY a valid JSON object with this exact structure:\n");
    prompt.push_str(MEAL_NUTRITION_SCHEMA.trim_end());
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MessageRole;

    fn profile() -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "name": "Ravi",
            "age": 41,
            "goal": "Maintenance",
            "height_cm": 172.0,
            "current_weight_kg": 80.0,
            "region": "Atlantis",
            "allergies": ["peanut", "shellfish"],
        }))
        .unwrap()
    }

    #[test]
    fn test_plan_messages_order_and_content() {
        let messages = diet_plan_messages(&profile(), 1700);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert!(messages[0].content.contains("valid JSON only"));
        assert_eq!(messages[1].role, MessageRole::User);

        let user = &messages[1].content;
        assert!(user.contains("for Ravi."));
        assert!(user.contains("Region: Atlantis"));
        assert!(user.contains("Cuisine: Vegetarian"));
        assert!(user.contains("Allergies: peanut, shellfish"));
        assert!(user.contains("Health conditions: None"));
        assert!(user.contains("Target calories: 1700"));
        assert!(user.contains("\"weekly_plan\" and \"summary\""));
    }

    #[test]
    fn test_nutrition_prompt_lists_items_and_schema() {
        let prompt = meal_nutrition_prompt(&[
            FoodPortion::new("Idli", "2 pieces"),
            FoodPortion::new("Sambar", "1 cup"),
        ]);
        assert!(prompt.contains("- Idli (2 pieces)\n- Sambar (1 cup)\n"));
        assert!(prompt.contains("\"total_calories\": 0"));
        assert!(prompt.contains("\"macros\""));
    }

    #[test]
    fn test_schema_is_valid_json() {
        let schema: serde_json::Value = serde_json::from_str(MEAL_NUTRITION_SCHEMA).unwrap();
        assert!(schema["breakdown"].is_array());
    }
}
