// ABOUTME: Profile fixtures and seeded randomness for planner tests
// ABOUTME: Keeps test profiles realistic and runs reproducible with ChaCha8Rng
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use diet_planner::models::UserProfile;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Value};

/// Deterministic rng for reproducible plans
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Request body for a 30-year-old losing weight in South India
pub fn profile_json() -> Value {
    json!({
        "name": "Asha",
        "age": 30,
        "goal": "Weight Loss",
        "height_cm": 165.0,
        "current_weight_kg": 70.0,
        "target_weight_kg": 62.0,
        "health_conditions": [],
        "region": "South India",
        "cuisine_preference": "Vegetarian",
        "allergies": []
    })
}

pub fn profile() -> UserProfile {
    serde_json::from_value(profile_json()).unwrap()
}

/// Same person, different region and cuisine
pub fn profile_in(region: &str, cuisine: &str) -> UserProfile {
    UserProfile {
        region: region.to_owned(),
        cuisine_preference: cuisine.to_owned(),
        ..profile()
    }
}

/// A fallback reply shaped like what the provider usually sends
pub fn generated_plan_reply() -> String {
    json!({
        "weekly_plan": [
            {"day_name": "Monday", "meals": {"breakfast": ["Garlic Bread"]}},
            {"day_name": "Tuesday", "meals": {"breakfast": ["Muesli"]}}
        ],
        "summary": {"notes": "Generated for an uncatalogued region"}
    })
    .to_string()
}
