// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Planning policy constants, fixed advisory text, and configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list. Meal-plan fractions and ranges are policy values, not derived
//! from anything else.

/// Service identifiers used in logs and the root route
pub mod service_names {
    /// Service name reported by `GET /` and startup logs
    pub const DIET_PLANNER: &str = "diet-planner";
    /// Name used when reporting completion provider errors
    pub const COMPLETION_PROVIDER: &str = "Mistral";
}

/// Environment variable names
pub mod env_config {
    /// Completion provider API key (required)
    pub const MISTRAL_API_KEY: &str = "MISTRAL_API_KEY";
    /// Completion provider model identifier
    pub const MISTRAL_MODEL: &str = "MISTRAL_MODEL";
    /// Completion provider base URL
    pub const MISTRAL_API_BASE_URL: &str = "MISTRAL_API_BASE_URL";
    /// Sampling temperature for completions
    pub const LLM_TEMPERATURE: &str = "LLM_TEMPERATURE";
    /// Maximum tokens per completion
    pub const LLM_MAX_TOKENS: &str = "LLM_MAX_TOKENS";
    /// Bind address for the HTTP server
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Port for the HTTP server
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Inbound request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
}

/// Configuration defaults
pub mod defaults {
    /// Default completion model
    pub const MISTRAL_MODEL: &str = "mistral-large-latest";
    /// Default completion provider endpoint
    pub const MISTRAL_API_BASE_URL: &str = "https://api.mistral.ai";
    /// Default bind address
    pub const HTTP_HOST: &str = "0.0.0.0";
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8000;
    /// Default inbound request timeout, longer than the provider timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 330;
}

/// Completion request tuning
pub mod llm {
    /// Low temperature keeps JSON output stable
    pub const DEFAULT_TEMPERATURE: f32 = 0.2;
    /// Token budget per completion
    pub const DEFAULT_MAX_TOKENS: u32 = 800;
    /// Upper bound accepted for temperature
    pub const MAX_TEMPERATURE: f32 = 2.0;
    /// Connection timeout for the provider
    pub const CONNECT_TIMEOUT_SECS: u64 = 30;
    /// Whole-request timeout for the provider
    pub const REQUEST_TIMEOUT_SECS: u64 = 300;
}

/// Local meal plan policy
pub mod meal_plan {
    use std::ops::RangeInclusive;

    /// Days of the week in plan order
    pub const DAY_NAMES: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    /// Items sampled per meal slot per day
    pub const ITEMS_PER_MEAL: usize = 2;

    /// Share of the daily target for breakfast
    pub const BREAKFAST_FRACTION: f64 = 0.25;
    /// Share of the daily target for lunch
    pub const LUNCH_FRACTION: f64 = 0.35;
    /// Share of the daily target for the evening snack
    pub const EVENING_SNACK_FRACTION: f64 = 0.10;
    /// Share of the daily target for dinner
    pub const DINNER_FRACTION: f64 = 0.30;

    /// Daily protein estimate (g)
    pub const PROTEIN_G: RangeInclusive<u32> = 60..=90;
    /// Daily carbohydrate estimate (g)
    pub const CARBS_G: RangeInclusive<u32> = 200..=250;
    /// Daily fat estimate (g)
    pub const FATS_G: RangeInclusive<u32> = 40..=60;
    /// Daily fiber estimate (g)
    pub const FIBER_G: RangeInclusive<u32> = 20..=30;
    /// Daily sodium estimate (mg)
    pub const SODIUM_MG: RangeInclusive<u32> = 1500..=2200;
    /// Daily sugar estimate (g)
    pub const SUGAR_G: RangeInclusive<u32> = 20..=40;

    /// Exercise suggestions, one picked per day
    pub const EXERCISE_SUGGESTIONS: [&str; 3] = [
        "30 minutes brisk walk",
        "45 minutes yoga",
        "20 minutes strength training",
    ];

    /// Daily hydration reminder
    pub const HYDRATION_REMINDER: &str = "Drink 2-3 liters of water daily.";

    /// Daily health tips
    pub const HEALTH_TIPS: [&str; 3] = [
        "Avoid sugar and fried foods.",
        "Eat slowly and chew thoroughly.",
        "Sleep at least 7 hours each night.",
    ];

    /// Guidelines attached to every plan response
    pub const HEALTH_GUIDELINES: [&str; 3] = [
        "Avoid sugary drinks.",
        "Include enough protein in every meal.",
        "Get at least 7 hours of sleep daily.",
    ];
}

/// Calorie model coefficients
pub mod calorie_model {
    /// kcal per kg of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age (subtracted)
    pub const AGE_COEF: f64 = 5.0;
    /// Constant offset
    pub const OFFSET: f64 = 5.0;
    /// Goal multiplier for weight loss
    pub const WEIGHT_LOSS_FACTOR: f64 = 0.8;
    /// Goal multiplier for weight gain
    pub const WEIGHT_GAIN_FACTOR: f64 = 1.2;
    /// Goal multiplier for anything else
    pub const MAINTENANCE_FACTOR: f64 = 1.0;
}

/// Profile validation limits
pub mod limits {
    /// Oldest accepted age
    pub const MAX_AGE: u32 = 120;
    /// Tallest accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Heaviest accepted weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 500.0;
}

/// Fixed caller-facing messages
pub mod messages {
    /// Returned when the LLM fallback cannot produce a plan
    pub const FALLBACK_FAILED: &str = "Fallback LLM failed to generate diet plan.";
    /// Returned for any other plan generation failure
    pub const PLAN_FAILED: &str = "Unable to generate diet plan. Please try again later.";
}
