// ABOUTME: Integration tests for the plan orchestrator's local and fallback paths
// ABOUTME: Uses a scripted completion provider to observe when and how the fallback is called
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::sync::Arc;

use diet_planner::constants::messages;
use diet_planner::errors::{AppError, ErrorCode};
use diet_planner::intelligence::FoodCatalog;
use diet_planner::llm::{CompletionOptions, MessageRole};
use diet_planner::models::{PlanPayload, UserProfile};
use diet_planner::services::DietPlannerService;
use helpers::fixtures::{generated_plan_reply, profile, profile_in, seeded_rng};
use helpers::scripted_llm::ScriptedLlmProvider;
use serde_json::json;

fn planner(llm: &Arc<ScriptedLlmProvider>) -> DietPlannerService {
    DietPlannerService::new(
        Arc::new(FoodCatalog::builtin()),
        llm.clone(),
        CompletionOptions::default(),
    )
}

#[tokio::test]
async fn test_catalog_hit_never_calls_provider() {
    helpers::init_test_logging();
    let llm = Arc::new(ScriptedLlmProvider::new());
    let result = planner(&llm)
        .generate_plan_with_rng(&profile_in(" south INDIA ", "Vegetarian"), &mut seeded_rng(5))
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.message, "Diet plan generated successfully for Asha");
    assert_eq!(result.summary.region, "south india");
    assert_eq!(result.summary.cuisine, "vegetarian");
    assert_eq!(result.summary.target_calories, 1269);
    assert!((result.summary.bmr - 1586.25).abs() < f64::EPSILON);
    assert_eq!(result.weekly_plan.as_local().unwrap().days().len(), 7);
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn test_catalog_miss_uses_fallback_once() {
    let llm = Arc::new(ScriptedLlmProvider::new().with_reply(&generated_plan_reply()));
    let result = planner(&llm)
        .generate_plan_with_rng(&profile_in("Atlantis", "Vegetarian"), &mut seeded_rng(5))
        .await
        .unwrap();

    assert_eq!(result.message, "Diet plan generated by AI for Asha");
    assert_eq!(result.summary.region, "atlantis");
    assert_eq!(
        result.weekly_plan,
        PlanPayload::Generated(json!([
            {"day_name": "Monday", "meals": {"breakfast": ["Garlic Bread"]}},
            {"day_name": "Tuesday", "meals": {"breakfast": ["Muesli"]}}
        ]))
    );

    let requests = llm.requests();
    assert_eq!(requests.len(), 1);
    let messages = &requests[0].messages;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::System);
    assert_eq!(messages[1].role, MessageRole::User);
    assert!(messages[1].content.contains("Atlantis"));
    assert!(messages[1].content.contains("1269"));
}

#[tokio::test]
async fn test_non_json_fallback_reply_is_forwarded_as_text() {
    let reply = "Monday: idli and sambar. Tuesday: poha.";
    let llm = Arc::new(ScriptedLlmProvider::new().with_reply(reply));
    let result = planner(&llm)
        .generate_plan_with_rng(&profile_in("Atlantis", "Vegan"), &mut seeded_rng(1))
        .await
        .unwrap();

    assert_eq!(result.weekly_plan, PlanPayload::Generated(json!(reply)));
}

#[tokio::test]
async fn test_fallback_transport_failure_is_upstream_error() {
    let llm = Arc::new(
        ScriptedLlmProvider::new()
            .with_error(AppError::external_unavailable("Mistral", "connection refused")),
    );
    let err = planner(&llm)
        .generate_plan_with_rng(&profile_in("Atlantis", "Vegetarian"), &mut seeded_rng(1))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::UpstreamGenerationFailure);
    assert_eq!(err.message, messages::FALLBACK_FAILED);
}

#[tokio::test]
async fn test_empty_fallback_plan_is_upstream_error() {
    let llm = Arc::new(ScriptedLlmProvider::new().with_reply(r#"{"weekly_plan": []}"#));
    let err = planner(&llm)
        .generate_plan_with_rng(&profile_in("Atlantis", "Vegetarian"), &mut seeded_rng(1))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::UpstreamGenerationFailure);
}

#[tokio::test]
async fn test_invalid_profile_rejected_before_any_work() {
    let llm = Arc::new(ScriptedLlmProvider::new());
    let p = UserProfile {
        current_weight_kg: -3.0,
        ..profile_in("Atlantis", "Vegetarian")
    };
    let err = planner(&llm)
        .generate_plan_with_rng(&p, &mut seeded_rng(1))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.details["field"], "current_weight_kg");
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn test_tiny_catalog_reports_generic_failure() {
    let catalog = FoodCatalog::new().with_entry(
        "south india",
        "vegetarian",
        diet_planner::intelligence::MealLists::new(
            &["Idli"],
            &["Sambar Rice", "Curd Rice"],
            &["Ragi Dosa", "Upma"],
            &["Sundal", "Green Tea"],
        ),
    );
    let llm = Arc::new(ScriptedLlmProvider::new());
    let service = DietPlannerService::new(Arc::new(catalog), llm.clone(), CompletionOptions::default());

    let err = service
        .generate_plan_with_rng(&profile(), &mut seeded_rng(1))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::PlanGenerationFailure);
    assert_eq!(err.message, messages::PLAN_FAILED);
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn test_generate_plan_with_entropy_rng() {
    let llm = Arc::new(ScriptedLlmProvider::new());
    let result = planner(&llm).generate_plan(&profile()).await.unwrap();
    assert!(!result.weekly_plan.is_generated());
}
