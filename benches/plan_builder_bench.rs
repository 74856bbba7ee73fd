// ABOUTME: Criterion benchmarks for the calorie model and catalog plan builder
// ABOUTME: Measures weekly plan construction with and without allergen filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for local plan generation.
//!
//! Uses a seeded `ChaCha8Rng` so every run samples the same menus.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use diet_planner::intelligence::{build_local_plan, calculate_calorie_targets, FoodCatalog};
use diet_planner::models::UserProfile;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_profile(allergies: &[&str]) -> UserProfile {
    UserProfile {
        name: "Bench".to_owned(),
        age: 35,
        goal: "Weight Loss".to_owned(),
        height_cm: 170.0,
        current_weight_kg: 78.0,
        target_weight_kg: Some(70.0),
        health_conditions: Vec::new(),
        region: "South India".to_owned(),
        cuisine_preference: "Non-Vegetarian".to_owned(),
        allergies: allergies.iter().map(|&a| a.to_owned()).collect(),
    }
}

fn bench_calorie_targets(c: &mut Criterion) {
    let profile = bench_profile(&[]);
    c.bench_function("calorie_targets", |b| {
        b.iter(|| calculate_calorie_targets(black_box(&profile)));
    });
}

fn bench_local_plan(c: &mut Criterion) {
    let catalog = FoodCatalog::builtin();
    let mut group = c.benchmark_group("local_plan");

    for (label, allergies) in [("no_allergies", Vec::new()), ("egg_free", vec!["egg"])] {
        let profile = bench_profile(&allergies);
        group.bench_with_input(BenchmarkId::new("weekly", label), &profile, |b, profile| {
            let mut rng = ChaCha8Rng::seed_from_u64(17);
            b.iter(|| build_local_plan(&catalog, black_box(profile), 1800, &mut rng).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_calorie_targets, bench_local_plan);
criterion_main!(benches);
