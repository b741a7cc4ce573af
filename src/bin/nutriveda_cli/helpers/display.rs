// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda
// ABOUTME: Output formatting helpers for nutriveda-cli
// ABOUTME: Text tables for foods, meal plans, exercises and profiles, or pretty JSON

use anyhow::Result;
use nutriveda::intelligence::{MealPlan, MealSlot};
use nutriveda::models::{Exercise, FoodItem, UserProfile};
use nutriveda::notices::Notice;
use serde::Serialize;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a notice line
pub fn print_notice(notice: &Notice) {
    println!("{notice}");
}

/// One line per food with its headline nutrition
pub fn print_foods(foods: &[FoodItem]) {
    if foods.is_empty() {
        println!("No foods found.");
        return;
    }
    for food in foods {
        print_food_line(food);
    }
}

fn print_food_line(food: &FoodItem) {
    let facts = &food.nutrition_per_100g;
    println!(
        "{:>3}  {:<16} {:<10} {:<7} {:<11} {:<9} {:>4} kcal  P {:>4.1}g  C {:>4.1}g  F {:>4.1}g",
        food.id,
        food.name,
        food.category,
        food.season,
        food.region,
        food.constitution,
        facts.calories,
        facts.protein,
        facts.carbs,
        facts.fat
    );
}

/// Full nutrition panel for one food
pub fn print_food_details(food: &FoodItem) {
    let facts = &food.nutrition_per_100g;
    println!("{} (#{})", food.name, food.id);
    println!("{}", "=".repeat(40));
    println!("  Category:     {}", food.category);
    println!("  Season:       {}", food.season);
    println!("  Region:       {}", food.region);
    println!("  Constitution: {}", food.constitution);
    println!("  Per 100 g:");
    println!("    Calories:   {} kcal", facts.calories);
    println!("    Protein:    {} g", facts.protein);
    println!("    Carbs:      {} g", facts.carbs);
    println!("    Fat:        {} g", facts.fat);
    println!("    Fiber:      {} g", facts.fiber);
    println!("    Sugar:      {} g", facts.sugar);
    for (label, nutrients) in [("Vitamins", &facts.vitamins), ("Minerals", &facts.minerals)] {
        if let Some(map) = nutrients {
            println!("  {label}:");
            for (name, amount) in map {
                println!("    {name}: {amount}");
            }
        }
    }
}

/// Meals with per-meal and daily calorie totals
pub fn print_meal_plan(plan: &MealPlan) {
    for slot in MealSlot::ALL {
        println!(
            "\n{} ({} kcal)",
            slot.label(),
            plan.meal_calories(slot)
        );
        let foods = plan.slot(slot);
        if foods.is_empty() {
            println!("  (nothing matched your preferences)");
        }
        for food in foods {
            println!(
                "  - {} ({} kcal)",
                food.name, food.nutrition_per_100g.calories
            );
        }
    }
    let totals = plan.macro_totals();
    println!(
        "\nDaily total: {} kcal, protein {:.1} g, carbs {:.1} g, fat {:.1} g",
        totals.calories, totals.protein, totals.carbs, totals.fat
    );
}

/// One block per exercise
pub fn print_exercises(exercises: &[Exercise]) {
    for exercise in exercises {
        println!(
            "{} [{:?}, {:?}] {} min, ~{} kcal",
            exercise.name,
            exercise.category,
            exercise.intensity,
            exercise.duration_minutes,
            exercise.calories_burned
        );
        println!("    {}", exercise.description);
        println!("    Good for: {}", exercise.suitable.join(", "));
    }
}

/// Profile summary including questionnaire answers
pub fn print_profile(profile: &UserProfile) {
    println!("{} <{}> (id {})", profile.name, profile.email, profile.id);
    let Some(answers) = &profile.questionnaire else {
        println!("Questionnaire: not completed");
        return;
    };

    let list = |items: &Option<Vec<String>>| {
        items
            .as_deref()
            .filter(|items| !items.is_empty())
            .map_or_else(|| "-".to_owned(), |items| items.join(", "))
    };
    let show = |value: Option<String>| value.unwrap_or_else(|| "-".to_owned());

    println!("Questionnaire:");
    println!("  Age:            {}", show(answers.age.map(|a| a.to_string())));
    println!("  Gender:         {}", show(answers.gender.clone()));
    println!("  Height:         {}", show(answers.height.map(|h| format!("{h} cm"))));
    println!("  Weight:         {}", show(answers.weight.map(|w| format!("{w} kg"))));
    println!("  Dietary:        {}", list(&answers.dietary_restrictions));
    println!("  Fitness goals:  {}", list(&answers.fitness_goals));
    println!("  Health:         {}", list(&answers.health_conditions));
    println!(
        "  Ayurvedic type: {}",
        show(answers.ayurvedic_type.map(|c| c.to_string()))
    );
    println!("  Region:         {}", show(answers.region.clone()));
}
