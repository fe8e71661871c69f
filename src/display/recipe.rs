//! Recipe display formatting

use crate::models::Recipe;
use crate::services::Diagnostic;

/// Format a recipe with ingredients, condiments and numbered steps
pub fn format_recipe_details(recipe: &Recipe) -> String {
    let mut output = String::new();
    output.push_str(&format!("Recipe: {}\n", recipe.name));
    if !recipe.category.is_empty() {
        output.push_str(&format!("Category: {}\n", recipe.category));
    }

    output.push_str("Ingredients:\n");
    for ingredient in &recipe.ingredients {
        output.push_str(&format!("- {}\n", ingredient));
    }

    if !recipe.condiments.is_empty() {
        output.push_str("Condiments:\n");
        for condiment in &recipe.condiments {
            output.push_str(&format!("- {}\n", condiment));
        }
    }

    output.push_str("Steps:\n");
    for (i, step) in recipe.steps.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, step));
    }

    output
}

/// Format the numbered list of recipes that can be made
pub fn format_feasible_list(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "Sorry, you cannot make any recipes with the ingredients you have.\n".to_string();
    }

    let mut output = String::from("Based on your ingredients, you can make the following recipes:\n");
    for (i, recipe) in recipes.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, recipe.name));
    }
    output
}

/// Format one missing-ingredient diagnostic
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    format!(
        "You are missing the following ingredients for {}: {}",
        diagnostic.recipe,
        diagnostic.missing.join(", ")
    )
}

/// Format the catalog as a table of name, category and ingredient count
pub fn format_recipe_list(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes found.\n\nRun 'kitchen init' to create a starter catalog.\n"
            .to_string();
    }

    let name_width = recipes
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<10}  {:>11}\n",
        "Name",
        "Category",
        "Ingredients",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<10}  {:->11}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for recipe in recipes {
        output.push_str(&format!(
            "{:<name_width$}  {:<10}  {:>11}\n",
            recipe.name,
            recipe.category,
            recipe.ingredients.len(),
            name_width = name_width,
        ));
    }

    output
}
