#[cfg(test)]
mod tests {
    use mealcart::aggregate::generate_grocery_report;
    use mealcart::recipe::{IngredientLine, RecipeRef};
    use mealcart::report::CategorizedReport;
    use serde_json::Value;
    use std::collections::HashMap;

    fn line(name: &str, amount: &str, unit: &str) -> IngredientLine {
        IngredientLine::new(name, amount, unit)
    }

    // Two recipes sharing milk with mismatched units, second recipe doubled
    fn sample_report() -> CategorizedReport {
        let recipes = vec![
            RecipeRef::new("r1", "Lasagna", 6)
                .with_ingredient(line("milk", "1", "cup"))
                .with_ingredient(line("beef", "500", "g"))
                .with_ingredient(line("parmesan", "100", "g")),
            RecipeRef::new("r2", "Bechamel", 4)
                .with_ingredient(line("milk", "200", "ml"))
                .with_ingredient(line("butter", "50", "g")),
        ];
        let mut multipliers = HashMap::new();
        multipliers.insert("r2".to_string(), 2.0);

        generate_grocery_report(&recipes, &multipliers).unwrap()
    }

    fn sample_report_json() -> Value {
        serde_json::to_value(sample_report()).unwrap()
    }

    #[test]
    fn test_report_serializes_with_expected_top_level_keys() {
        let json = sample_report_json();

        for key in [
            "groceryList",
            "categorizedList",
            "shoppingTips",
            "summary",
            "recipes",
        ] {
            assert!(json.get(key).is_some(), "missing top-level key {key}");
        }
    }

    #[test]
    fn test_items_carry_camel_case_provenance_fields() {
        let json = sample_report_json();

        // Sorted order puts butter first (Dairy & Eggs, then by name)
        let butter = &json["groceryList"][0];
        assert_eq!(butter["name"], "butter");
        assert!(butter.get("alternativeAmounts").is_some());

        let record = &butter["recipes"][0];
        assert_eq!(record["recipeId"], "r2");
        assert_eq!(record["recipeName"], "Bechamel");
        assert_eq!(record["originalAmount"], "50");
        assert_eq!(record["multiplier"], Value::from(2.0));
    }

    #[test]
    fn test_amounts_serialize_as_decimal_strings() {
        let json = sample_report_json();

        // butter: 50 scaled by 2, kept as a string on the wire
        assert_eq!(json["groceryList"][0]["amount"], "100");

        let milk = &json["groceryList"][1];
        assert_eq!(milk["name"], "milk");
        assert_eq!(milk["amount"], "1");
        assert_eq!(milk["alternativeAmounts"][0]["amount"], "400");
        assert_eq!(milk["alternativeAmounts"][0]["unit"], "ml");
    }

    #[test]
    fn test_categorized_list_uses_category_display_names_as_keys() {
        let json = sample_report_json();

        let dairy = json["categorizedList"]["Dairy & Eggs"].as_array().unwrap();
        let names: Vec<&str> = dairy.iter().map(|item| item["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["butter", "milk", "parmesan"]);

        let meat = json["categorizedList"]["Meat & Seafood"].as_array().unwrap();
        assert_eq!(meat.len(), 1);
        assert_eq!(meat[0]["name"], "beef");
    }

    #[test]
    fn test_summary_uses_camel_case_counters() {
        let json = sample_report_json();
        let summary = &json["summary"];

        assert_eq!(summary["totalItems"], 4);
        assert_eq!(summary["recipesUsed"], 2);
        assert_eq!(summary["estimatedShoppingTimeMinutes"], 5);
        assert_eq!(
            summary["categories"],
            serde_json::json!(["Dairy & Eggs", "Meat & Seafood"])
        );
    }

    #[test]
    fn test_recipes_block_echoes_inputs_and_multipliers() {
        let json = sample_report_json();
        let recipes = json["recipes"].as_array().unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0]["id"], "r1");
        assert_eq!(recipes[0]["servings"], 6);
        assert_eq!(recipes[0]["multiplier"], Value::from(1.0));
        assert_eq!(recipes[1]["id"], "r2");
        assert_eq!(recipes[1]["multiplier"], Value::from(2.0));
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: CategorizedReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, report);
    }

    #[test]
    fn test_all_tips_fire_with_exact_wording() {
        let produce = ["tomato", "carrot", "celery", "lettuce", "spinach", "cucumber"];
        let dairy = ["milk", "cheese", "yogurt", "butter"];

        let mut big_shop = RecipeRef::new("r1", "Week of Meals", 4)
            .with_ingredient(line("chicken", "1", "kg"));
        for name in produce.iter().chain(dairy.iter()) {
            big_shop = big_shop.with_ingredient(line(name, "1", ""));
        }

        let report = generate_grocery_report(&[big_shop], &HashMap::new()).unwrap();

        assert_eq!(
            report.shopping_tips,
            vec![
                "You have many fresh produce items. Shop for these last to keep them fresh."
                    .to_string(),
                "Don't forget to bring a cooler bag for meat and seafood items.".to_string(),
                "Check expiration dates on dairy products before purchasing.".to_string(),
                "Organize your list by store layout to save time.".to_string(),
                "Check your pantry before shopping to avoid duplicate purchases.".to_string(),
            ]
        );
    }

    #[test]
    fn test_freeform_amounts_survive_serialization() {
        let recipes = vec![RecipeRef::new("r1", "Roast", 2)
            .with_ingredient(line("salt", "to taste", ""))];

        let report = generate_grocery_report(&recipes, &HashMap::new()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["groceryList"][0]["amount"], "to taste");
    }
}
