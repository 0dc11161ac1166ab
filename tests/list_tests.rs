#[cfg(test)]
mod tests {
    use mealcart::aggregate::generate_grocery_report;
    use mealcart::category::{Category, CategoryTaxonomy};
    use mealcart::errors::ListError;
    use mealcart::list::{ListItemUpdate, NewListItem, UserGroceryList};
    use mealcart::recipe::{IngredientLine, RecipeRef};
    use std::collections::HashMap;

    fn setup_list() -> (UserGroceryList, CategoryTaxonomy) {
        (UserGroceryList::new(), CategoryTaxonomy::standard())
    }

    #[test]
    fn test_shopping_trip_lifecycle() {
        let (mut list, taxonomy) = setup_list();

        let milk = list.add_item(NewListItem::new("milk"), &taxonomy).unwrap();
        let bread = list.add_item(NewListItem::new("bread"), &taxonomy).unwrap();
        list.add_item(NewListItem::new("coffee"), &taxonomy).unwrap();
        assert_eq!(list.len(), 3);

        // Check two items off in the store
        list.update_item(&milk.id, ListItemUpdate::new().with_checked(true))
            .unwrap();
        list.update_item(&bread.id, ListItemUpdate::new().with_checked(true))
            .unwrap();

        assert_eq!(list.clear_checked(), 2);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].name, "coffee");

        assert_eq!(list.clear(), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn test_hand_added_items_match_generated_categories() {
        let (mut list, taxonomy) = setup_list();

        let recipes = vec![RecipeRef::new("r1", "Gratin", 4)
            .with_ingredient(IngredientLine::new("cheddar cheese", "200", "g"))];
        let report = generate_grocery_report(&recipes, &HashMap::new()).unwrap();

        let added = list
            .add_item(NewListItem::new("cheddar cheese"), &taxonomy)
            .unwrap();

        // Same taxonomy, same section, whichever way the item arrives
        assert_eq!(added.category, report.grocery_list[0].category);
        assert_eq!(added.category, Category::DairyEggs);
    }

    #[test]
    fn test_amount_and_unit_survive_updates() {
        let (mut list, taxonomy) = setup_list();

        let item = list
            .add_item(
                NewListItem::new("olive oil").with_amount("500").with_unit("ml"),
                &taxonomy,
            )
            .unwrap();

        let updated = list
            .update_item(&item.id, ListItemUpdate::new().with_amount("750"))
            .unwrap();

        assert_eq!(updated.amount, "750");
        assert_eq!(updated.unit, "ml");
    }

    #[test]
    fn test_update_rejects_blank_rename() {
        let (mut list, taxonomy) = setup_list();
        let item = list.add_item(NewListItem::new("milk"), &taxonomy).unwrap();

        let result = list.update_item(&item.id, ListItemUpdate::new().with_name("   "));
        assert_eq!(result, Err(ListError::EmptyName));

        // The failed rename left the item untouched
        assert_eq!(list.get_item(&item.id).unwrap().name, "milk");
    }

    #[test]
    fn test_remove_twice_reports_missing_item() {
        let (mut list, taxonomy) = setup_list();
        let item = list.add_item(NewListItem::new("milk"), &taxonomy).unwrap();

        assert!(list.remove_item(&item.id).is_ok());
        assert_eq!(
            list.remove_item(&item.id),
            Err(ListError::ItemNotFound(item.id.clone()))
        );
    }

    #[test]
    fn test_ids_stay_unique_after_removals() {
        let (mut list, taxonomy) = setup_list();

        let first = list.add_item(NewListItem::new("milk"), &taxonomy).unwrap();
        list.remove_item(&first.id).unwrap();
        let second = list.add_item(NewListItem::new("bread"), &taxonomy).unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_list_serializes_with_camel_case_item_fields() {
        let (mut list, taxonomy) = setup_list();
        list.add_item(NewListItem::new("frozen peas"), &taxonomy)
            .unwrap();

        let json = serde_json::to_value(&list).unwrap();
        let item = &json["items"][0];

        assert_eq!(item["name"], "frozen peas");
        assert_eq!(item["category"], "Frozen");
        assert_eq!(item["checked"], false);
        assert!(item.get("addedAt").is_some());
    }

    #[test]
    fn test_list_round_trips_through_json() {
        let (mut list, taxonomy) = setup_list();
        list.add_item(NewListItem::new("milk").with_amount("2").with_unit("l"), &taxonomy)
            .unwrap();
        list.add_item(NewListItem::new("bread").with_checked(true), &taxonomy)
            .unwrap();

        let json = serde_json::to_string(&list).unwrap();
        let restored: UserGroceryList = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, list);

        // Restored lists keep handing out fresh ids
        let mut restored = restored;
        let next = restored.add_item(NewListItem::new("eggs"), &taxonomy).unwrap();
        assert_eq!(next.id, "3");
    }
}
