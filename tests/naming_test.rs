use jvis::naming::{pluralize, EntityReplacementPlan};

#[test]
fn test_pluralize_rules() {
    assert_eq!(pluralize("box"), "boxes");
    assert_eq!(pluralize("category"), "categories");
    assert_eq!(pluralize("key"), "keys");
    assert_eq!(pluralize("items"), "items");
    assert_eq!(pluralize("address"), "addresses");
    assert_eq!(pluralize("brush"), "brushes");
    assert_eq!(pluralize("match"), "matches");
    assert_eq!(pluralize("quiz"), "quizes");
    assert_eq!(pluralize("product"), "products");
    assert_eq!(pluralize("y"), "ys");
    assert_eq!(pluralize(""), "");
}

#[test]
fn test_plan_order_and_values() {
    let plan = EntityReplacementPlan::new("item", "category");
    let expected = [
        ("ITEMS", "CATEGORIES"),
        ("Items", "Categories"),
        ("items", "categories"),
        ("ITEM", "CATEGORY"),
        ("Item", "Category"),
        ("item", "category"),
    ];

    assert_eq!(plan.pairs().len(), 6);
    for ((old, new), (want_old, want_new)) in plan.pairs().iter().zip(expected) {
        assert_eq!(old, want_old);
        assert_eq!(new, want_new);
    }
}

#[test]
fn test_plan_applies_plural_before_singular() {
    let plan = EntityReplacementPlan::new("item", "category");
    let result = plan.apply("Items items ITEM");

    assert_eq!(result, "Categories categories CATEGORY");
    assert!(!result.contains("Item"));
    assert!(!result.contains("item"));
}

#[test]
fn test_plan_normalizes_input_case() {
    let plan = EntityReplacementPlan::new("item", "Order");
    assert_eq!(plan.apply("class ItemService: items = []"), "class OrderService: orders = []");
}

#[test]
fn test_identity_plan_is_empty() {
    let plan = EntityReplacementPlan::new("item", "item");
    assert!(plan.is_empty());
    assert_eq!(plan.apply("Items"), "Items");
}

#[test]
fn test_plan_matches() {
    let plan = EntityReplacementPlan::new("item", "task");
    assert!(plan.matches("item_service.py"));
    assert!(plan.matches("ItemCard.tsx"));
    assert!(!plan.matches("health.py"));
}
