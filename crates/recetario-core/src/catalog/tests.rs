use super::*;

fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Recipe::new("Tarta", "Postre", vec!["manzana".into(), "harina".into()]).unwrap(),
        Recipe::new("Limonada", "Bebida", vec!["limón".into(), "azúcar".into()]).unwrap(),
        Recipe::new("Flan", "Postre", vec!["huevo".into(), "azúcar".into()]).unwrap(),
    ])
}

#[test]
fn test_recipe_validation_trims_and_rejects_empty() {
    let recipe = Recipe::new("  Tarta  ", " Postre ", vec![]).unwrap();
    assert_eq!(recipe.name, "Tarta");
    assert_eq!(recipe.category, "Postre");

    assert!(Recipe::new("", "Postre", vec![]).is_none());
    assert!(Recipe::new("Tarta", "   ", vec![]).is_none());
}

#[test]
fn test_categories_in_first_appearance_order() {
    assert_eq!(sample_catalog().categories(), vec!["Postre", "Bebida"]);
}

#[test]
fn test_find_recipes_by_ingredient() {
    let catalog = sample_catalog();
    assert_eq!(
        catalog.find_recipes(Some("azúcar"), None),
        vec!["Limonada", "Flan"]
    );
    assert_eq!(catalog.find_recipes(Some("limón"), None), vec!["Limonada"]);
}

#[test]
fn test_find_recipes_by_category() {
    let catalog = sample_catalog();
    assert_eq!(
        catalog.find_recipes(None, Some("Postre")),
        vec!["Tarta", "Flan"]
    );
}

#[test]
fn test_find_recipes_by_both_criteria() {
    let catalog = sample_catalog();
    assert_eq!(
        catalog.find_recipes(Some("azúcar"), Some("Postre")),
        vec!["Flan"]
    );
    assert!(catalog
        .find_recipes(Some("manzana"), Some("Bebida"))
        .is_empty());
}

#[test]
fn test_find_recipes_is_case_sensitive() {
    assert!(sample_catalog().find_recipes(Some("Manzana"), None).is_empty());
}

#[test]
fn test_common_ingredients() {
    let catalog = sample_catalog();
    let shared = catalog.common_ingredients("Limonada", "Flan");
    assert_eq!(shared.into_iter().collect::<Vec<_>>(), vec!["azúcar"]);

    assert!(catalog.common_ingredients("Tarta", "Limonada").is_empty());
    assert!(catalog.common_ingredients("Tarta", "Desconocida").is_empty());
}

#[test]
fn test_group_by_category() {
    let groups = sample_catalog().group_by_category();
    assert_eq!(groups["Postre"], vec!["Tarta", "Flan"]);
    assert_eq!(groups["Bebida"], vec!["Limonada"]);
}
