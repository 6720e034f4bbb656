use sea_orm::ActiveValue::{NotSet, Set};

use crate::{
    domain::menu::entities::{Ingredient, MenuItem, NewMenuItem},
    entity::{ingredients, menu_items},
};

impl From<&ingredients::Model> for Ingredient {
    fn from(model: &ingredients::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            allergens: model.allergens.clone(),
            is_halal: model.is_halal,
        }
    }
}

impl From<&menu_items::Model> for MenuItem {
    fn from(model: &menu_items::Model) -> Self {
        // Ingredients are attached by the repository
        Self {
            id: model.id,
            name: model.name.clone(),
            description: model.description.clone(),
            price: model.price,
            category: model.category.clone(),
            dietary_tags: model.dietary_tags.clone(),
            prep_time: model.prep_time,
            safety_alerts: model.safety_alerts.clone(),
            may_contain: model.may_contain.clone(),
            ingredients: Vec::new(),
        }
    }
}

impl From<menu_items::Model> for MenuItem {
    fn from(model: menu_items::Model) -> Self {
        Self::from(&model)
    }
}

impl From<NewMenuItem> for menu_items::ActiveModel {
    fn from(item: NewMenuItem) -> Self {
        Self {
            id: NotSet,
            name: Set(item.name),
            description: Set(item.description),
            price: Set(item.price),
            category: Set(item.category),
            dietary_tags: Set(item.dietary_tags),
            prep_time: Set(item.prep_time),
            safety_alerts: Set(item.safety_alerts),
            may_contain: Set(item.may_contain),
        }
    }
}

pub fn map_menu_item(model: &menu_items::Model, ingredients: &[ingredients::Model]) -> MenuItem {
    let mut item = MenuItem::from(model);
    item.ingredients = ingredients.iter().map(Ingredient::from).collect();
    item
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn model() -> menu_items::Model {
        menu_items::Model {
            id: 14,
            name: "Vegan Chicken Burger".to_string(),
            description: Some("Plant based fillet, lettuce, vegan mayo.".to_string()),
            price: Decimal::new(1195, 2),
            category: Some("Burgers".to_string()),
            dietary_tags: Some("Gluten, Soya (VG)".to_string()),
            prep_time: Some(12),
            safety_alerts: Some("CRITICAL: NOT VEGAN".to_string()),
            may_contain: None,
        }
    }

    #[test]
    fn test_map_menu_item_with_ingredients() {
        let ingredients = vec![ingredients::Model {
            id: 3,
            name: "Brioche Bun".to_string(),
            allergens: Some("Gluten, Milk, Eggs".to_string()),
            is_halal: true,
        }];

        let item = map_menu_item(&model(), &ingredients);

        assert_eq!(item.id, 14);
        assert_eq!(item.price, Decimal::new(1195, 2));
        assert_eq!(item.safety_alerts.as_deref(), Some("CRITICAL: NOT VEGAN"));
        assert_eq!(item.ingredients.len(), 1);
        assert_eq!(item.ingredients[0].name, "Brioche Bun");
    }

    #[test]
    fn test_new_item_leaves_id_to_database() {
        let active: menu_items::ActiveModel = NewMenuItem {
            name: "Chips".to_string(),
            description: None,
            price: Decimal::new(395, 2),
            category: Some("Sides".to_string()),
            dietary_tags: None,
            prep_time: None,
            safety_alerts: None,
            may_contain: None,
        }
        .into();

        assert_eq!(active.id, NotSet);
        assert_eq!(active.name, Set("Chips".to_string()));
    }
}
