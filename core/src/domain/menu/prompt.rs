use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::menu::entities::MenuItem;

#[derive(Debug, Serialize)]
struct MenuContextEntry<'a> {
    id: i32,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    desc: Option<&'a str>,
    price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allergens: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alerts: Option<&'a str>,
}

impl<'a> From<&'a MenuItem> for MenuContextEntry<'a> {
    fn from(item: &'a MenuItem) -> Self {
        Self {
            id: item.id,
            name: &item.name,
            desc: item.description.as_deref(),
            price: item.price,
            tags: item.dietary_tags.as_deref(),
            allergens: item.may_contain.as_deref(),
            alerts: item.safety_alerts.as_deref(),
        }
    }
}

/// Serializes the catalog into the compact JSON list embedded in the prompt.
pub fn build_menu_context(items: &[MenuItem]) -> String {
    let entries: Vec<MenuContextEntry<'_>> = items.iter().map(MenuContextEntry::from).collect();

    serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
}

pub fn build_search_prompt(menu_context: &str, query: &str) -> String {
    // The query is embedded as a JSON string so quotes in it cannot end the sentence early.
    let quoted_query = serde_json::to_string(query).unwrap_or_else(|_| format!("\"{query}\""));

    format!(
        r#"You are a helpful waiter at Prom Cafe.
Here is the menu: {menu_context}

The customer asks: {quoted_query}

Task:
1. Identify the menu items that best match the request by meaning, not only by matching words. Only ever select ids that appear in the menu above.
2. If the customer asks for a meal plan or a suggestion, select specific items.
3. If the customer states a number of people or meals (e.g. "3 people" or "3 breakfasts") and lists several items without their own counts, apply that same number to EACH listed item (for example drinks). Do not multiply counts across items.
4. Handle mixed dietary requests (e.g. "3 meals, one vegan"): the selection must contain at least one item satisfying each person's individual requirement. Check "tags", "allergens" and "alerts" before calling anything vegan, vegetarian or allergen free.
5. Consolidate duplicates: an item chosen more than once appears on a single line with the summed quantity.
6. Write the answer in exactly this format, one line per selected item:
   [Quantity] x [Item Name] @ £[Unit Price] = £[Line Total]

   Total: £[Total Price]

   You may add one brief friendly sentence before or after.

Return a single JSON object with exactly two keys:
- "ids": array of integers, the ids of the selected items, repeating an id once per unit ordered.
- "answer": string, the formatted answer above.

Example: {{"ids": [1, 1, 1], "answer": "3 x Full English Breakfast @ £12.95 = £38.85\n\nTotal: £38.85"}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(id: i32, name: &str, price: Decimal) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: Some("2 pork sausages, 2 bacon".to_string()),
            price,
            category: Some("Breakfast".to_string()),
            dietary_tags: Some("Gluten, Eggs".to_string()),
            prep_time: None,
            safety_alerts: None,
            may_contain: Some("Sesame (Bun)".to_string()),
            ingredients: vec![],
        }
    }

    #[test]
    fn test_context_contains_grounding_fields_only() {
        let context = build_menu_context(&[item(1, "Full English Breakfast", Decimal::new(1295, 2))]);
        let parsed: serde_json::Value = serde_json::from_str(&context).unwrap();

        let entry = &parsed[0];
        assert_eq!(entry["id"], 1);
        assert_eq!(entry["name"], "Full English Breakfast");
        assert_eq!(entry["price"], 12.95);
        assert_eq!(entry["tags"], "Gluten, Eggs");
        assert_eq!(entry["allergens"], "Sesame (Bun)");
        assert!(entry.get("alerts").is_none());
        assert!(entry.get("category").is_none());
    }

    #[test]
    fn test_empty_catalog_context() {
        assert_eq!(build_menu_context(&[]), "[]");
    }

    #[test]
    fn test_prompt_embeds_context_and_escaped_query() {
        let prompt = build_search_prompt("[{\"id\":1}]", "3 \"big\" breakfasts");

        assert!(prompt.contains("Here is the menu: [{\"id\":1}]"));
        assert!(prompt.contains(r#"The customer asks: "3 \"big\" breakfasts""#));
        assert!(prompt.contains("\"ids\""));
        assert!(prompt.contains("Total: £[Total Price]"));
    }
}
