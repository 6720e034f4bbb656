//! The café's fixed menu table.

use rust_decimal::Decimal;

use crate::domain::menu::entities::NewMenuItem;

struct SeedItem {
    name: &'static str,
    price_pence: i64,
    description: &'static str,
    category: &'static str,
    dietary_tags: &'static str,
    safety_alerts: Option<&'static str>,
    may_contain: Option<&'static str>,
}

impl From<&SeedItem> for NewMenuItem {
    fn from(item: &SeedItem) -> Self {
        Self {
            name: item.name.to_string(),
            description: Some(item.description.to_string()),
            price: Decimal::new(item.price_pence, 2),
            category: Some(item.category.to_string()),
            dietary_tags: Some(item.dietary_tags.to_string()),
            prep_time: None,
            safety_alerts: item.safety_alerts.map(str::to_string),
            may_contain: item.may_contain.map(str::to_string),
        }
    }
}

/// Returns the menu in insertion order; after a reseed item `n` has id `n + 1`.
pub fn menu_dataset() -> Vec<NewMenuItem> {
    MENU.iter().map(NewMenuItem::from).collect()
}

pub fn menu_dataset_len() -> u64 {
    MENU.len() as u64
}

const MENU: &[SeedItem] = &[
    SeedItem {
        name: "Full English Breakfast",
        price_pence: 1295,
        description: "2 pork sausages, 2 bacon, 1 hash brown, 1 fried egg, beans, tomato, toast.",
        category: "Breakfast",
        dietary_tags: "Gluten, Eggs, Soya, Sulphur Dioxide",
        safety_alerts: Some("Soya is in the bread; Sulphur is in the sausage."),
        may_contain: None,
    },
    SeedItem {
        name: "Vegetarian Breakfast",
        price_pence: 1250,
        description: "2 vegan sausages, 2 hash browns, 2 fried eggs, beans, tomato, toast.",
        category: "Breakfast",
        dietary_tags: "Gluten, Eggs, Celery, Soya (V)",
        safety_alerts: Some("Celery is in the Veggie Sausage."),
        may_contain: None,
    },
    SeedItem {
        name: "Vegan Breakfast",
        price_pence: 1250,
        description: "Vegan sausage, hash browns, beans, tomato, toast.",
        category: "Breakfast",
        dietary_tags: "Gluten, Celery, Soya, Sesame (VG)",
        safety_alerts: Some("Sesame was listed on the specific 'Vegan Toast' sheet."),
        may_contain: None,
    },
    SeedItem {
        name: "Sausage Bap",
        price_pence: 600,
        description: "Served in a floured bun.",
        category: "Breakfast",
        dietary_tags: "Gluten, Sulphur Dioxide",
        safety_alerts: None,
        may_contain: Some("Sesame (Bun)"),
    },
    SeedItem {
        name: "Vegan Sausage Bap",
        price_pence: 600,
        description: "Served in a floured bun.",
        category: "Breakfast",
        dietary_tags: "Gluten, Celery (VG)",
        safety_alerts: None,
        may_contain: Some("Sesame (Bun)"),
    },
    SeedItem {
        name: "Bacon Bap",
        price_pence: 600,
        description: "Served in a floured bun.",
        category: "Breakfast",
        dietary_tags: "Gluten",
        safety_alerts: None,
        may_contain: Some("Sesame (Bun)"),
    },
    SeedItem {
        name: "Pastries",
        price_pence: 275,
        description: "Croissant or Pain au Chocolat.",
        category: "Breakfast",
        dietary_tags: "Gluten, Eggs, Milk, Soya",
        safety_alerts: None,
        may_contain: Some("Nuts (Almond/Hazelnut)"),
    },

    SeedItem {
        name: "Chips",
        price_pence: 450,
        description: "Thick cut chips.",
        category: "Sides",
        dietary_tags: "None Listed (V, VG)",
        safety_alerts: Some("Check cross-contamination."),
        may_contain: None,
    },
    SeedItem {
        name: "Cheesy Chips",
        price_pence: 550,
        description: "Chips topped with cheese.",
        category: "Sides",
        dietary_tags: "Milk (V)",
        safety_alerts: None,
        may_contain: None,
    },

    SeedItem {
        name: "Jumbo Sausage Roll",
        price_pence: 400,
        description: "Puff pastry sausage roll.",
        category: "Snacks",
        dietary_tags: "Gluten, Eggs, Milk",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Hot Dog",
        price_pence: 490,
        description: "Frankfurter with crispy onions.",
        category: "Snacks",
        dietary_tags: "Gluten",
        safety_alerts: None,
        may_contain: Some("Sesame, Soya"),
    },
    SeedItem {
        name: "Phat Pasty (Traditional)",
        price_pence: 560,
        description: "Traditional Cornish pasty.",
        category: "Snacks",
        dietary_tags: "Gluten, Eggs",
        safety_alerts: None,
        may_contain: Some("Milk"),
    },
    SeedItem {
        name: "Phat Pasty (Vegan)",
        price_pence: 560,
        description: "Vegan Keralan/Curry pasty.",
        category: "Snacks",
        dietary_tags: "Gluten (VG)",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Phat Pasty (Cheese)",
        price_pence: 560,
        description: "Cheese & Onion / Cheese & Bacon.",
        category: "Snacks",
        dietary_tags: "Gluten, Eggs, Milk, Mustard",
        safety_alerts: None,
        may_contain: None,
    },

    SeedItem {
        name: "Cod Goujons",
        price_pence: 750,
        description: "Served with chips & beans.",
        category: "Kids",
        dietary_tags: "Gluten, Fish, Mustard",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Chicken Bites",
        price_pence: 750,
        description: "Served with chips & beans.",
        category: "Kids",
        dietary_tags: "Gluten",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Pork Sausage",
        price_pence: 750,
        description: "Served with chips & beans.",
        category: "Kids",
        dietary_tags: "Gluten, Sulphur Dioxide",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Veggie Sausage",
        price_pence: 750,
        description: "Served with chips & beans.",
        category: "Kids",
        dietary_tags: "Gluten, Celery",
        safety_alerts: None,
        may_contain: None,
    },

    SeedItem {
        name: "Cod & Chips",
        price_pence: 1495,
        description: "Hand battered fish, lemon, mushy peas, chips.",
        category: "Mains",
        dietary_tags: "Gluten, Fish",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Gourmet Beef Burger",
        price_pence: 1250,
        description: "Brioche bun, lettuce, tomato, chips.",
        category: "Mains",
        dietary_tags: "Gluten, Eggs, Milk",
        safety_alerts: None,
        may_contain: Some("Sesame (Bun)"),
    },
    SeedItem {
        name: "Buttermilk Chicken Burger",
        price_pence: 1300,
        description: "Brioche bun, lettuce, tomato, chips.",
        category: "Mains",
        dietary_tags: "Gluten, Eggs, Milk",
        safety_alerts: None,
        may_contain: Some("Sesame, Celery, Mustard, Soya"),
    },
    SeedItem {
        name: "Vegan Spicy Bean Burger",
        price_pence: 1300,
        description: "Floured bap, lettuce, tomato, chips.",
        category: "Mains",
        dietary_tags: "Gluten (VG)",
        safety_alerts: None,
        may_contain: Some("Sesame"),
    },
    SeedItem {
        name: "Bacon Cheese Burger",
        price_pence: 1400,
        description: "Brioche bun, lettuce, tomato, chips.",
        category: "Mains",
        dietary_tags: "Gluten, Eggs, Milk",
        safety_alerts: None,
        may_contain: Some("Sesame, Celery, Mustard, Soya"),
    },

    SeedItem {
        name: "Plain Jacket",
        price_pence: 550,
        description: "Butter/Spread.",
        category: "Jackets",
        dietary_tags: "Milk",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Jacket + Beans or Cheese",
        price_pence: 710,
        description: "Beans / Cheddar.",
        category: "Jackets",
        dietary_tags: "Milk (Cheese)",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Jacket + Chilli Con Carne",
        price_pence: 780,
        description: "Beef Chilli.",
        category: "Jackets",
        dietary_tags: "Celery, Mustard, Sulphur",
        safety_alerts: None,
        may_contain: Some("Soya"),
    },
    SeedItem {
        name: "Jacket + Vegan Chilli",
        price_pence: 780,
        description: "Three bean chilli.",
        category: "Jackets",
        dietary_tags: "Celery, Gluten",
        safety_alerts: None,
        may_contain: Some("Mustard, Soya, Sulphur"),
    },
    SeedItem {
        name: "Jacket + Tuna Mayo",
        price_pence: 780,
        description: "Tuna Mayonnaise.",
        category: "Jackets",
        dietary_tags: "Eggs, Fish, Mustard",
        safety_alerts: None,
        may_contain: None,
    },

    SeedItem {
        name: "Chicken & Pesto Toastie",
        price_pence: 750,
        description: "Chicken, cheese, pesto.",
        category: "Toasties",
        dietary_tags: "Gluten, Milk",
        safety_alerts: None,
        may_contain: Some("Soya"),
    },
    SeedItem {
        name: "Tuna Melt Toastie",
        price_pence: 750,
        description: "Tuna, mozzarella, red onion.",
        category: "Toasties",
        dietary_tags: "Gluten, Fish, Milk",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Ham & Cheese Toastie",
        price_pence: 750,
        description: "Smoked ham, cheddar.",
        category: "Toasties",
        dietary_tags: "Gluten, Milk",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Mozzarella & Tomato Toastie",
        price_pence: 750,
        description: "Pesto, sun-dried tomato.",
        category: "Toasties",
        dietary_tags: "Gluten, Milk",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Sourdough Toastie",
        price_pence: 750,
        description: "Ham, Edam, Dijonnaise.",
        category: "Toasties",
        dietary_tags: "Gluten, Milk",
        safety_alerts: Some("MISSING DATA: No sheet found for 'Dijonnaise'. Assume Mustard & Egg."),
        may_contain: None,
    },

    SeedItem {
        name: "Tuna Mayo Sandwich",
        price_pence: 690,
        description: "Meal Deal Option.",
        category: "Sandwiches",
        dietary_tags: "Gluten, Eggs, Fish, Mustard, Soya",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "BLT Sandwich",
        price_pence: 690,
        description: "Meal Deal Option.",
        category: "Sandwiches",
        dietary_tags: "Gluten, Milk, Soya",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Cheese Sandwich",
        price_pence: 690,
        description: "Meal Deal Option.",
        category: "Sandwiches",
        dietary_tags: "Gluten, Milk, Soya, Sulphur",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Coronation Chicken Sandwich",
        price_pence: 690,
        description: "Meal Deal Option.",
        category: "Sandwiches",
        dietary_tags: "Gluten, Eggs, Milk, Mustard, Soya, Sulphur",
        safety_alerts: None,
        may_contain: None,
    },

    SeedItem {
        name: "Fruit Scone",
        price_pence: 470,
        description: "With butter & jam.",
        category: "Cakes",
        dietary_tags: "Gluten, Milk, Sulphur Dioxide",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Cream Tea",
        price_pence: 750,
        description: "Scone, jam, clotted cream, tea.",
        category: "Cakes",
        dietary_tags: "Gluten, Milk, Sulphur Dioxide",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Toasted Teacake",
        price_pence: 260,
        description: "Spiced fruit bun.",
        category: "Cakes",
        dietary_tags: "Gluten, Milk",
        safety_alerts: None,
        may_contain: Some("Soya"),
    },
    SeedItem {
        name: "Victoria/Lemon Sponge",
        price_pence: 460,
        description: "Homemade Sponge.",
        category: "Cakes",
        dietary_tags: "Gluten, Eggs, Milk",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Coffee & Walnut Cake",
        price_pence: 460,
        description: "Homemade Sponge.",
        category: "Cakes",
        dietary_tags: "Gluten, Eggs, Milk, NUTS",
        safety_alerts: Some("NUT ALERT: Your sheet missed the 'Nut' tickbox. I have manually added Nuts."),
        may_contain: None,
    },
    SeedItem {
        name: "Tray Bakes",
        price_pence: 410,
        description: "Brownies, Flapjacks, etc.",
        category: "Cakes",
        dietary_tags: "Gluten, Eggs, Milk, Soya",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Muffins",
        price_pence: 350,
        description: "Blueberry, Choc, etc.",
        category: "Cakes",
        dietary_tags: "Gluten, Eggs, Milk, Soya",
        safety_alerts: None,
        may_contain: Some("Nuts"),
    },

    SeedItem {
        name: "Scoop Ice Cream",
        price_pence: 390,
        description: "New Forest Scoops.",
        category: "Ice Cream",
        dietary_tags: "Milk",
        safety_alerts: Some("Cookie Dough/Brownie flavors: Add Gluten/Soya."),
        may_contain: None,
    },
    SeedItem {
        name: "Magnum",
        price_pence: 350,
        description: "Classic/White/Mint.",
        category: "Ice Cream",
        dietary_tags: "Milk",
        safety_alerts: Some("Billionaire/Starchaser: Add Gluten."),
        may_contain: None,
    },
    SeedItem {
        name: "Cornetto Classico",
        price_pence: 300,
        description: "Var.",
        category: "Ice Cream",
        dietary_tags: "Gluten, Milk, NUTS (Hazelnuts)",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Cornetto Strawberry",
        price_pence: 300,
        description: "Var.",
        category: "Ice Cream",
        dietary_tags: "Gluten, Milk",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Feast",
        price_pence: 300,
        description: "Var.",
        category: "Ice Cream",
        dietary_tags: "Milk",
        safety_alerts: None,
        may_contain: Some("Peanuts/Nuts"),
    },
    SeedItem {
        name: "Soft Serve (Whippy)",
        price_pence: 300,
        description: "In Cone.",
        category: "Ice Cream",
        dietary_tags: "Gluten, Milk, Soya",
        safety_alerts: None,
        may_contain: None,
    },

    SeedItem {
        name: "Americano / Espresso",
        price_pence: 340,
        description: "Black coffee.",
        category: "Drinks",
        dietary_tags: "None Listed",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Latte / Cappuccino",
        price_pence: 370,
        description: "With Cows Milk.",
        category: "Drinks",
        dietary_tags: "Milk",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Hot Chocolate / Mocha",
        price_pence: 370,
        description: "With Cows Milk.",
        category: "Drinks",
        dietary_tags: "Milk, Soya",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Oat Milk",
        price_pence: 60,
        description: "Alternative.",
        category: "Drinks",
        dietary_tags: "Gluten",
        safety_alerts: Some("ALERT: Unless bottle says 'Gluten Free', Oat milk contains Gluten."),
        may_contain: None,
    },
    SeedItem {
        name: "Almond Milk",
        price_pence: 60,
        description: "Alternative.",
        category: "Drinks",
        dietary_tags: "Nuts (Almonds)",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Hazelnut Syrup",
        price_pence: 60,
        description: "Syrup Shot.",
        category: "Drinks",
        dietary_tags: "Nuts (Hazelnut)",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Jimmy's Iced Coffee",
        price_pence: 490,
        description: "Carton/Can.",
        category: "Drinks",
        dietary_tags: "Milk",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Milkshakes",
        price_pence: 490,
        description: "Powder + Milk/Cream.",
        category: "Drinks",
        dietary_tags: "Milk",
        safety_alerts: None,
        may_contain: None,
    },
    SeedItem {
        name: "Tropical Ice",
        price_pence: 490,
        description: "Slush.",
        category: "Drinks",
        dietary_tags: "None Listed",
        safety_alerts: None,
        may_contain: None,
    },

    // Listed as vegan on the menu, but the allergen sheet disagrees.
    SeedItem {
        name: "Vegan Chicken Burger",
        price_pence: 0,
        description: "The menu lists this as 'Vegan', but allergen sheet lists Brioche Bun containing Egg and Milk.",
        category: "Mains",
        dietary_tags: "NOT VEGAN",
        safety_alerts: Some("CRITICAL: This dish is NOT VEGAN as currently documented. Brioche Bun contains Egg and Milk."),
        may_contain: None,
    },
];
