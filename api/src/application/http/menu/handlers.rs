pub mod get_categories;
pub mod get_menu_item;
pub mod get_menu_items;
pub mod search_menu;
pub mod seed_menu;
