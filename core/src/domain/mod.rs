pub mod common;
pub mod health;
pub mod menu;
pub mod seed;
