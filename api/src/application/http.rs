pub mod health;
pub mod menu;
pub mod query_extractor;
pub mod query_params;
pub mod server;
