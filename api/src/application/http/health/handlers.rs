pub mod health;
pub mod readiness;

pub use health::{__path_health, health};
pub use readiness::{__path_readiness, readiness};
