pub mod entities;
pub mod errors;
pub mod extraction;
pub mod ports;
pub mod prompt;
pub mod resolver;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
