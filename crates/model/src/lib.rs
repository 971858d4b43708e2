pub mod core;
pub mod errors;
pub mod executor;
pub mod records;
pub mod schema;
