pub mod engine;
pub mod entity;

pub use engine::{decompose, decompose_one};
pub use entity::{Child, Entity};
