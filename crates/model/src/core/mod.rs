pub mod scalar;
pub mod value;
