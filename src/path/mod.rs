pub mod data;
pub mod emit;
