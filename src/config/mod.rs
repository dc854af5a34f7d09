pub mod bridges;
pub mod overrides;
pub mod settings;
