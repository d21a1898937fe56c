//! Runtime settings stores

mod json;
mod memory;

pub use json::JsonFileSettings;
pub use memory::MemorySettings;
