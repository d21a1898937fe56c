//! Domain layer

pub mod communication;
pub mod logging;
pub mod settings;
