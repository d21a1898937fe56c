//! Infrastructure layer

pub mod email;
pub mod logging;
pub mod settings;
