//! Email infrastructure

pub mod config;
pub mod smtp;
