#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! SMTP transport configuration from a single connection URI, plus sanitized
//! logging of outbound mail failures.

pub mod domain;
pub mod infrastructure;
