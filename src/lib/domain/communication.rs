//! Outbound mail: addresses, transport configuration and delivery

pub mod delivery;
pub mod email_addresses;
pub mod mailer;
pub mod smtp_uri;
