//! Core domain types
//!
//! Records returned by the Komfyrvakt service. The service owns all of this
//! data; clients only ever receive copies of it.

pub mod analysis;
pub mod log;
pub mod service;
pub mod stats;
