//! Data Transfer Objects
//!
//! Payloads and filters sent to the Komfyrvakt service, plus the result
//! shapes of write operations.

pub mod analysis;
pub mod log;
