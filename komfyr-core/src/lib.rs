//! Komfyrvakt Core
//!
//! Wire types for the Komfyrvakt logging service.
//!
//! This crate contains:
//! - Domain types: records owned by the service (stored logs, stats, analyses)
//! - DTOs: request payloads and query filters sent by clients

pub mod domain;
pub mod dto;
