//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod clock;
pub mod deck_service;
pub mod journal_service;
pub mod payment_service;
