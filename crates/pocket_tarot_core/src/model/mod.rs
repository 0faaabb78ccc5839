//! Domain model for cards, journal entries and user profiles.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep access-state derivation next to the profile it is derived from.
//!
//! # Invariants
//! - Journal entries snapshot card fields by value; they never point back
//!   into the live catalog.
//! - `UserProfile::entry_count` mirrors the number of stored entries owned
//!   by that user.

pub mod card;
pub mod journal;
pub mod profile;
