//! FRB bindings crate for the Pocket Tarot UI shell.

pub mod api;
