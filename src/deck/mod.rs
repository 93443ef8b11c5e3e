//! Deck validation.

pub mod validation;

pub use validation::{validate_deck, DeckValidation};
