//! Abilities and combat modifiers.
//!
//! ## Key Types
//!
//! - `Ability`: registered ability with kind, trigger and typed effect
//! - `AbilityRegistry`: name lookup over the ability table
//! - type advantage: `get_type_multiplier`, `get_type_advantage_label`
//!
//! The battle engine that consumes these lives outside this crate.

pub mod ability;
pub mod advantage;
pub mod registry;

pub use ability::{Ability, AbilityEffect, AbilityKind, AbilityTrigger};
pub use advantage::{
    beats, category_multiplier, get_type_advantage_label, get_type_multiplier, NOT_VERY_EFFECTIVE,
    SUPER_EFFECTIVE,
};
pub use registry::AbilityRegistry;
