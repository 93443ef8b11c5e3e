//! Error types.
//!
//! Invalid player input never surfaces as `Err`: forge rejections travel
//! inside `ForgeResult` and deck problems inside `DeckValidation`. The
//! errors here cover misconfiguration (catalog, config) and ledger misuse.
//! Misconfiguration is meant to be caught once, at startup.

use thiserror::Error;

use crate::cards::{CardSet, Rarity};

/// Catalog misconfiguration, detected at load or startup validation.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate card name: {0}")]
    DuplicateName(String),

    #[error("card {card} references unknown ability {ability}")]
    UnknownAbility { card: String, ability: String },

    #[error("no {rarity} cards in the {set} set, required by the {pack} pack")]
    EmptyTier {
        pack: &'static str,
        set: CardSet,
        rarity: Rarity,
    },

    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Economy configuration that would make the game misbehave.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("rarity threshold {field} = {value} is outside [0, 1]")]
    RarityOutOfRange { field: &'static str, value: f64 },

    #[error("rarity thresholds out of order: {common}, {uncommon}, {rare}")]
    RarityOrder { common: f64, uncommon: f64, rare: f64 },

    #[error("forge recipe {input} -> {output} must step exactly one tier below mythic")]
    RecipeStep { input: Rarity, output: Rarity },

    #[error("forge recipe for {input} cards has success rate {rate} outside (0, 1]")]
    RecipeRate { input: Rarity, rate: f64 },

    #[error("forge recipe for {input} cards must consume at least 2, not {count}")]
    RecipeInputCount { input: Rarity, count: usize },

    #[error("forge recipe for {input} cards has invalid stat multiplier {multiplier}")]
    RecipeMultiplier { input: Rarity, multiplier: f64 },

    #[error("more than one forge recipe for {0} cards")]
    DuplicateRecipe(Rarity),

    #[error("min deck size {min} exceeds max {max}")]
    DeckSize { min: usize, max: usize },

    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A pack could not be filled from the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    #[error("no {rarity} cards available for a forced slot")]
    EmptyPool { rarity: Rarity },

    #[error("no cards available for a weighted slot in the {set} set")]
    NoDrawableCards { set: CardSet },

    #[error("gave up after {attempts} resamples")]
    ResampleExhausted { attempts: usize },
}

/// Reasons a forge request is rejected without consuming anything.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ForgeError {
    #[error("Need {required} cards to forge")]
    NotEnoughCards { required: usize, supplied: usize },

    #[error("All cards must be the same character")]
    CharacterMismatch,

    #[error("All cards must be the same rarity")]
    RarityMismatch,

    #[error("Cannot forge beyond Legendary")]
    BeyondLegendary,

    #[error("No forge recipe for {0} cards")]
    NoRecipe(Rarity),
}

/// Collection ledger errors.
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("unknown card instance {0}")]
    UnknownInstance(u64),

    #[error("card instance {0} listed more than once")]
    DuplicateInstance(u64),

    #[error("snapshot id counter {next_id} does not exceed stored instance {max_id}")]
    StaleIdCounter { next_id: u64, max_id: u64 },

    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}
