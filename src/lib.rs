//! # pack-forge
//!
//! The reward and combat-modifier core of a trading card game: pack
//! generation, grading, forging, ability lookup, type advantage and deck
//! validation.
//!
//! ## Design Principles
//!
//! 1. **Pure**: No I/O, no globals. Every function works over an in-memory
//!    catalog and an injected random source.
//!
//! 2. **Reproducible**: All randomness goes through `RandomSource`. A seeded
//!    `GameRng` replays packs and forges exactly.
//!
//! 3. **One code path**: Preview and authoritative minting call the same
//!    functions. Trust is decided by who owns the RNG, not by which copy of
//!    the logic runs.
//!
//! ## Modules
//!
//! - `core`: Random sources, errors, economy configuration
//! - `cards`: Rarity, definitions, minted cards, catalog
//! - `grading`: Grade table and rolls
//! - `packs`: Pack types and the pack generator
//! - `forge`: Forge recipes and engine
//! - `abilities`: Ability registry and type advantage
//! - `deck`: Deck validation
//! - `collection`: Owned-card ledger applying pack and forge results

pub mod core;
pub mod cards;
pub mod grading;
pub mod packs;
pub mod forge;
pub mod abilities;
pub mod deck;
pub mod collection;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GameRng, RandomSource, FixedRandom, SequenceRandom,
    CatalogError, ConfigError, PackError, ForgeError, CollectionError,
    DeckRules, RarityTable, EconomyConfig,
};

pub use crate::cards::{
    Rarity, CardSet, CardCategory, CardDefinition, CardFace, PackCard, CardCatalog,
};

pub use crate::grading::{roll_grade, grade_info, Grade, GradeInfo, GRADES};

pub use crate::packs::{open_pack, PackGenerator, PackType};

pub use crate::forge::{
    forge_cards, ForgeEngine, ForgeOutcome, ForgeRecipe, ForgeRecipes, ForgeResult,
};

pub use crate::abilities::{
    Ability, AbilityEffect, AbilityKind, AbilityTrigger, AbilityRegistry,
    get_type_multiplier, get_type_advantage_label,
};

pub use crate::deck::{validate_deck, DeckValidation};

pub use crate::collection::{Collection, ForgeReceipt, InstanceId};
