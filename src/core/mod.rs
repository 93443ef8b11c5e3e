//! Core engine types: randomness, errors, configuration.
//!
//! Everything else in the crate builds on these. Nothing here knows
//! about specific cards.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DeckRules, EconomyConfig, RarityTable};
pub use error::{CatalogError, CollectionError, ConfigError, ForgeError, PackError};
pub use rng::{FixedRandom, GameRng, RandomSource, SequenceRandom};
