//! Economy configuration.
//!
//! The host loads these once at startup. Defaults are the live game
//! constants:
//! - `RarityTable`: cumulative thresholds for weighted pack slots
//! - `DeckRules`: deck legality bounds
//! - `ForgeRecipes`: per-tier forge odds and scaling
//! - `EconomyConfig`: all three together

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cards::Rarity;
use crate::core::error::ConfigError;
use crate::forge::ForgeRecipes;

/// Cumulative rarity thresholds for weighted draws.
///
/// A draw `r` selects common if `r < common`, uncommon if `r < uncommon`,
/// rare if `r < rare`, legendary otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RarityTable {
    pub common: f64,
    pub uncommon: f64,
    pub rare: f64,
    /// Legendary chance of the premium pack's boosted slot (rare otherwise).
    pub premium_legendary: f64,
}

impl Default for RarityTable {
    fn default() -> Self {
        // Legendary 0.01%, rare 2.07%, uncommon 18%, common 79.92%.
        // The premium boost is 10x the weighted legendary odds.
        Self {
            common: 0.7992,
            uncommon: 0.9792,
            rare: 0.9999,
            premium_legendary: 0.001,
        }
    }
}

impl RarityTable {
    /// Map a uniform draw onto a rarity tier.
    #[must_use]
    pub fn rarity_for(&self, r: f64) -> Rarity {
        if r < self.common {
            Rarity::Common
        } else if r < self.uncommon {
            Rarity::Uncommon
        } else if r < self.rare {
            Rarity::Rare
        } else {
            Rarity::Legendary
        }
    }

    /// Probability mass of a tier under this table.
    #[must_use]
    pub fn probability(&self, rarity: Rarity) -> f64 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon - self.common,
            Rarity::Rare => self.rare - self.uncommon,
            Rarity::Legendary => 1.0 - self.rare,
            Rarity::Mythic => 0.0,
        }
    }

    /// Thresholds must lie in `[0, 1]` and never decrease, so every tier
    /// gets a non-negative share and the shares sum to one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("common", self.common),
            ("uncommon", self.uncommon),
            ("rare", self.rare),
            ("premium_legendary", self.premium_legendary),
        ];
        for (field, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RarityOutOfRange { field, value });
            }
        }
        if self.common > self.uncommon || self.uncommon > self.rare {
            return Err(ConfigError::RarityOrder {
                common: self.common,
                uncommon: self.uncommon,
                rare: self.rare,
            });
        }
        Ok(())
    }
}

/// Deck legality bounds.
///
/// These are the validator's numbers. Player-facing copy elsewhere
/// advertises 15-20 cards; the validator is authoritative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckRules {
    pub min_cards: usize,
    pub max_cards: usize,
    /// Copies allowed per card name.
    pub max_copies: usize,
    pub max_legendary: usize,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            min_cards: 20,
            max_cards: 30,
            max_copies: 3,
            max_legendary: 3,
        }
    }
}

impl DeckRules {
    /// Set the deck size bounds.
    #[must_use]
    pub fn with_size(mut self, min: usize, max: usize) -> Self {
        assert!(min <= max, "min deck size must not exceed max");
        self.min_cards = min;
        self.max_cards = max;
        self
    }

    /// Set the per-name copy limit.
    #[must_use]
    pub fn with_max_copies(mut self, max: usize) -> Self {
        self.max_copies = max;
        self
    }

    /// Set the legendary cap.
    #[must_use]
    pub fn with_max_legendary(mut self, max: usize) -> Self {
        self.max_legendary = max;
        self
    }

    /// Size bounds must not be inverted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_cards > self.max_cards {
            return Err(ConfigError::DeckSize { min: self.min_cards, max: self.max_cards });
        }
        Ok(())
    }
}

/// Complete economy configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub rarity: RarityTable,
    pub deck: DeckRules,
    pub forge: ForgeRecipes,
}

impl EconomyConfig {
    /// Parse and validate a configuration, filling missing fields with
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if let Err(err) = config.validate() {
            warn!(%err, "rejected economy config");
            return Err(err);
        }
        Ok(config)
    }

    /// Check every table. Hosts that build a config in code should call
    /// this before handing it to the generator or forge.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rarity.validate()?;
        self.deck.validate()?;
        self.forge.validate()
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: RarityTable) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_deck_rules(mut self, deck: DeckRules) -> Self {
        self.deck = deck;
        self
    }

    #[must_use]
    pub fn with_forge(mut self, forge: ForgeRecipes) -> Self {
        self.forge = forge;
        self
    }
}
