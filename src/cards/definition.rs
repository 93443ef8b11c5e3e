//! Card definitions - static catalog data.
//!
//! `CardDefinition` holds the immutable properties of a card: name, type
//! line, rarity, cost, stats, abilities, flavor. Grades and forge results
//! live on `PackCard`, never here.
//!
//! Type lines are free text ("Creature — Dragon/Kaiju"). Gameplay code
//! reads them through [`CardCategory::from_type_line`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rarity::{CardSet, Rarity};

/// Ability names on a card. Most cards carry three or fewer.
pub type AbilityList = SmallVec<[String; 3]>;

/// Combat category derived from a free-text type line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCategory {
    Creature,
    Spell,
    Artifact,
    Terrain,
}

impl CardCategory {
    /// Normalize a type line.
    ///
    /// Any line containing "spell", "artifact" or "terrain" (checked in that
    /// order, case-insensitive) maps to that category. Everything else,
    /// including unrecognized text, is a creature.
    #[must_use]
    pub fn from_type_line(type_line: &str) -> Self {
        let lower = type_line.to_lowercase();
        if lower.contains("spell") {
            CardCategory::Spell
        } else if lower.contains("artifact") {
            CardCategory::Artifact
        } else if lower.contains("terrain") {
            CardCategory::Terrain
        } else {
            CardCategory::Creature
        }
    }
}

/// Read access shared by catalog definitions and minted cards.
///
/// Deck validation and combat lookups work over either.
pub trait CardFace {
    fn name(&self) -> &str;
    fn type_line(&self) -> &str;
    fn rarity(&self) -> Rarity;

    /// Combat category of this card.
    fn category(&self) -> CardCategory {
        CardCategory::from_type_line(self.type_line())
    }

    /// Whether the type line names a creature.
    fn is_creature(&self) -> bool {
        self.type_line().to_lowercase().contains("creature")
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use pack_forge::cards::{CardDefinition, Rarity};
///
/// let gremlin =
///     CardDefinition::creature("Gas Gremlin", "Creature — Gremlin", Rarity::Common, 1, 1, 1)
///         .with_abilities(["Gas Efficient"])
///     .with_flavor("It feeds on failed transactions.");
///
/// assert_eq!(gremlin.power, Some(1));
/// assert_eq!(gremlin.abilities.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique display name; also the character identity used by forging.
    pub name: String,

    #[serde(rename = "type")]
    pub type_line: String,

    pub rarity: Rarity,

    pub cost: u32,

    /// `None` for non-creatures.
    #[serde(default)]
    pub power: Option<u32>,

    #[serde(default)]
    pub toughness: Option<u32>,

    /// Ability names, resolved through the ability registry.
    #[serde(default)]
    pub abilities: AbilityList,

    #[serde(default)]
    pub flavor: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub set: CardSet,
}

impl CardDefinition {
    /// Create a non-creature definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        type_line: impl Into<String>,
        rarity: Rarity,
        cost: u32,
    ) -> Self {
        Self {
            name: name.into(),
            type_line: type_line.into(),
            rarity,
            cost,
            power: None,
            toughness: None,
            abilities: AbilityList::new(),
            flavor: String::new(),
            image_url: None,
            set: CardSet::Core,
        }
    }

    /// Create a creature definition with stats.
    #[must_use]
    pub fn creature(
        name: impl Into<String>,
        type_line: impl Into<String>,
        rarity: Rarity,
        cost: u32,
        power: u32,
        toughness: u32,
    ) -> Self {
        let mut card = Self::new(name, type_line, rarity, cost);
        card.power = Some(power);
        card.toughness = Some(toughness);
        card
    }

    /// Set the ability list (builder pattern).
    #[must_use]
    pub fn with_abilities<I, S>(mut self, abilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abilities = abilities.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = flavor.into();
        self
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Move the card into a sub-catalog.
    #[must_use]
    pub fn in_set(mut self, set: CardSet) -> Self {
        self.set = set;
        self
    }
}

impl CardFace for CardDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_line(&self) -> &str {
        &self.type_line
    }

    fn rarity(&self) -> Rarity {
        self.rarity
    }
}
