//! Minted card instances.
//!
//! A `PackCard` is a snapshot of a `CardDefinition` at mint time plus the
//! grade rolled for it. Its stats already include the grade bonus. Once
//! minted it never changes; forging consumes instances and mints a new one.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardFace};
use super::rarity::Rarity;
use crate::grading::{Grade, GradeInfo};

/// An owned, minted card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackCard {
    /// Definition snapshot with graded stats.
    pub card: CardDefinition,

    pub grade: Grade,
}

impl PackCard {
    /// Mint a card from its definition and a rolled grade.
    ///
    /// The grade's stat bonus is added to power and toughness when the
    /// definition has them.
    #[must_use]
    pub fn mint(definition: &CardDefinition, grade: GradeInfo) -> Self {
        let mut card = definition.clone();
        card.power = card.power.map(|p| p + grade.stat_bonus);
        card.toughness = card.toughness.map(|t| t + grade.stat_bonus);
        Self {
            card,
            grade: grade.into(),
        }
    }

    #[must_use]
    pub fn power(&self) -> Option<u32> {
        self.card.power
    }

    #[must_use]
    pub fn toughness(&self) -> Option<u32> {
        self.card.toughness
    }

    #[must_use]
    pub fn abilities(&self) -> &[String] {
        &self.card.abilities
    }

    /// Whether this instance and `other` can be forged together.
    #[must_use]
    pub fn same_character(&self, other: &PackCard) -> bool {
        self.card.name == other.card.name
    }
}

impl CardFace for PackCard {
    fn name(&self) -> &str {
        &self.card.name
    }

    fn type_line(&self) -> &str {
        &self.card.type_line
    }

    fn rarity(&self) -> Rarity {
        self.card.rarity
    }
}
