//! Pack types and their slot layouts.

use serde::{Deserialize, Serialize};

use crate::cards::{CardSet, Rarity};

/// How one pack slot picks its card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Uniform among cards of exactly this rarity.
    Forced(Rarity),
    /// Rarity from the weighted table, then uniform within it.
    Weighted,
    /// Legendary at the boosted premium odds, rare otherwise.
    PremiumBoosted,
}

const STANDARD_SLOTS: [Slot; 5] = [
    Slot::Forced(Rarity::Common),
    Slot::Forced(Rarity::Common),
    Slot::Forced(Rarity::Common),
    Slot::Forced(Rarity::Uncommon),
    Slot::Weighted,
];

const PREMIUM_SLOTS: [Slot; 5] = [
    Slot::Forced(Rarity::Uncommon),
    Slot::Forced(Rarity::Uncommon),
    Slot::Forced(Rarity::Rare),
    Slot::Forced(Rarity::Rare),
    Slot::PremiumBoosted,
];

const MONAD_SLOTS: [Slot; 3] = [Slot::Weighted, Slot::Weighted, Slot::Weighted];

/// Purchasable pack types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackType {
    #[default]
    Standard,
    Premium,
    /// Themed pack drawing only from the Monad set.
    Monad,
}

impl PackType {
    pub const ALL: [PackType; 3] = [PackType::Standard, PackType::Premium, PackType::Monad];

    /// Parse a pack name; anything unrecognized is a standard pack.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "premium" => PackType::Premium,
            "monad" => PackType::Monad,
            _ => PackType::Standard,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PackType::Standard => "standard",
            PackType::Premium => "premium",
            PackType::Monad => "monad",
        }
    }

    /// Slots in pack order.
    #[must_use]
    pub fn slots(self) -> &'static [Slot] {
        match self {
            PackType::Standard => &STANDARD_SLOTS,
            PackType::Premium => &PREMIUM_SLOTS,
            PackType::Monad => &MONAD_SLOTS,
        }
    }

    /// Number of cards in the pack.
    #[must_use]
    pub fn size(self) -> usize {
        self.slots().len()
    }

    /// Sub-catalog this pack draws from.
    #[must_use]
    pub const fn set(self) -> CardSet {
        match self {
            PackType::Monad => CardSet::Monad,
            PackType::Standard | PackType::Premium => CardSet::Core,
        }
    }

    /// Rarities that must be present in the pack's set for every slot to fill.
    #[must_use]
    pub fn required_rarities(self) -> Vec<Rarity> {
        let mut out = Vec::new();
        for slot in self.slots() {
            let rarity = match slot {
                Slot::Forced(r) => *r,
                Slot::PremiumBoosted => Rarity::Rare,
                Slot::Weighted => continue,
            };
            if !out.contains(&rarity) {
                out.push(rarity);
            }
        }
        out
    }
}

impl From<&str> for PackType {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl std::fmt::Display for PackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(PackType::Standard.size(), 5);
        assert_eq!(PackType::Premium.size(), 5);
        assert_eq!(PackType::Monad.size(), 3);
    }

    #[test]
    fn test_unknown_name_is_standard() {
        assert_eq!(PackType::from_name("premium"), PackType::Premium);
        assert_eq!(PackType::from_name(" Monad "), PackType::Monad);
        assert_eq!(PackType::from_name("mega-ultra"), PackType::Standard);
        assert_eq!(PackType::from_name(""), PackType::Standard);
        assert_eq!(PackType::from("standard"), PackType::Standard);
    }

    #[test]
    fn test_sets() {
        assert_eq!(PackType::Standard.set(), CardSet::Core);
        assert_eq!(PackType::Premium.set(), CardSet::Core);
        assert_eq!(PackType::Monad.set(), CardSet::Monad);
    }

    #[test]
    fn test_required_rarities() {
        assert_eq!(PackType::Standard.required_rarities(), vec![Rarity::Common, Rarity::Uncommon]);
        assert_eq!(PackType::Premium.required_rarities(), vec![Rarity::Uncommon, Rarity::Rare]);
        assert!(PackType::Monad.required_rarities().is_empty());
    }
}
