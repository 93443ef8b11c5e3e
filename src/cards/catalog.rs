//! Card catalog for definition lookup and rarity pools.
//!
//! The `CardCatalog` is loaded once and read-only afterwards. Besides
//! name lookup it keeps, per set and rarity, the ordered list of cards a
//! pack slot picks from.

use rustc_hash::FxHashMap;

use super::definition::CardDefinition;
use super::rarity::{CardSet, Rarity};
use crate::abilities::AbilityRegistry;
use crate::core::CatalogError;
use crate::packs::PackType;

/// Read-only catalog of card definitions.
///
/// ## Example
///
/// ```
/// use pack_forge::cards::{CardCatalog, CardDefinition, CardSet, Rarity};
///
/// let catalog = CardCatalog::from_cards(vec![
///     CardDefinition::creature("Gas Gremlin", "Creature", Rarity::Common, 1, 1, 1),
/// ]).unwrap();
///
/// assert_eq!(catalog.pool(CardSet::Core, Rarity::Common).len(), 1);
/// assert!(catalog.get("Gas Gremlin").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
    by_name: FxHashMap<String, usize>,
    pools: FxHashMap<(CardSet, Rarity), Vec<usize>>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, preserving input order within each pool.
    pub fn from_cards(
        cards: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.register(card)?;
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON array of definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<CardDefinition> = serde_json::from_str(json)?;
        Self::from_cards(cards)
    }

    /// Add a card definition. Names must be unique.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), CatalogError> {
        if self.by_name.contains_key(&card.name) {
            return Err(CatalogError::DuplicateName(card.name));
        }
        let idx = self.cards.len();
        self.by_name.insert(card.name.clone(), idx);
        self.pools.entry((card.set, card.rarity)).or_default().push(idx);
        self.cards.push(card);
        Ok(())
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.by_name.get(name).map(|&idx| &self.cards[idx])
    }

    /// Cards of one set and rarity, in catalog order.
    #[must_use]
    pub fn pool(&self, set: CardSet, rarity: Rarity) -> Vec<&CardDefinition> {
        self.pool_indices(set, rarity).iter().map(|&idx| &self.cards[idx]).collect()
    }

    pub(crate) fn pool_indices(&self, set: CardSet, rarity: Rarity) -> &[usize] {
        self.pools.get(&(set, rarity)).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn by_index(&self, idx: usize) -> &CardDefinition {
        &self.cards[idx]
    }

    /// Whether any card of this set is drawable through a weighted slot.
    #[must_use]
    pub fn has_drawable(&self, set: CardSet) -> bool {
        Rarity::PACK_TIERS
            .iter()
            .any(|r| !self.pool_indices(set, *r).is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// Startup check.
    ///
    /// Every ability must resolve and every pack type must be able to fill
    /// all of its slots. Each problem is logged; the first is returned.
    pub fn validate(&self, abilities: &AbilityRegistry) -> Result<(), CatalogError> {
        let mut errors = Vec::new();

        for card in &self.cards {
            for ability in &card.abilities {
                if !abilities.contains(ability) {
                    errors.push(CatalogError::UnknownAbility {
                        card: card.name.clone(),
                        ability: ability.clone(),
                    });
                }
            }
        }

        for pack in PackType::ALL {
            let set = pack.set();
            for rarity in pack.required_rarities() {
                if self.pool_indices(set, rarity).is_empty() {
                    errors.push(CatalogError::EmptyTier {
                        pack: pack.name(),
                        set,
                        rarity,
                    });
                }
            }
            // Weighted slots still need something to resample onto.
            if pack.slots().contains(&crate::packs::Slot::Weighted) && !self.has_drawable(set) {
                errors.push(CatalogError::EmptyTier {
                    pack: pack.name(),
                    set,
                    rarity: Rarity::Common,
                });
            }
        }

        for error in &errors {
            tracing::warn!(%error, "catalog validation failed");
        }

        match errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
