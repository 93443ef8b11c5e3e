//! Owned-card ledger.
//!
//! Holds a player's minted cards under stable instance ids and applies
//! pack and forge results as single steps: a pack is added whole or not
//! at all, and a forge either removes its burned inputs and adds its
//! output together or changes nothing. Instance ids are checked before
//! the forge runs, so the same card cannot be spent twice.
//!
//! Backed by `im::OrdMap`, so `clone()` is O(1) and a snapshot taken
//! before a step is unaffected by it.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::cards::{PackCard, Rarity};
use crate::core::{CollectionError, PackError, RandomSource};
use crate::forge::{ForgeEngine, ForgeResult};
use crate::packs::{PackGenerator, PackType};

/// Stable id of an owned card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl InstanceId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a forge did to the ledger.
#[derive(Clone, Debug, PartialEq)]
pub struct ForgeReceipt {
    pub result: ForgeResult,
    /// Ids removed from the ledger.
    pub burned: Vec<InstanceId>,
    /// Id of the newly minted card.
    pub minted: Option<InstanceId>,
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    next_id: u64,
    cards: Vec<(InstanceId, PackCard)>,
}

/// A player's owned cards.
#[derive(Clone, Debug, Default)]
pub struct Collection {
    cards: OrdMap<InstanceId, PackCard>,
    next_id: u64,
}

impl Collection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add freshly minted cards, returning their ids in order.
    pub fn add_pack(&mut self, cards: Vec<PackCard>) -> Vec<InstanceId> {
        cards
            .into_iter()
            .map(|card| {
                let id = self.alloc();
                self.cards.insert(id, card);
                id
            })
            .collect()
    }

    /// Open a pack straight into the collection.
    ///
    /// On error nothing is added.
    pub fn open_pack<R: RandomSource + ?Sized>(
        &mut self,
        generator: &PackGenerator<'_>,
        pack: PackType,
        rng: &mut R,
    ) -> Result<Vec<InstanceId>, PackError> {
        let cards = generator.open(pack, rng)?;
        Ok(self.add_pack(cards))
    }

    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&PackCard> {
        self.cards.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in id order.
    pub fn iter(&self) -> impl Iterator<Item = (InstanceId, &PackCard)> {
        self.cards.iter().map(|(id, card)| (*id, card))
    }

    /// Ids of every copy of a character at a rarity, in id order.
    #[must_use]
    pub fn copies_of(&self, name: &str, rarity: Rarity) -> Vec<InstanceId> {
        self.iter()
            .filter(|(_, c)| c.card.name == name && c.card.rarity == rarity)
            .map(|(id, _)| id)
            .collect()
    }

    /// Forge the given instances.
    ///
    /// Unknown or repeated ids are an `Err` and nothing runs. A rejected
    /// forge is an `Ok` receipt with nothing burned or minted.
    pub fn forge<R: RandomSource + ?Sized>(
        &mut self,
        ids: &[InstanceId],
        engine: &ForgeEngine,
        rng: &mut R,
    ) -> Result<ForgeReceipt, CollectionError> {
        let mut inputs = Vec::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            if ids[..i].contains(id) {
                return Err(CollectionError::DuplicateInstance(id.raw()));
            }
            let card = self.get(*id).ok_or(CollectionError::UnknownInstance(id.raw()))?;
            inputs.push(card.clone());
        }

        let result = engine.forge(&inputs, rng);

        // The engine burns a prefix of what it was given.
        let burned = ids[..result.inputs_burned.len()].to_vec();
        for id in &burned {
            self.cards.remove(id);
        }
        let minted = result.output.clone().map(|card| {
            let id = self.alloc();
            self.cards.insert(id, card);
            id
        });

        tracing::debug!(
            burned = burned.len(),
            minted = ?minted,
            remaining = self.cards.len(),
            "applied forge"
        );
        Ok(ForgeReceipt { result, burned, minted })
    }

    /// Serialize the collection for storage.
    pub fn snapshot_bytes(&self) -> Result<Vec<u8>, CollectionError> {
        let snapshot = Snapshot {
            next_id: self.next_id,
            cards: self.iter().map(|(id, card)| (id, card.clone())).collect(),
        };
        Ok(bincode::serialize(&snapshot)?)
    }

    /// Rebuild a collection from `snapshot_bytes` output.
    ///
    /// Rejects snapshots that list an id twice or whose id counter would
    /// hand out an id already in use.
    pub fn restore(bytes: &[u8]) -> Result<Self, CollectionError> {
        let snapshot: Snapshot = bincode::deserialize(bytes)?;

        let mut cards = OrdMap::new();
        for (id, card) in snapshot.cards {
            if cards.insert(id, card).is_some() {
                return Err(CollectionError::DuplicateInstance(id.raw()));
            }
        }
        if let Some((max, _)) = cards.get_max() {
            if snapshot.next_id <= max.raw() {
                return Err(CollectionError::StaleIdCounter {
                    next_id: snapshot.next_id,
                    max_id: max.raw(),
                });
            }
        }

        Ok(Self { cards, next_id: snapshot.next_id })
    }
}
