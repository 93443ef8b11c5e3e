//! Pack generation.
//!
//! One implementation serves both the unauthenticated preview path and the
//! authoritative mint path; only the caller decides which RNG it trusts.
//! The mint path must run this server-side with its own `GameRng` and must
//! never accept a client-submitted card list.
//!
//! ## Draw order
//!
//! For each slot in pack order: pick the definition (one draw for the
//! weighted rarity if the slot is weighted, one for the index), then roll
//! the grade (one draw). A resample on an empty tier repeats the rarity
//! draw only.

use crate::cards::{CardCatalog, CardDefinition, CardSet, PackCard, Rarity};
use crate::core::{ConfigError, PackError, RandomSource, RarityTable};
use crate::grading::roll_grade;

use super::pack_type::{PackType, Slot};

/// Upper bound on rarity resamples for a single weighted slot.
pub const MAX_RESAMPLES: usize = 1000;

/// Opens packs against a catalog.
///
/// ## Example
///
/// ```
/// use pack_forge::cards::CardCatalog;
/// use pack_forge::core::GameRng;
/// use pack_forge::packs::{PackGenerator, PackType};
///
/// let catalog = CardCatalog::builtin();
/// let generator = PackGenerator::new(&catalog);
/// let mut rng = GameRng::new(7);
///
/// let pack = generator.open(PackType::Premium, &mut rng).unwrap();
/// assert_eq!(pack.len(), 5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PackGenerator<'a> {
    catalog: &'a CardCatalog,
    rarity: RarityTable,
}

impl<'a> PackGenerator<'a> {
    /// Create a generator with the default rarity table.
    #[must_use]
    pub fn new(catalog: &'a CardCatalog) -> Self {
        Self {
            catalog,
            rarity: RarityTable::default(),
        }
    }

    /// Use a different rarity table.
    ///
    /// A table with out-of-range or decreasing thresholds is rejected.
    pub fn with_rarity_table(mut self, rarity: RarityTable) -> Result<Self, ConfigError> {
        rarity.validate()?;
        self.rarity = rarity;
        Ok(self)
    }

    #[must_use]
    pub fn rarity_table(&self) -> &RarityTable {
        &self.rarity
    }

    /// Open one pack.
    ///
    /// Either every slot fills or the whole pack fails; callers never see
    /// a partial pack.
    pub fn open<R: RandomSource + ?Sized>(
        &self,
        pack: PackType,
        rng: &mut R,
    ) -> Result<Vec<PackCard>, PackError> {
        let set = pack.set();
        let mut cards = Vec::with_capacity(pack.size());

        for slot in pack.slots() {
            let definition = match *slot {
                Slot::Forced(rarity) => self.draw_forced(set, rarity, rng)?,
                Slot::Weighted => self.draw_weighted(set, rng)?,
                Slot::PremiumBoosted => self.draw_premium_boosted(set, rng)?,
            };
            let grade = roll_grade(rng);
            cards.push(PackCard::mint(definition, grade));
        }

        tracing::debug!(
            pack = pack.name(),
            cards = ?cards.iter().map(|c| c.card.name.as_str()).collect::<Vec<_>>(),
            "opened pack"
        );
        Ok(cards)
    }

    /// Open a pack by name. Unknown names open a standard pack.
    pub fn open_named<R: RandomSource + ?Sized>(
        &self,
        pack: &str,
        rng: &mut R,
    ) -> Result<Vec<PackCard>, PackError> {
        self.open(PackType::from_name(pack), rng)
    }

    /// Sample a rarity from the weighted table.
    pub fn weighted_rarity<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Rarity {
        self.rarity.rarity_for(rng.next_f64())
    }

    /// Uniform pick among cards of exactly `rarity`, ignoring the weights.
    pub fn draw_forced<R: RandomSource + ?Sized>(
        &self,
        set: CardSet,
        rarity: Rarity,
        rng: &mut R,
    ) -> Result<&'a CardDefinition, PackError> {
        let pool = self.catalog.pool_indices(set, rarity);
        if pool.is_empty() {
            return Err(PackError::EmptyPool { rarity });
        }
        Ok(self.catalog.by_index(pool[rng.pick_index(pool.len())]))
    }

    /// Weighted rarity, then a uniform pick within it.
    ///
    /// A tier with no cards is resampled. An entirely empty set fails up
    /// front instead of looping.
    pub fn draw_weighted<R: RandomSource + ?Sized>(
        &self,
        set: CardSet,
        rng: &mut R,
    ) -> Result<&'a CardDefinition, PackError> {
        if !self.catalog.has_drawable(set) {
            return Err(PackError::NoDrawableCards { set });
        }
        self.resample(set, rng, |this, rng| this.weighted_rarity(rng))
    }

    /// Premium bonus slot: legendary at the boosted odds, rare otherwise.
    pub fn draw_premium_boosted<R: RandomSource + ?Sized>(
        &self,
        set: CardSet,
        rng: &mut R,
    ) -> Result<&'a CardDefinition, PackError> {
        if self.catalog.pool_indices(set, Rarity::Rare).is_empty()
            && self.catalog.pool_indices(set, Rarity::Legendary).is_empty()
        {
            return Err(PackError::EmptyPool { rarity: Rarity::Rare });
        }
        let chance = self.rarity.premium_legendary;
        self.resample(set, rng, |_, rng| {
            if rng.next_f64() < chance {
                Rarity::Legendary
            } else {
                Rarity::Rare
            }
        })
    }

    fn resample<R, F>(
        &self,
        set: CardSet,
        rng: &mut R,
        mut sample: F,
    ) -> Result<&'a CardDefinition, PackError>
    where
        R: RandomSource + ?Sized,
        F: FnMut(&Self, &mut R) -> Rarity,
    {
        for attempt in 0..MAX_RESAMPLES {
            let rarity = sample(self, rng);
            let pool = self.catalog.pool_indices(set, rarity);
            if pool.is_empty() {
                tracing::warn!(%set, %rarity, attempt, "empty rarity tier, resampling");
                continue;
            }
            return Ok(self.catalog.by_index(pool[rng.pick_index(pool.len())]));
        }
        Err(PackError::ResampleExhausted { attempts: MAX_RESAMPLES })
    }
}

/// Open a pack by name against a catalog with the default rarity table.
///
/// Unknown pack names fall back to a standard pack.
pub fn open_pack<R: RandomSource + ?Sized>(
    pack: &str,
    catalog: &CardCatalog,
    rng: &mut R,
) -> Result<Vec<PackCard>, PackError> {
    PackGenerator::new(catalog).open_named(pack, rng)
}
