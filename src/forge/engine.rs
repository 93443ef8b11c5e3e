//! The forge: identical cards in, at most one better card out.
//!
//! Each tier's recipe says how many cards an attempt consumes (three by
//! default). A request is first checked without consuming anything. A
//! valid request draws once against the tier's success rate:
//! - success: the first `input_count` cards are consumed and one upgraded
//!   card is minted
//! - failure with burn: the first `input_count` cards are consumed,
//!   nothing is minted
//! - failure without burn: nothing is consumed
//!
//! Recipes consume at least two and produce at most one, so forging only
//! ever shrinks the supply. Callers apply `inputs_burned` and `output` to
//! their storage as one unit.

use crate::cards::{PackCard, Rarity};
use crate::core::{ForgeError, RandomSource};

use super::recipe::{ForgeRecipe, ForgeRecipes, FORGE_INPUT_COUNT};

/// What happened to a forge request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForgeOutcome {
    /// Inputs consumed, upgraded card minted.
    Upgraded,
    /// Roll failed and the inputs were destroyed.
    Burned,
    /// Roll failed and the inputs were kept.
    Returned,
    /// Request invalid; nothing consumed.
    Rejected(ForgeError),
}

/// Result of a forge request.
#[derive(Clone, Debug, PartialEq)]
pub struct ForgeResult {
    pub outcome: ForgeOutcome,
    /// Instances the caller must delete.
    pub inputs_burned: Vec<PackCard>,
    /// Instance the caller must create.
    pub output: Option<PackCard>,
}

impl ForgeResult {
    fn rejected(error: ForgeError) -> Self {
        Self {
            outcome: ForgeOutcome::Rejected(error),
            inputs_burned: Vec::new(),
            output: None,
        }
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome == ForgeOutcome::Upgraded
    }

    /// Rejection reason, if the request was invalid.
    #[must_use]
    pub fn rejection(&self) -> Option<&ForgeError> {
        match &self.outcome {
            ForgeOutcome::Rejected(e) => Some(e),
            _ => None,
        }
    }

    /// Player-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.outcome {
            ForgeOutcome::Upgraded => match &self.output {
                Some(card) => format!("Forged {} ({})!", card.card.name, card.card.rarity),
                None => "Forged!".to_string(),
            },
            ForgeOutcome::Burned => "Forge failed. The cards were burned.".to_string(),
            ForgeOutcome::Returned => "Forge failed. Your cards were returned.".to_string(),
            ForgeOutcome::Rejected(e) => e.to_string(),
        }
    }
}

/// Forge with a configurable recipe table.
#[derive(Clone, Debug, Default)]
pub struct ForgeEngine {
    recipes: ForgeRecipes,
}

impl ForgeEngine {
    /// Create an engine with the default recipes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_recipes(recipes: ForgeRecipes) -> Self {
        Self { recipes }
    }

    #[must_use]
    pub fn recipes(&self) -> &ForgeRecipes {
        &self.recipes
    }

    /// Check a request without rolling.
    ///
    /// Returns the recipe that would apply. The card count is checked
    /// against the first card's recipe, or against `FORGE_INPUT_COUNT`
    /// when that tier has none.
    pub fn check(&self, cards: &[PackCard]) -> Result<&ForgeRecipe, ForgeError> {
        let Some(first) = cards.first() else {
            return Err(ForgeError::NotEnoughCards { required: FORGE_INPUT_COUNT, supplied: 0 });
        };
        let required = self
            .recipes
            .get(first.card.rarity)
            .map_or(FORGE_INPUT_COUNT, |r| r.input_count);
        if cards.len() < required {
            return Err(ForgeError::NotEnoughCards { required, supplied: cards.len() });
        }

        if !cards.iter().all(|c| c.same_character(first)) {
            return Err(ForgeError::CharacterMismatch);
        }
        if !cards.iter().all(|c| c.card.rarity == first.card.rarity) {
            return Err(ForgeError::RarityMismatch);
        }

        let rarity = first.card.rarity;
        if rarity >= Rarity::Legendary {
            return Err(ForgeError::BeyondLegendary);
        }

        self.recipes.get(rarity).ok_or(ForgeError::NoRecipe(rarity))
    }

    /// Attempt a forge.
    ///
    /// Never panics and never consumes anything on a rejected request.
    /// Only the first `input_count` cards are consumed; extras are checked
    /// for matching but left alone.
    pub fn forge<R: RandomSource + ?Sized>(
        &self,
        cards: &[PackCard],
        rng: &mut R,
    ) -> ForgeResult {
        let recipe = match self.check(cards) {
            Ok(recipe) => recipe,
            Err(error) => {
                tracing::debug!(%error, supplied = cards.len(), "forge rejected");
                return ForgeResult::rejected(error);
            }
        };

        let inputs = &cards[..recipe.input_count];
        let roll = rng.next_f64();
        let name = inputs[0].card.name.as_str();

        if roll < recipe.success_rate {
            let output = upgrade(&inputs[0], recipe);
            tracing::info!(
                card = name,
                from = %recipe.input,
                to = %recipe.output,
                roll,
                "forge succeeded"
            );
            ForgeResult {
                outcome: ForgeOutcome::Upgraded,
                inputs_burned: inputs.to_vec(),
                output: Some(output),
            }
        } else if recipe.burn_on_fail {
            tracing::info!(card = name, tier = %recipe.input, roll, "forge failed, inputs burned");
            ForgeResult {
                outcome: ForgeOutcome::Burned,
                inputs_burned: inputs.to_vec(),
                output: None,
            }
        } else {
            tracing::info!(
                card = name,
                tier = %recipe.input,
                roll,
                "forge failed, inputs returned"
            );
            ForgeResult {
                outcome: ForgeOutcome::Returned,
                inputs_burned: Vec::new(),
                output: None,
            }
        }
    }
}

/// Mint the upgraded card from the first input.
///
/// Name, type, cost, flavor, image and grade carry over.
fn upgrade(base: &PackCard, recipe: &ForgeRecipe) -> PackCard {
    let mut out = base.clone();
    out.card.rarity = recipe.output;
    out.card.power = out.card.power.map(|p| recipe.scale(p));
    out.card.toughness = out.card.toughness.map(|t| recipe.scale(t));
    out.card.abilities.truncate(recipe.ability_slots);
    out
}

/// Forge with the default recipes.
pub fn forge_cards<R: RandomSource + ?Sized>(cards: &[PackCard], rng: &mut R) -> ForgeResult {
    ForgeEngine::new().forge(cards, rng)
}
