//! Forge recipes: one per input tier.

use serde::{Deserialize, Serialize};

use crate::cards::Rarity;
use crate::core::ConfigError;

/// Number of identical cards a forge consumes unless its recipe says
/// otherwise.
pub const FORGE_INPUT_COUNT: usize = 3;

/// How one rarity tier forges into the next.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForgeRecipe {
    pub input: Rarity,
    pub output: Rarity,
    /// Identical cards consumed per attempt.
    pub input_count: usize,
    /// Probability in `(0, 1]` that an attempt succeeds.
    pub success_rate: f64,
    /// Whether a failed attempt still destroys the inputs.
    pub burn_on_fail: bool,
    /// Applied to the input's power and toughness, then rounded.
    pub stat_multiplier: f64,
    /// Abilities carried onto the output, taken from the front.
    pub ability_slots: usize,
}

impl ForgeRecipe {
    #[must_use]
    pub fn new(input: Rarity, output: Rarity, success_rate: f64) -> Self {
        Self {
            input,
            output,
            input_count: FORGE_INPUT_COUNT,
            success_rate,
            burn_on_fail: true,
            stat_multiplier: 1.0,
            ability_slots: 2,
        }
    }

    #[must_use]
    pub fn burn_on_fail(mut self, burn: bool) -> Self {
        self.burn_on_fail = burn;
        self
    }

    #[must_use]
    pub fn with_input_count(mut self, count: usize) -> Self {
        self.input_count = count;
        self
    }

    #[must_use]
    pub fn with_scaling(mut self, stat_multiplier: f64, ability_slots: usize) -> Self {
        self.stat_multiplier = stat_multiplier;
        self.ability_slots = ability_slots;
        self
    }

    /// Scale one stat by this recipe's multiplier.
    #[must_use]
    pub fn scale(&self, stat: u32) -> u32 {
        (f64::from(stat) * self.stat_multiplier).round() as u32
    }

    /// A recipe must step one tier up from below legendary, succeed some of
    /// the time, consume at least two cards and scale by a finite,
    /// non-negative multiplier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input >= Rarity::Legendary || self.input.next() != Some(self.output) {
            return Err(ConfigError::RecipeStep { input: self.input, output: self.output });
        }
        if !(self.success_rate > 0.0 && self.success_rate <= 1.0) {
            return Err(ConfigError::RecipeRate { input: self.input, rate: self.success_rate });
        }
        if self.input_count < 2 {
            return Err(ConfigError::RecipeInputCount {
                input: self.input,
                count: self.input_count,
            });
        }
        if !self.stat_multiplier.is_finite() || self.stat_multiplier < 0.0 {
            return Err(ConfigError::RecipeMultiplier {
                input: self.input,
                multiplier: self.stat_multiplier,
            });
        }
        Ok(())
    }
}

/// The forge recipe table.
///
/// Legendary never has a recipe; forging it is rejected before lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForgeRecipes {
    recipes: Vec<ForgeRecipe>,
}

impl Default for ForgeRecipes {
    fn default() -> Self {
        Self {
            recipes: vec![
                ForgeRecipe::new(Rarity::Common, Rarity::Uncommon, 1.0)
                    .burn_on_fail(false)
                    .with_scaling(1.15, 2),
                ForgeRecipe::new(Rarity::Uncommon, Rarity::Rare, 0.75)
                    .with_scaling(1.3, 2),
                ForgeRecipe::new(Rarity::Rare, Rarity::Legendary, 0.5)
                    .with_scaling(1.5, 3),
            ],
        }
    }
}

impl ForgeRecipes {
    /// Recipe for an input tier.
    #[must_use]
    pub fn get(&self, input: Rarity) -> Option<&ForgeRecipe> {
        self.recipes.iter().find(|r| r.input == input)
    }

    /// Add or replace the recipe for `recipe.input`.
    #[must_use]
    pub fn with_recipe(mut self, recipe: ForgeRecipe) -> Self {
        match self.recipes.iter_mut().find(|r| r.input == recipe.input) {
            Some(existing) => *existing = recipe,
            None => self.recipes.push(recipe),
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &ForgeRecipe> {
        self.recipes.iter()
    }

    /// Validate every recipe and reject a tier listed twice. A missing tier
    /// is allowed; forging it is rejected with `NoRecipe`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, recipe) in self.recipes.iter().enumerate() {
            recipe.validate()?;
            if self.recipes[..i].iter().any(|r| r.input == recipe.input) {
                return Err(ConfigError::DuplicateRecipe(recipe.input));
            }
        }
        Ok(())
    }
}
