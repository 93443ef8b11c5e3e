//! Forging: the deflationary sink of the card economy.

pub mod engine;
pub mod recipe;

pub use engine::{forge_cards, ForgeEngine, ForgeOutcome, ForgeResult};
pub use recipe::{ForgeRecipe, ForgeRecipes, FORGE_INPUT_COUNT};
