//! Deck legality checks.
//!
//! All rules are checked and every violation is reported, in a fixed
//! order: size, copies (by first appearance), legendary cap, creature.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardFace, Rarity};
use crate::core::DeckRules;

/// Outcome of a deck check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl DeckValidation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check a deck against `rules`.
///
/// Works over catalog definitions or minted cards alike.
pub fn validate_deck<C: CardFace>(cards: &[C], rules: &DeckRules) -> DeckValidation {
    let mut errors = Vec::new();

    if cards.len() < rules.min_cards {
        errors.push(format!(
            "Deck must have at least {} cards (has {})",
            rules.min_cards,
            cards.len()
        ));
    }
    if cards.len() > rules.max_cards {
        errors.push(format!(
            "Deck cannot have more than {} cards (has {})",
            rules.max_cards,
            cards.len()
        ));
    }

    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut order: Vec<&str> = Vec::new();
    for card in cards {
        let count = counts.entry(card.name()).or_insert(0);
        if *count == 0 {
            order.push(card.name());
        }
        *count += 1;
    }
    for name in order {
        let count = counts[name];
        if count > rules.max_copies {
            errors.push(format!(
                "Too many copies of {} ({}, max copies {})",
                name, count, rules.max_copies
            ));
        }
    }

    let legendary = cards.iter().filter(|c| c.rarity() == Rarity::Legendary).count();
    if legendary > rules.max_legendary {
        errors.push(format!(
            "Too many legendary cards ({}, max {})",
            legendary, rules.max_legendary
        ));
    }

    if !cards.iter().any(|c| c.is_creature()) {
        errors.push("Deck must contain at least one creature".to_string());
    }

    DeckValidation::from_errors(errors)
}
