//! Forge, deck and combat bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::abilities;
use crate::cards::PackCard;
use crate::core::{DeckRules, GameRng};
use crate::deck;
use crate::forge::ForgeEngine;

use super::py_packs::PyPackCard;

/// Result of a forge attempt.
#[pyclass(name = "ForgeResult")]
#[derive(Clone, Debug)]
pub struct PyForgeResult {
    #[pyo3(get)]
    success: bool,
    #[pyo3(get)]
    message: String,
    #[pyo3(get)]
    burned: usize,
    #[pyo3(get)]
    output: Option<PyPackCard>,
}

/// Forge cards with the default recipes.
#[pyfunction]
pub fn forge(cards: Vec<PyPackCard>, seed: u64) -> PyForgeResult {
    let cards: Vec<PackCard> = cards.into_iter().map(|c| c.0).collect();
    let result = ForgeEngine::new().forge(&cards, &mut GameRng::new(seed));
    PyForgeResult {
        success: result.success(),
        message: result.message(),
        burned: result.inputs_burned.len(),
        output: result.output.map(PyPackCard),
    }
}

/// Validate a deck given as a JSON list of cards.
///
/// Returns `(valid, errors)`.
#[pyfunction]
pub fn validate_deck(cards_json: &str) -> PyResult<(bool, Vec<String>)> {
    let cards: Vec<PackCard> =
        serde_json::from_str(cards_json).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let result = deck::validate_deck(&cards, &DeckRules::default());
    Ok((result.valid, result.errors))
}

/// Damage multiplier between two type lines.
#[pyfunction]
pub fn type_multiplier(attacker: &str, defender: &str) -> f64 {
    abilities::get_type_multiplier(attacker, defender)
}

/// Advantage label between two type lines, or `None`.
#[pyfunction]
pub fn type_advantage_label(attacker: &str, defender: &str) -> Option<&'static str> {
    abilities::get_type_advantage_label(attacker, defender)
}
