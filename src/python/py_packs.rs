//! Pack and grading bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::abilities::AbilityRegistry;
use crate::cards::{CardCatalog, PackCard};
use crate::core::GameRng;
use crate::grading;
use crate::packs::{PackGenerator, PackType};

/// Python wrapper for a minted card.
#[pyclass(name = "PackCard")]
#[derive(Clone, Debug)]
pub struct PyPackCard(pub PackCard);

#[pymethods]
impl PyPackCard {
    #[getter]
    fn name(&self) -> &str {
        &self.0.card.name
    }

    #[getter]
    fn rarity(&self) -> String {
        self.0.card.rarity.to_string()
    }

    #[getter]
    fn grade(&self) -> u8 {
        self.0.grade.value()
    }

    #[getter]
    fn power(&self) -> Option<u32> {
        self.0.power()
    }

    #[getter]
    fn toughness(&self) -> Option<u32> {
        self.0.toughness()
    }

    #[getter]
    fn abilities(&self) -> Vec<String> {
        self.0.abilities().to_vec()
    }

    /// Serialize to the JSON shape the persistence layer stores.
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.0).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "PackCard({}, {}, grade={})",
            self.0.card.name, self.0.card.rarity, self.0.grade.value()
        )
    }
}

/// Opens packs against a validated catalog.
#[pyclass(name = "PackOpener")]
pub struct PyPackOpener {
    catalog: CardCatalog,
}

#[pymethods]
impl PyPackOpener {
    /// Create an opener over the built-in catalog, or a JSON catalog.
    #[new]
    #[pyo3(signature = (catalog_json = None))]
    fn new(catalog_json: Option<&str>) -> PyResult<Self> {
        let catalog = match catalog_json {
            Some(json) => {
                CardCatalog::from_json(json).map_err(|e| PyValueError::new_err(e.to_string()))?
            }
            None => CardCatalog::builtin(),
        };
        catalog
            .validate(&AbilityRegistry::builtin())
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { catalog })
    }

    /// Open a pack. Unknown pack names open a standard pack.
    fn open(&self, pack: &str, seed: u64) -> PyResult<Vec<PyPackCard>> {
        let mut rng = GameRng::new(seed);
        PackGenerator::new(&self.catalog)
            .open(PackType::from_name(pack), &mut rng)
            .map(|cards| cards.into_iter().map(PyPackCard).collect())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __len__(&self) -> usize {
        self.catalog.len()
    }
}

/// Roll a single grade from a seed.
#[pyfunction]
pub fn roll_grade(seed: u64) -> u8 {
    grading::roll_grade(&mut GameRng::new(seed)).grade
}
