//! Python bindings for the pack-forge core.
//!
//! Lets a Python host run the same pack, forge and deck logic as the
//! authoritative server path.
//!
//! # Quick Start
//!
//! ```python
//! import pack_forge as pf
//!
//! opener = pf.PackOpener()
//! pack = opener.open("premium", seed=42)
//!
//! result = pf.forge(pack[:3], seed=7)
//! print(result.message)
//! ```

use pyo3::prelude::*;

mod py_packs;
mod py_rules;

pub use py_packs::*;
pub use py_rules::*;

/// pack_forge: card packs, grading, forging and combat modifiers.
#[pymodule]
fn pack_forge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPackCard>()?;
    m.add_class::<PyPackOpener>()?;
    m.add_class::<PyForgeResult>()?;

    m.add_function(wrap_pyfunction!(roll_grade, m)?)?;
    m.add_function(wrap_pyfunction!(forge, m)?)?;
    m.add_function(wrap_pyfunction!(validate_deck, m)?)?;
    m.add_function(wrap_pyfunction!(type_multiplier, m)?)?;
    m.add_function(wrap_pyfunction!(type_advantage_label, m)?)?;

    Ok(())
}
