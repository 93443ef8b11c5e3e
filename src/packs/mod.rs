//! Pack generation: pack types, rarity-weighted draws, graded output.
//!
//! Pure over a catalog and a random source; persisting and minting the
//! resulting cards is the caller's job.

pub mod generator;
pub mod pack_type;

pub use generator::{open_pack, PackGenerator, MAX_RESAMPLES};
pub use pack_type::{PackType, Slot};
