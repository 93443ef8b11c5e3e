//! Card system: definitions, minted instances, and the catalog.
//!
//! ## Key Types
//!
//! - `Rarity`, `CardSet`: fixed per definition
//! - `CardDefinition`: static catalog data
//! - `CardCategory`: combat category parsed from a type line
//! - `PackCard`: a minted card with its rolled grade
//! - `CardCatalog`: name lookup and per-rarity pools

mod builtin;
pub mod catalog;
pub mod definition;
pub mod instance;
pub mod rarity;

pub use catalog::CardCatalog;
pub use definition::{AbilityList, CardCategory, CardDefinition, CardFace};
pub use instance::PackCard;
pub use rarity::{CardSet, Rarity};
