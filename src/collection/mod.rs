//! In-memory owned-card ledger.
//!
//! Mirrors what the persistence layer must do with pack and forge
//! results, so the supply rules can be exercised end to end.

pub mod ledger;

pub use ledger::{Collection, ForgeReceipt, InstanceId};
