//! Ability definitions.
//!
//! Each ability carries descriptive metadata plus a typed effect payload
//! the battle engine applies directly, so no effect is ever parsed out of
//! a description string.

use serde::{Deserialize, Serialize};

/// Behavioral class of an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbilityKind {
    /// Always on while the card is in play.
    Passive,
    /// Used deliberately by the controller.
    Active,
    /// Fires on a game event.
    Triggered,
    /// Fires when the card dies.
    OnDeath,
}

/// When an ability's effect applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityTrigger {
    Always,
    Activated,
    OnPlay,
    OnAttack,
    OnDamaged,
    OnDeath,
    TurnStart,
}

/// Mechanical effect of an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AbilityEffect {
    /// Move power from the target to this card.
    StatSteal { amount: u32 },
    /// Extra damage on this card's attacks.
    DamageBoost { amount: u32 },
    /// Direct damage to the opposing card.
    DealDamage { amount: u32 },
    /// Absorb incoming damage.
    Shield { amount: u32 },
    Heal { amount: u32 },
    DrawCards { count: u32 },
    /// Put a token creature into play.
    Summon { power: u32, toughness: u32 },
    /// Damage applied at each turn start.
    Poison { amount: u32 },
    CostReduction { amount: u32 },
    /// Can attack the turn it is played.
    Haste,
    /// Deals combat damage twice.
    DoubleStrike,
}

/// A registered ability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AbilityKind,
    pub trigger: AbilityTrigger,
    pub effect: AbilityEffect,
    pub description: String,
    pub icon: String,
}

impl Ability {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: AbilityKind,
        trigger: AbilityTrigger,
        effect: AbilityEffect,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            trigger,
            effect,
            description: String::new(),
            icon: String::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serde() {
        assert_eq!(serde_json::to_string(&AbilityKind::OnDeath).unwrap(), "\"on-death\"");
        assert_eq!(serde_json::to_string(&AbilityKind::Passive).unwrap(), "\"passive\"");
    }

    #[test]
    fn test_effect_is_tagged() {
        let json = serde_json::to_string(&AbilityEffect::StatSteal { amount: 1 }).unwrap();
        assert_eq!(json, r#"{"kind":"stat_steal","amount":1}"#);

        let haste: AbilityEffect = serde_json::from_str(r#"{"kind":"haste"}"#).unwrap();
        assert_eq!(haste, AbilityEffect::Haste);
    }

    #[test]
    fn test_builder() {
        let ability = Ability::new(
            "HODL",
            AbilityKind::Passive,
            AbilityTrigger::Always,
            AbilityEffect::Shield { amount: 1 },
        )
        .with_description("Prevents 1 damage from each attack.")
        .with_icon("💎");

        assert_eq!(ability.name, "HODL");
        assert_eq!(ability.icon, "💎");
        assert!(!ability.description.is_empty());
    }
}
