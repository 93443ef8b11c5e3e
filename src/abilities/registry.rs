//! Ability registry for name lookup.
//!
//! Card definitions refer to abilities by name. The registry resolves
//! those names; an unknown name yields `None`, which the battle engine
//! treats as a no-op.

use rustc_hash::FxHashMap;

use super::ability::{Ability, AbilityEffect, AbilityKind, AbilityTrigger};

/// Registry of abilities keyed by name.
///
/// Iteration and `get_abilities_by_type` follow registration order.
///
/// ## Example
///
/// ```
/// use pack_forge::abilities::{AbilityRegistry, AbilityKind};
///
/// let registry = AbilityRegistry::builtin();
///
/// let hodl = registry.get_ability("HODL").unwrap();
/// assert_eq!(hodl.kind, AbilityKind::Passive);
/// assert!(registry.get_ability("Unknown Ability").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AbilityRegistry {
    abilities: Vec<Ability>,
    by_name: FxHashMap<String, usize>,
}

impl AbilityRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an ability.
    ///
    /// Panics if an ability with the same name already exists.
    pub fn register(&mut self, ability: Ability) {
        if self.by_name.contains_key(&ability.name) {
            panic!("Ability {:?} already registered", ability.name);
        }
        self.by_name.insert(ability.name.clone(), self.abilities.len());
        self.abilities.push(ability);
    }

    /// Look up an ability by name.
    #[must_use]
    pub fn get_ability(&self, name: &str) -> Option<&Ability> {
        self.by_name.get(name).map(|&idx| &self.abilities[idx])
    }

    /// All abilities of one kind.
    #[must_use]
    pub fn get_abilities_by_type(&self, kind: AbilityKind) -> Vec<&Ability> {
        self.abilities.iter().filter(|a| a.kind == kind).collect()
    }

    /// Effect payload for a name, `None` when unregistered.
    #[must_use]
    pub fn effect_of(&self, name: &str) -> Option<AbilityEffect> {
        self.get_ability(name).map(|a| a.effect)
    }

    /// Resolve a card's ability list, skipping unknown names.
    pub fn resolve<'a, S: AsRef<str>>(
        &'a self,
        names: &'a [S],
    ) -> impl Iterator<Item = &'a Ability> + 'a {
        names.iter().filter_map(move |n| self.get_ability(n.as_ref()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter()
    }

    /// The game's ability table.
    #[must_use]
    pub fn builtin() -> Self {
        use AbilityEffect as E;
        use AbilityKind as K;
        use AbilityTrigger as T;

        let table = [
            (
                "Gas Efficient",
                K::Passive,
                T::Always,
                E::CostReduction { amount: 1 },
                "Costs 1 less to play.",
                "⛽",
            ),
            (
                "HODL",
                K::Passive,
                T::Always,
                E::Shield { amount: 1 },
                "Prevents 1 damage from each attack.",
                "💎",
            ),
            (
                "Front Run",
                K::Passive,
                T::Always,
                E::Haste,
                "Can attack the turn it is played.",
                "🏃",
            ),
            (
                "Parallel Execution",
                K::Passive,
                T::Always,
                E::DoubleStrike,
                "Deals combat damage twice.",
                "⚡",
            ),
            (
                "Finality",
                K::Passive,
                T::Always,
                E::Shield { amount: 2 },
                "Prevents 2 damage from each attack.",
                "🔒",
            ),
            (
                "Flash Loan",
                K::Active,
                T::Activated,
                E::DamageBoost { amount: 2 },
                "Gain +2 power until end of turn.",
                "💸",
            ),
            (
                "Mempool Snipe",
                K::Active,
                T::Activated,
                E::DealDamage { amount: 3 },
                "Deal 3 damage to a target card.",
                "🎯",
            ),
            (
                "Rug Pull",
                K::Triggered,
                T::OnAttack,
                E::StatSteal { amount: 1 },
                "When attacking, steal 1 power from the defender.",
                "🧶",
            ),
            (
                "MEV Extraction",
                K::Triggered,
                T::OnAttack,
                E::StatSteal { amount: 2 },
                "When attacking, steal 2 power from the defender.",
                "🤖",
            ),
            (
                "Airdrop",
                K::Triggered,
                T::OnPlay,
                E::DrawCards { count: 1 },
                "When played, draw a card.",
                "🪂",
            ),
            (
                "Staking Rewards",
                K::Triggered,
                T::TurnStart,
                E::Heal { amount: 1 },
                "At turn start, heal 1.",
                "🥩",
            ),
            (
                "Exploit",
                K::Triggered,
                T::OnDamaged,
                E::Poison { amount: 1 },
                "When damaged, poison the attacker for 1.",
                "🐛",
            ),
            (
                "Liquidation",
                K::OnDeath,
                T::OnDeath,
                E::DealDamage { amount: 2 },
                "When this dies, deal 2 damage to the attacker.",
                "🔥",
            ),
            (
                "Hard Fork",
                K::OnDeath,
                T::OnDeath,
                E::Summon { power: 1, toughness: 1 },
                "When this dies, summon a 1/1 fork.",
                "🍴",
            ),
            (
                "Token Burn",
                K::OnDeath,
                T::OnDeath,
                E::DrawCards { count: 2 },
                "When this dies, draw 2 cards.",
                "🔥",
            ),
        ];

        let mut registry = Self::new();
        for (name, kind, trigger, effect, description, icon) in table {
            registry.register(
                Ability::new(name, kind, trigger, effect)
                    .with_description(description)
                    .with_icon(icon),
            );
        }
        registry
    }
}
