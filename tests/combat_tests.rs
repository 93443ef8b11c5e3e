//! Type advantage and ability lookup tests.

use pack_forge::abilities::{
    get_type_advantage_label, get_type_multiplier, AbilityEffect, AbilityKind, AbilityRegistry,
};
use pack_forge::cards::{CardCatalog, CardFace};

#[test]
fn test_advantage_cycle() {
    assert_eq!(get_type_multiplier("Creature — Dragon", "Spell"), 1.5);
    assert_eq!(get_type_multiplier("Spell — Hack", "Artifact — Oracle"), 1.5);
    assert_eq!(get_type_multiplier("Artifact", "Creature — Golem"), 1.5);

    assert_eq!(get_type_multiplier("Spell", "Creature — Dragon"), 0.75);
    assert_eq!(get_type_multiplier("Artifact — Oracle", "Spell — Hack"), 0.75);
    assert_eq!(get_type_multiplier("Creature — Golem", "Artifact"), 0.75);
}

#[test]
fn test_neutral_matchups() {
    assert_eq!(get_type_multiplier("Creature", "Creature — Whale"), 1.0);
    assert_eq!(get_type_multiplier("Terrain — Mainnet", "Creature"), 1.0);
    assert_eq!(get_type_multiplier("Spell", "Terrain"), 1.0);
    assert_eq!(get_type_advantage_label("Terrain", "Artifact"), None);
}

#[test]
fn test_labels() {
    assert_eq!(get_type_advantage_label("creature", "SPELL"), Some("SUPER EFFECTIVE"));
    assert_eq!(get_type_advantage_label("Spell", "Creature"), Some("NOT VERY EFFECTIVE"));
}

/// "Spell" wins over "Artifact" when a type line names both.
#[test]
fn test_category_precedence() {
    assert_eq!(get_type_multiplier("Artifact Spell", "Artifact"), 1.5);
}

#[test]
fn test_every_catalog_ability_resolves() {
    let registry = AbilityRegistry::builtin();
    for card in CardCatalog::builtin().iter() {
        let resolved: Vec<_> = registry.resolve(card.abilities.as_slice()).collect();
        assert_eq!(resolved.len(), card.abilities.len(), "{}", card.name());
    }
}

#[test]
fn test_unknown_ability() {
    let registry = AbilityRegistry::builtin();
    assert!(registry.get_ability("Infinite Mint").is_none());
    assert!(registry.effect_of("Infinite Mint").is_none());
}

#[test]
fn test_lookup_by_kind() {
    let registry = AbilityRegistry::builtin();
    let on_death: Vec<_> = registry
        .get_abilities_by_type(AbilityKind::OnDeath)
        .into_iter()
        .map(|a| a.name.as_str())
        .collect();

    assert_eq!(on_death, vec!["Liquidation", "Hard Fork", "Token Burn"]);
    assert_eq!(
        registry.effect_of("Hard Fork"),
        Some(AbilityEffect::Summon { power: 1, toughness: 1 })
    );
}
