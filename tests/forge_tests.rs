//! Forge integration tests.
//!
//! These tests drive the forge through the collection ledger, checking:
//! - Rejected requests leave the collection untouched
//! - Every outcome consumes the recipe's input count and mints at most one
//! - Upgraded cards follow the recipe table
//! - Recipe tables loaded from config are validated first

use pack_forge::cards::{CardCatalog, PackCard, Rarity};
use pack_forge::collection::{Collection, InstanceId};
use pack_forge::core::{
    ConfigError, EconomyConfig, FixedRandom, ForgeError, GameRng, SequenceRandom,
};
use pack_forge::forge::{forge_cards, ForgeEngine, ForgeOutcome, ForgeRecipe, ForgeRecipes};
use pack_forge::grading::grade_info;
use proptest::prelude::*;

fn minted(name: &str, grade: u8) -> PackCard {
    let catalog = CardCatalog::builtin();
    let def = catalog.get(name).unwrap();
    PackCard::mint(def, grade_info(grade).unwrap())
}

fn collection_of(name: &str, copies: usize) -> (Collection, Vec<InstanceId>) {
    let mut collection = Collection::new();
    let ids = collection.add_pack(vec![minted(name, 5); copies]);
    (collection, ids)
}

#[test]
fn test_rejection_leaves_collection_unchanged() {
    let mut collection = Collection::new();
    let ids = collection.add_pack(vec![
        minted("Gas Gremlin", 5),
        minted("Gas Gremlin", 5),
        minted("Node Runner", 5),
    ]);
    let before = collection.snapshot_bytes().unwrap();

    let receipt =
        collection.forge(&ids, &ForgeEngine::new(), &mut FixedRandom(0.0)).unwrap();

    assert_eq!(receipt.result.rejection(), Some(&ForgeError::CharacterMismatch));
    assert!(receipt.burned.is_empty());
    assert!(receipt.minted.is_none());
    assert_eq!(collection.snapshot_bytes().unwrap(), before);
}

#[test]
fn test_rejected_request_is_idempotent() {
    let cards = vec![minted("Satoshi's Ghost", 7); 3];
    let mut rng = GameRng::new(3);

    let first = forge_cards(&cards, &mut rng);
    let second = forge_cards(&cards, &mut rng);

    assert_eq!(first, second);
    assert_eq!(first.message(), "Cannot forge beyond Legendary");
}

#[test]
fn test_mythic_cannot_be_forged() {
    let cards = vec![minted("Genesis Block", 5); 3];
    let result = forge_cards(&cards, &mut FixedRandom(0.0));
    assert_eq!(result.rejection(), Some(&ForgeError::BeyondLegendary));
}

#[test]
fn test_common_forge_always_upgrades() {
    let (mut collection, ids) = collection_of("Gas Gremlin", 3);
    let mut rng = GameRng::new(99);

    let receipt = collection.forge(&ids, &ForgeEngine::new(), &mut rng).unwrap();

    assert_eq!(receipt.result.outcome, ForgeOutcome::Upgraded);
    assert_eq!(receipt.burned, ids);
    assert_eq!(collection.len(), 1);

    let out = collection.get(receipt.minted.unwrap()).unwrap();
    assert_eq!(out.card.name, "Gas Gremlin");
    assert_eq!(out.card.rarity, Rarity::Uncommon);
    // 1 * 1.15 rounds to 1
    assert_eq!(out.power(), Some(1));
}

#[test]
fn test_uncommon_burns_on_failed_roll() {
    let (mut collection, ids) = collection_of("Diamond Hand Golem", 4);

    let receipt = collection
        .forge(&ids[..3], &ForgeEngine::new(), &mut FixedRandom(0.9))
        .unwrap();

    assert_eq!(receipt.result.outcome, ForgeOutcome::Burned);
    assert_eq!(receipt.burned.len(), 3);
    assert!(receipt.minted.is_none());
    assert_eq!(collection.len(), 1);
    assert!(collection.contains(ids[3]));
}

#[test]
fn test_chain_forge_to_legendary() {
    let (mut collection, _) = collection_of("Rug Dragon", 3);
    let engine = ForgeEngine::new();

    let ids = collection.copies_of("Rug Dragon", Rarity::Rare);
    let receipt = collection.forge(&ids, &engine, &mut FixedRandom(0.0)).unwrap();
    let legendary = collection.get(receipt.minted.unwrap()).unwrap();

    assert_eq!(legendary.card.rarity, Rarity::Legendary);
    // 4 * 1.5
    assert_eq!(legendary.power(), Some(6));
    assert_eq!(legendary.abilities().len(), 3);

    let again = collection
        .forge(&[receipt.minted.unwrap()], &engine, &mut FixedRandom(0.0))
        .unwrap();
    assert_eq!(
        again.result.rejection(),
        Some(&ForgeError::NotEnoughCards { required: 3, supplied: 1 })
    );
}

#[test]
fn test_custom_recipe_table() {
    let recipes = ForgeRecipes::default().with_recipe(
        ForgeRecipe::new(Rarity::Common, Rarity::Uncommon, 0.5)
            .burn_on_fail(true)
            .with_scaling(2.0, 1),
    );
    let engine = ForgeEngine::with_recipes(recipes);
    let cards = vec![minted("Node Runner", 5); 3];

    let mut rng = SequenceRandom::new(vec![0.7, 0.2]);
    let failed = engine.forge(&cards, &mut rng);
    assert_eq!(failed.outcome, ForgeOutcome::Burned);

    let upgraded = engine.forge(&cards, &mut rng);
    let out = upgraded.output.unwrap();
    assert_eq!(out.power(), Some(4));
    assert_eq!(out.toughness(), Some(2));
}

#[test]
fn test_config_recipe_input_count_drives_ledger() {
    let json = r#"{ "forge": [
        { "input": "uncommon", "output": "rare", "input_count": 5, "success_rate": 1.0,
          "burn_on_fail": true, "stat_multiplier": 1.3, "ability_slots": 2 }
    ] }"#;
    let config = EconomyConfig::from_json(json).unwrap();
    let engine = ForgeEngine::with_recipes(config.forge);
    let (mut collection, ids) = collection_of("Diamond Hand Golem", 6);

    let short = collection.forge(&ids[..3], &engine, &mut FixedRandom(0.0)).unwrap();
    assert_eq!(
        short.result.rejection(),
        Some(&ForgeError::NotEnoughCards { required: 5, supplied: 3 })
    );
    assert_eq!(collection.len(), 6);

    let receipt = collection.forge(&ids, &engine, &mut FixedRandom(0.0)).unwrap();
    assert_eq!(receipt.burned, ids[..5]);
    assert!(collection.contains(ids[5]));
    assert_eq!(collection.len(), 2);
}

#[test]
fn test_config_rejects_unwinnable_recipe() {
    let json = r#"{ "forge": [
        { "input": "rare", "output": "legendary", "input_count": 3, "success_rate": 0.0,
          "burn_on_fail": true, "stat_multiplier": 1.5, "ability_slots": 3 }
    ] }"#;
    assert!(matches!(
        EconomyConfig::from_json(json),
        Err(ConfigError::RecipeRate { input: Rarity::Rare, .. })
    ));
}

#[test]
fn test_unknown_instance_is_an_error() {
    let (mut collection, ids) = collection_of("Gas Gremlin", 2);
    let missing = InstanceId(999);

    let err = collection
        .forge(&[ids[0], ids[1], missing], &ForgeEngine::new(), &mut FixedRandom(0.0))
        .unwrap_err();

    assert!(err.to_string().contains("999"));
    assert_eq!(collection.len(), 2);
}

proptest! {
    /// Forging never grows the collection, and shrinks it whenever
    /// anything is consumed.
    #[test]
    fn prop_forge_conserves_supply(
        seed in any::<u64>(),
        start in 3usize..30,
        attempts in 1usize..20,
    ) {
        let engine = ForgeEngine::new();
        let mut rng = GameRng::new(seed);
        let mut collection = Collection::new();
        collection.add_pack(vec![minted("Rug Dragon", 5); start]);
        collection.add_pack(vec![minted("Diamond Hand Golem", 5); start]);

        for _ in 0..attempts {
            let before = collection.len();
            let mut ids = collection.copies_of("Rug Dragon", Rarity::Rare);
            if ids.len() < 3 {
                ids = collection.copies_of("Diamond Hand Golem", Rarity::Uncommon);
            }
            ids.truncate(3);

            let receipt = collection.forge(&ids, &engine, &mut rng).unwrap();
            let after = collection.len();

            prop_assert!(after <= before);
            match receipt.result.outcome {
                ForgeOutcome::Upgraded => prop_assert_eq!(after, before - 2),
                ForgeOutcome::Burned => prop_assert_eq!(after, before - 3),
                ForgeOutcome::Returned | ForgeOutcome::Rejected(_) => {
                    prop_assert_eq!(after, before)
                }
            }
        }
    }
}
