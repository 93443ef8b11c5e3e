//! Deck validation integration tests.
//!
//! Decks are assembled from the shipped catalog, both as definitions and
//! as minted pack cards.

use pack_forge::cards::{CardCatalog, CardDefinition, PackCard};
use pack_forge::core::{DeckRules, GameRng};
use pack_forge::deck::validate_deck;
use pack_forge::packs::{PackGenerator, PackType};

fn deck(catalog: &CardCatalog, counts: &[(&str, usize)]) -> Vec<CardDefinition> {
    counts
        .iter()
        .flat_map(|(name, copies)| {
            std::iter::repeat(catalog.get(name).unwrap().clone()).take(*copies)
        })
        .collect()
}

#[test]
fn test_legal_deck() {
    let catalog = CardCatalog::builtin();
    let cards = deck(
        &catalog,
        &[
            ("Gas Gremlin", 3),
            ("Node Runner", 3),
            ("Paper Hands", 3),
            ("Shill Bot", 3),
            ("Pump", 3),
            ("Diamond Hand Golem", 3),
            ("Rug Dragon", 2),
            ("Satoshi's Ghost", 1),
            ("Whale Leviathan", 1),
        ],
    );
    assert_eq!(cards.len(), 22);

    let result = validate_deck(&cards, &DeckRules::default());
    assert!(result.valid, "{:?}", result.errors);
}

#[test]
fn test_four_copies_in_sized_deck() {
    let catalog = CardCatalog::builtin();
    let cards = deck(
        &catalog,
        &[
            ("Gas Gremlin", 4),
            ("Node Runner", 3),
            ("Paper Hands", 3),
            ("Shill Bot", 3),
            ("Pump", 3),
            ("Testnet", 3),
            ("Yield Farmer", 3),
            ("Cold Wallet", 3),
        ],
    );
    assert_eq!(cards.len(), 25);

    let result = validate_deck(&cards, &DeckRules::default());
    assert!(!result.valid);
    assert_eq!(result.errors, vec!["Too many copies of Gas Gremlin (4, max copies 3)"]);
}

#[test]
fn test_no_creatures() {
    let catalog = CardCatalog::builtin();
    let cards = deck(
        &catalog,
        &[
            ("Pump", 3),
            ("Testnet", 3),
            ("Flash Crash", 3),
            ("Cold Wallet", 3),
            ("Smart Contract Exploit", 3),
            ("Hardware Oracle", 3),
            ("Optimistic Execution", 2),
        ],
    );
    assert_eq!(cards.len(), 20);

    let result = validate_deck(&cards, &DeckRules::default());
    assert_eq!(result.errors, vec!["Deck must contain at least one creature"]);
}

#[test]
fn test_every_violation_reported_in_order() {
    let catalog = CardCatalog::builtin();
    let cards = deck(
        &catalog,
        &[("Satoshi's Ghost", 4), ("Whale Leviathan", 1), ("Pump", 5)],
    );

    let result = validate_deck(&cards, &DeckRules::default());
    assert_eq!(
        result.errors,
        vec![
            "Deck must have at least 20 cards (has 10)",
            "Too many copies of Satoshi's Ghost (4, max copies 3)",
            "Too many copies of Pump (5, max copies 3)",
            "Too many legendary cards (5, max 3)",
        ]
    );
}

#[test]
fn test_mythic_not_counted_as_legendary() {
    let catalog = CardCatalog::builtin();
    let cards = deck(
        &catalog,
        &[
            ("Genesis Block", 3),
            ("Satoshi's Ghost", 3),
            ("Gas Gremlin", 3),
            ("Node Runner", 3),
            ("Paper Hands", 3),
            ("Shill Bot", 3),
            ("Pump", 2),
        ],
    );

    let result = validate_deck(&cards, &DeckRules::default());
    assert!(result.valid, "{:?}", result.errors);
}

#[test]
fn test_custom_rules() {
    let catalog = CardCatalog::builtin();
    let cards = deck(&catalog, &[("Gas Gremlin", 4), ("Node Runner", 4)]);
    let rules = DeckRules::default().with_size(5, 10).with_max_copies(4);

    assert!(validate_deck(&cards, &rules).valid);
}

#[test]
fn test_opened_packs_form_checkable_deck() {
    let catalog = CardCatalog::builtin();
    let generator = PackGenerator::new(&catalog);
    let mut rng = GameRng::new(2024);

    let cards: Vec<PackCard> = (0..5)
        .flat_map(|_| generator.open(PackType::Standard, &mut rng).unwrap())
        .collect();
    assert_eq!(cards.len(), 25);

    let result = validate_deck(&cards, &DeckRules::default().with_max_copies(25));
    assert!(!result.errors.iter().any(|e| e.starts_with("Deck must have")));
}
