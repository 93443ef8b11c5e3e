//! Type advantage between card categories.
//!
//! Creature beats spell, spell beats artifact, artifact beats creature.
//! The winner of a pairing deals 1.5x damage, the loser 0.75x. Terrain
//! is neutral to everything, as is any category against itself.

use crate::cards::CardCategory;

pub const ADVANTAGE_MULTIPLIER: f64 = 1.5;
pub const DISADVANTAGE_MULTIPLIER: f64 = 0.75;
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

pub const SUPER_EFFECTIVE: &str = "SUPER EFFECTIVE";
pub const NOT_VERY_EFFECTIVE: &str = "NOT VERY EFFECTIVE";

/// The category `category` dominates, if any.
#[must_use]
pub fn beats(category: CardCategory) -> Option<CardCategory> {
    match category {
        CardCategory::Creature => Some(CardCategory::Spell),
        CardCategory::Spell => Some(CardCategory::Artifact),
        CardCategory::Artifact => Some(CardCategory::Creature),
        CardCategory::Terrain => None,
    }
}

/// Damage multiplier between two categories.
#[must_use]
pub fn category_multiplier(attacker: CardCategory, defender: CardCategory) -> f64 {
    if beats(attacker) == Some(defender) {
        ADVANTAGE_MULTIPLIER
    } else if beats(defender) == Some(attacker) {
        DISADVANTAGE_MULTIPLIER
    } else {
        NEUTRAL_MULTIPLIER
    }
}

/// Damage multiplier between two free-text type lines.
#[must_use]
pub fn get_type_multiplier(attacker_type: &str, defender_type: &str) -> f64 {
    category_multiplier(
        CardCategory::from_type_line(attacker_type),
        CardCategory::from_type_line(defender_type),
    )
}

/// Label for a matchup, derived from its multiplier.
#[must_use]
pub fn get_type_advantage_label(attacker_type: &str, defender_type: &str) -> Option<&'static str> {
    let multiplier = get_type_multiplier(attacker_type, defender_type);
    if multiplier > NEUTRAL_MULTIPLIER {
        Some(SUPER_EFFECTIVE)
    } else if multiplier < NEUTRAL_MULTIPLIER {
        Some(NOT_VERY_EFFECTIVE)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CardCategory; 4] = [
        CardCategory::Creature,
        CardCategory::Spell,
        CardCategory::Artifact,
        CardCategory::Terrain,
    ];

    #[test]
    fn test_cycle() {
        assert_eq!(get_type_multiplier("creature", "spell"), 1.5);
        assert_eq!(get_type_multiplier("spell", "artifact"), 1.5);
        assert_eq!(get_type_multiplier("artifact", "creature"), 1.5);

        assert_eq!(get_type_multiplier("spell", "creature"), 0.75);
        assert_eq!(get_type_multiplier("artifact", "spell"), 0.75);
        assert_eq!(get_type_multiplier("creature", "artifact"), 0.75);
    }

    #[test]
    fn test_terrain_and_mirror_are_neutral() {
        for c in ALL {
            assert_eq!(category_multiplier(c, CardCategory::Terrain), 1.0);
            assert_eq!(category_multiplier(CardCategory::Terrain, c), 1.0);
            assert_eq!(category_multiplier(c, c), 1.0);
        }
    }

    #[test]
    fn test_anti_symmetric() {
        for a in ALL {
            for d in ALL {
                let forward = category_multiplier(a, d);
                let back = category_multiplier(d, a);
                match (forward, back) {
                    (f, b) if f == 1.0 => assert_eq!(b, 1.0),
                    (f, b) if f == 1.5 => assert_eq!(b, 0.75),
                    (f, b) if f == 0.75 => assert_eq!(b, 1.5),
                    other => panic!("unexpected pair {:?} for {:?} vs {:?}", other, a, d),
                }
            }
        }
    }

    #[test]
    fn test_free_text_types() {
        assert_eq!(get_type_multiplier("Creature — Dragon/Kaiju", "Instant Spell"), 1.5);
        assert_eq!(get_type_multiplier("Oracle Node", "Spell"), 1.5, "unknown text is a creature");
        assert_eq!(get_type_multiplier("Creature", "Terrain — Testnet"), 1.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(get_type_advantage_label("creature", "spell"), Some("SUPER EFFECTIVE"));
        assert_eq!(get_type_advantage_label("spell", "creature"), Some("NOT VERY EFFECTIVE"));
        assert_eq!(get_type_advantage_label("creature", "creature"), None);
        assert_eq!(get_type_advantage_label("terrain", "artifact"), None);
    }
}
