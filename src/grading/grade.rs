//! Grade table and grade rolls.
//!
//! Every minted card gets a grade from 5 to 10, rolled independently of
//! its rarity. One uniform draw is compared against the cumulative
//! thresholds below in table order; the first threshold the draw is
//! strictly less than wins.
//!
//! | grade | label | odds | cumulative | bonus |
//! |---|---|---|---|---|
//! | 10 | GEM MINT | 1% | 0.01 | +1/+1 |
//! | 9 | MINT | 5% | 0.06 | |
//! | 8 | NEAR MINT | 15% | 0.21 | |
//! | 7 | EXCELLENT | 30% | 0.51 | |
//! | 6 | VERY GOOD | 25% | 0.76 | |
//! | 5 | GOOD | 24% | 1.00 | |

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// One row of the grade table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradeInfo {
    pub grade: u8,
    pub label: &'static str,
    /// Cumulative threshold in `[0, 1]`.
    pub chance: f64,
    /// Added to both power and toughness.
    pub stat_bonus: u32,
}

/// The grade table, best grade first.
pub const GRADES: [GradeInfo; 6] = [
    GradeInfo { grade: 10, label: "GEM MINT", chance: 0.01, stat_bonus: 1 },
    GradeInfo { grade: 9, label: "MINT", chance: 0.06, stat_bonus: 0 },
    GradeInfo { grade: 8, label: "NEAR MINT", chance: 0.21, stat_bonus: 0 },
    GradeInfo { grade: 7, label: "EXCELLENT", chance: 0.51, stat_bonus: 0 },
    GradeInfo { grade: 6, label: "VERY GOOD", chance: 0.76, stat_bonus: 0 },
    GradeInfo { grade: 5, label: "GOOD", chance: 1.0, stat_bonus: 0 },
];

/// Roll a grade.
///
/// Never fails: grade 5 sits at threshold 1.0 and catches every draw.
pub fn roll_grade<R: RandomSource + ?Sized>(rng: &mut R) -> GradeInfo {
    let r = rng.next_f64();
    let info = GRADES
        .iter()
        .find(|g| r < g.chance)
        .copied()
        .unwrap_or(GRADES[GRADES.len() - 1]);

    if info.grade == 10 {
        tracing::debug!(grade = info.grade, label = info.label, "gem mint pull");
    }
    info
}

/// Look up a grade row by number.
#[must_use]
pub fn grade_info(grade: u8) -> Option<GradeInfo> {
    GRADES.iter().find(|g| g.grade == grade).copied()
}

/// A grade stored on a minted card.
///
/// Serialized as the bare grade number and validated on the way in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Grade(u8);

impl Grade {
    /// Wrap a grade number, if it is in the table.
    #[must_use]
    pub fn new(grade: u8) -> Option<Self> {
        grade_info(grade).map(|g| Self(g.grade))
    }

    /// Raw grade number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Full table row for this grade.
    #[must_use]
    pub fn info(self) -> GradeInfo {
        grade_info(self.0).unwrap_or(GRADES[GRADES.len() - 1])
    }

    #[must_use]
    pub fn stat_bonus(self) -> u32 {
        self.info().stat_bonus
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.info().label
    }
}

impl From<GradeInfo> for Grade {
    fn from(info: GradeInfo) -> Self {
        Self(info.grade)
    }
}

impl TryFrom<u8> for Grade {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Grade::new(value).ok_or_else(|| format!("invalid grade {}", value))
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}
