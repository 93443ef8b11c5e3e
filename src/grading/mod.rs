//! Grading: per-instance quality rolls.
//!
//! Grades are orthogonal to rarity. Only grade 10 changes stats.

pub mod grade;

pub use grade::{grade_info, roll_grade, Grade, GradeInfo, GRADES};
