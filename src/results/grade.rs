//! Grade tiers
//!
//! A grade label is free-form text. Its tier is picked by substring
//! containment in the order `A+`, `A`, `B`, `C`, `D`; the first hit wins and
//! anything else is failing. Each tier has a fixed color and emoji.

use serde::Serialize;
use std::fmt;

/// Display tier derived from a grade label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeTier {
    APlus,
    A,
    B,
    C,
    D,
    Fail,
}

/// Substrings checked against the grade, highest priority first
const PRIORITY: [(&str, GradeTier); 5] = [
    ("A+", GradeTier::APlus),
    ("A", GradeTier::A),
    ("B", GradeTier::B),
    ("C", GradeTier::C),
    ("D", GradeTier::D),
];

impl GradeTier {
    /// Resolve the tier for a grade label
    pub fn resolve(grade: &str) -> Self {
        PRIORITY
            .iter()
            .find(|(needle, _)| grade.contains(needle))
            .map(|(_, tier)| *tier)
            .unwrap_or(GradeTier::Fail)
    }

    /// All tiers, best first
    pub fn all() -> &'static [GradeTier] {
        &[
            GradeTier::APlus,
            GradeTier::A,
            GradeTier::B,
            GradeTier::C,
            GradeTier::D,
            GradeTier::Fail,
        ]
    }

    /// Badge and score ring color
    pub fn color(&self) -> &'static str {
        match self {
            GradeTier::APlus => "#1e7e34",
            GradeTier::A => "#28a745",
            GradeTier::B => "#17a2b8",
            GradeTier::C => "#ffc107",
            GradeTier::D => "#fd7e14",
            GradeTier::Fail => "#dc3545",
        }
    }

    /// Emoji shown next to the grade
    pub fn emoji(&self) -> &'static str {
        match self {
            GradeTier::APlus => "🏆",
            GradeTier::A => "🌟",
            GradeTier::B => "👍",
            GradeTier::C => "😊",
            GradeTier::D => "🤔",
            GradeTier::Fail => "😢",
        }
    }

    pub fn is_failing(&self) -> bool {
        matches!(self, GradeTier::Fail)
    }
}

impl fmt::Display for GradeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GradeTier::APlus => "A+",
            GradeTier::A => "A",
            GradeTier::B => "B",
            GradeTier::C => "C",
            GradeTier::D => "D",
            GradeTier::Fail => "fail",
        };
        f.pad(label)
    }
}

/// Whether a grade earns the celebration
///
/// True iff the label contains `A`, which covers both `A` and `A+`.
pub fn celebrates(grade: &str) -> bool {
    grade.contains('A')
}
