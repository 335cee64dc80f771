//! Score interpretation
//!
//! Maps a numeric balance score to a named tier. The bands are fixed and
//! must stay stable across releases so that stored interpretations remain
//! meaningful.

use serde::Serialize;

/// Qualitative interpretation of a balance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub rating: &'static str,
    pub description: &'static str,
}

/// A balance score with its interpretation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub interpretation: Interpretation,
}

impl ScoreResult {
    pub fn new(score: u8) -> Self {
        Self {
            score,
            interpretation: interpret(score),
        }
    }
}

/// Interpret a 0-100 balance score
///
/// The five bands partition 0..=100 with no gaps or overlaps.
pub fn interpret(score: u8) -> Interpretation {
    match score {
        85..=u8::MAX => Interpretation {
            rating: "Excellent",
            description: "Macro composition closely matches the target balance",
        },
        70..=84 => Interpretation {
            rating: "Good",
            description: "Minor deviation from the target balance",
        },
        50..=69 => Interpretation {
            rating: "Fair",
            description: "Moderate deviation from the target balance; improvement suggested",
        },
        30..=49 => Interpretation {
            rating: "Poor",
            description: "Substantial imbalance against the target",
        },
        0..=29 => Interpretation {
            rating: "Very Poor",
            description: "Macro composition strongly diverges from the target",
        },
    }
}
