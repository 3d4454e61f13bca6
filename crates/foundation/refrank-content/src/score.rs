//! Score colour buckets

use serde::Serialize;

/// Colour bucket for a 0-100 quality score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBucket {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBucket {
    /// Lower bounds are inclusive. NaN falls through to `Poor`.
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBucket::Excellent
        } else if score >= 60.0 {
            ScoreBucket::Good
        } else if score >= 40.0 {
            ScoreBucket::Fair
        } else {
            ScoreBucket::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBucket::Excellent => "excellent",
            ScoreBucket::Good => "good",
            ScoreBucket::Fair => "fair",
            ScoreBucket::Poor => "poor",
        }
    }

    /// Stylesheet class for the score badge
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreBucket::Excellent => "score-excellent",
            ScoreBucket::Good => "score-good",
            ScoreBucket::Fair => "score-fair",
            ScoreBucket::Poor => "score-poor",
        }
    }
}
