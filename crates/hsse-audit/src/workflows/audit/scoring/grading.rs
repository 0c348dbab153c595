use super::config::ScoringPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Grade {
    Fail,
    Pass,
    Distinction,
}

impl Grade {
    pub const fn label(self) -> &'static str {
        match self {
            Grade::Fail => "Fail",
            Grade::Pass => "Pass",
            Grade::Distinction => "Distinction",
        }
    }
}

/// Display band paired with each grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorBand {
    Red,
    Amber,
    Green,
}

impl ColorBand {
    pub const fn label(self) -> &'static str {
        match self {
            ColorBand::Red => "red",
            ColorBand::Amber => "amber",
            ColorBand::Green => "green",
        }
    }
}

impl ScoringPolicy {
    /// Map a score to its grade and band. Lower bounds are inclusive.
    pub fn classify(&self, score: f64) -> (Grade, ColorBand) {
        // NaN fails every comparison and lands in FAIL.
        if score >= self.distinction_threshold() {
            (Grade::Distinction, ColorBand::Green)
        } else if score >= self.pass_threshold() {
            (Grade::Pass, ColorBand::Amber)
        } else {
            (Grade::Fail, ColorBand::Red)
        }
    }
}
