//! Core types for drill grading and progression.

use serde::{Deserialize, Serialize};

/// Minimum similarity score for accepting an utterance.
///
/// Always within `[0, 1]`; out-of-range values are clamped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Tolerance(f64);

impl Tolerance {
    pub const DEFAULT: f64 = 0.65;

    /// Create a tolerance, clamping into `[0, 1]`. NaN falls back to the default.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::DEFAULT);
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether a score meets this tolerance.
    pub fn accepts(self, score: f64) -> bool {
        score >= self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<f64> for Tolerance {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Tolerance> for f64 {
    fn from(tolerance: Tolerance) -> Self {
        tolerance.0
    }
}

/// One expected word and whether it was heard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMark {
    pub word: String,
    pub matched: bool,
}

impl WordMark {
    pub fn new(word: impl Into<String>, matched: bool) -> Self {
        Self {
            word: word.into(),
            matched,
        }
    }
}

/// Result of grading an utterance against an expected sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Similarity score between 0.0 and 1.0.
    pub score: f64,
    /// Whether the score met the tolerance.
    pub passed: bool,
    /// Tolerance the score was compared against.
    pub tolerance: Tolerance,
    /// Per-word annotation of the expected sentence.
    pub diff: Vec<WordMark>,
    /// Normalized expected text (for display).
    pub expected_normalized: String,
    /// Normalized heard text (for display).
    pub heard_normalized: String,
}

/// Progressively longer prefixes of one sentence in two languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSet {
    /// Part counts of each step, strictly increasing, last equals the part count.
    pub cuts: Vec<usize>,
    pub steps_target: Vec<String>,
    pub steps_reference: Vec<String>,
    pub full_target: String,
    pub full_reference: String,
}

impl SegmentSet {
    /// Number of steps.
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }
}

/// Learner counters carried across exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Unit number, starting at 1.
    pub level: u32,
    /// Points inside the current unit (0..=99).
    pub points: u32,
    /// Sentences completed in a row.
    pub streak: u32,
}

impl Progress {
    /// Clamp counters restored from elsewhere into their valid ranges.
    pub fn sanitized(self) -> Self {
        Self {
            level: self.level.max(1),
            points: self.points.min(crate::drill::POINTS_PER_LEVEL - 1),
            streak: self.streak,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            level: 1,
            points: 0,
            streak: 0,
        }
    }
}
