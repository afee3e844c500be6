//! Core grading library for spoken sentence drills.
//!
//! Provides:
//! - Text normalization (case folding, contraction expansion, punctuation stripping)
//! - LCS similarity scoring and per-word feedback
//! - Sentence segmentation into progressively longer steps
//! - Drill progression (points, streak, unit level)

pub mod drill;
pub mod error;
pub mod matching;
pub mod normalize;
pub mod segment;
pub mod types;

pub use drill::{CheckOutcome, Drill, POINTS_PER_LEVEL};
pub use error::{Result, SegmentError};
pub use matching::{diff, evaluate, lcs_len, score};
pub use normalize::{normalize, tokenize, CONTRACTIONS};
pub use segment::{build_segments, cut_points, join_parts, MAX_SEGMENTS};
pub use types::{Evaluation, Progress, SegmentSet, Tolerance, WordMark};
