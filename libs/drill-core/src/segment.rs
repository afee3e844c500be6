//! Sentence segmentation for progressive drills.
//!
//! A sentence arrives as parallel "parts" in the target and reference
//! languages, e.g. `["I", "work", "on this project", "today", "."]`. The
//! learner first says a short prefix and each accepted attempt reveals a
//! longer one, up to the full sentence.

use crate::error::{Result, SegmentError};
use crate::types::SegmentSet;
use regex::Regex;
use std::sync::LazyLock;

/// Upper bound on the number of steps per sentence.
pub const MAX_SEGMENTS: usize = 10;

/// Parts shown in the first step (subject plus verb or auxiliary).
pub const START_PARTS: usize = 2;

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.?!])").expect("valid punctuation pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Build the step prefixes of a sentence in both languages.
///
/// Both part lists must have the same length.
pub fn build_segments<S: AsRef<str>>(
    parts_target: &[S],
    parts_reference: &[S],
) -> Result<SegmentSet> {
    if parts_target.len() != parts_reference.len() {
        return Err(SegmentError::MismatchedParts {
            target: parts_target.len(),
            reference: parts_reference.len(),
        });
    }

    let cuts = cut_points(parts_target.len());

    Ok(SegmentSet {
        steps_target: cuts.iter().map(|&b| join_parts(&parts_target[..b])).collect(),
        steps_reference: cuts.iter().map(|&b| join_parts(&parts_reference[..b])).collect(),
        full_target: join_parts(parts_target),
        full_reference: join_parts(parts_reference),
        cuts,
    })
}

/// Part counts for each step of an `n`-part sentence.
///
/// Strictly increasing and always ending at `n`.
pub fn cut_points(n: usize) -> Vec<usize> {
    let start = START_PARTS.min(n);

    if n <= start {
        return vec![n];
    }
    if n <= MAX_SEGMENTS {
        return (start..=n).collect();
    }

    let remaining = n - start;
    let steps_left = MAX_SEGMENTS - 1;

    let mut cuts = Vec::with_capacity(MAX_SEGMENTS);
    cuts.push(start);
    for k in 1..=steps_left {
        let b = start + round_div(remaining * k, steps_left);
        if cuts.last().is_some_and(|&last| b <= last) {
            continue;
        }
        cuts.push(b);
    }
    if cuts.last() != Some(&n) {
        cuts.push(n);
    }

    cuts
}

/// `num / den` rounded to nearest, halves rounding up.
fn round_div(num: usize, den: usize) -> usize {
    (2 * num + den) / (2 * den)
}

/// Join parts into display text, keeping punctuation attached to the
/// preceding word.
pub fn join_parts<S: AsRef<str>>(parts: &[S]) -> String {
    let joined = parts.iter().map(|p| p.as_ref()).collect::<Vec<&str>>().join(" ");
    let attached = SPACE_BEFORE_PUNCT.replace_all(&joined, "$1");
    WHITESPACE.replace_all(&attached, " ").trim().to_string()
}
