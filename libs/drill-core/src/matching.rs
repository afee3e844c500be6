//! Answer matching for spoken drills.
//!
//! Scoring and word feedback use two different alignments. The score is the
//! optimal longest common subsequence; the per-word diff is a greedy
//! left-to-right scan that commits to the first match it finds, so the diff
//! can mark words as missing that the scoring alignment paired. Expected
//! "a b c" against heard "b c a" scores two matches ("b c"), while the diff
//! only marks "a".

use crate::normalize::{normalize, tokenize};
use crate::types::{Evaluation, Tolerance, WordMark};

/// Grade an utterance against the expected sentence.
pub fn evaluate(expected: &str, heard: &str, tolerance: Tolerance) -> Evaluation {
    let expected_tokens = tokenize(expected);
    let heard_tokens = tokenize(heard);

    let score = token_similarity(&expected_tokens, &heard_tokens);

    Evaluation {
        score,
        passed: tolerance.accepts(score),
        tolerance,
        diff: greedy_marks(&expected_tokens, &heard_tokens),
        expected_normalized: normalize(expected),
        heard_normalized: normalize(heard),
    }
}

/// Similarity score (0.0 to 1.0) between expected and heard text.
pub fn score(expected: &str, heard: &str) -> f64 {
    token_similarity(&tokenize(expected), &tokenize(heard))
}

/// Mark each expected word as heard or missing.
pub fn diff(expected: &str, heard: &str) -> Vec<WordMark> {
    greedy_marks(&tokenize(expected), &tokenize(heard))
}

/// Dice-style ratio over the LCS: `2L / (|a| + |b|)`.
fn token_similarity(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let l = lcs_len(a, b);
    (2 * l) as f64 / (a.len() + b.len()) as f64
}

/// Length of the longest common subsequence of two token sequences.
pub fn lcs_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Keep the shorter sequence as the row.
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let m = inner.len();
    if outer.is_empty() || m == 0 {
        return 0;
    }

    let mut prev = vec![0usize; m + 1];
    let mut curr = vec![0usize; m + 1];

    for x in outer {
        curr[0] = 0;
        for j in 1..=m {
            curr[j] = if *x == inner[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

fn greedy_marks(expected: &[String], heard: &[String]) -> Vec<WordMark> {
    let mut cursor = 0;

    expected
        .iter()
        .map(|word| {
            match heard[cursor..].iter().position(|h| h == word) {
                Some(offset) => {
                    cursor += offset + 1;
                    WordMark::new(word.as_str(), true)
                }
                None => WordMark::new(word.as_str(), false),
            }
        })
        .collect()
}
