//! Drill progression through the steps of one sentence.
//!
//! A drill walks a [`SegmentSet`] from its shortest prefix to the full
//! sentence. Accepted checks earn points and advance the step; every
//! [`POINTS_PER_LEVEL`] points close a unit and bump the level.

use crate::matching::evaluate;
use crate::types::{Evaluation, Progress, SegmentSet, Tolerance};
use serde::{Deserialize, Serialize};

/// Points needed to finish a unit.
pub const POINTS_PER_LEVEL: u32 = 100;

/// What happened on a single check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub evaluation: Evaluation,
    /// Step that was checked.
    pub step: usize,
    /// The unit was finished by this check.
    pub level_up: bool,
    /// The full sentence was finished by this check.
    pub completed: bool,
}

/// One learner working through one sentence.
#[derive(Debug, Clone, Serialize)]
pub struct Drill {
    segments: SegmentSet,
    step: usize,
    finished: bool,
    progress: Progress,
}

impl Drill {
    pub fn new(segments: SegmentSet) -> Self {
        Self::with_progress(segments, Progress::default())
    }

    /// Start a sentence with counters carried over from earlier exercises.
    pub fn with_progress(segments: SegmentSet, progress: Progress) -> Self {
        Self {
            segments,
            step: 0,
            finished: false,
            progress: progress.sanitized(),
        }
    }

    /// Replace the sentence, keeping the counters.
    pub fn next_exercise(&mut self, segments: SegmentSet) {
        self.segments = segments;
        self.step = 0;
        self.finished = false;
    }

    pub fn segments(&self) -> &SegmentSet {
        &self.segments
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Index of the current step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The sentence was completed or skipped and needs a replacement.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Target-language text the learner should say now.
    pub fn current_target(&self) -> &str {
        Self::step_text(&self.segments.steps_target, self.step)
    }

    /// Reference-language text for the current step.
    pub fn current_reference(&self) -> &str {
        Self::step_text(&self.segments.steps_reference, self.step)
    }

    pub fn full_target(&self) -> &str {
        &self.segments.full_target
    }

    fn step_text(steps: &[String], step: usize) -> &str {
        steps
            .get(step.min(steps.len().saturating_sub(1)))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Grade what was heard against the current step.
    ///
    /// A finished drill is still graded but its counters no longer change.
    pub fn check(&mut self, heard: &str, tolerance: Tolerance) -> CheckOutcome {
        let step = self.step;
        let evaluation = evaluate(self.current_target(), heard, tolerance);

        if self.finished {
            return CheckOutcome {
                evaluation,
                step,
                level_up: false,
                completed: false,
            };
        }

        if !evaluation.passed {
            self.progress.streak = 0;
            return CheckOutcome {
                evaluation,
                step,
                level_up: false,
                completed: false,
            };
        }

        let level_up = self.award_point();
        let completed = self.advance();

        CheckOutcome {
            evaluation,
            step,
            level_up,
            completed,
        }
    }

    /// Give up on the current sentence.
    pub fn skip(&mut self) {
        self.progress.streak = 0;
        self.finished = true;
    }

    /// Start a new unit: points and streak reset, level is kept.
    ///
    /// The current sentence is dropped; the caller supplies the next one.
    pub fn new_unit(&mut self) {
        self.progress.points = 0;
        self.progress.streak = 0;
        self.finished = true;
    }

    fn award_point(&mut self) -> bool {
        self.progress.points += 1;
        if self.progress.points >= POINTS_PER_LEVEL {
            self.progress.points = 0;
            self.progress.level += 1;
            return true;
        }
        false
    }

    fn advance(&mut self) -> bool {
        self.step += 1;
        if self.step >= self.segments.len() {
            self.step = self.segments.len().saturating_sub(1);
            self.progress.streak += 1;
            self.finished = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::build_segments;

    fn drill() -> Drill {
        let en = ["I", "work", "on this project", "today", "."];
        let es = ["Yo", "trabajar", "en este proyecto", "hoy", "."];
        Drill::new(build_segments(&en, &es).unwrap())
    }

    #[test]
    fn starts_at_shortest_step() {
        let drill = drill();
        assert_eq!(drill.step(), 0);
        assert_eq!(drill.current_target(), "I work");
        assert_eq!(drill.current_reference(), "Yo trabajar");
        assert_eq!(drill.full_target(), "I work on this project today.");
        assert_eq!(drill.progress(), Progress::default());
    }

    #[test]
    fn pass_advances_and_scores() {
        let mut drill = drill();
        let outcome = drill.check("i work", Tolerance::default());
        assert!(outcome.evaluation.passed);
        assert_eq!(outcome.step, 0);
        assert!(!outcome.completed);
        assert_eq!(drill.step(), 1);
        assert_eq!(drill.current_target(), "I work on this project");
        assert_eq!(drill.progress().points, 1);
    }

    #[test]
    fn fail_keeps_step_and_resets_streak() {
        let mut drill = Drill::with_progress(
            drill().segments().clone(),
            Progress {
                level: 1,
                points: 5,
                streak: 3,
            },
        );
        let outcome = drill.check("hello there", Tolerance::default());
        assert!(!outcome.evaluation.passed);
        assert_eq!(drill.step(), 0);
        assert_eq!(drill.progress().streak, 0);
        assert_eq!(drill.progress().points, 5);
    }

    #[test]
    fn completing_sentence_bumps_streak() {
        let mut drill = drill();
        let steps = drill.segments().steps_target.clone();
        let mut last = None;
        for target in &steps {
            last = Some(drill.check(target, Tolerance::default()));
        }
        let last = last.unwrap();
        assert!(last.completed);
        assert!(drill.is_finished());
        assert_eq!(drill.progress().streak, 1);
        assert_eq!(drill.progress().points, steps.len() as u32);
        assert_eq!(drill.current_target(), drill.full_target());
    }

    #[test]
    fn checks_after_completion_do_not_advance() {
        let mut drill = drill();
        for target in drill.segments().steps_target.clone() {
            drill.check(&target, Tolerance::default());
        }
        let points = drill.progress().points;
        let outcome = drill.check("I work on this project today", Tolerance::default());
        assert!(outcome.evaluation.passed);
        assert!(!outcome.completed);
        assert_eq!(drill.progress().streak, 1);
        assert_eq!(drill.progress().points, points);
    }

    #[test]
    fn hundredth_point_levels_up() {
        let mut drill = Drill::with_progress(
            drill().segments().clone(),
            Progress {
                level: 2,
                points: 99,
                streak: 0,
            },
        );
        let outcome = drill.check("I work", Tolerance::default());
        assert!(outcome.level_up);
        assert_eq!(drill.progress().level, 3);
        assert_eq!(drill.progress().points, 0);
    }

    #[test]
    fn skip_and_next_exercise() {
        let mut drill = drill();
        drill.check("I work", Tolerance::default());
        drill.skip();
        assert!(drill.is_finished());
        assert_eq!(drill.progress().streak, 0);

        let next = build_segments(&["We", "cook", "."], &["Nosotros", "cocinar", "."]).unwrap();
        drill.next_exercise(next);
        assert!(!drill.is_finished());
        assert_eq!(drill.step(), 0);
        assert_eq!(drill.current_target(), "We cook");
        assert_eq!(drill.progress().points, 1);
    }

    #[test]
    fn new_unit_keeps_level() {
        let mut drill = Drill::with_progress(
            drill().segments().clone(),
            Progress {
                level: 4,
                points: 40,
                streak: 2,
            },
        );
        drill.new_unit();
        assert_eq!(
            drill.progress(),
            Progress {
                level: 4,
                points: 0,
                streak: 0
            }
        );
    }

    #[test]
    fn new_unit_drops_current_sentence() {
        let mut drill = drill();
        drill.check("I work", Tolerance::default());
        drill.new_unit();
        assert!(drill.is_finished());

        let points = drill.progress().points;
        drill.check("I work on this project", Tolerance::default());
        assert_eq!(drill.progress().points, points);

        let next = build_segments(&["We", "cook", "."], &["Nosotros", "cocinar", "."]).unwrap();
        drill.next_exercise(next);
        assert!(!drill.is_finished());
        assert_eq!(drill.step(), 0);
        assert_eq!(drill.current_target(), "We cook");
        assert_eq!(drill.progress().points, 0);
    }

    #[test]
    fn strict_tolerance_rejects_partial() {
        let mut drill = drill();
        let outcome = drill.check("I", Tolerance::new(1.0));
        assert!(!outcome.evaluation.passed);
        let outcome = drill.check("I work!", Tolerance::new(1.0));
        assert!(outcome.evaluation.passed);
    }
}
