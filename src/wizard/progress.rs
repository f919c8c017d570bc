//! Cursor and high-water mark over the section order.
use super::WizardSection;

/// Tracks the active section and the furthest section reached.
///
/// `furthest` never moves backwards except through [`ProgressTracker::reset`],
/// and it is always at or after `active`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTracker<S: WizardSection> {
    active: S,
    previous: Option<S>,
    furthest: S,
}

impl<S: WizardSection> Default for ProgressTracker<S> {
    fn default() -> Self {
        Self {
            active: S::first(),
            previous: None,
            furthest: S::first(),
        }
    }
}

impl<S: WizardSection> ProgressTracker<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> S {
        self.active
    }

    pub fn previous(&self) -> Option<S> {
        self.previous
    }

    pub fn furthest(&self) -> S {
        self.furthest
    }

    /// Whether the cursor may move to `section` without forward credit.
    pub fn can_visit(&self, section: S) -> bool {
        !self.furthest.is_before(section)
    }

    /// Move the cursor to `section`, optionally granting forward credit.
    ///
    /// Callers only pass `mark_furthest = false` for sections that satisfy
    /// [`ProgressTracker::can_visit`].
    pub fn advance_to(&mut self, section: S, mark_furthest: bool) {
        debug_assert!(mark_furthest || self.can_visit(section));
        self.previous = Some(self.active);
        self.active = section;
        if mark_furthest {
            self.furthest = self.furthest.max_by_order(section);
        }
    }

    /// True while the cursor sits behind the furthest section reached.
    pub fn is_revisiting_prior_section(&self) -> bool {
        self.active.is_before(self.furthest)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Seed the tracker from a saved position.
    pub fn restore(&mut self, active: S, furthest: S) {
        self.active = active;
        self.previous = None;
        self.furthest = furthest.max_by_order(active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::section::test_sections::Step;

    #[test]
    fn advance_with_credit_raises_furthest() {
        let mut tracker = ProgressTracker::<Step>::new();
        tracker.advance_to(Step::Two, true);
        assert_eq!(tracker.active(), Step::Two);
        assert_eq!(tracker.previous(), Some(Step::One));
        assert_eq!(tracker.furthest(), Step::Two);
    }

    #[test]
    fn backward_moves_keep_furthest() {
        let mut tracker = ProgressTracker::<Step>::new();
        tracker.advance_to(Step::Three, true);
        tracker.advance_to(Step::One, true);
        assert_eq!(tracker.furthest(), Step::Three);
        assert!(tracker.is_revisiting_prior_section());
    }

    #[test]
    fn sections_past_furthest_need_credit() {
        let mut tracker = ProgressTracker::<Step>::new();
        assert!(tracker.can_visit(Step::One));
        assert!(!tracker.can_visit(Step::Two));
        tracker.advance_to(Step::Two, true);
        assert!(tracker.can_visit(Step::Two));
        assert!(!tracker.can_visit(Step::Three));
    }

    #[test]
    fn restore_clamps_furthest_to_active() {
        let mut tracker = ProgressTracker::<Step>::new();
        tracker.restore(Step::Three, Step::One);
        assert_eq!(tracker.furthest(), Step::Three);
        assert!(!tracker.is_revisiting_prior_section());
    }
}
