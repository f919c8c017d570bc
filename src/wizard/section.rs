//! Closed section enumerations and their global order.
//!
//! Every form declares its sections as a plain enum and implements
//! [`WizardSection`] with an explicit order table. Comparisons and
//! next/previous lookups go through `position`, which is an exhaustive
//! `match` in each implementation, so a section outside the table cannot be
//! constructed.
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A section identifier drawn from a fixed, totally ordered enumeration.
pub trait WizardSection:
    Copy + Eq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Every section, in wizard order.
    const ORDER: &'static [Self];

    /// Zero-based index of this section in [`WizardSection::ORDER`].
    fn position(self) -> usize;

    /// Stable snake_case identifier used in JSON artifacts.
    fn as_str(self) -> &'static str;

    /// Human-readable label for steppers and reports.
    fn label(self) -> &'static str;

    fn from_position(position: usize) -> Option<Self> {
        Self::ORDER.get(position).copied()
    }

    fn first() -> Self {
        Self::ORDER[0]
    }

    fn last() -> Self {
        Self::ORDER[Self::ORDER.len() - 1]
    }

    /// The section after this one, or `None` at the end of the order.
    fn next(self) -> Option<Self> {
        Self::from_position(self.position() + 1)
    }

    /// The section before this one, or `None` at the start of the order.
    fn previous(self) -> Option<Self> {
        self.position().checked_sub(1).and_then(Self::from_position)
    }

    fn is_before(self, other: Self) -> bool {
        self.position() < other.position()
    }

    /// The later of two sections in wizard order.
    fn max_by_order(self, other: Self) -> Self {
        if other.position() > self.position() {
            other
        } else {
            self
        }
    }

    /// Parse a stable identifier back into a section.
    fn parse(value: &str) -> Option<Self> {
        Self::ORDER
            .iter()
            .copied()
            .find(|section| section.as_str() == value)
    }
}

/// Sections strictly after `from` up to and including `to`.
pub(crate) fn sections_between<S: WizardSection>(from: S, to: S) -> impl Iterator<Item = S> {
    let start = from.position() + 1;
    let end = to.position();
    S::ORDER
        .iter()
        .copied()
        .filter(move |section| (start..=end).contains(&section.position()))
}

#[cfg(test)]
pub(crate) mod test_sections {
    use super::WizardSection;
    use serde::{Deserialize, Serialize};

    /// Three-step order used by engine tests that do not need a real form.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub(crate) enum Step {
        One,
        Two,
        Three,
    }

    impl WizardSection for Step {
        const ORDER: &'static [Self] = &[Step::One, Step::Two, Step::Three];

        fn position(self) -> usize {
            match self {
                Step::One => 0,
                Step::Two => 1,
                Step::Three => 2,
            }
        }

        fn as_str(self) -> &'static str {
            match self {
                Step::One => "one",
                Step::Two => "two",
                Step::Three => "three",
            }
        }

        fn label(self) -> &'static str {
            match self {
                Step::One => "Step one",
                Step::Two => "Step two",
                Step::Three => "Step three",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_sections::Step;
    use super::*;

    #[test]
    fn next_and_previous_stop_at_the_ends() {
        assert_eq!(Step::One.next(), Some(Step::Two));
        assert_eq!(Step::Three.next(), None);
        assert_eq!(Step::One.previous(), None);
        assert_eq!(Step::Three.previous(), Some(Step::Two));
    }

    #[test]
    fn max_by_order_never_regresses() {
        assert_eq!(Step::Three.max_by_order(Step::One), Step::Three);
        assert_eq!(Step::One.max_by_order(Step::Two), Step::Two);
        assert_eq!(Step::Two.max_by_order(Step::Two), Step::Two);
    }

    #[test]
    fn sections_between_is_exclusive_then_inclusive() {
        let between: Vec<_> = sections_between(Step::One, Step::Three).collect();
        assert_eq!(between, vec![Step::Two, Step::Three]);
        assert_eq!(sections_between(Step::Two, Step::Two).count(), 0);
    }

    #[test]
    fn parse_round_trips_stable_ids() {
        for section in Step::ORDER {
            assert_eq!(Step::parse(section.as_str()), Some(*section));
        }
        assert_eq!(Step::parse("four"), None);
    }
}
