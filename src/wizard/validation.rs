//! Per-section validation results and the store that records them.
use super::WizardSection;
use serde::Serialize;
use std::marker::PhantomData;

/// Outcome of running one section validator against the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionCheck {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl SectionCheck {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Error accumulator for validators.
///
/// Rules are evaluated in the order they are written, so repeated checks of
/// the same entity always produce the same error list.
#[derive(Debug, Default)]
pub struct Rules {
    errors: Vec<String>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` when `violated` holds.
    pub fn check(&mut self, violated: bool, message: impl Into<String>) -> &mut Self {
        if violated {
            self.errors.push(message.into());
        }
        self
    }

    /// Record an error that was computed elsewhere.
    pub fn push(&mut self, message: impl Into<String>) -> &mut Self {
        self.errors.push(message.into());
        self
    }

    pub fn finish(self) -> SectionCheck {
        SectionCheck::from_errors(self.errors)
    }
}

/// Recorded validation state for one section.
///
/// The default is deliberately invalid and untouched so a fresh wizard never
/// shows a section as complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionValidation {
    pub is_valid: bool,
    pub is_touched: bool,
    pub errors: Vec<String>,
}

impl SectionValidation {
    pub fn is_complete(&self) -> bool {
        self.is_valid && self.is_touched
    }
}

/// One [`SectionValidation`] per section, indexed by section position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationStore<S: WizardSection> {
    records: Vec<SectionValidation>,
    _sections: PhantomData<S>,
}

impl<S: WizardSection> Default for ValidationStore<S> {
    fn default() -> Self {
        Self {
            records: vec![SectionValidation::default(); S::ORDER.len()],
            _sections: PhantomData,
        }
    }
}

impl<S: WizardSection> ValidationStore<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, section: S) -> &SectionValidation {
        &self.records[section.position()]
    }

    /// Overwrite the result for `section`, keeping its touched flag.
    pub fn set_validation(&mut self, section: S, check: SectionCheck) {
        let record = &mut self.records[section.position()];
        record.is_valid = check.is_valid;
        record.errors = check.errors;
    }

    pub fn mark_touched(&mut self, section: S) {
        self.records[section.position()].is_touched = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, &SectionValidation)> {
        S::ORDER.iter().copied().map(|section| (section, self.get(section)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::section::test_sections::Step;

    #[test]
    fn unvalidated_sections_default_to_invalid_and_untouched() {
        let store = ValidationStore::<Step>::new();
        for (_, record) in store.iter() {
            assert_eq!(record, &SectionValidation::default());
            assert!(!record.is_valid);
            assert!(!record.is_complete());
        }
    }

    #[test]
    fn set_validation_keeps_touched_flag() {
        let mut store = ValidationStore::<Step>::new();
        store.mark_touched(Step::Two);
        store.set_validation(Step::Two, SectionCheck::from_errors(vec!["bad".into()]));
        let record = store.get(Step::Two);
        assert!(record.is_touched);
        assert!(!record.is_valid);
        assert_eq!(record.errors, vec!["bad".to_string()]);

        store.set_validation(Step::Two, SectionCheck::valid());
        assert!(store.get(Step::Two).is_complete());
        assert!(!store.get(Step::One).is_touched);
    }

    #[test]
    fn rules_keep_declaration_order() {
        let mut rules = Rules::new();
        rules
            .check(true, "first")
            .check(false, "skipped")
            .push("second");
        let check = rules.finish();
        assert!(!check.is_valid);
        assert_eq!(check.errors, vec!["first", "second"]);
    }
}
