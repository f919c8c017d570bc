//! Wizard controller: navigation, explicit validation, and derived queries.
//!
//! Validation is pull-based. Editing the entity never re-runs a validator;
//! records only change when [`Wizard::validate_section`] (or a query built on
//! it) is called, which keeps error display tied to navigation events.
use super::progress::ProgressTracker;
use super::section::sections_between;
use super::validation::{SectionCheck, SectionValidation, ValidationStore};
use super::WizardSection;
use std::fmt::Debug;

/// Binds a concrete entity and its section validators to the engine.
pub trait WizardForm {
    type Section: WizardSection;
    type Entity: Clone + Default + PartialEq + Debug;
    /// Partial update merged into the entity; a full entity converts into one.
    type Patch: From<Self::Entity>;

    fn apply_patch(entity: &mut Self::Entity, patch: Self::Patch);

    /// Run the validator for `section`. Must not panic or fail: every
    /// problem, including collaborator failures, becomes an error string.
    fn validate(&self, section: Self::Section, entity: &Self::Entity) -> SectionCheck;

    /// One-line description of the section's current values.
    fn synopsis(&self, section: Self::Section, entity: &Self::Entity) -> String;
}

/// Whether "continue" may leave a section that just failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationPolicy {
    pub allow_deferred_validation: bool,
}

impl Default for NavigationPolicy {
    fn default() -> Self {
        Self {
            allow_deferred_validation: true,
        }
    }
}

/// Everything one editing session holds in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState<E, S: WizardSection> {
    pub(crate) entity: E,
    pub(crate) progress: ProgressTracker<S>,
    pub(crate) validation: ValidationStore<S>,
    pub(crate) is_dirty: bool,
}

impl<E: Default, S: WizardSection> Default for WizardState<E, S> {
    fn default() -> Self {
        Self {
            entity: E::default(),
            progress: ProgressTracker::new(),
            validation: ValidationStore::new(),
            is_dirty: false,
        }
    }
}

impl<E, S: WizardSection> WizardState<E, S> {
    pub fn entity(&self) -> &E {
        &self.entity
    }

    pub fn active_section(&self) -> S {
        self.progress.active()
    }

    pub fn previous_section(&self) -> Option<S> {
        self.progress.previous()
    }

    pub fn furthest_section_reached(&self) -> S {
        self.progress.furthest()
    }

    pub fn validation(&self, section: S) -> &SectionValidation {
        self.validation.get(section)
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }
}

/// A single editing session for one entity.
pub struct Wizard<F: WizardForm> {
    pub(crate) form: F,
    pub(crate) policy: NavigationPolicy,
    pub(crate) state: WizardState<F::Entity, F::Section>,
}

impl<F: WizardForm> Wizard<F> {
    pub fn new(form: F) -> Self {
        Self::with_policy(form, NavigationPolicy::default())
    }

    pub fn with_policy(form: F, policy: NavigationPolicy) -> Self {
        Self {
            form,
            policy,
            state: WizardState::default(),
        }
    }

    pub fn state(&self) -> &WizardState<F::Entity, F::Section> {
        &self.state
    }

    pub fn entity(&self) -> &F::Entity {
        &self.state.entity
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn active_section(&self) -> F::Section {
        self.state.progress.active()
    }

    pub fn furthest_section_reached(&self) -> F::Section {
        self.state.progress.furthest()
    }

    /// Merge `patch` into the entity and mark the session dirty.
    pub fn update_entity(&mut self, patch: F::Patch) {
        F::apply_patch(&mut self.state.entity, patch);
        self.state.is_dirty = true;
    }

    /// Start editing an existing entity from defaults plus `entity`.
    ///
    /// Progress and validation start over and the session is clean.
    pub fn load_entity(&mut self, entity: impl Into<F::Patch>) {
        let mut fresh = F::Entity::default();
        F::apply_patch(&mut fresh, entity.into());
        self.state = WizardState {
            entity: fresh,
            ..WizardState::default()
        };
        tracing::debug!(section = self.active_section().as_str(), "loaded entity");
    }

    /// Load an entity and put the cursor back where a saved draft left it.
    pub fn resume(
        &mut self,
        entity: impl Into<F::Patch>,
        active: F::Section,
        furthest: F::Section,
    ) {
        self.load_entity(entity);
        self.state.progress.restore(active, furthest);
        tracing::debug!(
            active = active.as_str(),
            furthest = self.furthest_section_reached().as_str(),
            "resumed draft"
        );
    }

    pub fn reset_wizard(&mut self) {
        self.state = WizardState::default();
        tracing::debug!("wizard reset");
    }

    /// Jump to `section` without granting forward credit.
    ///
    /// Sections past the furthest one reached cannot be entered this way;
    /// the call returns `false` and nothing changes.
    pub fn set_active_section(&mut self, section: F::Section) -> bool {
        if !self.state.progress.can_visit(section) {
            tracing::debug!(
                section = section.as_str(),
                furthest = self.furthest_section_reached().as_str(),
                "direct jump past furthest section ignored"
            );
            return false;
        }
        self.move_to(section, false);
        true
    }

    /// Step forward one section, granting forward credit. No-op at the end.
    pub fn go_to_next_section(&mut self) {
        if let Some(next) = self.active_section().next() {
            self.move_to(next, true);
        }
    }

    /// Step back one section. No-op at the start.
    pub fn go_to_previous_section(&mut self) {
        if let Some(previous) = self.active_section().previous() {
            self.move_to(previous, false);
        }
    }

    /// Resume forward progress from the current section.
    ///
    /// When revisiting, jump to the first section after the cursor (up to the
    /// furthest reached) that is not complete, or straight to the furthest
    /// section when all of them are. At the frontier this is
    /// [`Wizard::go_to_next_section`].
    pub fn continue_from_current_section(&mut self) {
        if !self.is_revisiting_prior_section() {
            self.go_to_next_section();
            return;
        }
        let furthest = self.furthest_section_reached();
        let target = sections_between(self.active_section(), furthest)
            .find(|section| !self.is_section_complete(*section))
            .unwrap_or(furthest);
        self.move_to(target, true);
    }

    /// Touch and validate the active section, then continue.
    ///
    /// An invalid section is only left behind when the policy allows
    /// deferred validation. Returns the validation result.
    pub fn complete_current_section(&mut self) -> bool {
        let section = self.active_section();
        self.mark_section_touched(section);
        let is_valid = self.validate_section(section);
        if is_valid || self.policy.allow_deferred_validation {
            self.continue_from_current_section();
        }
        is_valid
    }

    /// Run the section's validator and record the result.
    pub fn validate_section(&mut self, section: F::Section) -> bool {
        let check = self.form.validate(section, &self.state.entity);
        let is_valid = check.is_valid;
        tracing::debug!(
            section = section.as_str(),
            is_valid,
            error_count = check.errors.len(),
            "validated section"
        );
        self.state.validation.set_validation(section, check);
        is_valid
    }

    pub fn mark_section_touched(&mut self, section: F::Section) {
        self.state.validation.mark_touched(section);
    }

    pub fn section_validation(&self, section: F::Section) -> &SectionValidation {
        self.state.validation.get(section)
    }

    pub fn section_errors(&self, section: F::Section) -> &[String] {
        &self.state.validation.get(section).errors
    }

    pub fn is_section_complete(&self, section: F::Section) -> bool {
        self.state.validation.get(section).is_complete()
    }

    pub fn is_revisiting_prior_section(&self) -> bool {
        self.state.progress.is_revisiting_prior_section()
    }

    /// Validate and record every section, returning the first that fails.
    ///
    /// Touched flags are left alone.
    pub fn first_invalid_section(&mut self) -> Option<F::Section> {
        let mut first_invalid = None;
        for section in F::Section::ORDER.iter().copied() {
            if !self.validate_section(section) && first_invalid.is_none() {
                first_invalid = Some(section);
            }
        }
        first_invalid
    }

    /// Like [`Wizard::first_invalid_section`] but records nothing.
    pub fn find_first_invalid_section(&self) -> Option<F::Section> {
        F::Section::ORDER
            .iter()
            .copied()
            .find(|section| !self.form.validate(*section, &self.state.entity).is_valid)
    }

    /// First incomplete section scanning from the cursor to the end, then
    /// wrapping around from the start.
    pub fn next_uncompleted_section(&self) -> Option<F::Section> {
        let order = F::Section::ORDER;
        let start = self.active_section().position();
        order[start..]
            .iter()
            .chain(order[..start].iter())
            .copied()
            .find(|section| !self.is_section_complete(*section))
    }

    fn move_to(&mut self, section: F::Section, mark_furthest: bool) {
        self.state.progress.advance_to(section, mark_furthest);
        tracing::debug!(
            section = section.as_str(),
            previous = self.state.progress.previous().map(|s| s.as_str()),
            furthest = self.furthest_section_reached().as_str(),
            mark_furthest,
            "moved to section"
        );
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
