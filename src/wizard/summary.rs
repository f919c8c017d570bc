//! Read-only projections for steppers and sidebars.
use super::controller::{Wizard, WizardForm};
use super::WizardSection;
use serde::Serialize;

/// Prefix for summaries that surface a validation error.
pub const WARNING_MARKER: &str = "⚠ ";

/// One stepper row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionStatus<S> {
    pub section: S,
    pub label: &'static str,
    pub summary: String,
    pub is_active: bool,
    pub is_touched: bool,
    pub is_valid: bool,
    pub is_complete: bool,
}

impl<F: WizardForm> Wizard<F> {
    /// Touched and invalid sections show their first error, everything else
    /// shows the form's synopsis of the current values.
    pub fn section_summary(&self, section: F::Section) -> String {
        let record = self.section_validation(section);
        if record.is_touched && !record.is_valid {
            if let Some(first) = record.errors.first() {
                return format!("{WARNING_MARKER}{first}");
            }
        }
        self.form.synopsis(section, self.entity())
    }

    pub fn stepper(&self) -> Vec<SectionStatus<F::Section>> {
        let active = self.active_section();
        F::Section::ORDER
            .iter()
            .copied()
            .map(|section| {
                let record = self.section_validation(section);
                SectionStatus {
                    section,
                    label: section.label(),
                    summary: self.section_summary(section),
                    is_active: section == active,
                    is_touched: record.is_touched,
                    is_valid: record.is_valid,
                    is_complete: record.is_complete(),
                }
            })
            .collect()
    }
}
