//! Check report types shared by the text and JSON renderers.
use crate::wizard::{Wizard, WizardForm, WizardSection, WARNING_MARKER};
use serde::Serialize;
use std::fmt;

/// Overall outcome of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Complete,
    Incomplete,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Complete => "complete",
            Decision::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One section row of a [`CheckReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub id: &'static str,
    pub label: &'static str,
    pub summary: String,
    pub is_active: bool,
    pub is_valid: bool,
    pub is_touched: bool,
    pub is_complete: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Machine-readable result of `lwiz check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub kind: &'static str,
    pub draft: String,
    pub decision: Decision,
    pub active_section: &'static str,
    pub furthest_section_reached: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_invalid_section: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_uncompleted_section: Option<&'static str>,
    pub sections: Vec<SectionReport>,
}

impl CheckReport {
    pub fn from_wizard<F: WizardForm>(
        kind: &'static str,
        draft: String,
        wizard: &Wizard<F>,
        first_invalid: Option<F::Section>,
    ) -> Self {
        let sections = wizard
            .stepper()
            .into_iter()
            .map(|row| SectionReport {
                id: row.section.as_str(),
                label: row.label,
                summary: row.summary,
                is_active: row.is_active,
                is_valid: row.is_valid,
                is_touched: row.is_touched,
                is_complete: row.is_complete,
                errors: wizard.section_errors(row.section).to_vec(),
            })
            .collect();
        Self {
            kind,
            draft,
            decision: if first_invalid.is_none() {
                Decision::Complete
            } else {
                Decision::Incomplete
            },
            active_section: wizard.active_section().as_str(),
            furthest_section_reached: wizard.furthest_section_reached().as_str(),
            first_invalid_section: first_invalid.map(|section| section.as_str()),
            next_uncompleted_section: wizard
                .next_uncompleted_section()
                .map(|section| section.as_str()),
            sections,
        }
    }

    /// Human-readable stepper, one line per section.
    pub fn render_text(&self) -> String {
        let mut out = format!("{} draft {} ({})\n", self.kind, self.draft, self.decision);
        let width = self
            .sections
            .iter()
            .map(|section| section.label.len())
            .max()
            .unwrap_or(0);
        for section in &self.sections {
            let cursor = if section.is_active { '>' } else { ' ' };
            let mark = if section.is_complete { 'x' } else { ' ' };
            out.push_str(&format!(
                "{cursor} [{mark}] {:<width$}  {}\n",
                section.label, section.summary
            ));
            let shown = usize::from(section.summary.starts_with(WARNING_MARKER));
            for error in section.errors.iter().skip(shown) {
                out.push_str(&format!("        {:<width$}  - {error}\n", ""));
            }
        }
        if let Some(next) = self.next_uncompleted_section {
            out.push_str(&format!("next: {next}\n"));
        }
        out
    }
}
