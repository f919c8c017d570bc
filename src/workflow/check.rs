//! Workflow check step.
//!
//! Check resumes a stored draft, treats it as a submit attempt (every section
//! touched and validated), and reports the stepper state.
use super::report::{CheckReport, Decision};
use crate::campaign::campaign_wizard;
use crate::cli::CheckArgs;
use crate::config::{self, WizardConfig};
use crate::coupon::coupon_wizard;
use crate::draft::{Draft, DraftStore, JsonDraftStore};
use crate::registry::InMemoryRegistry;
use crate::util::display_path;
use crate::wizard::{Wizard, WizardForm, WizardSection};
use anyhow::{anyhow, Context, Result};
use std::path::Path;

/// Run the check step and fail when any section is invalid.
pub fn run_check(args: &CheckArgs) -> Result<()> {
    let config = config::load_config_or_default(args.config.as_deref())?;
    let report = check_draft(&args.draft, config, args.taken_codes.as_deref())?;
    if args.json {
        let text = serde_json::to_string_pretty(&report).context("serialize check report")?;
        println!("{text}");
    } else {
        print!("{}", report.render_text());
    }
    if report.decision == Decision::Incomplete {
        return Err(anyhow!(
            "{} draft is incomplete (first invalid section: {})",
            report.kind,
            report.first_invalid_section.unwrap_or("unknown")
        ));
    }
    Ok(())
}

/// Load the draft at `draft_path` and validate every section.
pub fn check_draft(
    draft_path: &Path,
    config: WizardConfig,
    taken_codes: Option<&Path>,
) -> Result<CheckReport> {
    let store = JsonDraftStore::new(draft_path);
    let draft: Draft = store
        .load()?
        .ok_or_else(|| anyhow!("no draft at {}", draft_path.display()))?;
    let cwd = std::env::current_dir().ok();
    let label = display_path(draft_path, cwd.as_deref());
    tracing::info!(kind = draft.kind().as_str(), draft = %label, "checking draft");

    match draft {
        Draft::Coupon(snapshot) => {
            let registry = match taken_codes {
                Some(path) => InMemoryRegistry::load(path)?,
                None => InMemoryRegistry::new(),
            };
            tracing::debug!(codes = registry.len(), "loaded coupon code registry");
            let mut wizard = coupon_wizard(config, registry);
            snapshot.restore(&mut wizard)?;
            Ok(submit_attempt("coupon", label, &mut wizard))
        }
        Draft::Campaign(snapshot) => {
            if taken_codes.is_some() {
                tracing::warn!("--taken-codes only applies to coupon drafts");
            }
            let mut wizard = campaign_wizard(config);
            snapshot.restore(&mut wizard)?;
            Ok(submit_attempt("campaign", label, &mut wizard))
        }
    }
}

fn submit_attempt<F: WizardForm>(
    kind: &'static str,
    label: String,
    wizard: &mut Wizard<F>,
) -> CheckReport {
    for section in F::Section::ORDER.iter().copied() {
        wizard.mark_section_touched(section);
    }
    let first_invalid = wizard.first_invalid_section();
    CheckReport::from_wizard(kind, label, wizard, first_invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use crate::coupon::{CodeMode, Coupon, CouponSection};
    use crate::draft::DraftSnapshot;

    fn write_coupon(path: &Path, coupon: Coupon, active: CouponSection) {
        let mut snapshot = DraftSnapshot::fresh(coupon);
        snapshot.active_section = active;
        snapshot.furthest_section_reached = active;
        JsonDraftStore::new(path)
            .save(&Draft::Coupon(snapshot))
            .expect("save draft");
    }

    #[test]
    fn complete_coupon_reports_complete() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("ok.json");
        let coupon = Coupon {
            name: "Spring".to_string(),
            discount_value: 15.0,
            ..Coupon::default()
        };
        write_coupon(&path, coupon, CouponSection::RedemptionLimits);
        let report = check_draft(&path, default_config(), None).expect("check");
        assert_eq!(report.decision, Decision::Complete);
        assert_eq!(report.first_invalid_section, None);
        assert_eq!(report.next_uncompleted_section, None);
        assert_eq!(report.active_section, "redemption_limits");
        assert!(report.sections.iter().all(|section| section.is_complete));
    }

    #[test]
    fn taken_code_is_reported_against_basic_info() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("taken.json");
        let codes = dir.path().join("codes.json");
        std::fs::write(&codes, r#"{"SPRING24": "coupon-1"}"#).expect("write codes");
        let coupon = Coupon {
            id: Some("coupon-2".to_string()),
            name: "Spring".to_string(),
            code_mode: CodeMode::Manual,
            code: "SPRING24".to_string(),
            discount_value: 15.0,
            ..Coupon::default()
        };
        write_coupon(&path, coupon, CouponSection::BasicInfo);
        let report = check_draft(&path, default_config(), Some(&codes)).expect("check");
        assert_eq!(report.decision, Decision::Incomplete);
        assert_eq!(report.first_invalid_section, Some("basic_info"));
        assert_eq!(report.next_uncompleted_section, Some("basic_info"));
        assert_eq!(
            report.sections[0].summary,
            "⚠ Coupon code \"SPRING24\" is already in use"
        );
    }

    #[test]
    fn missing_draft_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = check_draft(&dir.path().join("none.json"), default_config(), None)
            .expect_err("missing draft");
        assert!(err.to_string().contains("no draft at"));
    }
}
