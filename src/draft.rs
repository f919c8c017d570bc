//! Caller-owned draft persistence.
//!
//! The wizard engine only holds the in-memory copy of an entity. Saving and
//! restoring an in-progress edit goes through a [`DraftStore`] supplied by the
//! surrounding application.
use crate::campaign::{Campaign, CampaignSection};
use crate::coupon::{Coupon, CouponSection};
use crate::wizard::{Wizard, WizardForm, WizardSection};
use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current schema version for draft snapshot files.
pub const DRAFT_SCHEMA_VERSION: u32 = 1;

/// Entity plus cursor position, enough to resume an edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSnapshot<E, S> {
    pub schema_version: u32,
    pub entity: E,
    pub active_section: S,
    pub furthest_section_reached: S,
}

impl<E: Clone, S: WizardSection> DraftSnapshot<E, S> {
    /// A snapshot of a brand new draft.
    pub fn fresh(entity: E) -> Self {
        Self {
            schema_version: DRAFT_SCHEMA_VERSION,
            entity,
            active_section: S::first(),
            furthest_section_reached: S::first(),
        }
    }

    pub fn capture<F>(wizard: &Wizard<F>) -> Self
    where
        F: WizardForm<Entity = E, Section = S>,
    {
        Self {
            schema_version: DRAFT_SCHEMA_VERSION,
            entity: wizard.entity().clone(),
            active_section: wizard.active_section(),
            furthest_section_reached: wizard.furthest_section_reached(),
        }
    }

    /// Load this snapshot into `wizard`, replacing its session.
    pub fn restore<F>(self, wizard: &mut Wizard<F>) -> Result<()>
    where
        F: WizardForm<Entity = E, Section = S>,
    {
        if self.schema_version != DRAFT_SCHEMA_VERSION {
            return Err(anyhow!(
                "unsupported draft schema_version {}",
                self.schema_version
            ));
        }
        wizard.resume(
            self.entity,
            self.active_section,
            self.furthest_section_reached,
        );
        Ok(())
    }
}

/// A stored draft of either kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Draft {
    Coupon(DraftSnapshot<Coupon, CouponSection>),
    Campaign(DraftSnapshot<Campaign, CampaignSection>),
}

impl Draft {
    pub fn kind(&self) -> DraftKind {
        match self {
            Draft::Coupon(_) => DraftKind::Coupon,
            Draft::Campaign(_) => DraftKind::Campaign,
        }
    }

    pub fn fresh(kind: DraftKind) -> Self {
        match kind {
            DraftKind::Coupon => Draft::Coupon(DraftSnapshot::fresh(Coupon::default())),
            DraftKind::Campaign => Draft::Campaign(DraftSnapshot::fresh(Campaign::default())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DraftKind {
    Coupon,
    Campaign,
}

impl DraftKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DraftKind::Coupon => "coupon",
            DraftKind::Campaign => "campaign",
        }
    }
}

/// Load/save capability for one stored value.
pub trait DraftStore<T> {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<T>>;
    fn save(&self, value: &T) -> Result<()>;
}

/// Pretty JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonDraftStore {
    path: PathBuf,
}

impl JsonDraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Serialize + DeserializeOwned> DraftStore<T> for JsonDraftStore {
    fn load(&self) -> Result<Option<T>> {
        if !self.path.is_file() {
            return Ok(None);
        }
        let bytes =
            fs::read(&self.path).with_context(|| format!("read draft {}", self.path.display()))?;
        let value = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse draft JSON {}", self.path.display()))?;
        Ok(Some(value))
    }

    fn save(&self, value: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create parent dir {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(value).context("serialize draft")?;
        fs::write(&self.path, text.as_bytes())
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}
