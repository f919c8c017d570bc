//! Identifier uniqueness collaborator.
//!
//! Wizards never own the set of issued identifiers; they ask a registry. A
//! lookup may fail (the backing service is unreachable), and validators turn
//! that failure into an ordinary error string.
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Answers whether an identifier already belongs to another entity.
pub trait IdentifierRegistry {
    /// True when `candidate` is issued to an entity other than `excluding_id`.
    fn is_identifier_taken(&self, candidate: &str, excluding_id: Option<&str>) -> Result<bool>;
}

impl<F> IdentifierRegistry for F
where
    F: Fn(&str, Option<&str>) -> Result<bool>,
{
    fn is_identifier_taken(&self, candidate: &str, excluding_id: Option<&str>) -> Result<bool> {
        self(candidate, excluding_id)
    }
}

/// Map of issued identifier to the id of the entity that owns it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    owners: BTreeMap<String, String>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, identifier: impl Into<String>, owner_id: impl Into<String>) {
        self.owners.insert(identifier.into(), owner_id.into());
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Load a JSON object of `{"IDENTIFIER": "owner-id"}` pairs.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("read registry {}", path.display()))?;
        let owners: BTreeMap<String, String> =
            serde_json::from_slice(&bytes).context("parse identifier registry JSON")?;
        Ok(Self { owners })
    }
}

impl FromIterator<(String, String)> for InMemoryRegistry {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            owners: iter.into_iter().collect(),
        }
    }
}

impl IdentifierRegistry for InMemoryRegistry {
    fn is_identifier_taken(&self, candidate: &str, excluding_id: Option<&str>) -> Result<bool> {
        Ok(match self.owners.get(candidate) {
            None => false,
            Some(owner) => excluding_id != Some(owner.as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_does_not_collide_with_itself() {
        let mut registry = InMemoryRegistry::new();
        registry.insert("SUMMER10", "coupon-1");
        assert!(!registry.is_identifier_taken("WINTER", None).unwrap());
        assert!(registry.is_identifier_taken("SUMMER10", None).unwrap());
        assert!(registry
            .is_identifier_taken("SUMMER10", Some("coupon-2"))
            .unwrap());
        assert!(!registry
            .is_identifier_taken("SUMMER10", Some("coupon-1"))
            .unwrap());
    }

    #[test]
    fn loads_owner_map_from_json() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("codes.json");
        fs::write(&path, r#"{"SPRING": "coupon-9"}"#).expect("write registry");
        let registry = InMemoryRegistry::load(&path).expect("load registry");
        assert_eq!(registry.len(), 1);
        assert!(registry.is_identifier_taken("SPRING", None).unwrap());
    }

    #[test]
    fn closures_act_as_registries() {
        let registry = |candidate: &str, _: Option<&str>| -> Result<bool> { Ok(candidate == "X") };
        assert!(registry.is_identifier_taken("X", None).unwrap());
    }
}
