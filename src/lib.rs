//! Configuration wizards for a customer-loyalty admin console.
//!
//! The [`wizard`] module is the engine: a fixed sequence of independently
//! validated sections with forward-progress tracking and resumable edits.
//! [`coupon`] and [`campaign`] bind it to concrete entities. Everything that
//! touches the outside world (config files, stored drafts, identifier
//! registries) lives beside the engine and is passed in by the caller.
pub mod campaign;
pub mod cli;
pub mod config;
pub mod coupon;
pub mod draft;
pub mod registry;
pub mod util;
pub mod wizard;
pub mod workflow;

pub use config::WizardConfig;
pub use draft::{Draft, DraftKind, DraftSnapshot, DraftStore, JsonDraftStore};
pub use registry::{IdentifierRegistry, InMemoryRegistry};
