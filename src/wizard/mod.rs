//! Multi-section configuration wizard engine.
//!
//! A form is a fixed sequence of sections, each with its own validator. The
//! engine tracks where the user is, how far they have been, and the last
//! recorded validation result per section:
//!
//! ```text
//! Wizard<F: WizardForm>
//! ├── form: F                      validators + synopses for one entity kind
//! └── state: WizardState
//!     ├── entity                   draft being edited
//!     ├── progress                 active / previous / furthest section
//!     ├── validation               {is_valid, is_touched, errors} per section
//!     └── is_dirty
//! ```
//!
//! Nothing in here performs I/O. Draft persistence and identifier lookups are
//! collaborators owned by the caller.
mod controller;
mod progress;
mod section;
mod summary;
mod validation;

pub use controller::{NavigationPolicy, Wizard, WizardForm, WizardState};
pub use progress::ProgressTracker;
pub use section::WizardSection;
pub use summary::{SectionStatus, WARNING_MARKER};
pub use validation::{Rules, SectionCheck, SectionValidation, ValidationStore};
