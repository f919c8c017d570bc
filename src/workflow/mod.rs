//! Command steps behind the CLI.
//!
//! Each step loads its inputs, drives the wizard engine, and prints a result,
//! so the CLI itself stays a thin dispatcher.
mod check;
mod init;
mod new;
mod report;

pub use check::{check_draft, run_check};
pub use init::run_init;
pub use new::run_new;
pub use report::{CheckReport, Decision, SectionReport};
