//! CLI argument parsing for the draft workflow.
//!
//! The CLI only wires files to the wizard engine: it loads config, drafts and
//! identifier registries, then prints what the engine reports.
use crate::draft::DraftKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "lwiz",
    version,
    about = "Coupon and campaign configuration wizard",
    after_help = "Commands:\n  init [--config <path>]                 Write a default wizard config\n  new --kind <kind> --draft <path>       Start a fresh draft file\n  check --draft <path>                   Validate every section of a draft\n\nExamples:\n  lwiz init --config ./wizard.json\n  lwiz new --kind coupon --draft drafts/spring.json\n  lwiz check --draft drafts/spring.json --taken-codes codes.json --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Log engine transitions to stderr (overridden by RUST_LOG)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Init(InitArgs),
    New(NewArgs),
    Check(CheckArgs),
}

/// Init command inputs.
#[derive(Parser, Debug)]
#[command(about = "Write a default wizard config")]
pub struct InitArgs {
    /// Config path (defaults to the per-user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,
}

/// New command inputs.
#[derive(Parser, Debug)]
#[command(about = "Start a fresh draft file")]
pub struct NewArgs {
    /// Kind of entity to configure
    #[arg(long, value_enum)]
    pub kind: DraftKind,

    /// Draft file to create
    #[arg(long, value_name = "PATH")]
    pub draft: PathBuf,

    /// Overwrite an existing draft
    #[arg(long)]
    pub force: bool,
}

/// Check command inputs.
#[derive(Parser, Debug)]
#[command(about = "Validate every section of a draft and summarize it")]
pub struct CheckArgs {
    /// Draft file written by `lwiz new` or an editor
    #[arg(long, value_name = "PATH")]
    pub draft: PathBuf,

    /// Wizard config (defaults to the per-user config, then built-in defaults)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON object of coupon codes already issued, mapped to their owner ids
    #[arg(long, value_name = "PATH")]
    pub taken_codes: Option<PathBuf>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}
