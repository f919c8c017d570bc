use anyhow::Result;
use clap::Parser;
use loyalty_wizard::cli::{Command, RootArgs};
use loyalty_wizard::workflow;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);
    match &args.command {
        Command::Init(init_args) => workflow::run_init(init_args),
        Command::New(new_args) => workflow::run_new(new_args),
        Command::Check(check_args) => workflow::run_check(check_args),
    }
}
