//! Workflow init step.
//!
//! Init writes the default config so later steps read explicit limits.
use crate::cli::InitArgs;
use crate::config;
use anyhow::{anyhow, Result};

/// Run the init step, writing the default wizard config.
pub fn run_init(args: &InitArgs) -> Result<()> {
    let config_path = match args.config.clone() {
        Some(path) => path,
        None => config::default_config_path()
            .ok_or_else(|| anyhow!("no per-user config directory; provide --config"))?,
    };
    if config_path.is_file() && !args.force {
        return Err(anyhow!(
            "config already exists at {} (use --force to overwrite)",
            config_path.display()
        ));
    }
    config::write_config(&config_path, &config::default_config())?;
    tracing::info!(path = %config_path.display(), "wrote wizard config");
    println!("wrote {}", config_path.display());
    Ok(())
}
