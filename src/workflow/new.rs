//! Workflow new step: start a draft from defaults.
use crate::cli::NewArgs;
use crate::draft::{Draft, DraftStore, JsonDraftStore};
use anyhow::{anyhow, Result};

pub fn run_new(args: &NewArgs) -> Result<()> {
    if args.draft.is_file() && !args.force {
        return Err(anyhow!(
            "draft already exists at {} (use --force to overwrite)",
            args.draft.display()
        ));
    }
    let store = JsonDraftStore::new(&args.draft);
    store.save(&Draft::fresh(args.kind))?;
    tracing::info!(
        kind = args.kind.as_str(),
        path = %args.draft.display(),
        "wrote fresh draft"
    );
    println!("wrote {} draft {}", args.kind.as_str(), args.draft.display());
    Ok(())
}
