use std::path::PathBuf;

use crate::commands::validate::{ensure_valid, resolve_today};
use crate::config::issue::LABELS;
use crate::errors::AppResult;
use crate::form::document::build;
use crate::utils::fs::{load_snapshot, write_output};

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub path: String,
    pub today: Option<String>,
    pub output: Option<PathBuf>,
}

pub fn run(options: BuildOptions) -> AppResult<()> {
    let snapshot = load_snapshot(&options.path)?;
    let today = resolve_today(options.today.as_deref())?;
    ensure_valid(&snapshot, today)?;

    let body = build(&snapshot);
    write_output(options.output.as_deref(), &body)?;

    if let Some(output) = &options.output {
        println!("Wrote issue body to {}", output.display());
        println!("{}", next_step_hint());
    }

    Ok(())
}

/// Reminder of the labels the new issue must carry
pub fn next_step_hint() -> String {
    format!(
        "Next: create a GitHub issue with labels \"{}\", paste the body, and submit.",
        LABELS.replace(',', "\" + \"")
    )
}
