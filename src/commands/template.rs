use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::templates::SNAPSHOT_TEMPLATE;

#[derive(Debug, Clone, Default)]
pub struct TemplateOptions {
    pub path: PathBuf,
    pub force: bool,
}

pub fn run(options: TemplateOptions) -> AppResult<()> {
    let path = options.path;
    write_template(&path, options.force)?;

    println!("Created {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Fill in every field (dates as YYYY-MM-DD)");
    println!("  2. Run `crform validate {}`", path.display());
    println!("  3. Run `crform build {}` and paste the output into a new issue", path.display());
    Ok(())
}

fn write_template(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::AlreadyExists(path.display().to_string()));
    }
    fs::write(path, SNAPSHOT_TEMPLATE)?;
    Ok(())
}
