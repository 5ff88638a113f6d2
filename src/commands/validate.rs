use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};
use crate::form::dates::{parse_iso_date, today as today_local};
use crate::form::snapshot::FormSnapshot;
use crate::form::validator::{validate, validate_with, ValidationError, ValidationPolicy};
use crate::utils::fs::load_snapshot;

#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    pub path: String,
    pub today: Option<String>,
    pub json: bool,
}

pub fn run(options: ValidateOptions) -> AppResult<()> {
    let snapshot = load_snapshot(&options.path)?;
    let today = resolve_today(options.today.as_deref())?;
    let errors = check_snapshot(&snapshot, today);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&errors)?);
    } else if errors.is_empty() {
        println!("✓ Snapshot is valid");
    } else {
        report(&errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::ValidationFailed(errors.len()))
    }
}

/// Validate and print failures to stderr; used by commands that render
/// only after a clean validation.
pub fn ensure_valid(snapshot: &FormSnapshot, today: Option<NaiveDate>) -> AppResult<()> {
    let errors = check_snapshot(snapshot, today);
    if errors.is_empty() {
        return Ok(());
    }
    report(&errors);
    Err(AppError::ValidationFailed(errors.len()))
}

/// Parse the `--today` override; None means the local date
pub fn resolve_today(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    raw.map(|raw| {
        parse_iso_date(raw.trim()).ok_or_else(|| AppError::InvalidToday(raw.to_string()))
    })
    .transpose()
}

fn check_snapshot(snapshot: &FormSnapshot, today: Option<NaiveDate>) -> Vec<ValidationError> {
    let errors = match today {
        Some(today) => validate_with(snapshot, &ValidationPolicy::default(), today),
        None => validate(snapshot),
    };
    log::debug!(
        "validated snapshot against {}: {} error(s)",
        today.unwrap_or_else(today_local),
        errors.len()
    );
    errors
}

fn report(errors: &[ValidationError]) {
    eprintln!("✗ Snapshot has {} problem(s):", errors.len());
    for error in errors {
        eprintln!("  {}", error);
    }
}
