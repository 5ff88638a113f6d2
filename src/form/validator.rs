use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::config::{dates, min_len};
use crate::form::dates::{parse_iso_date, today};
use crate::form::email::{invalid_emails, is_email, split_emails};
use crate::form::snapshot::{Field, FormSnapshot};

/// A single failed rule, targeted at the field that caused it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        ValidationError {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Business policy applied by the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub min_description: usize,
    pub min_business_value: usize,
    pub min_implementation_plan: usize,
    pub min_backout_plan: usize,
    pub min_validation_plan: usize,
    pub target_may_be_today: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        ValidationPolicy {
            min_description: min_len::DESCRIPTION,
            min_business_value: min_len::BUSINESS_VALUE,
            min_implementation_plan: min_len::IMPLEMENTATION_PLAN,
            min_backout_plan: min_len::BACKOUT_PLAN,
            min_validation_plan: min_len::VALIDATION_PLAN,
            target_may_be_today: dates::TARGET_MAY_BE_TODAY,
        }
    }
}

/// Validate against the default policy and the local date
pub fn validate(snapshot: &FormSnapshot) -> Vec<ValidationError> {
    validate_with(snapshot, &ValidationPolicy::default(), today())
}

/// Run every rule and collect all failures in field order.
/// Rules never short-circuit each other so the caller can report everything at once.
pub fn validate_with(
    snapshot: &FormSnapshot,
    policy: &ValidationPolicy,
    today: NaiveDate,
) -> Vec<ValidationError> {
    let mut errs = Vec::new();

    check_requester(snapshot, &mut errs);
    check_backup_contact(snapshot, &mut errs);
    check_target_end_date(snapshot, policy, today, &mut errs);
    check_last_notified_date(snapshot, today, &mut errs);

    let long_texts = [
        (Field::Description, "Description", &snapshot.description, policy.min_description),
        (
            Field::BusinessValue,
            "Business value",
            &snapshot.business_value,
            policy.min_business_value,
        ),
        (
            Field::ImplementationPlan,
            "Implementation plan",
            &snapshot.implementation_plan,
            policy.min_implementation_plan,
        ),
        (
            Field::BackoutPlan,
            "Backout plan",
            &snapshot.backout_plan,
            policy.min_backout_plan,
        ),
        (
            Field::ValidationPlan,
            "Validation plan",
            &snapshot.validation_plan,
            policy.min_validation_plan,
        ),
    ];
    for (field, label, value, min) in long_texts {
        check_min_length(field, label, value, min, &mut errs);
    }

    if snapshot.impacted_groups.trim().is_empty() {
        errs.push(ValidationError::new(
            Field::ImpactedGroups,
            "Impacted groups is required.",
        ));
    }

    check_leadership_emails(snapshot, &mut errs);

    if snapshot.last_notified_how.trim().is_empty() {
        errs.push(ValidationError::new(
            Field::LastNotifiedHow,
            "How were impacted users last notified? is required.",
        ));
    }

    if snapshot.effort_or_project.trim().is_empty() {
        errs.push(ValidationError::new(
            Field::EffortOrProject,
            "Effort/Project is required.",
        ));
    }

    errs
}

fn check_requester(snapshot: &FormSnapshot, errs: &mut Vec<ValidationError>) {
    let requester = snapshot.requester_email.trim();
    if requester.is_empty() {
        errs.push(ValidationError::new(
            Field::RequesterEmail,
            "Requester email is required.",
        ));
    } else if !is_email(requester) {
        errs.push(ValidationError::new(
            Field::RequesterEmail,
            "Requester email looks invalid.",
        ));
    }
}

fn check_backup_contact(snapshot: &FormSnapshot, errs: &mut Vec<ValidationError>) {
    let backup = snapshot.backup_contact_email.trim();
    if !backup.is_empty() && !is_email(backup) {
        errs.push(ValidationError::new(
            Field::BackupContactEmail,
            "Backup contact email looks invalid.",
        ));
    }
}

fn check_target_end_date(
    snapshot: &FormSnapshot,
    policy: &ValidationPolicy,
    today: NaiveDate,
    errs: &mut Vec<ValidationError>,
) {
    let raw = snapshot.target_end_date.trim();
    if raw.is_empty() {
        errs.push(ValidationError::new(
            Field::TargetEndDate,
            "Target end date is required.",
        ));
        return;
    }

    let Some(end) = parse_iso_date(raw) else {
        errs.push(ValidationError::new(
            Field::TargetEndDate,
            "Target end date is invalid.",
        ));
        return;
    };

    if end == today && !policy.target_may_be_today {
        errs.push(ValidationError::new(
            Field::TargetEndDate,
            "Target end date cannot be today.",
        ));
    } else if end < today {
        errs.push(ValidationError::new(
            Field::TargetEndDate,
            "Target end date cannot be in the past.",
        ));
    }
}

fn check_last_notified_date(
    snapshot: &FormSnapshot,
    today: NaiveDate,
    errs: &mut Vec<ValidationError>,
) {
    let raw = snapshot.last_notified_date.trim();
    if raw.is_empty() {
        errs.push(ValidationError::new(
            Field::LastNotifiedDate,
            "When were impacted users last notified? is required.",
        ));
        return;
    }

    match parse_iso_date(raw) {
        None => errs.push(ValidationError::new(
            Field::LastNotifiedDate,
            "When were impacted users last notified? is invalid.",
        )),
        Some(notified) if notified > today => errs.push(ValidationError::new(
            Field::LastNotifiedDate,
            "Last notified date cannot be in the future.",
        )),
        Some(_) => {}
    }
}

fn check_min_length(
    field: Field,
    label: &str,
    value: &str,
    min: usize,
    errs: &mut Vec<ValidationError>,
) {
    let value = value.trim();
    if value.is_empty() {
        errs.push(ValidationError::new(field, format!("{} is required.", label)));
    } else if value.chars().count() < min {
        errs.push(ValidationError::new(
            field,
            format!("{} must be at least {} characters.", label, min),
        ));
    }
}

fn check_leadership_emails(snapshot: &FormSnapshot, errs: &mut Vec<ValidationError>) {
    let raw = &snapshot.leadership_emails;
    if split_emails(raw).is_empty() {
        errs.push(ValidationError::new(
            Field::LeadershipEmails,
            "Leadership notified (email) is required.",
        ));
        return;
    }

    let bad = invalid_emails(raw);
    if !bad.is_empty() {
        errs.push(ValidationError::new(
            Field::LeadershipEmails,
            format!("Invalid email(s): {}", bad.join(", ")),
        ));
    }
}
