use crate::config::issue::NO_RESPONSE;
use crate::form::dates::{to_mm_dd_slash_yy, to_mm_dd_yy};
use crate::form::snapshot::FormSnapshot;

// Headings must match the issue-form labels byte for byte; the downstream
// parser maps them to fields by literal string match.
pub const H_REQUESTER: &str = "Requester email";
pub const H_BACKUP: &str = "Backup contact (email)(required for CR approval)";
pub const H_TARGET_END: &str = "Target end date";
pub const H_DESCRIPTION: &str = "Description";
pub const H_BUSINESS_VALUE: &str = "Business value (executive summary)";
pub const H_IMPLEMENTATION: &str = "Implementation plan";
pub const H_BACKOUT: &str = "Backout plan";
pub const H_VALIDATION: &str = "Validation plan";
pub const H_IMPACTED_GROUPS: &str = "Impacted groups";
pub const H_LEADERSHIP: &str = "Leadership notified  (email)"; // double space
pub const H_LAST_NOTIFIED_WHEN: &str = "When were impacted users last notified?";
pub const H_LAST_NOTIFIED_HOW: &str = "How were impacted users last notified?";
pub const H_EFFORT: &str = "Effort/Project";
pub const H_CONFIRMATIONS: &str = "Confirmations";

pub const C_IMPACTS_PUBLIC: &str = "Impacts the public.";
pub const C_INVOLVES_CDT: &str = "Involves CDT.";
pub const C_NEW_APP_ESD: &str = "New app (ESD needs to know).";
pub const C_VENDOR_IMPACT: &str = "Impact a Vendors.";

/// Render the issue body for a snapshot that has already passed validation.
pub fn build(snapshot: &FormSnapshot) -> String {
    let body = [
        section(H_REQUESTER, &snapshot.requester_email),
        section(H_BACKUP, &snapshot.backup_contact_email),
        section(H_TARGET_END, &to_mm_dd_yy(&snapshot.target_end_date)),
        section(H_DESCRIPTION, &snapshot.description),
        section(H_BUSINESS_VALUE, &snapshot.business_value),
        section(H_IMPLEMENTATION, &snapshot.implementation_plan),
        section(H_BACKOUT, &snapshot.backout_plan),
        section(H_VALIDATION, &snapshot.validation_plan),
        section(H_IMPACTED_GROUPS, &snapshot.impacted_groups),
        section(H_LEADERSHIP, &snapshot.leadership_emails),
        section(
            H_LAST_NOTIFIED_WHEN,
            &to_mm_dd_slash_yy(&snapshot.last_notified_date),
        ),
        section(H_LAST_NOTIFIED_HOW, &snapshot.last_notified_how),
        section(H_EFFORT, &snapshot.effort_or_project),
        checkbox_block(
            H_CONFIRMATIONS,
            &[
                (C_IMPACTS_PUBLIC, snapshot.impacts_public),
                (C_INVOLVES_CDT, snapshot.involves_cdt),
                (C_NEW_APP_ESD, snapshot.new_app_esd),
                (C_VENDOR_IMPACT, snapshot.vendor_impact),
            ],
        ),
    ];

    body.join("\n")
}

fn section(label: &str, value: &str) -> String {
    let value = if value.is_empty() { NO_RESPONSE } else { value };
    format!("### {}\n\n{}\n", label, value)
}

fn checkbox_block(label: &str, items: &[(&str, bool)]) -> String {
    let lines: Vec<String> = items
        .iter()
        .map(|(text, on)| format!("- [{}] {}", if *on { "x" } else { " " }, text))
        .collect();
    format!("### {}\n\n{}\n", label, lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_snapshot() -> FormSnapshot {
        FormSnapshot {
            requester_email: "requester@example.com".to_string(),
            backup_contact_email: String::new(),
            target_end_date: "2026-03-05".to_string(),
            last_notified_date: "2026-01-09".to_string(),
            description: "Upgrade the payroll database cluster to v15".to_string(),
            business_value: "Keeps vendor support".to_string(),
            implementation_plan: "Rolling upgrade per node".to_string(),
            backout_plan: "Restore snapshot".to_string(),
            validation_plan: "Run smoke suite".to_string(),
            impacted_groups: "Payroll".to_string(),
            leadership_emails: "lead@example.com;  vp@example.com".to_string(),
            last_notified_how: "Email".to_string(),
            effort_or_project: "PRJ-1234".to_string(),
            impacts_public: true,
            involves_cdt: false,
            new_app_esd: false,
            vendor_impact: true,
        }
    }

    #[test]
    fn test_build_full_document() {
        let expected = "\
### Requester email

requester@example.com

### Backup contact (email)(required for CR approval)

_ No response _

### Target end date

03-05-26

### Description

Upgrade the payroll database cluster to v15

### Business value (executive summary)

Keeps vendor support

### Implementation plan

Rolling upgrade per node

### Backout plan

Restore snapshot

### Validation plan

Run smoke suite

### Impacted groups

Payroll

### Leadership notified  (email)

lead@example.com;  vp@example.com

### When were impacted users last notified?

01/09/26

### How were impacted users last notified?

Email

### Effort/Project

PRJ-1234

### Confirmations

- [x] Impacts the public.
- [ ] Involves CDT.
- [ ] New app (ESD needs to know).
- [x] Impact a Vendors.
";
        assert_eq!(build(&valid_snapshot()), expected);
    }

    #[test]
    fn test_empty_backup_renders_placeholder() {
        let doc = build(&valid_snapshot());
        assert!(doc.contains(
            "### Backup contact (email)(required for CR approval)\n\n_ No response _\n"
        ));
    }

    #[test]
    fn test_backup_rendered_when_present() {
        let mut snapshot = valid_snapshot();
        snapshot.backup_contact_email = "backup@example.com".to_string();
        let doc = build(&snapshot);
        assert!(doc.contains(
            "### Backup contact (email)(required for CR approval)\n\nbackup@example.com\n"
        ));
    }

    #[test]
    fn test_build_is_idempotent() {
        let snapshot = valid_snapshot();
        assert_eq!(build(&snapshot), build(&snapshot));
    }

    #[test]
    fn test_leadership_heading_keeps_double_space() {
        let doc = build(&valid_snapshot());
        assert!(doc.contains("### Leadership notified  (email)\n"));
        assert!(!doc.contains("### Leadership notified (email)"));
    }

    #[test]
    fn test_confirmations_all_unchecked() {
        let mut snapshot = valid_snapshot();
        snapshot.impacts_public = false;
        snapshot.vendor_impact = false;
        let doc = build(&snapshot);
        assert!(doc.ends_with(
            "### Confirmations\n\n- [ ] Impacts the public.\n- [ ] Involves CDT.\n- [ ] New app (ESD needs to know).\n- [ ] Impact a Vendors.\n"
        ));
    }

    #[test]
    fn test_section_headings_in_order() {
        let doc = build(&valid_snapshot());
        let headings: Vec<&str> = doc
            .lines()
            .filter_map(|line| line.strip_prefix("### "))
            .collect();
        assert_eq!(
            headings,
            vec![
                H_REQUESTER,
                H_BACKUP,
                H_TARGET_END,
                H_DESCRIPTION,
                H_BUSINESS_VALUE,
                H_IMPLEMENTATION,
                H_BACKOUT,
                H_VALIDATION,
                H_IMPACTED_GROUPS,
                H_LEADERSHIP,
                H_LAST_NOTIFIED_WHEN,
                H_LAST_NOTIFIED_HOW,
                H_EFFORT,
                H_CONFIRMATIONS,
            ]
        );
    }

    #[test]
    fn test_empty_dates_render_placeholder() {
        let doc = build(&FormSnapshot::default());
        assert!(doc.contains("### Target end date\n\n_ No response _\n"));
        assert!(doc.contains("### When were impacted users last notified?\n\n_ No response _\n"));
    }
}
