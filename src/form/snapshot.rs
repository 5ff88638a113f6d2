use serde::{Deserialize, Serialize};
use std::fmt;

/// Field identifiers carried by validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    RequesterEmail,
    BackupContactEmail,
    TargetEndDate,
    LastNotifiedDate,
    Description,
    BusinessValue,
    ImplementationPlan,
    BackoutPlan,
    ValidationPlan,
    ImpactedGroups,
    LeadershipEmails,
    LastNotifiedHow,
    EffortOrProject,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::RequesterEmail => "requester_email",
            Field::BackupContactEmail => "backup_contact_email",
            Field::TargetEndDate => "target_end_date",
            Field::LastNotifiedDate => "last_notified_date",
            Field::Description => "description",
            Field::BusinessValue => "business_value",
            Field::ImplementationPlan => "implementation_plan",
            Field::BackoutPlan => "backout_plan",
            Field::ValidationPlan => "validation_plan",
            Field::ImpactedGroups => "impacted_groups",
            Field::LeadershipEmails => "leadership_emails",
            Field::LastNotifiedHow => "last_notified_how",
            Field::EffortOrProject => "effort_or_project",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form values at the moment of validation or rendering.
///
/// Keys follow the snake_case field identifiers; the element ids of the
/// browser form are accepted as aliases so exported form data loads as-is.
/// A document must use one spelling per field: giving both the identifier
/// and its alias (e.g. `effort_or_project` and `effort`) is rejected as a
/// duplicate field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSnapshot {
    #[serde(alias = "user_email")]
    pub requester_email: String,
    #[serde(alias = "backup_contact")]
    pub backup_contact_email: String,
    #[serde(alias = "target_end_date_picker")]
    pub target_end_date: String,
    #[serde(alias = "last_notified_when_picker")]
    pub last_notified_date: String,

    pub description: String,
    pub business_value: String,
    pub implementation_plan: String,
    pub backout_plan: String,
    pub validation_plan: String,

    pub impacted_groups: String,
    #[serde(alias = "impacted_users_emails")]
    pub leadership_emails: String,
    pub last_notified_how: String,
    #[serde(alias = "effort")]
    pub effort_or_project: String,

    #[serde(alias = "chk_impacts_public")]
    pub impacts_public: bool,
    #[serde(alias = "chk_involves_cdt")]
    pub involves_cdt: bool,
    #[serde(alias = "chk_new_app_esd")]
    pub new_app_esd: bool,
    #[serde(alias = "chk_vendor_impact")]
    pub vendor_impact: bool,
}

impl FormSnapshot {
    /// Parse a JSON snapshot and trim every text value
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let snapshot: FormSnapshot = serde_json::from_str(content)?;
        Ok(snapshot.trimmed())
    }

    /// Copy of the snapshot with surrounding whitespace removed from every text value
    pub fn trimmed(&self) -> Self {
        let t = |s: &String| s.trim().to_string();
        FormSnapshot {
            requester_email: t(&self.requester_email),
            backup_contact_email: t(&self.backup_contact_email),
            target_end_date: t(&self.target_end_date),
            last_notified_date: t(&self.last_notified_date),
            description: t(&self.description),
            business_value: t(&self.business_value),
            implementation_plan: t(&self.implementation_plan),
            backout_plan: t(&self.backout_plan),
            validation_plan: t(&self.validation_plan),
            impacted_groups: t(&self.impacted_groups),
            leadership_emails: t(&self.leadership_emails),
            last_notified_how: t(&self.last_notified_how),
            effort_or_project: t(&self.effort_or_project),
            ..self.clone()
        }
    }
}
