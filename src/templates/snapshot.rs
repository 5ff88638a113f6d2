/// Blank snapshot written by `crform template`
pub const SNAPSHOT_TEMPLATE: &str = r#"{
  "requester_email": "",
  "backup_contact_email": "",
  "target_end_date": "",
  "last_notified_date": "",
  "description": "",
  "business_value": "",
  "implementation_plan": "",
  "backout_plan": "",
  "validation_plan": "",
  "impacted_groups": "",
  "leadership_emails": "",
  "last_notified_how": "",
  "effort_or_project": "",
  "impacts_public": false,
  "involves_cdt": false,
  "new_app_esd": false,
  "vendor_impact": false
}
"#;
