use urlencoding::encode;

use crate::config::issue::{GITHUB_BASE, LABELS};
use crate::errors::{AppError, AppResult};

/// Parameters of a pre-filled GitHub "new issue" page
#[derive(Debug, Clone, Default)]
pub struct IssueLink {
    pub owner: String,
    pub repo: String,
    pub title: Option<String>,
    pub template: Option<String>,
    pub body: Option<String>,
}

impl IssueLink {
    /// Build the issue-creation URL. Owner and repo are required; the
    /// optional parts are only added when non-empty.
    pub fn to_url(&self) -> AppResult<String> {
        let owner = self.owner.trim();
        let repo = self.repo.trim();
        if owner.is_empty() || repo.is_empty() {
            return Err(AppError::config(
                "Set owner and repo first (or use `crform build` and paste the body manually).",
            ));
        }

        let mut params = vec![format!("labels={}", encode(LABELS))];
        // Title and template are trimmed like form inputs; the body goes in verbatim.
        let optional = [
            ("title", self.title.as_deref().map(str::trim)),
            ("template", self.template.as_deref().map(str::trim)),
            ("body", self.body.as_deref()),
        ];
        for (key, value) in optional {
            if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                params.push(format!("{}={}", key, encode(value)));
            }
        }

        Ok(format!(
            "{}/{}/{}/issues/new?{}",
            GITHUB_BASE,
            encode(owner),
            encode(repo),
            params.join("&")
        ))
    }
}
