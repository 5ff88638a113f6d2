use crate::commands::build::next_step_hint;
use crate::commands::validate::{ensure_valid, resolve_today};
use crate::errors::AppResult;
use crate::form::document::build;
use crate::form::issue::IssueLink;
use crate::utils::fs::load_snapshot;

#[derive(Debug, Clone, Default)]
pub struct IssueOptions {
    pub path: String,
    pub today: Option<String>,
    pub owner: String,
    pub repo: String,
    pub title: Option<String>,
    pub template: Option<String>,
    pub include_body: bool,
}

pub fn run(options: IssueOptions) -> AppResult<()> {
    let url = issue_url(&options)?;
    println!("{}", url);
    println!("{}", next_step_hint());
    Ok(())
}

fn issue_url(options: &IssueOptions) -> AppResult<String> {
    let snapshot = load_snapshot(&options.path)?;
    let today = resolve_today(options.today.as_deref())?;
    ensure_valid(&snapshot, today)?;

    let link = IssueLink {
        owner: options.owner.clone(),
        repo: options.repo.clone(),
        title: options.title.clone(),
        template: options.template.clone(),
        body: options.include_body.then(|| build(&snapshot)),
    };
    let url = link.to_url()?;
    log::info!("issue link for {}/{}: {} bytes", options.owner, options.repo, url.len());
    Ok(url)
}
