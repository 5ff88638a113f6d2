use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod errors;
mod form;
mod templates;
mod utils;

use config::files::{DEFAULT_SNAPSHOT, STDIN_MARKER};

const LONG_ABOUT: &str = "\
crform turns a change-request snapshot into a GitHub issue body.

A snapshot is a JSON file holding the answers of the change-request form:
requester, dates, plans, impacted groups, leadership contacts and the four
confirmation checkboxes. crform validates every field at once and, when the
snapshot is clean, renders the markdown body with the exact headings the
issue-form parser expects.

Nothing is stored and nothing is sent: the body goes to stdout or a file,
and `crform issue` prints a pre-filled new-issue link labelled
release + process.";

const AFTER_HELP: &str = "\
EXAMPLES:
    Create a blank snapshot to fill in:
        $ crform template

    Check the snapshot, listing every problem:
        $ crform validate change-request.json

    Render the issue body:
        $ crform build change-request.json > body.md

    Print a new-issue link with the body embedded:
        $ crform issue change-request.json --owner acme --repo ops --body

WORKFLOW:
    1. Run 'crform template' and fill in change-request.json
    2. Run 'crform validate' until it reports no problems
    3. Run 'crform build' and paste the body into a new issue
       labelled release + process (or use 'crform issue')

EXIT CODES:
    0  success
    1  snapshot failed validation
    2  input or configuration error

Set RUST_LOG=debug for diagnostic logging.";

#[derive(Parser)]
#[command(name = "crform")]
#[command(version)]
#[command(about = "Validate change-request answers and render the GitHub issue body")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = AFTER_HELP)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a blank snapshot file to fill in
    #[command(
        long_about = "\
Write a blank snapshot file to fill in.

The file lists every field of the change-request form with an empty value.
Dates are entered as YYYY-MM-DD; confirmations are true/false.",
        after_help = "\
EXAMPLES:
    $ crform template
    $ crform template cr-payroll.json
    $ crform template cr-payroll.json --force"
    )]
    Template {
        /// Where to write the snapshot
        #[arg(default_value = DEFAULT_SNAPSHOT)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate a snapshot and report every problem
    #[command(
        long_about = "\
Validate a snapshot and report every problem.

All rules run, so every failing field is listed at once:
  • requester email present and email-shaped
  • backup contact email-shaped when given
  • target end date a real date after today
  • last-notified date a real date, not in the future
  • description, business value and plans long enough
  • impacted groups, how notified and effort/project present
  • leadership notified: every address email-shaped",
        after_help = "\
EXAMPLES:
    $ crform validate change-request.json
    $ cat change-request.json | crform validate
    $ crform validate change-request.json --json

OUTPUT (failure):
    ✗ Snapshot has 2 problem(s):
      target_end_date: Target end date cannot be today.
      leadership_emails: Invalid email(s): bad-email"
    )]
    Validate {
        /// Snapshot file, or - for stdin
        #[arg(default_value = STDIN_MARKER)]
        path: String,

        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,

        /// Print failures as a JSON array on stdout
        #[arg(long)]
        json: bool,
    },

    /// Render the issue body from a valid snapshot
    #[command(
        long_about = "\
Render the issue body from a valid snapshot.

The snapshot is validated first; nothing is rendered if any rule fails.
Empty answers render as \"_ No response _\".",
        after_help = "\
EXAMPLES:
    $ crform build change-request.json
    $ crform build change-request.json -o body.md"
    )]
    Build {
        /// Snapshot file, or - for stdin
        #[arg(default_value = STDIN_MARKER)]
        path: String,

        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,

        /// Write the body to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a pre-filled GitHub new-issue link
    #[command(
        long_about = "\
Print a pre-filled GitHub new-issue link.

The link carries the labels release and process, and optionally a title,
an issue template name and the rendered body.",
        after_help = "\
EXAMPLES:
    $ crform issue change-request.json --owner acme --repo ops
    $ crform issue change-request.json --owner acme --repo ops --title \"CR: payroll\" --body"
    )]
    Issue {
        /// Snapshot file, or - for stdin
        #[arg(default_value = STDIN_MARKER)]
        path: String,

        /// Repository owner or organisation
        #[arg(long, default_value = "")]
        owner: String,

        /// Repository name
        #[arg(long, default_value = "")]
        repo: String,

        /// Issue title
        #[arg(long)]
        title: Option<String>,

        /// Issue template file name
        #[arg(long)]
        template: Option<String>,

        /// Embed the rendered body in the link
        #[arg(long)]
        body: bool,

        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Template { path, force } => {
            commands::template::run(commands::template::TemplateOptions { path, force })
        }
        Commands::Validate { path, today, json } => {
            commands::validate::run(commands::validate::ValidateOptions { path, today, json })
        }
        Commands::Build { path, today, output } => {
            commands::build::run(commands::build::BuildOptions { path, today, output })
        }
        Commands::Issue {
            path,
            owner,
            repo,
            title,
            template,
            body,
            today,
        } => commands::issue::run(commands::issue::IssueOptions {
            path,
            today,
            owner,
            repo,
            title,
            template,
            include_body: body,
        }),
    };

    if let Err(e) = result {
        log::debug!("command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
