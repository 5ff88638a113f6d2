// Policy constants for change-request validation and issue rendering.
// Business rules that are expected to change live here rather than inline.

/// Minimum trimmed lengths for the long-text fields
pub mod min_len {
    pub const DESCRIPTION: usize = 30;
    pub const BUSINESS_VALUE: usize = 15;
    pub const IMPLEMENTATION_PLAN: usize = 15;
    pub const BACKOUT_PLAN: usize = 10;
    pub const VALIDATION_PLAN: usize = 10;
}

/// Date rules
pub mod dates {
    /// Whether the target end date may fall on the current day
    pub const TARGET_MAY_BE_TODAY: bool = false;
}

/// Issue rendering constants
pub mod issue {
    /// Placeholder the issue-form parser expects for empty answers
    pub const NO_RESPONSE: &str = "_ No response _";

    /// Labels applied to every generated issue
    pub const LABELS: &str = "release,process";

    /// GitHub host used for the new-issue link
    pub const GITHUB_BASE: &str = "https://github.com";
}

/// File defaults
pub mod files {
    /// Snapshot file written by `crform template`
    pub const DEFAULT_SNAPSHOT: &str = "change-request.json";

    /// Path argument meaning "read from stdin"
    pub const STDIN_MARKER: &str = "-";
}

/// Process exit codes
pub mod exit {
    pub const VALIDATION_FAILED: i32 = 1;
    pub const INPUT_ERROR: i32 = 2;
}
