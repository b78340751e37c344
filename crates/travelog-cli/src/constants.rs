//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// - 0: Success
/// - 1: General error
/// - 2: Usage error (reserved by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    pub const FAILURE: i32 = 1;

    /// Entry id matched nothing.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid flag value or a rejected entry.
    pub const INVALID_INPUT: i32 = 4;
}
