/// Exit codes for rulint, following Ruff's convention
///
/// These exit codes let users and CI/CD systems distinguish between
/// different outcomes.
/// Success - No findings reported
pub const SUCCESS: i32 = 0;

/// Findings reported - One or more lint messages were produced
pub const FINDINGS: i32 = 1;

/// Tool error - Configuration error, file access error, or a failing checker
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{FINDINGS, SUCCESS, TOOL_ERROR};

    /// Exit with success code (0)
    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    /// Exit with findings code (1)
    pub fn findings() -> ! {
        std::process::exit(FINDINGS);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
