//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// PROBLEM DEFAULTS
// =============================================================================

/// Default time limit in milliseconds applied when a problem omits one
pub const DEFAULT_TIME_LIMIT_MS: i32 = 2000;

/// Default memory limit in megabytes applied when a problem omits one
pub const DEFAULT_MEMORY_LIMIT_MB: i32 = 256;

/// Maximum problem title length
pub const MAX_PROBLEM_TITLE_LENGTH: u64 = 200;

/// Maximum problem description length
pub const MAX_PROBLEM_DESCRIPTION_LENGTH: u64 = 65536;

// =============================================================================
// SUBMISSION DEFAULTS
// =============================================================================

/// Status stamped on a submission when it is first recorded
pub const SUBMISSION_STATUS_QUEUED: &str = "QUEUED";

/// Maximum submitted source length
pub const MAX_SUBMISSION_CODE_LENGTH: u64 = 262144;
