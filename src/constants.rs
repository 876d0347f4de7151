//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::time::Duration;

/// Placeholder base URL used when no API URL is configured
pub const DEFAULT_API_URL: &str = "https://YOUR_API_ID.execute-api.us-east-1.amazonaws.com/dev";

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "USERS_API_URL";

/// Default log file, written next to the working directory
pub const DEFAULT_LOG_FILE: &str = "userdesk.log";

/// How long a success message stays on screen
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);

/// How long an error message stays on screen
pub const ERROR_DISPLAY: Duration = Duration::from_secs(5);

/// Minimum user name length, counted after trimming
pub const MIN_NAME_LEN: usize = 2;

/// Maximum user name length, counted after trimming
pub const MAX_NAME_LEN: usize = 100;

pub const EMPTY_NAME_MSG: &str = "Please enter a name";
pub const SHORT_NAME_MSG: &str = "Name must be at least 2 characters long";
pub const LONG_NAME_MSG: &str = "Name must be at most 100 characters long";
pub const FETCH_FAILED_MSG: &str = "Failed to fetch users. Please check if the API is running.";
pub const CREATE_FAILED_MSG: &str = "Failed to create user. Please try again.";

/// Placeholder shown for unparsable timestamps
pub const INVALID_DATE: &str = "Invalid Date";

/// Application name
pub const APP_NAME: &str = "UserDesk";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
