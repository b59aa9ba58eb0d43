//! Utility modules for the RBAC dashboard
//!
//! - **error**: Error type and HTTP error mapping
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{RbacError, Result};
pub use logging::{LogLevel, init_logging};

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Check if a string is a valid email
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
