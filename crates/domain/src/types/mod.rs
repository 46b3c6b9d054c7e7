//! Wire entities exchanged with the PaperTrail API
//!
//! All entities serialize with camelCase field names to match the service's
//! JSON contract.

pub mod content;
pub mod health;
pub mod registration;

pub use content::MessageLogContent;
pub use health::{ComponentHealth, Health, HealthComponents};
pub use registration::{AuditLogRegistration, MessageLogRegistration};

use crate::errors::{PaperTrailError, Result};

/// Characters that would change the meaning of a URL path segment.
const RESERVED_IDENTIFIER_CHARS: [char; 5] = ['/', '\\', '?', '#', '%'];

/// Check that `value` can be used as a single URL path segment.
///
/// Rejects blank values, the dot segments `.` and `..`, control characters
/// and any of `/ \ ? # %`.
///
/// # Errors
/// Returns [`PaperTrailError::InvalidInput`] naming `field`.
pub fn validate_identifier(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PaperTrailError::InvalidInput(format!("{field} must not be blank")));
    }
    if value == "." || value == ".." {
        return Err(PaperTrailError::InvalidInput(format!("{field} must not be a dot segment")));
    }
    if let Some(c) =
        value.chars().find(|c| c.is_control() || RESERVED_IDENTIFIER_CHARS.contains(c))
    {
        return Err(PaperTrailError::InvalidInput(format!(
            "{field} contains reserved character {c:?}"
        )));
    }
    Ok(())
}
