//! Collection and document name validation

use vsp_domain::error::{Error, Result};

use crate::constants::MAX_NAME_LENGTH;

/// Reject names that are empty, too long, or could escape a directory
pub fn validate_name(what: &str, name: &str) -> Result<()> {
    validate_name_with_limit(what, name, MAX_NAME_LENGTH)
}

/// Like [`validate_name`] with a caller-supplied byte limit
///
/// Providers that decorate a name before it hits the filesystem pass the
/// limit left after the decoration.
pub fn validate_name_with_limit(what: &str, name: &str, max_len: usize) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_argument(format!("{} cannot be empty", what)));
    }
    if name.len() > max_len {
        return Err(Error::invalid_argument(format!(
            "{} exceeds {} bytes",
            what, max_len
        )));
    }
    if name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
        return Err(Error::invalid_argument(format!(
            "{} '{}' contains path components",
            what, name
        )));
    }
    Ok(())
}
