//! Conversion between profile identifiers and their braced string form.
//!
//! Profile identifiers are written as `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}`.
//! Only that form is accepted when reading; bare, simple, and URN forms are
//! rejected so that a typo never silently becomes a different profile.

use crate::error::SettingsError;
use uuid::Uuid;

/// Format a GUID as a lowercase braced string.
pub fn guid_to_string(guid: &Uuid) -> String {
    guid.braced().to_string()
}

/// Parse a braced GUID string. Hex digits may be either case.
pub fn guid_from_string(value: &str) -> Result<Uuid, SettingsError> {
    let invalid = || SettingsError::InvalidGuid {
        value: value.to_string(),
    };

    let inner = value
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(invalid)?;

    // 8-4-4-4-12 with hyphens; anything shorter is a form we don't accept.
    if inner.len() != 36 {
        return Err(invalid());
    }

    Uuid::try_parse(inner).map_err(|_| invalid())
}
