//! Menu constants, field validation, and search helpers.

use crate::error::CoreError;
use crate::types::{DbId, SortKey};

/* --------------------------------------------------------------------------
   Constants
   -------------------------------------------------------------------------- */

/// Parent id of top-level menus.
pub const ROOT_PARENT_ID: DbId = 0;

/// Sort key given to menus created without one.
pub const DEFAULT_SORT_KEY: SortKey = 1;

/// Maximum length for a menu name.
pub const MAX_MENU_NAME_LEN: usize = 100;

/// Maximum length for the module and url segments.
pub const MAX_ROUTE_SEGMENT_LEN: usize = 200;

/* --------------------------------------------------------------------------
   Validation
   -------------------------------------------------------------------------- */

/// Validate the required fields of a new menu.
///
/// Fields are checked in a fixed order (name, module, url) and only the
/// first failure is reported.
pub fn validate_required_fields(name: &str, module: &str, url: &str) -> Result<(), CoreError> {
    validate_field("name", name, MAX_MENU_NAME_LEN)?;
    validate_field("module", module, MAX_ROUTE_SEGMENT_LEN)?;
    validate_field("url", url, MAX_ROUTE_SEGMENT_LEN)?;
    Ok(())
}

/// Validate the string fields present in a partial update.
///
/// Absent fields are skipped; a present field must satisfy the same rules
/// as on creation.
pub fn validate_present_fields(
    name: Option<&str>,
    module: Option<&str>,
    url: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(name) = name {
        validate_field("name", name, MAX_MENU_NAME_LEN)?;
    }
    if let Some(module) = module {
        validate_field("module", module, MAX_ROUTE_SEGMENT_LEN)?;
    }
    if let Some(url) = url {
        validate_field("url", url, MAX_ROUTE_SEGMENT_LEN)?;
    }
    Ok(())
}

fn validate_field(label: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{label} can not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{label} too long: {} chars (max {max_len})",
            value.chars().count()
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Search
   -------------------------------------------------------------------------- */

/// Trim a free-text search term. Blank input means "no filter".
pub fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Build an `ILIKE ... ESCAPE '\'` pattern that matches `term` as a
/// substring, with `%`, `_` and `\` in the term taken literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Case-insensitive substring test, the in-process counterpart of
/// [`contains_pattern`].
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/* --------------------------------------------------------------------------
   Routes
   -------------------------------------------------------------------------- */

/// The console route a menu points at: `/` + module + url.
///
/// ```
/// use backoffice_core::menu::route_key;
/// assert_eq!(route_key("admin", "/menu/list"), "/admin/menu/list");
/// ```
pub fn route_key(module: &str, url: &str) -> String {
    format!("/{module}{url}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
