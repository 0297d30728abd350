//! The permitted-id set carried from an authorization group to every
//! menu query.
//!
//! Authorization groups persist their grants as a comma-delimited list of
//! menu ids (the `rules` column). [`MenuIdSet`] is the parsed form: it is
//! built once at the permission-resolution boundary and passed around as a
//! typed value from then on.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// An ordered, de-duplicated set of menu ids.
///
/// Serializes as a JSON array of integers. Its `Display` form is the
/// storage encoding (`"1,3,5"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuIdSet(BTreeSet<DbId>);

impl MenuIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stored rule list.
    ///
    /// Tokens are separated by commas and/or whitespace. Tokens that are not
    /// positive integers are dropped without error, so malformed input
    /// degrades to fewer permissions rather than a failure.
    pub fn parse(rules: &str) -> Self {
        rules
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .filter_map(|token| token.parse::<DbId>().ok())
            .filter(|id| *id > 0)
            .collect()
    }

    pub fn contains(&self, id: DbId) -> bool {
        self.0.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids in ascending order, suitable for binding as a `BIGINT[]`.
    pub fn to_vec(&self) -> Vec<DbId> {
        self.0.iter().copied().collect()
    }

    /// Render the set as a literal SQL list body (`1,3,5`).
    ///
    /// Returns `None` for an empty set since `IN ()` is not valid SQL.
    /// The output only ever contains decimal digits and commas.
    pub fn to_sql_list(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for MenuIdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for id in &self.0 {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{id}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<DbId> for MenuIdSet {
    fn from_iter<I: IntoIterator<Item = DbId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[DbId; N]> for MenuIdSet {
    fn from(ids: [DbId; N]) -> Self {
        ids.into_iter().collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_delimited_rules() {
        let ids = MenuIdSet::parse("1,3,5");
        assert_eq!(ids.to_vec(), vec![1, 3, 5]);
    }

    #[test]
    fn parses_mixed_whitespace_and_commas() {
        let ids = MenuIdSet::parse(" 7 ,2\n 9\t,, 2 ");
        assert_eq!(ids.to_vec(), vec![2, 7, 9]);
    }

    #[test]
    fn drops_non_numeric_tokens() {
        let ids = MenuIdSet::parse("1,abc,4x,,-2,0,8");
        assert_eq!(ids.to_vec(), vec![1, 8]);
    }

    #[test]
    fn empty_rules_give_empty_set() {
        assert!(MenuIdSet::parse("").is_empty());
        assert!(MenuIdSet::parse("  , ,").is_empty());
    }

    #[test]
    fn display_is_storage_encoding() {
        let ids = MenuIdSet::from([5, 1, 3]);
        assert_eq!(ids.to_string(), "1,3,5");
        assert_eq!(MenuIdSet::parse(&ids.to_string()), ids);
    }

    #[test]
    fn sql_list_is_none_for_empty_set() {
        assert_eq!(MenuIdSet::new().to_sql_list(), None);
        assert_eq!(
            MenuIdSet::from([12, 4]).to_sql_list().as_deref(),
            Some("4,12")
        );
    }

    #[test]
    fn serializes_as_json_array() {
        let ids = MenuIdSet::from([3, 1]);
        assert_eq!(serde_json::to_string(&ids).unwrap(), "[1,3]");
    }
}
