//! Router location: the read-only query-string state the table reads.
//!
//! The router itself is an external collaborator; the table only ever sees
//! its `search` string. Column selection, column options, and the sort spec
//! are re-derived from it on every render; nothing is cached between
//! renders.

use std::borrow::Cow;

use crate::columns::{parse_column_options, parse_columns, ColumnKey, ColumnOptionKey};
use crate::sort::{next_sort, SortSpec};

/// Query parameter carrying the comma-separated column list.
pub const COLUMNS_PARAM: &str = "columns";
/// Query parameter carrying the comma-separated column-option list.
pub const COLUMN_OPTIONS_PARAM: &str = "column_options";
/// Query parameter carrying the sort spec token.
pub const SORT_PARAM: &str = "sort";
/// Query parameter carrying the pagination cursor offset.
pub const START_PARAM: &str = "start";

/// A snapshot of the router's location, reduced to its query string.
///
/// # Example
///
/// ```rust
/// use featgrid_query::{ColumnKey, RouterLocation, SortSpec};
///
/// let location = RouterLocation::new("?columns=name&sort=name_desc&start=50");
/// assert_eq!(location.columns(), vec![ColumnKey::Name]);
/// assert_eq!(location.sort(), SortSpec::desc(ColumnKey::Name));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterLocation {
    /// The query string, with or without its leading `?`.
    pub search: String,
}

impl RouterLocation {
    /// Wraps a query string.
    pub fn new(search: impl Into<String>) -> Self {
        RouterLocation {
            search: search.into(),
        }
    }

    fn pairs(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.search
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (pair, None),
            })
    }

    /// The percent-decoded value of a query parameter, if present.
    ///
    /// Parameter keys are exact; values are matched case-insensitively by
    /// the token parsers downstream.
    pub fn param(&self, key: &str) -> Option<String> {
        let raw = self
            .pairs()
            .find_map(|(k, v)| (k == key).then_some(v))?
            .unwrap_or("");
        let decoded = urlencoding::decode(raw)
            .map(Cow::into_owned)
            .unwrap_or_else(|_| raw.to_string());
        Some(decoded)
    }

    /// The selected columns, falling back to the default list.
    pub fn columns(&self) -> Vec<ColumnKey> {
        parse_columns(self.param(COLUMNS_PARAM).as_deref().unwrap_or(""))
    }

    /// The selected column options; absent means none.
    pub fn column_options(&self) -> Vec<ColumnOptionKey> {
        parse_column_options(self.param(COLUMN_OPTIONS_PARAM).as_deref().unwrap_or(""))
    }

    /// The sort spec carried by the location, if it parses.
    pub fn sort_spec(&self) -> Option<SortSpec> {
        SortSpec::parse(&self.param(SORT_PARAM)?)
    }

    /// The effective sort: the carried spec, or the default.
    pub fn sort(&self) -> SortSpec {
        self.sort_spec().unwrap_or(SortSpec::DEFAULT)
    }

    /// The query string produced by clicking a column header.
    ///
    /// Sets `sort` to the clicked column's next direction in the 2-state
    /// cycle and resets the pagination cursor `start` to 0. All other
    /// parameters keep their raw values and relative order; `sort` and
    /// `start` are appended if they were absent. The result always carries
    /// a leading `?`.
    pub fn sort_link(&self, clicked: ColumnKey) -> String {
        let sort = next_sort(self.sort_spec(), clicked).to_string();
        let mut rebuilt: Vec<String> = Vec::new();
        let mut saw_sort = false;
        let mut saw_start = false;

        for (key, value) in self.pairs() {
            if key == SORT_PARAM {
                rebuilt.push(format!("{SORT_PARAM}={sort}"));
                saw_sort = true;
            } else if key == START_PARAM {
                rebuilt.push(format!("{START_PARAM}=0"));
                saw_start = true;
            } else {
                match value {
                    Some(value) => rebuilt.push(format!("{key}={value}")),
                    None => rebuilt.push(key.to_string()),
                }
            }
        }
        if !saw_sort {
            rebuilt.push(format!("{SORT_PARAM}={sort}"));
        }
        if !saw_start {
            rebuilt.push(format!("{START_PARAM}=0"));
        }

        format!("?{}", rebuilt.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::DEFAULT_COLUMNS;
    use crate::sort::SortDirection;

    #[test]
    fn test_param_with_and_without_question_mark() {
        let with = RouterLocation::new("?sort=name_asc");
        let without = RouterLocation::new("sort=name_asc");
        assert_eq!(with.param("sort").as_deref(), Some("name_asc"));
        assert_eq!(without.param("sort").as_deref(), Some("name_asc"));
    }

    #[test]
    fn test_param_percent_decoding() {
        let location = RouterLocation::new("?columns=name%2Cbaseline_status");
        assert_eq!(location.param("columns").as_deref(), Some("name,baseline_status"));
        assert_eq!(
            location.columns(),
            vec![ColumnKey::Name, ColumnKey::BaselineStatus]
        );
    }

    #[test]
    fn test_param_missing() {
        let location = RouterLocation::new("?columns=name");
        assert_eq!(location.param("sort"), None);
    }

    #[test]
    fn test_columns_default_when_absent() {
        let location = RouterLocation::new("?sort=name_asc");
        assert_eq!(location.columns(), DEFAULT_COLUMNS.to_vec());
    }

    #[test]
    fn test_column_options_absent_is_empty() {
        let location = RouterLocation::new("");
        assert_eq!(location.column_options(), Vec::new());
    }

    #[test]
    fn test_sort_default_when_absent_or_malformed() {
        assert_eq!(RouterLocation::new("").sort(), SortSpec::DEFAULT);
        assert_eq!(RouterLocation::new("?sort=name_sideways").sort(), SortSpec::DEFAULT);
        assert_eq!(
            RouterLocation::new("?sort=stable_chrome_asc").sort(),
            SortSpec::asc(ColumnKey::StableChrome)
        );
    }

    #[test]
    fn test_sort_link_updates_sort_and_resets_start() {
        let location = RouterLocation::new("?columns=name,stable_chrome&sort=name_asc&start=50");
        assert_eq!(
            location.sort_link(ColumnKey::Name),
            "?columns=name,stable_chrome&sort=name_desc&start=0"
        );
    }

    #[test]
    fn test_sort_link_other_column_goes_asc() {
        let location = RouterLocation::new("?sort=name_desc&start=25");
        assert_eq!(
            location.sort_link(ColumnKey::StableSafari),
            "?sort=stable_safari_asc&start=0"
        );
    }

    #[test]
    fn test_sort_link_appends_missing_params() {
        let location = RouterLocation::new("?q=grid");
        assert_eq!(location.sort_link(ColumnKey::Name), "?q=grid&sort=name_asc&start=0");
    }

    #[test]
    fn test_sort_link_preserves_unrelated_params() {
        let location = RouterLocation::new("?q=css%20grid&page_size=25&sort=name_asc");
        assert_eq!(
            location.sort_link(ColumnKey::Name),
            "?q=css%20grid&page_size=25&sort=name_desc&start=0"
        );
    }

    #[test]
    fn test_sort_link_third_click_reenters_asc() {
        let first = RouterLocation::new("?start=10");
        let second = RouterLocation::new(first.sort_link(ColumnKey::Name));
        assert_eq!(second.sort().direction, SortDirection::Asc);
        let third = RouterLocation::new(second.sort_link(ColumnKey::Name));
        assert_eq!(third.sort().direction, SortDirection::Desc);
        let fourth = RouterLocation::new(third.sort_link(ColumnKey::Name));
        assert_eq!(fourth.sort().direction, SortDirection::Asc);
    }
}
