//! Column and column-option identifiers and their token parsing.
//!
//! Both key sets are closed. Their external tokens are stable strings used
//! in URLs and saved views, distinct from the Rust variant names; the column
//! registry and this codec must agree on them exactly, so the registry
//! resolves externally-derived strings only through these parsers.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a column of the comparative table.
///
/// Ten members: the feature name, the Baseline status, and one quality
/// column per browser × channel pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKey {
    Name,
    BaselineStatus,
    StableChrome,
    StableEdge,
    StableFirefox,
    StableSafari,
    ExperimentalChrome,
    ExperimentalEdge,
    ExperimentalFirefox,
    ExperimentalSafari,
}

/// Columns shown when the query string carries no usable `columns` value.
///
/// The table never renders fully empty; an absent or unrecognizable spec
/// falls back to this list.
pub const DEFAULT_COLUMNS: [ColumnKey; 6] = [
    ColumnKey::Name,
    ColumnKey::BaselineStatus,
    ColumnKey::StableChrome,
    ColumnKey::StableEdge,
    ColumnKey::StableFirefox,
    ColumnKey::StableSafari,
];

impl ColumnKey {
    /// Every column in canonical dialog order.
    pub const ALL: [ColumnKey; 10] = [
        ColumnKey::Name,
        ColumnKey::BaselineStatus,
        ColumnKey::StableChrome,
        ColumnKey::StableEdge,
        ColumnKey::StableFirefox,
        ColumnKey::StableSafari,
        ColumnKey::ExperimentalChrome,
        ColumnKey::ExperimentalEdge,
        ColumnKey::ExperimentalFirefox,
        ColumnKey::ExperimentalSafari,
    ];

    /// The stable external token used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKey::Name => "name",
            ColumnKey::BaselineStatus => "baseline_status",
            ColumnKey::StableChrome => "stable_chrome",
            ColumnKey::StableEdge => "stable_edge",
            ColumnKey::StableFirefox => "stable_firefox",
            ColumnKey::StableSafari => "stable_safari",
            ColumnKey::ExperimentalChrome => "experimental_chrome",
            ColumnKey::ExperimentalEdge => "experimental_edge",
            ColumnKey::ExperimentalFirefox => "experimental_firefox",
            ColumnKey::ExperimentalSafari => "experimental_safari",
        }
    }

    /// Resolves an external token, case-insensitively.
    pub fn from_token(token: &str) -> Option<ColumnKey> {
        COLUMN_TOKENS.get(token.to_ascii_lowercase().as_str()).copied()
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier for a column's optional sub-display.
///
/// Conceptually scoped to the Baseline-status column, but carried as a flat
/// global token set in the query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnOptionKey {
    BaselineStatusLowDate,
    BaselineStatusHighDate,
}

impl ColumnOptionKey {
    /// Every option in canonical order.
    pub const ALL: [ColumnOptionKey; 2] = [
        ColumnOptionKey::BaselineStatusLowDate,
        ColumnOptionKey::BaselineStatusHighDate,
    ];

    /// The stable external token used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnOptionKey::BaselineStatusLowDate => "baseline_status_low_date",
            ColumnOptionKey::BaselineStatusHighDate => "baseline_status_high_date",
        }
    }

    /// Resolves an external token, case-insensitively.
    pub fn from_token(token: &str) -> Option<ColumnOptionKey> {
        OPTION_TOKENS.get(token.to_ascii_lowercase().as_str()).copied()
    }
}

impl fmt::Display for ColumnOptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static COLUMN_TOKENS: Lazy<HashMap<&'static str, ColumnKey>> =
    Lazy::new(|| ColumnKey::ALL.iter().map(|&key| (key.as_str(), key)).collect());

static OPTION_TOKENS: Lazy<HashMap<&'static str, ColumnOptionKey>> = Lazy::new(|| {
    ColumnOptionKey::ALL
        .iter()
        .map(|&key| (key.as_str(), key))
        .collect()
});

/// Shared comma-list parsing: trim, drop empties, resolve case-insensitively,
/// drop unknown tokens and duplicates, preserve input order.
fn parse_token_list<T, F>(spec: &str, what: &str, resolve: F) -> Vec<T>
where
    T: Copy + PartialEq,
    F: Fn(&str) -> Option<T>,
{
    let mut keys = Vec::new();
    for token in spec.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match resolve(token) {
            Some(key) if !keys.contains(&key) => keys.push(key),
            Some(_) => {}
            None => log::debug!("dropping unrecognized {what} token {token:?}"),
        }
    }
    keys
}

/// Parses a comma-separated `columns` value.
///
/// An empty result (empty input, or nothing but unknown tokens) yields
/// [`DEFAULT_COLUMNS`], never an empty list.
///
/// ```rust
/// use featgrid_query::{parse_columns, ColumnKey};
///
/// assert_eq!(
///     parse_columns("name, baseline_status "),
///     vec![ColumnKey::Name, ColumnKey::BaselineStatus],
/// );
/// assert_eq!(parse_columns("holograms"), featgrid_query::DEFAULT_COLUMNS.to_vec());
/// ```
pub fn parse_columns(spec: &str) -> Vec<ColumnKey> {
    let keys = parse_token_list(spec, "column", ColumnKey::from_token);
    if keys.is_empty() {
        DEFAULT_COLUMNS.to_vec()
    } else {
        keys
    }
}

/// Parses a comma-separated `column_options` value.
///
/// Unlike [`parse_columns`], an empty result stays empty: no recognizable
/// options genuinely means no extra sub-displays.
pub fn parse_column_options(spec: &str) -> Vec<ColumnOptionKey> {
    parse_token_list(spec, "column option", ColumnOptionKey::from_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_column_tokens_round_trip() {
        for key in ColumnKey::ALL {
            assert_eq!(ColumnKey::from_token(key.as_str()), Some(key));
            // serde wire form matches the external token
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn test_option_tokens_round_trip() {
        for key in ColumnOptionKey::ALL {
            assert_eq!(ColumnOptionKey::from_token(key.as_str()), Some(key));
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn test_from_token_case_insensitive() {
        assert_eq!(ColumnKey::from_token("Baseline_Status"), Some(ColumnKey::BaselineStatus));
        assert_eq!(ColumnKey::from_token("STABLE_CHROME"), Some(ColumnKey::StableChrome));
        assert_eq!(
            ColumnOptionKey::from_token("BASELINE_STATUS_LOW_DATE"),
            Some(ColumnOptionKey::BaselineStatusLowDate)
        );
    }

    #[test]
    fn test_parse_columns_trims_and_lowercases() {
        assert_eq!(
            parse_columns("name, baseline_status "),
            vec![ColumnKey::Name, ColumnKey::BaselineStatus]
        );
        assert_eq!(
            parse_columns("Name,EXPERIMENTAL_SAFARI"),
            vec![ColumnKey::Name, ColumnKey::ExperimentalSafari]
        );
    }

    #[test]
    fn test_parse_columns_preserves_input_order() {
        assert_eq!(
            parse_columns("stable_safari,name"),
            vec![ColumnKey::StableSafari, ColumnKey::Name]
        );
    }

    #[test]
    fn test_parse_columns_drops_unknown_and_duplicates() {
        assert_eq!(
            parse_columns("name,holograms,name,stable_edge"),
            vec![ColumnKey::Name, ColumnKey::StableEdge]
        );
    }

    #[test]
    fn test_parse_columns_falls_back_to_default() {
        assert_eq!(parse_columns(""), DEFAULT_COLUMNS.to_vec());
        assert_eq!(parse_columns(" , ,"), DEFAULT_COLUMNS.to_vec());
        assert_eq!(parse_columns("bogus,tokens,only"), DEFAULT_COLUMNS.to_vec());
    }

    #[test]
    fn test_parse_column_options_empty_stays_empty() {
        assert_eq!(parse_column_options(""), Vec::new());
        assert_eq!(parse_column_options("bogus"), Vec::new());
    }

    #[test]
    fn test_parse_column_options_known_tokens() {
        assert_eq!(
            parse_column_options("baseline_status_high_date,baseline_status_low_date"),
            vec![
                ColumnOptionKey::BaselineStatusHighDate,
                ColumnOptionKey::BaselineStatusLowDate,
            ]
        );
    }

    proptest! {
        #[test]
        fn parse_columns_never_empty(spec in ".*") {
            let keys = parse_columns(&spec);
            prop_assert!(!keys.is_empty());
        }

        #[test]
        fn parse_columns_yields_known_keys_without_duplicates(spec in ".*") {
            let keys = parse_columns(&spec);
            for (i, key) in keys.iter().enumerate() {
                prop_assert!(ColumnKey::ALL.contains(key));
                prop_assert!(!keys[i + 1..].contains(key));
            }
        }

        #[test]
        fn parse_column_options_yields_known_keys(spec in ".*") {
            for key in parse_column_options(&spec) {
                prop_assert!(ColumnOptionKey::ALL.contains(&key));
            }
        }
    }
}
