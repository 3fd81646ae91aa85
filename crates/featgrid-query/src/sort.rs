//! Sort specification: wire form and the header-click direction cycle.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::columns::ColumnKey;

/// Sort direction for a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// The wire suffix: `asc` or `desc`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// A parsed `sort` parameter: column plus direction.
///
/// The wire form is a single `<column>_<direction>` token. Column tokens
/// themselves contain underscores, so the direction is the segment after the
/// last underscore.
///
/// Sort specs are never persisted; they are reconstructed from the query
/// string on every render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: ColumnKey,
    pub direction: SortDirection,
}

impl SortSpec {
    /// The sort applied when the query string carries no usable `sort`.
    pub const DEFAULT: SortSpec = SortSpec {
        column: ColumnKey::BaselineStatus,
        direction: SortDirection::Desc,
    };

    /// Ascending sort on a column.
    pub fn asc(column: ColumnKey) -> Self {
        SortSpec {
            column,
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on a column.
    pub fn desc(column: ColumnKey) -> Self {
        SortSpec {
            column,
            direction: SortDirection::Desc,
        }
    }

    /// Parses a `<column>_<asc|desc>` token, case-insensitively.
    ///
    /// Returns `None` for anything else; callers fall back to
    /// [`SortSpec::DEFAULT`].
    pub fn parse(token: &str) -> Option<SortSpec> {
        let token = token.trim();
        let (column, direction) = token.rsplit_once('_')?;
        let direction = match direction.to_ascii_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return None,
        };
        Some(SortSpec {
            column: ColumnKey::from_token(column)?,
            direction,
        })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.column.as_str(), self.direction.as_str())
    }
}

/// The sort produced by clicking a column header.
///
/// A 2-state cycle per column: a column currently sorted ascending flips to
/// descending; every other state (unsorted, a different column, or the same
/// column already descending) yields ascending. There is intentionally no
/// descending → unsorted transition; a third click re-enters ascending.
pub fn next_sort(current: Option<SortSpec>, clicked: ColumnKey) -> SortSpec {
    match current {
        Some(SortSpec {
            column,
            direction: SortDirection::Asc,
        }) if column == clicked => SortSpec::desc(clicked),
        _ => SortSpec::asc(clicked),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_asc_and_desc() {
        assert_eq!(SortSpec::parse("name_asc"), Some(SortSpec::asc(ColumnKey::Name)));
        assert_eq!(
            SortSpec::parse("baseline_status_desc"),
            Some(SortSpec::desc(ColumnKey::BaselineStatus))
        );
        assert_eq!(
            SortSpec::parse("experimental_firefox_asc"),
            Some(SortSpec::asc(ColumnKey::ExperimentalFirefox))
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(SortSpec::parse("Name_ASC"), Some(SortSpec::asc(ColumnKey::Name)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(SortSpec::parse(""), None);
        assert_eq!(SortSpec::parse("name"), None);
        assert_eq!(SortSpec::parse("name_sideways"), None);
        assert_eq!(SortSpec::parse("holograms_asc"), None);
        assert_eq!(SortSpec::parse("_asc"), None);
    }

    #[test]
    fn test_display_round_trip() {
        for key in ColumnKey::ALL {
            for spec in [SortSpec::asc(key), SortSpec::desc(key)] {
                assert_eq!(SortSpec::parse(&spec.to_string()), Some(spec));
            }
        }
    }

    #[test]
    fn test_default_sort() {
        assert_eq!(SortSpec::DEFAULT.to_string(), "baseline_status_desc");
    }

    #[test]
    fn test_next_sort_unsorted_goes_asc() {
        assert_eq!(next_sort(None, ColumnKey::Name), SortSpec::asc(ColumnKey::Name));
    }

    #[test]
    fn test_next_sort_other_column_goes_asc() {
        let current = Some(SortSpec::asc(ColumnKey::StableChrome));
        assert_eq!(next_sort(current, ColumnKey::Name), SortSpec::asc(ColumnKey::Name));
    }

    #[test]
    fn test_next_sort_asc_goes_desc() {
        let current = Some(SortSpec::asc(ColumnKey::Name));
        assert_eq!(next_sort(current, ColumnKey::Name), SortSpec::desc(ColumnKey::Name));
    }

    #[test]
    fn test_next_sort_desc_reenters_asc() {
        // The cycle has no descending -> unsorted transition.
        let current = Some(SortSpec::desc(ColumnKey::Name));
        assert_eq!(next_sort(current, ColumnKey::Name), SortSpec::asc(ColumnKey::Name));
    }
}
