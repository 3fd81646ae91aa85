//! # Featgrid Query - Table Configuration Codec
//!
//! `featgrid-query` round-trips the table's configuration through a flat
//! query string: which columns are shown, which per-column sub-displays are
//! enabled, and how the table is sorted. The whole configuration travels in
//! three parameters:
//!
//! | Parameter | Content | Fallback |
//! |-----------|---------|----------|
//! | `columns` | comma-separated [`ColumnKey`] tokens | fixed default column list |
//! | `column_options` | comma-separated [`ColumnOptionKey`] tokens | empty |
//! | `sort` | single `<column>_<asc\|desc>` token | `baseline_status_desc` |
//!
//! Parsing is deliberately forgiving: tokens are case-insensitive, whitespace
//! is trimmed, and unrecognized tokens are silently dropped so old clients
//! and new servers never break each other. Nothing in this crate returns an
//! error.
//!
//! ## Quick Start
//!
//! ```rust
//! use featgrid_query::{ColumnKey, RouterLocation};
//!
//! let location = RouterLocation::new("?columns=name,baseline_status&sort=name_asc");
//! assert_eq!(
//!     location.columns(),
//!     vec![ColumnKey::Name, ColumnKey::BaselineStatus],
//! );
//! assert_eq!(location.sort().to_string(), "name_asc");
//!
//! // A header click cycles the sort and resets pagination.
//! assert_eq!(
//!     location.sort_link(ColumnKey::Name),
//!     "?columns=name,baseline_status&sort=name_desc&start=0",
//! );
//! ```

mod columns;
mod location;
mod sort;

pub use columns::{
    parse_column_options, parse_columns, ColumnKey, ColumnOptionKey, DEFAULT_COLUMNS,
};
pub use location::{RouterLocation, COLUMNS_PARAM, COLUMN_OPTIONS_PARAM, SORT_PARAM, START_PARAM};
pub use sort::{next_sort, SortDirection, SortSpec};
