//! # Featgrid - Comparative Web-Platform Feature Table
//!
//! `featgrid` renders a comparative table of web-platform features across
//! browsers and release channels, deriving a per-feature Baseline
//! availability classification and per-browser test-conformance scores.
//! The table's columns, sort order, and per-column display options all
//! travel in a single serialized query string.
//!
//! This crate is the facade: it re-exports the engine crates and adds the
//! table view used by the `featgrid` binary.
//!
//! - [`featgrid_types`]: the feature record model
//! - [`featgrid_query`]: the query-string configuration codec
//! - [`featgrid_columns`]: column registry, Baseline classifier, renderers
//!
//! ## Quick Start
//!
//! ```rust
//! use featgrid::{build_table, RouterLocation};
//! use featgrid::{BaselineInfo, BaselineStatus, Feature};
//!
//! let features = vec![
//!     Feature::new("grid", "CSS Grid")
//!         .with_baseline(BaselineInfo::with_status(BaselineStatus::Widely)),
//! ];
//! let location = RouterLocation::new("?columns=name,baseline_status");
//!
//! let view = build_table(&features, &location);
//! assert_eq!(view.header, vec!["Feature", "Baseline"]);
//! assert_eq!(view.rows.len(), 1);
//! ```

mod table;

pub use table::{build_table, cell_text, render_term, sort_features, TableView};

pub use featgrid_columns::{
    browser_channel, classify, definition, format_percentage, render_cell,
    render_experimental_quality, render_stable_quality, BaselineCell, BaselineChip, CellContent,
    ChipIcon, ColumnDefinition, ColumnError, ColumnRenderer, DateBlock, QualityCell,
    INSUFFICIENT_TEST_COVERAGE, WIDELY_AVAILABLE_OFFSET_MONTHS,
};
pub use featgrid_query::{
    next_sort, parse_column_options, parse_columns, ColumnKey, ColumnOptionKey, RouterLocation,
    SortDirection, SortSpec, DEFAULT_COLUMNS,
};
pub use featgrid_types::{
    BaselineInfo, BaselineStatus, Browser, BrowserImplementation, Channel, ChannelData,
    DateParseError, Feature, FeatureDate, ImplementationStatus, TC39_SPEC_PREFIX,
};
