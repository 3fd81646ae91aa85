//! # Featgrid Columns - Column Registry and Cell Rendering
//!
//! `featgrid-columns` decides what each column of the comparative table
//! means and how each cell is computed from a feature record. It holds:
//!
//! - the immutable registry mapping every [`ColumnKey`] to its
//!   [`ColumnDefinition`] (dialog label, header, renderer, configuration),
//! - the Baseline classifier, including the widely-available date
//!   projection,
//! - the per-browser quality renderers with their override-precedence
//!   chain,
//! - the cell dispatcher tying the three together.
//!
//! Everything is a pure function of the feature record, the router
//! location's query string, and process-wide immutable statics. Rendering
//! never fails: a cell with nothing to show is [`CellContent::Empty`]. The
//! single error in the crate is [`ColumnError`], returned when a caller
//! asks a structurally browser-less column for its browser/channel pair,
//! a programmer error that must not be papered over with a default.
//!
//! ## Quick Start
//!
//! ```rust
//! use featgrid_columns::{render_cell, CellContent};
//! use featgrid_query::{ColumnKey, RouterLocation};
//! use featgrid_types::{BaselineInfo, BaselineStatus, Feature};
//!
//! let feature = Feature::new("grid", "CSS Grid")
//!     .with_baseline(BaselineInfo::with_status(BaselineStatus::Widely));
//! let location = RouterLocation::new("?columns=name,baseline_status");
//!
//! match render_cell(&feature, &location, ColumnKey::BaselineStatus) {
//!     CellContent::Baseline(cell) => assert_eq!(cell.chip.label, "Widely available"),
//!     other => panic!("unexpected cell: {other:?}"),
//! }
//! ```

mod baseline;
mod cell;
mod definition;
mod quality;

pub use baseline::{
    classify, BaselineCell, BaselineChip, ChipIcon, DateBlock, WIDELY_AVAILABLE_OFFSET_MONTHS,
};
pub use cell::{render_cell, CellContent};
pub use definition::{browser_channel, definition, ColumnDefinition, ColumnError, ColumnRenderer};
pub use quality::{
    format_percentage, render_experimental_quality, render_stable_quality, QualityCell,
    INSUFFICIENT_TEST_COVERAGE,
};

pub use featgrid_query::{ColumnKey, ColumnOptionKey};
