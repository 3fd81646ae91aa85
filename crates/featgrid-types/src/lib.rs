//! # Featgrid Types - Feature Record Model
//!
//! `featgrid-types` defines the read-only record model consumed by the
//! featgrid table engine: which browsers and release channels exist, what a
//! feature's Baseline availability looks like, and the per-browser test data
//! attached to each feature.
//!
//! Records are supplied per render call and owned by the caller. Nothing in
//! this crate mutates them; the rest of the engine treats a [`Feature`] as a
//! pure input.
//!
//! ## Core Types
//!
//! - [`Browser`] / [`Channel`]: the closed browser × release-track matrix
//! - [`BaselineStatus`] / [`BaselineInfo`]: cross-browser availability tier
//!   plus the optional newly/widely dates behind it
//! - [`FeatureDate`]: calendar date wrapper with a fixed `YYYY-MM-DD` wire
//!   form that also accepts RFC 3339 timestamps on input
//! - [`Feature`]: one row of the comparative table
//!
//! ## Quick Start
//!
//! ```rust
//! use featgrid_types::{BaselineInfo, BaselineStatus, Feature, FeatureDate};
//!
//! let feature = Feature::new("grid", "CSS Grid")
//!     .with_baseline(
//!         BaselineInfo::with_status(BaselineStatus::Widely)
//!             .low_date(FeatureDate::parse("2017-03-07").unwrap()),
//!     );
//!
//! assert_eq!(feature.baseline.as_ref().unwrap().status, Some(BaselineStatus::Widely));
//! ```

mod browser;
mod date;
mod feature;

pub use browser::{Browser, Channel};
pub use date::{DateParseError, FeatureDate};
pub use feature::{
    BaselineInfo, BaselineStatus, BrowserImplementation, ChannelData, Feature,
    ImplementationStatus, TC39_SPEC_PREFIX,
};
