//! The column registry: one immutable definition per column key.
//!
//! The registry is total over the closed [`ColumnKey`] set and is resolved
//! by pattern match, so there is no lookup-failure path. Callers holding an
//! externally-derived string must resolve it through the featgrid-query
//! codec first; only valid keys reach this module.

use featgrid_query::{ColumnKey, ColumnOptionKey};
use featgrid_types::{Browser, Channel};
use thiserror::Error;

/// Error for contract violations against the registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColumnError {
    /// The column structurally has no browser/channel pair.
    ///
    /// Silently substituting a default browser here would corrupt displayed
    /// data, so the violation surfaces as an error instead.
    #[error("column `{0}` has no browser/channel pair")]
    NoBrowserChannel(ColumnKey),
}

/// Which rendering family a column belongs to, with the configuration that
/// family needs.
///
/// A tagged closed set rather than a function table: dispatching by match
/// keeps totality checkable by the compiler and the per-family
/// configuration impossible to mis-wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnRenderer {
    /// Feature display name plus its first spec link.
    FeatureName,
    /// Baseline chip with optional date sub-displays.
    Baseline,
    /// Test-conformance percentage for one browser on one channel.
    Quality { browser: Browser, channel: Channel },
}

/// Immutable definition of one table column.
///
/// Constructed once as process-wide static data and never mutated.
#[derive(Debug)]
pub struct ColumnDefinition {
    pub key: ColumnKey,
    /// Label shown in the column-configuration dialog.
    pub dialog_label: &'static str,
    /// Header text shown at the top of the column.
    pub header: &'static str,
    /// Rendering family; `None` renders every cell empty.
    pub renderer: Option<ColumnRenderer>,
    /// Sub-display options this column supports.
    pub options: &'static [ColumnOptionKey],
}

static NAME: ColumnDefinition = ColumnDefinition {
    key: ColumnKey::Name,
    dialog_label: "Feature name",
    header: "Feature",
    renderer: Some(ColumnRenderer::FeatureName),
    options: &[],
};

static BASELINE_STATUS: ColumnDefinition = ColumnDefinition {
    key: ColumnKey::BaselineStatus,
    dialog_label: "Baseline status",
    header: "Baseline",
    renderer: Some(ColumnRenderer::Baseline),
    options: &[
        ColumnOptionKey::BaselineStatusLowDate,
        ColumnOptionKey::BaselineStatusHighDate,
    ],
};

static STABLE_CHROME: ColumnDefinition = ColumnDefinition {
    key: ColumnKey::StableChrome,
    dialog_label: "Chrome (stable)",
    header: "Chrome",
    renderer: Some(ColumnRenderer::Quality {
        browser: Browser::Chrome,
        channel: Channel::Stable,
    }),
    options: &[],
};

static STABLE_EDGE: ColumnDefinition = ColumnDefinition {
    key: ColumnKey::StableEdge,
    dialog_label: "Edge (stable)",
    header: "Edge",
    renderer: Some(ColumnRenderer::Quality {
        browser: Browser::Edge,
        channel: Channel::Stable,
    }),
    options: &[],
};

static STABLE_FIREFOX: ColumnDefinition = ColumnDefinition {
    key: ColumnKey::StableFirefox,
    dialog_label: "Firefox (stable)",
    header: "Firefox",
    renderer: Some(ColumnRenderer::Quality {
        browser: Browser::Firefox,
        channel: Channel::Stable,
    }),
    options: &[],
};

static STABLE_SAFARI: ColumnDefinition = ColumnDefinition {
    key: ColumnKey::StableSafari,
    dialog_label: "Safari (stable)",
    header: "Safari",
    renderer: Some(ColumnRenderer::Quality {
        browser: Browser::Safari,
        channel: Channel::Stable,
    }),
    options: &[],
};

static EXPERIMENTAL_CHROME: ColumnDefinition = ColumnDefinition {
    key: ColumnKey::ExperimentalChrome,
    dialog_label: "Chrome (experimental)",
    header: "Chrome (exp.)",
    renderer: Some(ColumnRenderer::Quality {
        browser: Browser::Chrome,
        channel: Channel::Experimental,
    }),
    options: &[],
};

static EXPERIMENTAL_EDGE: ColumnDefinition = ColumnDefinition {
    key: ColumnKey::ExperimentalEdge,
    dialog_label: "Edge (experimental)",
    header: "Edge (exp.)",
    renderer: Some(ColumnRenderer::Quality {
        browser: Browser::Edge,
        channel: Channel::Experimental,
    }),
    options: &[],
};

static EXPERIMENTAL_FIREFOX: ColumnDefinition = ColumnDefinition {
    key: ColumnKey::ExperimentalFirefox,
    dialog_label: "Firefox (experimental)",
    header: "Firefox (exp.)",
    renderer: Some(ColumnRenderer::Quality {
        browser: Browser::Firefox,
        channel: Channel::Experimental,
    }),
    options: &[],
};

static EXPERIMENTAL_SAFARI: ColumnDefinition = ColumnDefinition {
    key: ColumnKey::ExperimentalSafari,
    dialog_label: "Safari (experimental)",
    header: "Safari (exp.)",
    renderer: Some(ColumnRenderer::Quality {
        browser: Browser::Safari,
        channel: Channel::Experimental,
    }),
    options: &[],
};

/// Resolves a column key to its definition. Total over [`ColumnKey`].
pub fn definition(key: ColumnKey) -> &'static ColumnDefinition {
    match key {
        ColumnKey::Name => &NAME,
        ColumnKey::BaselineStatus => &BASELINE_STATUS,
        ColumnKey::StableChrome => &STABLE_CHROME,
        ColumnKey::StableEdge => &STABLE_EDGE,
        ColumnKey::StableFirefox => &STABLE_FIREFOX,
        ColumnKey::StableSafari => &STABLE_SAFARI,
        ColumnKey::ExperimentalChrome => &EXPERIMENTAL_CHROME,
        ColumnKey::ExperimentalEdge => &EXPERIMENTAL_EDGE,
        ColumnKey::ExperimentalFirefox => &EXPERIMENTAL_FIREFOX,
        ColumnKey::ExperimentalSafari => &EXPERIMENTAL_SAFARI,
    }
}

/// The browser/channel pair a quality column targets.
///
/// Errs for the name and Baseline columns, which structurally have none.
pub fn browser_channel(key: ColumnKey) -> Result<(Browser, Channel), ColumnError> {
    match definition(key).renderer {
        Some(ColumnRenderer::Quality { browser, channel }) => Ok((browser, channel)),
        _ => Err(ColumnError::NoBrowserChannel(key)),
    }
}
