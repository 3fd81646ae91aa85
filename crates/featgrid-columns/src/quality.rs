//! Browser-quality cells: test-conformance percentages and their overrides.
//!
//! The stable-channel renderer layers a chain of special cases over the raw
//! percentage. The chain is data: an ordered rule list, highest precedence
//! first, first match wins. That keeps the precedence auditable and lets
//! each rule be tested in isolation.

use featgrid_types::{Browser, Channel, Feature, ImplementationStatus};
use serde::Serialize;

/// Feature identifiers whose WPT suites are known to under-test the
/// feature, making a percentage misleading.
pub const INSUFFICIENT_TEST_COVERAGE: &[&str] = &["float16array", "uint8array-base64-hex"];

/// Displayable content of a browser-quality cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityCell {
    /// No score available.
    Missing,
    /// Formatted pass percentage, e.g. `99.9%`.
    Percentage(String),
    /// Not applicable: TC39 features are outside WPT's scope.
    NotApplicable,
    /// Known insufficient test coverage; a percentage would mislead.
    InsufficientCoverage,
    /// The test run crashed.
    Crashed,
}

impl QualityCell {
    /// Plain-text rendering of the cell.
    pub fn text(&self) -> &str {
        match self {
            QualityCell::Missing => "-",
            QualityCell::Percentage(text) => text,
            QualityCell::NotApplicable => "n/a",
            QualityCell::InsufficientCoverage => "insufficient coverage",
            QualityCell::Crashed => "crashed",
        }
    }
}

/// Formats a pass fraction as a percentage with one decimal place.
///
/// An exact 100.0 after rounding collapses to `100` with no decimal.
///
/// ```rust
/// use featgrid_columns::format_percentage;
///
/// assert_eq!(format_percentage(0.999), "99.9%");
/// assert_eq!(format_percentage(1.0), "100%");
/// ```
pub fn format_percentage(score: f64) -> String {
    let formatted = format!("{:.1}", score * 100.0);
    if formatted == "100.0" {
        "100%".to_string()
    } else {
        format!("{formatted}%")
    }
}

struct OverrideRule {
    applies: fn(&Feature, Browser, Channel) -> bool,
    result: QualityCell,
}

fn run_crashed(feature: &Feature, browser: Browser, channel: Channel) -> bool {
    feature.did_crash(browser, channel)
}

fn coverage_insufficient(feature: &Feature, _: Browser, _: Channel) -> bool {
    INSUFFICIENT_TEST_COVERAGE.contains(&feature.id.as_str())
}

fn is_tc39(feature: &Feature, _: Browser, _: Channel) -> bool {
    feature.is_javascript_feature()
}

fn implementation_unavailable(feature: &Feature, browser: Browser, channel: Channel) -> bool {
    feature.implementation_status(browser, channel) == Some(ImplementationStatus::Unavailable)
}

/// Stable-channel override chain, highest precedence first.
static STABLE_OVERRIDES: &[OverrideRule] = &[
    OverrideRule {
        applies: run_crashed,
        result: QualityCell::Crashed,
    },
    OverrideRule {
        applies: coverage_insufficient,
        result: QualityCell::InsufficientCoverage,
    },
    OverrideRule {
        applies: is_tc39,
        result: QualityCell::NotApplicable,
    },
    OverrideRule {
        applies: implementation_unavailable,
        result: QualityCell::Missing,
    },
];

fn base_quality(feature: &Feature, browser: Browser, channel: Channel) -> QualityCell {
    match feature.score(browser, channel) {
        Some(score) => QualityCell::Percentage(format_percentage(score)),
        None => QualityCell::Missing,
    }
}

/// Renders the stable-channel quality cell for one browser.
pub fn render_stable_quality(feature: &Feature, browser: Browser) -> QualityCell {
    for rule in STABLE_OVERRIDES {
        if (rule.applies)(feature, browser, Channel::Stable) {
            return rule.result.clone();
        }
    }
    base_quality(feature, browser, Channel::Stable)
}

/// Renders the experimental-channel quality cell for one browser.
///
/// Percentage or missing only; none of the stable overrides apply.
pub fn render_experimental_quality(feature: &Feature, browser: Browser) -> QualityCell {
    base_quality(feature, browser, Channel::Experimental)
}
