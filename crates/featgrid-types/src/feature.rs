//! The feature record: one row of the comparative table.
//!
//! A [`Feature`] bundles the display name, Baseline availability info, and
//! the per-browser-per-channel WPT results the quality columns read. The
//! record is read-only to the table engine; accessors here expose the few
//! derived facts the renderers need (scores, implementation status, the
//! TC39 and crashed-run predicates).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::browser::{Browser, Channel};
use crate::date::FeatureDate;

/// Spec-link prefix identifying JavaScript (TC39) features.
///
/// WPT does not cover TC39 proposals, so quality columns render these as
/// not applicable rather than as missing data.
pub const TC39_SPEC_PREFIX: &str = "https://tc39.es/";

/// A feature's cross-browser availability tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineStatus {
    /// Not yet available in all tracked browsers.
    Limited,
    /// Available in the latest stable release of every tracked browser.
    Newly,
    /// Newly available long enough to be safe to rely on broadly.
    Widely,
}

impl BaselineStatus {
    /// Ordering rank: limited < newly < widely.
    pub fn rank(self) -> u8 {
        match self {
            BaselineStatus::Limited => 0,
            BaselineStatus::Newly => 1,
            BaselineStatus::Widely => 2,
        }
    }
}

/// Baseline availability info attached to a feature.
///
/// `status` may be absent for features the Baseline process has not yet
/// classified; the table renders nothing for those, which is distinct from
/// every known status.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BaselineInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BaselineStatus>,
    /// Date the feature became newly available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_date: Option<FeatureDate>,
    /// Date the feature became widely available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_date: Option<FeatureDate>,
}

impl BaselineInfo {
    /// Creates info with a known status and no dates.
    pub fn with_status(status: BaselineStatus) -> Self {
        BaselineInfo {
            status: Some(status),
            low_date: None,
            high_date: None,
        }
    }

    /// Sets the newly-available date.
    pub fn low_date(mut self, date: FeatureDate) -> Self {
        self.low_date = Some(date);
        self
    }

    /// Sets the widely-available date.
    pub fn high_date(mut self, date: FeatureDate) -> Self {
        self.high_date = Some(date);
        self
    }
}

/// Whether a browser ships the feature at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImplementationStatus {
    Available,
    Unavailable,
}

/// A browser's implementation record for one feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrowserImplementation {
    pub status: ImplementationStatus,
    /// Version the feature first shipped in, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<FeatureDate>,
}

impl BrowserImplementation {
    /// An available implementation with no version info.
    pub fn available() -> Self {
        BrowserImplementation {
            status: ImplementationStatus::Available,
            version: None,
            date: None,
        }
    }

    /// An unavailable implementation.
    pub fn unavailable() -> Self {
        BrowserImplementation {
            status: ImplementationStatus::Unavailable,
            version: None,
            date: None,
        }
    }
}

/// Test and implementation data for one browser on one channel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelData {
    /// WPT pass fraction in `0.0..=1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<BrowserImplementation>,
    /// Free-form run metadata from the test harness.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl ChannelData {
    /// Data with just a pass fraction.
    pub fn with_score(score: f64) -> Self {
        ChannelData {
            score: Some(score),
            implementation: None,
            metadata: None,
        }
    }

    /// Sets the implementation record.
    pub fn implementation(mut self, implementation: BrowserImplementation) -> Self {
        self.implementation = Some(implementation);
        self
    }

    /// Sets the run metadata.
    pub fn metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// One feature as supplied by the listing service.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Feature {
    /// Stable feature identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Links to the defining specifications.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spec_links: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<BaselineInfo>,
    /// WPT data keyed by channel, then browser. Missing entries mean no data.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub wpt: BTreeMap<Channel, BTreeMap<Browser, ChannelData>>,
}

impl Feature {
    /// Creates a feature with an id and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Feature {
            id: id.into(),
            name: name.into(),
            ..Feature::default()
        }
    }

    /// Adds a spec link.
    pub fn with_spec_link(mut self, link: impl Into<String>) -> Self {
        self.spec_links.push(link.into());
        self
    }

    /// Sets the Baseline info.
    pub fn with_baseline(mut self, baseline: BaselineInfo) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Sets the WPT data for one browser on one channel.
    pub fn with_wpt(mut self, channel: Channel, browser: Browser, data: ChannelData) -> Self {
        self.wpt.entry(channel).or_default().insert(browser, data);
        self
    }

    /// The WPT data for one browser on one channel, if any.
    pub fn channel_data(&self, browser: Browser, channel: Channel) -> Option<&ChannelData> {
        self.wpt.get(&channel)?.get(&browser)
    }

    /// The WPT pass fraction for one browser on one channel.
    pub fn score(&self, browser: Browser, channel: Channel) -> Option<f64> {
        self.channel_data(browser, channel)?.score
    }

    /// The implementation status for one browser on one channel.
    pub fn implementation_status(
        &self,
        browser: Browser,
        channel: Channel,
    ) -> Option<ImplementationStatus> {
        Some(self.channel_data(browser, channel)?.implementation.as_ref()?.status)
    }

    /// True iff any spec link identifies this as a TC39 (JavaScript) feature.
    pub fn is_javascript_feature(&self) -> bool {
        self.spec_links
            .iter()
            .any(|link| link.starts_with(TC39_SPEC_PREFIX))
    }

    /// True iff the run for one browser on one channel is marked crashed.
    ///
    /// A run is crashed iff its metadata is a JSON object whose `status`
    /// key holds exactly the string `"C"`. Any other shape means no crash.
    pub fn did_crash(&self, browser: Browser, channel: Channel) -> bool {
        let metadata = match self.channel_data(browser, channel) {
            Some(data) => &data.metadata,
            None => return false,
        };
        match metadata {
            Some(Value::Object(map)) => map.get("status") == Some(&Value::String("C".into())),
            _ => false,
        }
    }
}
