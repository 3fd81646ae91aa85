//! Browser and release-channel identifiers.
//!
//! Both enums are closed sets: the table engine never discovers browsers at
//! runtime, it renders exactly the matrix defined here. Wire strings are the
//! lowercase variant names, matching the external query-string tokens built
//! from them (`stable_chrome`, `experimental_safari`, ...).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A browser tracked by the comparative table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Chrome,
    Edge,
    Firefox,
    Safari,
}

impl Browser {
    /// All browsers in canonical display order.
    pub const ALL: [Browser; 4] = [
        Browser::Chrome,
        Browser::Edge,
        Browser::Firefox,
        Browser::Safari,
    ];

    /// The stable external identifier used in query strings and wire data.
    pub fn as_str(self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Edge => "edge",
            Browser::Firefox => "firefox",
            Browser::Safari => "safari",
        }
    }

    /// Human-readable browser name for headers and dialogs.
    pub fn display_name(self) -> &'static str {
        match self {
            Browser::Chrome => "Chrome",
            Browser::Edge => "Edge",
            Browser::Firefox => "Firefox",
            Browser::Safari => "Safari",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A browser release track for which implementation and test data are
/// tracked independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Stable,
    Experimental,
}

impl Channel {
    /// Both channels, stable first.
    pub const ALL: [Channel; 2] = [Channel::Stable, Channel::Experimental];

    /// The stable external identifier used in query strings and wire data.
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Stable => "stable",
            Channel::Experimental => "experimental",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_wire_strings() {
        for browser in Browser::ALL {
            let json = serde_json::to_string(&browser).unwrap();
            assert_eq!(json, format!("\"{}\"", browser.as_str()));
            let parsed: Browser = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, browser);
        }
    }

    #[test]
    fn test_channel_wire_strings() {
        for channel in Channel::ALL {
            let json = serde_json::to_string(&channel).unwrap();
            assert_eq!(json, format!("\"{}\"", channel.as_str()));
            let parsed: Channel = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, channel);
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Browser::Firefox.to_string(), "firefox");
        assert_eq!(Channel::Experimental.to_string(), "experimental");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Browser::Chrome.display_name(), "Chrome");
        assert_eq!(Browser::Safari.display_name(), "Safari");
    }
}
