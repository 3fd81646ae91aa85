//! The cell dispatcher: from (feature, location, column key) to content.

use featgrid_query::{ColumnKey, RouterLocation};
use featgrid_types::{Channel, Feature};
use serde::Serialize;

use crate::baseline::{classify, BaselineCell};
use crate::definition::{definition, ColumnRenderer};
use crate::quality::{render_experimental_quality, render_stable_quality, QualityCell};

/// Displayable content of one table cell.
///
/// `Empty` is the explicit no-content marker: an unclassified Baseline
/// column or a column with no registered renderer yields it, never an
/// error.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellContent {
    Empty,
    /// Feature display name with its first spec link, when any.
    Name {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        link: Option<String>,
    },
    Baseline(BaselineCell),
    Quality(QualityCell),
}

/// Renders one cell of the comparative table.
///
/// Pure: the output depends only on the feature record, the location's
/// query string (which carries the selected column options), and the static
/// column registry.
///
/// ```rust
/// use featgrid_columns::{render_cell, CellContent, QualityCell};
/// use featgrid_query::{ColumnKey, RouterLocation};
/// use featgrid_types::{Browser, Channel, ChannelData, Feature};
///
/// let feature = Feature::new("grid", "CSS Grid")
///     .with_wpt(Channel::Stable, Browser::Chrome, ChannelData::with_score(0.999));
/// let location = RouterLocation::default();
///
/// assert_eq!(
///     render_cell(&feature, &location, ColumnKey::StableChrome),
///     CellContent::Quality(QualityCell::Percentage("99.9%".into())),
/// );
/// ```
pub fn render_cell(feature: &Feature, location: &RouterLocation, key: ColumnKey) -> CellContent {
    let def = definition(key);
    let Some(renderer) = def.renderer else {
        return CellContent::Empty;
    };
    match renderer {
        ColumnRenderer::FeatureName => CellContent::Name {
            name: feature.name.clone(),
            link: feature.spec_links.first().cloned(),
        },
        ColumnRenderer::Baseline => {
            // Options travel as one flat set; only those the column
            // supports apply to it.
            let selected: Vec<_> = location
                .column_options()
                .into_iter()
                .filter(|option| def.options.contains(option))
                .collect();
            match classify(feature.baseline.as_ref(), &selected) {
                Some(cell) => CellContent::Baseline(cell),
                None => CellContent::Empty,
            }
        }
        ColumnRenderer::Quality { browser, channel } => {
            CellContent::Quality(match channel {
                Channel::Stable => render_stable_quality(feature, browser),
                Channel::Experimental => render_experimental_quality(feature, browser),
            })
        }
    }
}
