//! Baseline classification: chip selection and date surfacing.
//!
//! The classifier turns a feature's Baseline info plus the selected column
//! options into displayable content: a status chip, and up to two labeled
//! date blocks. When no widely-available date has been recorded yet, one is
//! projected 30 calendar months past the newly-available date.

use featgrid_query::ColumnOptionKey;
use featgrid_types::{BaselineInfo, BaselineStatus, FeatureDate};
use serde::Serialize;

/// Calendar months between newly available and the projected widely
/// available date.
pub const WIDELY_AVAILABLE_OFFSET_MONTHS: u32 = 30;

/// A chip icon: a stable name for styling plus a terminal glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChipIcon {
    pub name: &'static str,
    pub glyph: &'static str,
}

/// The status chip of a Baseline cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BaselineChip {
    /// Chip text, e.g. "Widely available".
    pub label: &'static str,
    /// Style class keyed by status.
    pub style: &'static str,
    pub icon: ChipIcon,
}

/// A labeled date line under the chip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DateBlock {
    pub label: &'static str,
    /// Always formatted `YYYY-MM-DD`.
    pub date: String,
}

/// Displayable content of a Baseline-status cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BaselineCell {
    pub chip: BaselineChip,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_date: Option<DateBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_date: Option<DateBlock>,
}

/// The fixed 3-entry chip table, keyed on status.
fn chip_for(status: BaselineStatus) -> BaselineChip {
    match status {
        BaselineStatus::Limited => BaselineChip {
            label: "Limited availability",
            style: "limited",
            icon: ChipIcon {
                name: "cross",
                glyph: "✗",
            },
        },
        BaselineStatus::Newly => BaselineChip {
            label: "Newly available",
            style: "newly",
            icon: ChipIcon {
                name: "newly",
                glyph: "◑",
            },
        },
        BaselineStatus::Widely => BaselineChip {
            label: "Widely available",
            style: "widely",
            icon: ChipIcon {
                name: "check",
                glyph: "✓",
            },
        },
    }
}

/// Classifies a feature's Baseline info under the selected column options.
///
/// Returns `None` when the feature carries no Baseline info or no status:
/// no content at all, distinct from any of the three known statuses.
///
/// The low-date block appears only when a newly-available date is recorded
/// and its option is selected; its label is always "Newly available:"
/// regardless of status. The high-date block prefers a recorded date; with
/// only a low date it shows the projection instead; with neither, or with
/// the option unselected, it is absent.
pub fn classify(
    baseline: Option<&BaselineInfo>,
    options: &[ColumnOptionKey],
) -> Option<BaselineCell> {
    let info = baseline?;
    let status = info.status?;

    let show_low = options.contains(&ColumnOptionKey::BaselineStatusLowDate);
    let show_high = options.contains(&ColumnOptionKey::BaselineStatusHighDate);

    let low_date = match info.low_date {
        Some(date) if show_low => Some(DateBlock {
            label: "Newly available:",
            date: date.to_string(),
        }),
        _ => None,
    };

    let high_date = if show_high {
        if let Some(date) = info.high_date {
            Some(DateBlock {
                label: "Widely available:",
                date: date.to_string(),
            })
        } else {
            info.low_date
                .and_then(projected_high_date)
                .map(|date| DateBlock {
                    label: "Projected widely available:",
                    date: date.to_string(),
                })
        }
    } else {
        None
    };

    Some(BaselineCell {
        chip: chip_for(status),
        low_date,
        high_date,
    })
}

/// The projected widely-available date for a newly-available date.
fn projected_high_date(low_date: FeatureDate) -> Option<FeatureDate> {
    low_date.plus_months(WIDELY_AVAILABLE_OFFSET_MONTHS)
}
