//! Table view: whole-table assembly and terminal rendering.
//!
//! The engine crates render one cell at a time; this module assembles the
//! header and all rows for a feature list under one location, projects
//! cells to text, and lays the result out for a terminal. Column widths are
//! data-driven: each column is as wide as its widest cell.

use console::Style;
use featgrid_columns::{definition, render_cell, CellContent};
use featgrid_query::{ColumnKey, RouterLocation, SortDirection, SortSpec};
use featgrid_types::Feature;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Separator between rendered columns.
const COLUMN_SEP: &str = "  ";
/// Representation for cells with no content.
const NULL_REPR: &str = "-";

/// The assembled table: resolved columns, header texts, and one row of
/// cells per feature.
#[derive(Clone, Debug, Serialize)]
pub struct TableView {
    pub columns: Vec<ColumnKey>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<CellContent>>,
}

/// Builds the table for a feature list under one router location.
///
/// Columns and per-column options come from the location's query string;
/// each cell goes through the column registry's renderer.
pub fn build_table(features: &[Feature], location: &RouterLocation) -> TableView {
    let columns = location.columns();
    let header = columns
        .iter()
        .map(|&key| definition(key).header.to_string())
        .collect();
    let rows = features
        .iter()
        .map(|feature| {
            columns
                .iter()
                .map(|&key| render_cell(feature, location, key))
                .collect()
        })
        .collect();
    TableView {
        columns,
        header,
        rows,
    }
}

/// Single-line text projection of a cell.
pub fn cell_text(cell: &CellContent) -> String {
    match cell {
        CellContent::Empty => NULL_REPR.to_string(),
        CellContent::Name { name, .. } => name.clone(),
        CellContent::Baseline(cell) => {
            let mut text = format!("{} {}", cell.chip.icon.glyph, cell.chip.label);
            let dates: Vec<String> = [&cell.low_date, &cell.high_date]
                .into_iter()
                .flatten()
                .map(|block| format!("{} {}", block.label, block.date))
                .collect();
            if !dates.is_empty() {
                text.push_str(&format!(" ({})", dates.join("; ")));
            }
            text
        }
        CellContent::Quality(cell) => cell.text().to_string(),
    }
}

/// Sorts features in place per a sort spec.
///
/// The production listing service sorts server-side; this local sort keeps
/// the demo table coherent with the requested order. Name sorts
/// lexicographically (case-insensitive), Baseline status by tier then
/// name, quality columns by score with missing scores below every real
/// score.
pub fn sort_features(features: &mut [Feature], sort: SortSpec) {
    let rank = |feature: &Feature| -> Option<u8> {
        Some(feature.baseline.as_ref()?.status?.rank())
    };
    match sort.column {
        ColumnKey::Name => {
            features.sort_by_cached_key(|feature| feature.name.to_lowercase());
        }
        ColumnKey::BaselineStatus => {
            features.sort_by_cached_key(|feature| (rank(feature), feature.name.to_lowercase()));
        }
        key => {
            if let Ok((browser, channel)) = featgrid_columns::browser_channel(key) {
                features.sort_by(|a, b| {
                    let score = |feature: &Feature| feature.score(browser, channel);
                    score(a)
                        .partial_cmp(&score(b))
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            }
        }
    }
    if sort.direction == SortDirection::Desc {
        features.reverse();
    }
}

fn chip_style(cell: &CellContent) -> Option<Style> {
    let CellContent::Baseline(cell) = cell else {
        return None;
    };
    let style = match cell.chip.style {
        "widely" => Style::new().green(),
        "newly" => Style::new().cyan(),
        _ => Style::new().red(),
    };
    Some(style)
}

/// Renders the table for a terminal.
///
/// Cells are padded to data-driven column widths before styling, so ANSI
/// codes never skew the layout. With `styled` off the output is plain
/// text.
pub fn render_term(view: &TableView, styled: bool) -> String {
    let texts: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    let mut widths: Vec<usize> = view.header.iter().map(|h| h.width()).collect();
    for row in &texts {
        for (i, text) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(text.width());
            }
        }
    }

    let pad = |text: &str, width: usize| {
        let fill = width.saturating_sub(text.width());
        format!("{}{}", text, " ".repeat(fill))
    };

    let mut lines = Vec::with_capacity(texts.len() + 1);
    let header_style = Style::new().bold();
    let header_line = view
        .header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let padded = pad(h, widths[i]);
            if styled {
                header_style.apply_to(padded).to_string()
            } else {
                padded
            }
        })
        .collect::<Vec<_>>()
        .join(COLUMN_SEP);
    lines.push(header_line.trim_end().to_string());

    for (row, cells) in texts.iter().zip(&view.rows) {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let padded = pad(text, widths[i]);
                match (styled, chip_style(&cells[i])) {
                    (true, Some(style)) => style.apply_to(padded).to_string(),
                    _ => padded,
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_SEP);
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use featgrid_columns::QualityCell;
    use featgrid_types::{BaselineInfo, BaselineStatus, Browser, Channel, ChannelData, FeatureDate};

    fn fixture() -> Vec<Feature> {
        vec![
            Feature::new("subgrid", "Subgrid")
                .with_baseline(
                    BaselineInfo::with_status(BaselineStatus::Newly)
                        .low_date(FeatureDate::parse("2023-09-15").unwrap()),
                )
                .with_wpt(Channel::Stable, Browser::Chrome, ChannelData::with_score(0.997)),
            Feature::new("grid", "CSS Grid")
                .with_baseline(BaselineInfo::with_status(BaselineStatus::Widely))
                .with_wpt(Channel::Stable, Browser::Chrome, ChannelData::with_score(1.0)),
            Feature::new("anchor-positioning", "Anchor positioning")
                .with_baseline(BaselineInfo::with_status(BaselineStatus::Limited)),
        ]
    }

    #[test]
    fn test_build_table_headers_follow_columns() {
        let location = RouterLocation::new("?columns=name,baseline_status,stable_chrome");
        let view = build_table(&fixture(), &location);
        assert_eq!(view.header, vec!["Feature", "Baseline", "Chrome"]);
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[0].len(), 3);
    }

    #[test]
    fn test_build_table_default_columns() {
        let view = build_table(&fixture(), &RouterLocation::default());
        assert_eq!(
            view.header,
            vec!["Feature", "Baseline", "Chrome", "Edge", "Firefox", "Safari"]
        );
    }

    #[test]
    fn test_cell_text_projections() {
        assert_eq!(cell_text(&CellContent::Empty), "-");
        assert_eq!(
            cell_text(&CellContent::Quality(QualityCell::Percentage("99.7%".into()))),
            "99.7%"
        );
        let location = RouterLocation::new("?column_options=baseline_status_low_date");
        let view = build_table(&fixture(), &location);
        let baseline = cell_text(&view.rows[0][1]);
        assert_eq!(baseline, "◑ Newly available (Newly available: 2023-09-15)");
    }

    #[test]
    fn test_sort_features_by_name() {
        let mut features = fixture();
        sort_features(&mut features, SortSpec::asc(ColumnKey::Name));
        let names: Vec<&str> = features.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Anchor positioning", "CSS Grid", "Subgrid"]);
    }

    #[test]
    fn test_sort_features_by_baseline_status_desc() {
        let mut features = fixture();
        sort_features(&mut features, SortSpec::desc(ColumnKey::BaselineStatus));
        let ids: Vec<&str> = features.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["grid", "subgrid", "anchor-positioning"]);
    }

    #[test]
    fn test_sort_features_by_score_puts_missing_first_asc() {
        let mut features = fixture();
        sort_features(&mut features, SortSpec::asc(ColumnKey::StableChrome));
        let ids: Vec<&str> = features.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["anchor-positioning", "subgrid", "grid"]);
    }

    #[test]
    fn test_render_term_plain_alignment() {
        let location = RouterLocation::new("?columns=name,stable_chrome");
        let mut features = fixture();
        sort_features(&mut features, SortSpec::asc(ColumnKey::Name));
        let out = render_term(&build_table(&features, &location), false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Feature             Chrome");
        assert_eq!(lines[1], "Anchor positioning  -");
        assert_eq!(lines[2], "CSS Grid            100%");
        assert_eq!(lines[3], "Subgrid             99.7%");
    }
}
