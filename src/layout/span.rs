//! Grid span mapping for widget size tiers.
//!
//! Spans come from two lookup tables indexed by the tier discriminant, so a
//! new width or height tier means one new enum variant plus one table row.

use super::model::{Widget, WidgetHeight, WidgetWidth};
use std::fmt;

/// Horizontal extent of a tile on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSpan {
    /// A fixed number of columns.
    Columns(u16),
    /// Every column of the grid, whatever its width.
    All,
}

impl ColumnSpan {
    /// Resolves the span against a grid of `grid_columns` columns.
    ///
    /// Fixed spans are clamped to the grid, and a zero-column grid is
    /// treated as a single column.
    pub fn resolve(self, grid_columns: u16) -> u16 {
        let grid_columns = grid_columns.max(1);
        match self {
            ColumnSpan::Columns(n) => n.clamp(1, grid_columns),
            ColumnSpan::All => grid_columns,
        }
    }
}

impl fmt::Display for ColumnSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSpan::Columns(n) => write!(f, "{n}"),
            ColumnSpan::All => f.write_str("all"),
        }
    }
}

/// Column and row extent of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpan {
    /// Columns covered.
    pub columns: ColumnSpan,
    /// Rows covered.
    pub rows: u16,
}

impl GridSpan {
    /// Utility class names in the form the web grid used
    /// (`col-span-2 row-span-1`, `col-span-full row-span-2`).
    pub fn class_names(&self) -> String {
        let col = match self.columns {
            ColumnSpan::Columns(n) => format!("col-span-{n}"),
            ColumnSpan::All => "col-span-full".to_string(),
        };
        format!("{col} row-span-{}", self.rows)
    }
}

const WIDTH_SPANS: [ColumnSpan; 4] = [
    ColumnSpan::Columns(1), // small
    ColumnSpan::Columns(1), // medium
    ColumnSpan::Columns(2), // large
    ColumnSpan::All,        // full
];

const HEIGHT_SPANS: [u16; 2] = [
    1, // small
    2, // large
];

impl WidgetWidth {
    /// Column span for this tier.
    pub const fn column_span(self) -> ColumnSpan {
        WIDTH_SPANS[self as usize]
    }
}

impl WidgetHeight {
    /// Row span for this tier.
    pub const fn row_span(self) -> u16 {
        HEIGHT_SPANS[self as usize]
    }
}

/// Grid span of a widget, from its width and height tiers.
pub fn span_classes(widget: &Widget) -> GridSpan {
    GridSpan {
        columns: widget.width.column_span(),
        rows: widget.height.row_span(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::model::tests::widget;
    use crate::layout::model::WidgetType;

    #[test]
    fn width_tiers_map_to_column_spans() {
        let spans: Vec<ColumnSpan> = [WidgetWidth::Small, WidgetWidth::Large, WidgetWidth::Full]
            .into_iter()
            .map(|w| span_classes(&widget("w", WidgetType::StatCard, w)).columns)
            .collect();
        assert_eq!(
            spans,
            vec![ColumnSpan::Columns(1), ColumnSpan::Columns(2), ColumnSpan::All]
        );
        assert_eq!(
            spans.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            vec!["1", "2", "all"]
        );
    }

    #[test]
    fn medium_spans_one_column() {
        assert_eq!(WidgetWidth::Medium.column_span(), ColumnSpan::Columns(1));
    }

    #[test]
    fn height_tiers_map_to_row_spans() {
        let mut w = widget("w", WidgetType::BookingsTrend, WidgetWidth::Large);
        assert_eq!(span_classes(&w).rows, 1);
        w.height = WidgetHeight::Large;
        assert_eq!(span_classes(&w).rows, 2);
    }

    #[test]
    fn resolve_clamps_to_grid() {
        assert_eq!(ColumnSpan::Columns(2).resolve(4), 2);
        assert_eq!(ColumnSpan::Columns(2).resolve(1), 1);
        assert_eq!(ColumnSpan::All.resolve(4), 4);
        assert_eq!(ColumnSpan::All.resolve(0), 1);
    }

    #[test]
    fn class_names_match_web_grid() {
        let mut w = widget("w", WidgetType::AiInsights, WidgetWidth::Full);
        w.height = WidgetHeight::Large;
        assert_eq!(span_classes(&w).class_names(), "col-span-full row-span-2");
        let w = widget("w", WidgetType::BookingsTrend, WidgetWidth::Large);
        assert_eq!(span_classes(&w).class_names(), "col-span-2 row-span-1");
    }
}
