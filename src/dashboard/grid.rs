//! Grid auto-placement.
//!
//! Tiles are placed in layout order, each at the first free cell at or
//! after the placement cursor where its span fits (sparse auto-flow, as a
//! CSS grid does it). Row spans reserve cells in following rows, so later
//! tiles flow around tall ones.

use ratatui::layout::Rect;

/// Below this terminal width the grid collapses to one column.
pub const SINGLE_COLUMN_BELOW: u16 = 60;
/// Below this terminal width the grid uses at most two columns.
pub const TWO_COLUMNS_BELOW: u16 = 100;

/// Column count actually used for a terminal `width`.
pub fn effective_columns(width: u16, configured: u16) -> u16 {
    let configured = configured.max(1);
    if width < SINGLE_COLUMN_BELOW {
        1
    } else if width < TWO_COLUMNS_BELOW {
        configured.min(2)
    } else {
        configured
    }
}

/// Requested extent of one tile, already resolved against the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpan {
    /// Columns covered (1..=grid columns).
    pub columns: u16,
    /// Rows covered (at least 1).
    pub rows: u16,
}

/// Grid cell position of one placed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Leftmost column.
    pub column: u16,
    /// Top row.
    pub row: u16,
    /// Columns covered.
    pub columns: u16,
    /// Rows covered.
    pub rows: u16,
}

/// Places `spans` in order on a grid `columns` wide.
pub fn place(spans: &[TileSpan], columns: u16) -> Vec<Placement> {
    let columns = columns.max(1) as usize;
    let mut occupied: Vec<Vec<bool>> = Vec::new();
    let (mut row, mut col) = (0usize, 0usize);
    let mut placements = Vec::with_capacity(spans.len());

    for span in spans {
        let width = (span.columns.max(1) as usize).min(columns);
        let height = span.rows.max(1) as usize;
        loop {
            if col + width > columns {
                row += 1;
                col = 0;
                continue;
            }
            if fits(&occupied, row, col, width, height) {
                break;
            }
            col += 1;
        }
        for r in row..row + height {
            if occupied.len() <= r {
                occupied.resize_with(r + 1, || vec![false; columns]);
            }
            for cell in &mut occupied[r][col..col + width] {
                *cell = true;
            }
        }
        placements.push(Placement {
            column: col as u16,
            row: row as u16,
            columns: width as u16,
            rows: height as u16,
        });
        col += width;
    }
    placements
}

fn fits(occupied: &[Vec<bool>], row: usize, col: usize, width: usize, height: usize) -> bool {
    (row..row + height).all(|r| {
        occupied
            .get(r)
            .map_or(true, |cells| cells[col..col + width].iter().all(|c| !c))
    })
}

/// Total rows used by `placements`.
pub fn rows_used(placements: &[Placement]) -> u16 {
    placements
        .iter()
        .map(|p| p.row + p.rows)
        .max()
        .unwrap_or(0)
}

/// Screen rectangle of a placement inside `area`, or `None` when it lies
/// entirely outside after scrolling `scroll_rows` grid rows.
///
/// Columns split `area.width` evenly; the last column absorbs the
/// remainder. Tiles cut by the bottom edge are clipped.
pub fn cell_rect(
    placement: &Placement,
    area: Rect,
    columns: u16,
    row_height: u16,
    scroll_rows: u16,
) -> Option<Rect> {
    let columns = columns.max(1);
    let row_height = row_height.max(1);
    if placement.row + placement.rows <= scroll_rows {
        return None;
    }
    let col_width = area.width / columns;
    let x = area.x + placement.column * col_width;
    let right_edge = placement.column + placement.columns;
    let width = if right_edge >= columns {
        area.x + area.width - x
    } else {
        placement.columns * col_width
    };

    // Tiles that started above the viewport show only their lower part.
    let visible_top_row = placement.row.max(scroll_rows);
    let y_offset = u32::from(visible_top_row - scroll_rows) * u32::from(row_height);
    if y_offset >= u32::from(area.height) {
        return None;
    }
    let y = area.y + y_offset as u16;
    let rows_shown = placement.row + placement.rows - visible_top_row;
    let full_height = u32::from(rows_shown) * u32::from(row_height);
    let height = full_height.min(u32::from(area.y + area.height - y)) as u16;
    if width == 0 || height == 0 {
        return None;
    }
    Some(Rect::new(x, y, width, height))
}
