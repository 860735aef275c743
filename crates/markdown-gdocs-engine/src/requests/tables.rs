//! Tables to native table structures.
//!
//! A freshly inserted table has a fixed layout: the table element takes one
//! position, its first cell interior sits [`FIRST_CELL_OFFSET`] positions
//! after the table start, each further cell in a row is [`CELL_STRIDE`]
//! positions on, and each row boundary adds [`ROW_BOUNDARY`] more.
//!
//! Cell text is inserted bottom-right to top-left so no insertion moves a
//! cell that is still waiting for its text. Header styling runs afterwards
//! and walks forward over the filled cells.

use crate::model::TableData;
use crate::text::{count_tabs_before, text_len};

use super::style::StyleSheet;
use super::types::{Location, Request, TableCellLocation, TableRange};

pub const FIRST_CELL_OFFSET: usize = 3;
pub const CELL_STRIDE: usize = 2;
pub const ROW_BOUNDARY: usize = 1;

/// Interior positions of every cell of an empty `rows` x `cols` table.
pub fn cell_positions(table_start: usize, rows: usize, cols: usize) -> Vec<Vec<usize>> {
    let row_width = CELL_STRIDE * cols + ROW_BOUNDARY;
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| table_start + FIRST_CELL_OFFSET + r * row_width + CELL_STRIDE * c)
                .collect()
        })
        .collect()
}

/// Cell text at `(row, col)`, empty for cells a short row lacks.
fn cell_content(table: &TableData, row: usize, col: usize) -> &str {
    table
        .rows
        .get(row)
        .and_then(|cells| cells.get(col))
        .map_or("", |cell| cell.content.as_str())
}

/// Emits the requests that build one table.
///
/// `plain_text` is the converted text before bulletizing; the table's
/// recorded index is shifted left by the tabs before it.
pub fn table_requests(plain_text: &str, table: &TableData, styles: &StyleSheet) -> Vec<Request> {
    let rows = table.num_rows();
    let cols = table.num_cols();
    let index = table.insert_index - count_tabs_before(plain_text, table.insert_index);
    let table_start = index + 1;

    let mut requests = vec![Request::insert_table(index, rows, cols)];

    let positions = cell_positions(table_start, rows, cols);
    for (r, row) in positions.iter().enumerate().rev() {
        for (c, &pos) in row.iter().enumerate().rev() {
            let content = cell_content(table, r, c);
            if !content.is_empty() {
                requests.push(Request::insert_text(pos, content));
            }
        }
    }

    let whole = |row_span| TableRange {
        table_cell_location: TableCellLocation {
            table_start_location: Location { index: table_start },
            row_index: 0,
            column_index: 0,
        },
        row_span,
        column_span: cols,
    };
    requests.push(Request::table_cell_style(whole(rows), styles.table_borders()));

    if table.has_header_row() {
        requests.push(Request::table_cell_style(whole(1), styles.header_cells()));

        let mut pos = table_start + FIRST_CELL_OFFSET;
        for c in 0..cols {
            let len = text_len(cell_content(table, 0, c));
            if len > 0 {
                requests.push(Request::text_style(pos, pos + len, styles.header_text()));
            }
            pos += len + CELL_STRIDE;
        }
    }

    log::debug!(
        "table at {index}: {rows}x{cols}, {} requests",
        requests.len()
    );
    requests
}
