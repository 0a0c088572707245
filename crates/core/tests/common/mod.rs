#![allow(dead_code)]

use once_cell::sync::OnceCell;
use quadseq_core::{Board, ChipColor, Position};
use std::ops::RangeInclusive;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Route engine logs to the test writer. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

pub fn board_with(chips: &[(usize, usize, ChipColor)]) -> Board {
    let mut board = Board::standard();
    for (row, col, color) in chips {
        board.place_chip(pos(*row, *col), *color);
    }
    board
}

/// Fill `cols` of `row` with `color` chips.
pub fn fill_row(board: &mut Board, row: usize, cols: RangeInclusive<usize>, color: ChipColor) {
    for col in cols {
        board.place_chip(pos(row, col), color);
    }
}

pub fn fill_col(board: &mut Board, col: usize, rows: RangeInclusive<usize>, color: ChipColor) {
    for row in rows {
        board.place_chip(pos(row, col), color);
    }
}

pub fn mark_capped(board: &mut Board, at: Position) {
    if let Some(cell) = board.cell_mut(at) {
        cell.is_capped = true;
    }
}
