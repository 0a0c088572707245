mod common;

use common::{board_with, fill_col, fill_row, mark_capped, pos};
use quadseq_core::{
    available_scores, cap_score, check_for_new_scores, check_win_condition,
    check_win_condition_with, detect_scores, is_already_capped, record_capped,
    validate_capped_chips_in_score, validate_consecutive_line, Board, ChipColor, Direction,
    Position, Score,
};

use ChipColor::{Blue, Red};

fn row_cells(row: usize, cols: std::ops::RangeInclusive<usize>) -> Vec<Position> {
    cols.map(|col| pos(row, col)).collect()
}

fn col_cells(col: usize, rows: std::ops::RangeInclusive<usize>) -> Vec<Position> {
    rows.map(|row| pos(row, col)).collect()
}

fn cap(board: &mut Board, capped: &mut Vec<Score>, mut score: Score) {
    cap_score(board, &mut score);
    assert!(record_capped(capped, score));
}

fn ids(scores: &[Score]) -> Vec<&str> {
    scores.iter().map(|score| score.id.as_str()).collect()
}

#[test]
fn five_in_a_row_scores_in_each_direction() {
    common::init_logging();
    let cases = [
        (row_cells(1, 1..=5), Direction::Horizontal),
        (col_cells(6, 2..=6), Direction::Vertical),
        (
            vec![pos(2, 2), pos(3, 3), pos(4, 4), pos(5, 5), pos(6, 6)],
            Direction::Diagonal,
        ),
        (
            vec![pos(1, 8), pos(2, 7), pos(3, 6), pos(4, 5), pos(5, 4)],
            Direction::AntiDiagonal,
        ),
    ];
    for (cells, direction) in cases {
        let mut board = Board::standard();
        for at in &cells {
            board.place_chip(*at, Red);
        }
        let scores = detect_scores(&board, Red, &[]);
        assert_eq!(scores.len(), 1, "{direction}");
        assert_eq!(scores[0].direction, direction);
        assert!(scores[0].same_cells(&cells));
        assert!(detect_scores(&board, Blue, &[]).is_empty());
    }
}

#[test]
fn four_chips_and_a_corner_score() {
    let mut board = Board::standard();
    fill_row(&mut board, 0, 1..=4, Red);
    let scores = detect_scores(&board, Red, &[]);
    assert_eq!(ids(&scores), vec!["red-horizontal-0.0-0.1-0.2-0.3-0.4"]);
}

#[test]
fn four_chips_and_an_empty_cell_do_not_score() {
    let mut board = Board::standard();
    fill_row(&mut board, 2, 1..=4, Red);
    assert!(detect_scores(&board, Red, &[]).is_empty());

    board.place_chip(pos(2, 5), Blue);
    assert!(detect_scores(&board, Red, &[]).is_empty());
}

#[test]
fn six_in_a_row_gives_two_overlapping_scores() {
    let mut board = Board::standard();
    fill_row(&mut board, 1, 1..=6, Red);
    let scores = detect_scores(&board, Red, &[]);
    assert_eq!(
        ids(&scores),
        vec![
            "red-horizontal-1.1-1.2-1.3-1.4-1.5",
            "red-horizontal-1.2-1.3-1.4-1.5-1.6",
        ]
    );
}

#[test]
fn new_scores_only_through_the_placed_chip() {
    let mut board = Board::standard();
    fill_row(&mut board, 1, 1..=5, Red);
    board.place_chip(pos(5, 5), Red);

    assert_eq!(check_for_new_scores(&board, pos(1, 3), Red, &[]).len(), 1);
    assert_eq!(check_for_new_scores(&board, pos(1, 5), Red, &[]).len(), 1);
    assert!(check_for_new_scores(&board, pos(5, 5), Red, &[]).is_empty());
    assert!(check_for_new_scores(&board, pos(1, 3), Blue, &[]).is_empty());
}

#[test]
fn extending_a_capped_line_reuses_one_chip() {
    let mut board = Board::standard();
    let mut capped = Vec::new();
    fill_row(&mut board, 1, 0..=4, Red);
    cap(
        &mut board,
        &mut capped,
        Score::new(Red, Direction::Horizontal, row_cells(1, 0..=4)),
    );
    assert!(available_scores(&board, Red, &capped).is_empty());

    fill_row(&mut board, 1, 5..=8, Red);
    let available = available_scores(&board, Red, &capped);
    assert_eq!(ids(&available), vec!["red-horizontal-1.4-1.5-1.6-1.7-1.8"]);
}

#[test]
fn two_capped_chips_from_different_scores_are_allowed() {
    let mut board = Board::standard();
    let mut capped = Vec::new();
    for row in [2, 6] {
        fill_row(&mut board, row, 1..=5, Red);
        cap(
            &mut board,
            &mut capped,
            Score::new(Red, Direction::Horizontal, row_cells(row, 1..=5)),
        );
    }
    fill_col(&mut board, 3, 3..=5, Red);

    let crossing = Score::new(Red, Direction::Vertical, col_cells(3, 2..=6));
    assert!(validate_capped_chips_in_score(&crossing, &board, &capped));
    let available = available_scores(&board, Red, &capped);
    assert_eq!(ids(&available), vec![crossing.id.as_str()]);
}

#[test]
fn two_capped_chips_from_the_same_score_are_rejected() {
    let mut board = Board::standard();
    let mut capped = Vec::new();
    fill_row(&mut board, 1, 1..=5, Red);
    cap(
        &mut board,
        &mut capped,
        Score::new(Red, Direction::Horizontal, row_cells(1, 1..=5)),
    );
    fill_row(&mut board, 1, 6..=8, Red);

    let overlapping = Score::new(Red, Direction::Horizontal, row_cells(1, 4..=8));
    assert!(!validate_capped_chips_in_score(&overlapping, &board, &capped));
    let available = available_scores(&board, Red, &capped);
    assert!(available.iter().all(|score| score.id != overlapping.id));
}

#[test]
fn corner_line_reusing_one_capped_chip() {
    let mut board = Board::standard();
    let mut capped = Vec::new();
    fill_row(&mut board, 1, 0..=4, Red);
    cap(
        &mut board,
        &mut capped,
        Score::new(Red, Direction::Horizontal, row_cells(1, 0..=4)),
    );
    fill_col(&mut board, 0, 2..=4, Red);

    let column = Score::new(Red, Direction::Vertical, col_cells(0, 0..=4));
    assert!(validate_capped_chips_in_score(&column, &board, &capped));
    let available = available_scores(&board, Red, &capped);
    assert_eq!(ids(&available), vec!["red-vertical-0.0-1.0-2.0-3.0-4.0"]);
}

#[test]
fn corner_line_reusing_two_capped_chips() {
    let mut board = Board::standard();
    let mut capped = Vec::new();
    for row in [1, 2] {
        fill_row(&mut board, row, 0..=4, Red);
        cap(
            &mut board,
            &mut capped,
            Score::new(Red, Direction::Horizontal, row_cells(row, 0..=4)),
        );
    }
    fill_col(&mut board, 0, 3..=4, Red);

    let column = Score::new(Red, Direction::Vertical, col_cells(0, 0..=4));
    assert!(validate_capped_chips_in_score(&column, &board, &capped));
    assert_eq!(
        ids(&available_scores(&board, Red, &capped)),
        vec![column.id.as_str()]
    );

    fill_row(&mut board, 3, 1..=4, Red);
    cap(
        &mut board,
        &mut capped,
        Score::new(Red, Direction::Horizontal, row_cells(3, 0..=4)),
    );
    assert!(!validate_capped_chips_in_score(&column, &board, &capped));
    assert!(available_scores(&board, Red, &capped).is_empty());
}

#[test]
fn three_capped_chips_are_rejected() {
    let mut board = Board::standard();
    let mut capped = Vec::new();
    for row in [2, 4, 6] {
        fill_row(&mut board, row, 1..=5, Red);
        cap(
            &mut board,
            &mut capped,
            Score::new(Red, Direction::Horizontal, row_cells(row, 1..=5)),
        );
    }
    fill_col(&mut board, 3, 2..=6, Red);

    let crossing = Score::new(Red, Direction::Vertical, col_cells(3, 2..=6));
    assert!(!validate_capped_chips_in_score(&crossing, &board, &capped));
}

#[test]
fn capped_chip_without_a_capped_score_is_rejected() {
    let mut board = Board::standard();
    fill_row(&mut board, 1, 1..=5, Red);
    mark_capped(&mut board, pos(1, 3));
    let score = Score::new(Red, Direction::Horizontal, row_cells(1, 1..=5));
    assert!(!validate_capped_chips_in_score(&score, &board, &[]));
}

#[test]
fn capping_marks_chips_but_never_corners() {
    let mut board = Board::standard();
    fill_row(&mut board, 0, 1..=4, Red);
    fill_col(&mut board, 0, 1..=4, Red);
    let scores = detect_scores(&board, Red, &[]);
    assert_eq!(scores.len(), 2);

    let mut capped = Vec::new();
    for score in scores {
        cap(&mut board, &mut capped, score);
    }
    let corner = board.cell(pos(0, 0)).expect("corner");
    assert!(!corner.is_capped);
    assert_eq!(corner.score_ids.len(), 2);

    let chip = board.cell(pos(0, 2)).expect("cell");
    assert!(chip.is_capped);
    assert_eq!(chip.score_ids, vec![capped[0].id.clone()]);
    assert!(capped.iter().all(|score| score.is_capped));
}

#[test]
fn recording_the_same_score_twice_is_a_no_op() {
    let mut board = board_with(&[]);
    fill_row(&mut board, 3, 2..=6, Blue);
    let mut score = Score::new(Blue, Direction::Horizontal, row_cells(3, 2..=6));
    cap_score(&mut board, &mut score);
    cap_score(&mut board, &mut score);
    assert_eq!(
        board.cell(pos(3, 4)).expect("cell").score_ids,
        vec![score.id.clone()]
    );

    let mut capped = Vec::new();
    assert!(record_capped(&mut capped, score.clone()));
    let mut reversed = score.clone();
    reversed.cells.reverse();
    assert!(is_already_capped(&reversed, &capped));
    assert!(!record_capped(&mut capped, reversed));
    assert_eq!(capped.len(), 1);
}

#[test]
fn selection_order_does_not_matter() {
    let mut board = Board::standard();
    fill_row(&mut board, 1, 1..=5, Red);
    let clicked = [pos(1, 4), pos(1, 1), pos(1, 5), pos(1, 3), pos(1, 2)];
    let score = validate_consecutive_line(&clicked, &board, Red).expect("straight line");
    assert_eq!(score.direction, Direction::Horizontal);
    assert_eq!(score.cells, row_cells(1, 1..=5));
    assert!(validate_consecutive_line(&clicked, &board, Blue).is_none());
}

#[test]
fn selections_that_are_not_lines_are_rejected() {
    let mut board = Board::standard();
    fill_row(&mut board, 1, 1..=7, Red);
    board.place_chip(pos(2, 5), Red);

    let gap = [pos(1, 1), pos(1, 2), pos(1, 3), pos(1, 5), pos(1, 6)];
    assert!(validate_consecutive_line(&gap, &board, Red).is_none());

    let bent = [pos(1, 1), pos(1, 2), pos(1, 3), pos(1, 4), pos(2, 5)];
    assert!(validate_consecutive_line(&bent, &board, Red).is_none());

    assert!(validate_consecutive_line(&row_cells(1, 1..=4), &board, Red).is_none());
    assert!(validate_consecutive_line(&row_cells(1, 5..=9), &board, Red).is_none());
}

#[test]
fn corner_diagonal_selection_is_a_line() {
    let board = board_with(&[
        (1, 1, Red),
        (2, 2, Red),
        (3, 3, Red),
        (4, 4, Red),
    ]);
    let selected = [pos(4, 4), pos(0, 0), pos(2, 2), pos(1, 1), pos(3, 3)];
    let score = validate_consecutive_line(&selected, &board, Red).expect("corner line");
    assert_eq!(score.direction, Direction::Diagonal);
    assert_eq!(score.id, "red-diagonal-0.0-1.1-2.2-3.3-4.4");
}

fn capped_score(color: ChipColor, direction: Direction, cells: Vec<Position>) -> Score {
    let mut score = Score::new(color, direction, cells);
    score.is_capped = true;
    score
}

#[test]
fn four_distinct_scores_win() {
    let mut capped: Vec<Score> = (1..=3)
        .map(|row| capped_score(Red, Direction::Horizontal, row_cells(row, 1..=5)))
        .collect();
    capped.push(capped_score(Blue, Direction::Horizontal, row_cells(8, 1..=5)));
    assert_eq!(check_win_condition(&capped), None);

    capped.push(capped_score(Red, Direction::Horizontal, row_cells(1, 1..=5)));
    assert_eq!(check_win_condition(&capped), None);

    capped.push(capped_score(Red, Direction::Vertical, col_cells(7, 2..=6)));
    assert_eq!(check_win_condition(&capped), Some(Red));
}

#[test]
fn direction_is_part_of_score_identity() {
    let cells = row_cells(4, 2..=6);
    let capped = vec![
        capped_score(Blue, Direction::Horizontal, cells.clone()),
        capped_score(Blue, Direction::Diagonal, cells),
    ];
    assert_eq!(check_win_condition_with(&capped, 2), Some(Blue));
    assert_eq!(check_win_condition_with(&capped, 3), None);
}

#[test]
fn uncapped_entries_do_not_count_toward_a_win() {
    let mut scores: Vec<Score> = (1..=4)
        .map(|row| capped_score(Red, Direction::Horizontal, row_cells(row, 1..=5)))
        .collect();
    scores[3].is_capped = false;
    assert_eq!(check_win_condition(&scores), None);
}
