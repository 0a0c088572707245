use crate::{Board, ChipColor, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info, trace};

pub const CHIPS_IN_SCORE: usize = 5;
pub const SCORES_TO_WIN: usize = 4;
pub const MAX_REUSED_CAPPED_CHIPS: usize = 2;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::Diagonal => "diagonal",
            Direction::AntiDiagonal => "anti-diagonal",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScoreKey {
    pub color: ChipColor,
    pub direction: Direction,
    pub cells: Vec<Position>,
}

impl ScoreKey {
    pub fn new(color: ChipColor, direction: Direction, cells: &[Position]) -> Self {
        let mut cells = cells.to_vec();
        cells.sort_unstable();
        Self {
            color,
            direction,
            cells,
        }
    }

    pub fn id(&self) -> String {
        let cells: Vec<String> = self
            .cells
            .iter()
            .map(|pos| format!("{}.{}", pos.row, pos.col))
            .collect();
        format!("{}-{}-{}", self.color, self.direction, cells.join("-"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    pub id: String,
    pub cells: Vec<Position>,
    pub color: ChipColor,
    pub direction: Direction,
    #[serde(default)]
    pub is_capped: bool,
}

impl Score {
    pub fn new(color: ChipColor, direction: Direction, cells: Vec<Position>) -> Self {
        let id = ScoreKey::new(color, direction, &cells).id();
        Self {
            id,
            cells,
            color,
            direction,
            is_capped: false,
        }
    }

    pub fn key(&self) -> ScoreKey {
        ScoreKey::new(self.color, self.direction, &self.cells)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn same_cells(&self, cells: &[Position]) -> bool {
        let mut mine = self.cells.clone();
        let mut theirs = cells.to_vec();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }
}

fn qualifies(chips: usize, corners: usize) -> bool {
    matches!((chips, corners), (5, 0) | (4, 1))
}

fn scan_line(
    board: &Board,
    start: Position,
    direction: Direction,
    color: ChipColor,
) -> Option<Score> {
    let (d_row, d_col) = direction.delta();
    let mut cells = Vec::with_capacity(CHIPS_IN_SCORE);
    let mut corners = 0;
    let mut chips = 0;
    for step in 0..CHIPS_IN_SCORE {
        let pos = start.step(d_row, d_col, step)?;
        let cell = board.cell(pos)?;
        if cell.is_corner {
            corners += 1;
        } else if cell.chip == Some(color) {
            chips += 1;
        } else {
            return None;
        }
        cells.push(pos);
    }
    qualifies(chips, corners).then(|| Score::new(color, direction, cells))
}

fn push_candidate(
    scores: &mut Vec<Score>,
    seen: &mut HashSet<ScoreKey>,
    score: Score,
    board: &Board,
    capped: &[Score],
) {
    if !validate_capped_chips_in_score(&score, board, capped) {
        debug!(score = %score.id, "score candidate rejected by capped-chip rules");
        return;
    }
    if seen.insert(score.key()) {
        scores.push(score);
    }
}

pub fn detect_scores(board: &Board, color: ChipColor, capped: &[Score]) -> Vec<Score> {
    let mut scores = Vec::new();
    let mut seen = HashSet::new();
    for start in Position::all() {
        for direction in Direction::ALL {
            if let Some(score) = scan_line(board, start, direction, color) {
                push_candidate(&mut scores, &mut seen, score, board, capped);
            }
        }
    }
    scores
}

pub fn check_for_new_scores(
    board: &Board,
    pos: Position,
    color: ChipColor,
    capped: &[Score],
) -> Vec<Score> {
    let mut scores = Vec::new();
    let mut seen = HashSet::new();
    for direction in Direction::ALL {
        let (d_row, d_col) = direction.delta();
        for offset in 0..CHIPS_IN_SCORE {
            let Some(start) = pos.step(-d_row, -d_col, offset) else {
                continue;
            };
            if let Some(score) = scan_line(board, start, direction, color) {
                push_candidate(&mut scores, &mut seen, score, board, capped);
            }
        }
    }
    scores
}

pub fn available_scores(board: &Board, color: ChipColor, capped: &[Score]) -> Vec<Score> {
    detect_scores(board, color, capped)
        .into_iter()
        .filter(|score| !is_already_capped(score, capped))
        .collect()
}

fn line_direction(sorted: &[Position]) -> Option<Direction> {
    Direction::ALL.into_iter().find(|direction| {
        let (d_row, d_col) = direction.delta();
        sorted
            .windows(2)
            .all(|pair| pair[0].step(d_row, d_col, 1) == Some(pair[1]))
    })
}

pub fn validate_consecutive_line(
    selected: &[Position],
    board: &Board,
    color: ChipColor,
) -> Option<Score> {
    if selected.len() != CHIPS_IN_SCORE {
        return None;
    }
    let mut sorted = selected.to_vec();
    sorted.sort_unstable();

    let mut corners = 0;
    let mut chips = 0;
    for pos in &sorted {
        let Some(cell) = board.cell(*pos) else {
            debug!(%pos, "selection rejected: off the board");
            return None;
        };
        if cell.is_corner {
            corners += 1;
        } else if cell.chip == Some(color) {
            chips += 1;
        } else {
            debug!(%pos, chip = ?cell.chip, %color, "selection rejected: cell does not match");
            return None;
        }
    }
    if !qualifies(chips, corners) {
        debug!(chips, corners, "selection rejected: invalid chip/corner count");
        return None;
    }

    let Some(direction) = line_direction(&sorted) else {
        debug!("selection rejected: not a straight line");
        return None;
    };
    Some(Score::new(color, direction, sorted))
}

pub fn scores_containing<'a>(
    capped: &'a [Score],
    color: ChipColor,
    pos: Position,
) -> impl Iterator<Item = &'a Score> {
    capped
        .iter()
        .filter(move |score| score.is_capped && score.color == color && score.contains(pos))
}

#[derive(Debug, Default)]
struct Composition {
    corners: usize,
    capped: Vec<Position>,
    uncapped: usize,
}

impl Composition {
    fn of(score: &Score, board: &Board) -> Option<Self> {
        let mut composition = Composition::default();
        for pos in &score.cells {
            let cell = board.cell(*pos)?;
            if cell.is_corner {
                composition.corners += 1;
            } else if cell.chip == Some(score.color) {
                if cell.is_capped {
                    composition.capped.push(*pos);
                } else {
                    composition.uncapped += 1;
                }
            }
        }
        Some(composition)
    }
}

/// Enforce the capped-chip reuse limits on a candidate score.
///
/// Provenance is plain membership in the historical capped list; no ordering
/// between capping events is inferred.
pub fn validate_capped_chips_in_score(score: &Score, board: &Board, capped: &[Score]) -> bool {
    if score.cells.len() != CHIPS_IN_SCORE {
        return false;
    }
    let Some(composition) = Composition::of(score, board) else {
        return false;
    };
    trace!(
        score = %score.id,
        capped = composition.capped.len(),
        uncapped = composition.uncapped,
        corners = composition.corners,
        "score composition"
    );

    match composition.capped.as_slice() {
        [] => {}
        [cell] => {
            if scores_containing(capped, score.color, *cell).next().is_none() {
                debug!(pos = %cell, "capped chip does not belong to any capped score");
                return false;
            }
        }
        [first, second] => {
            let first_ids: HashSet<&str> = scores_containing(capped, score.color, *first)
                .map(|prior| prior.id.as_str())
                .collect();
            let second_ids: HashSet<&str> = scores_containing(capped, score.color, *second)
                .map(|prior| prior.id.as_str())
                .collect();
            if first_ids.is_empty() || second_ids.is_empty() {
                debug!("capped chip does not belong to any capped score");
                return false;
            }
            if !first_ids.is_disjoint(&second_ids) {
                debug!(first = %first, second = %second, "both capped chips come from the same score");
                return false;
            }
        }
        _ => {
            debug!(
                capped = composition.capped.len(),
                max = MAX_REUSED_CAPPED_CHIPS,
                "too many capped chips"
            );
            return false;
        }
    }

    let required = CHIPS_IN_SCORE
        .checked_sub(composition.capped.len() + composition.corners);
    if required != Some(composition.uncapped) {
        debug!(
            uncapped = composition.uncapped,
            required = ?required,
            "wrong number of uncapped chips"
        );
        return false;
    }
    true
}

/// Lock a score onto the board. Monotonic: flags are only ever set and ids
/// only ever appended. Corners record the id but never become capped.
pub fn cap_score(board: &mut Board, score: &mut Score) {
    score.is_capped = true;
    for pos in &score.cells {
        let Some(cell) = board.cell_mut(*pos) else {
            continue;
        };
        if !cell.score_ids.contains(&score.id) {
            cell.score_ids.push(score.id.clone());
        }
        if !cell.is_corner {
            cell.is_capped = true;
        }
    }
    info!(score = %score.id, color = %score.color, "score capped");
}

pub fn is_already_capped(score: &Score, capped: &[Score]) -> bool {
    let key = score.key();
    capped
        .iter()
        .any(|prior| prior.is_capped && (prior.id == score.id || prior.key() == key))
}

pub fn record_capped(capped: &mut Vec<Score>, score: Score) -> bool {
    if is_already_capped(&score, capped) {
        return false;
    }
    capped.push(score);
    true
}

pub fn check_win_condition(capped: &[Score]) -> Option<ChipColor> {
    check_win_condition_with(capped, SCORES_TO_WIN)
}

pub fn check_win_condition_with(capped: &[Score], threshold: usize) -> Option<ChipColor> {
    let mut seen = HashSet::new();
    let mut counts: Vec<(ChipColor, usize)> = Vec::new();
    for score in capped.iter().filter(|score| score.is_capped) {
        if !seen.insert(score.key()) {
            continue;
        }
        match counts.iter_mut().find(|(color, _)| *color == score.color) {
            Some((_, count)) => *count += 1,
            None => counts.push((score.color, 1)),
        }
    }
    counts
        .into_iter()
        .find(|(_, count)| *count >= threshold)
        .map(|(color, _)| color)
}
