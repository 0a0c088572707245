use crate::{Rank, Suit};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ChipColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl ChipColor {
    pub const ALL: [ChipColor; 4] = [
        ChipColor::Red,
        ChipColor::Blue,
        ChipColor::Green,
        ChipColor::Yellow,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ChipColor::Red => "red",
            ChipColor::Blue => "blue",
            ChipColor::Green => "green",
            ChipColor::Yellow => "yellow",
        }
    }
}

impl fmt::Display for ChipColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    pub fn step(self, d_row: isize, d_col: isize, steps: usize) -> Option<Position> {
        let steps = steps as isize;
        let row = self.row as isize + d_row * steps;
        let col = self.col as isize + d_col * steps;
        if row < 0 || col < 0 {
            return None;
        }
        let pos = Position::new(row as usize, col as usize);
        pos.in_bounds().then_some(pos)
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cell {
    pub id: String,
    pub row: usize,
    pub col: usize,
    pub rank: Rank,
    pub suit: Suit,
    pub is_corner: bool,
    pub is_royal_belt: bool,
    #[serde(default)]
    pub chip: Option<ChipColor>,
    #[serde(default)]
    pub is_capped: bool,
    #[serde(default)]
    pub score_ids: Vec<String>,
}

impl Cell {
    fn from_slot(pos: Position, slot: Option<(Rank, Suit)>) -> Self {
        let (rank, suit, is_corner) = match slot {
            Some((rank, suit)) => (rank, suit, false),
            None => (Rank::Joker, Suit::Joker, true),
        };
        Self {
            id: format!("cell-{}-{}", pos.row, pos.col),
            row: pos.row,
            col: pos.col,
            rank,
            suit,
            is_corner,
            is_royal_belt: rank.is_court(),
            chip: None,
            is_capped: false,
            score_ids: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    pub fn is_occupied(&self) -> bool {
        self.chip.is_some()
    }

    pub fn matches(&self, color: ChipColor) -> bool {
        self.is_corner || self.chip == Some(color)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    pub fn standard() -> Self {
        let cells = Position::all()
            .map(|pos| Cell::from_slot(pos, LAYOUT[pos.row][pos.col]))
            .collect();
        Self { cells }
    }

    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.chip = None;
            cell.is_capped = false;
            cell.score_ids.clear();
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if !pos.in_bounds() {
            return None;
        }
        self.cells.get(pos.row * BOARD_SIZE + pos.col)
    }

    pub fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if !pos.in_bounds() {
            return None;
        }
        self.cells.get_mut(pos.row * BOARD_SIZE + pos.col)
    }

    /// No-op off the board and on corners; corners never hold a chip.
    pub fn place_chip(&mut self, pos: Position, color: ChipColor) {
        match self.cell_mut(pos) {
            Some(cell) if !cell.is_corner => cell.chip = Some(color),
            _ => {}
        }
    }

    pub fn clear_chip(&mut self, pos: Position) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.chip = None;
            cell.score_ids.clear();
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

macro_rules! slot {
    ($rank:ident, $suit:ident) => {
        Some((Rank::$rank, Suit::$suit))
    };
}

// Corners are `None`. Rows 4 and 5 carry the court cards; the layout flips
// orientation across them.
const LAYOUT: [[Option<(Rank, Suit)>; BOARD_SIZE]; BOARD_SIZE] = [
    [
        None, slot!(Nine, Clubs), slot!(Eight, Hearts), slot!(Seven, Spades),
        slot!(Six, Diamonds), slot!(Five, Clubs), slot!(Four, Hearts), slot!(Three, Spades),
        slot!(Two, Diamonds), None,
    ],
    [
        slot!(Ten, Spades), slot!(Nine, Diamonds), slot!(Eight, Clubs), slot!(Seven, Hearts),
        slot!(Six, Spades), slot!(Five, Diamonds), slot!(Four, Clubs), slot!(Three, Hearts),
        slot!(Two, Spades), slot!(Ace, Diamonds),
    ],
    [
        slot!(Ten, Diamonds), slot!(Nine, Spades), slot!(Eight, Diamonds), slot!(Seven, Clubs),
        slot!(Six, Hearts), slot!(Five, Spades), slot!(Four, Diamonds), slot!(Three, Clubs),
        slot!(Two, Hearts), slot!(Ace, Clubs),
    ],
    [
        slot!(Ten, Clubs), slot!(Nine, Hearts), slot!(Eight, Spades), slot!(Seven, Diamonds),
        slot!(Six, Clubs), slot!(Five, Hearts), slot!(Four, Spades), slot!(Three, Diamonds),
        slot!(Two, Clubs), slot!(Ace, Hearts),
    ],
    [
        slot!(Ten, Hearts), slot!(King, Clubs), slot!(Queen, Diamonds), slot!(King, Spades),
        slot!(Queen, Hearts), slot!(Queen, Clubs), slot!(King, Diamonds), slot!(Queen, Spades),
        slot!(King, Hearts), slot!(Ace, Spades),
    ],
    [
        slot!(Ace, Clubs), slot!(King, Hearts), slot!(Queen, Clubs), slot!(King, Diamonds),
        slot!(Queen, Spades), slot!(Queen, Diamonds), slot!(King, Clubs), slot!(Queen, Hearts),
        slot!(King, Spades), slot!(Ten, Diamonds),
    ],
    [
        slot!(Ace, Diamonds), slot!(Two, Spades), slot!(Three, Hearts), slot!(Four, Clubs),
        slot!(Five, Diamonds), slot!(Six, Spades), slot!(Seven, Hearts), slot!(Eight, Clubs),
        slot!(Nine, Diamonds), slot!(Ten, Clubs),
    ],
    [
        slot!(Ace, Spades), slot!(Two, Diamonds), slot!(Three, Spades), slot!(Four, Hearts),
        slot!(Five, Clubs), slot!(Six, Diamonds), slot!(Seven, Spades), slot!(Eight, Hearts),
        slot!(Nine, Clubs), slot!(Ten, Hearts),
    ],
    [
        slot!(Ace, Hearts), slot!(Two, Clubs), slot!(Three, Diamonds), slot!(Four, Spades),
        slot!(Five, Hearts), slot!(Six, Clubs), slot!(Seven, Diamonds), slot!(Eight, Spades),
        slot!(Nine, Hearts), slot!(Ten, Spades),
    ],
    [
        None, slot!(Two, Hearts), slot!(Three, Clubs), slot!(Four, Diamonds),
        slot!(Five, Spades), slot!(Six, Hearts), slot!(Seven, Clubs), slot!(Eight, Diamonds),
        slot!(Nine, Spades), None,
    ],
];
