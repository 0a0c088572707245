use crate::{Board, ChipColor, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JokerAction {
    Add,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WildCardError {
    #[error("position {0} is out of bounds")]
    OutOfBounds(Position),
    #[error("position {0} is a joker corner and never holds a chip")]
    CornerCell(Position),
    #[error("position {0} is already occupied")]
    Occupied(Position),
    #[error("no chip at position {0}")]
    NoChip(Position),
    #[error("chip at {pos} is {found}, not an opponent chip ({expected})")]
    NotOpponentChip {
        pos: Position,
        expected: ChipColor,
        found: ChipColor,
    },
    #[error("cannot remove chip at {0}: it belongs to a capped score")]
    Capped(Position),
}

pub fn wild_card_add_chip(
    pos: Position,
    _color: ChipColor,
    board: &Board,
) -> Result<(), WildCardError> {
    let cell = board.cell(pos).ok_or(WildCardError::OutOfBounds(pos))?;
    if cell.is_corner {
        return Err(WildCardError::CornerCell(pos));
    }
    // Capped cells always hold a chip, so this also refuses them.
    if cell.is_occupied() {
        return Err(WildCardError::Occupied(pos));
    }
    Ok(())
}

pub fn wild_card_remove_chip(
    pos: Position,
    opponent: ChipColor,
    board: &Board,
) -> Result<(), WildCardError> {
    let cell = board.cell(pos).ok_or(WildCardError::OutOfBounds(pos))?;
    if cell.is_corner {
        return Err(WildCardError::CornerCell(pos));
    }
    let found = cell.chip.ok_or(WildCardError::NoChip(pos))?;
    if found != opponent {
        return Err(WildCardError::NotOpponentChip {
            pos,
            expected: opponent,
            found,
        });
    }
    if cell.is_capped {
        return Err(WildCardError::Capped(pos));
    }
    Ok(())
}
