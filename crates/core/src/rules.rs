use crate::{Board, Card, Position, Rank, Suit, WildCardType};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("position {0} is out of bounds")]
    OutOfBounds(Position),
    #[error("position {0} is a joker corner and never holds a chip")]
    CornerCell(Position),
    #[error("position {0} is already occupied")]
    Occupied(Position),
    #[error("position {0} has no chip to remove")]
    NoChip(Position),
    #[error("{card} does not match the {rank:?} of {suit:?} at {pos}")]
    Mismatch {
        card: Card,
        pos: Position,
        rank: Rank,
        suit: Suit,
    },
}

/// Decide whether `card` may target `pos`. Checks run in a fixed order:
/// bounds, corner, then the card-type specific rule.
///
/// Wild cards only get an occupancy check here. Chip ownership and capped
/// state are enforced by the wild-card operations.
pub fn play_card(card: &Card, pos: Position, board: &Board) -> Result<(), PlayError> {
    let cell = board.cell(pos).ok_or(PlayError::OutOfBounds(pos))?;
    if cell.is_corner {
        return Err(PlayError::CornerCell(pos));
    }
    match card.wild {
        Some(WildCardType::TwoEyedJack) => {
            if cell.is_occupied() {
                return Err(PlayError::Occupied(pos));
            }
            Ok(())
        }
        Some(WildCardType::OneEyedJack) => {
            if !cell.is_occupied() {
                return Err(PlayError::NoChip(pos));
            }
            Ok(())
        }
        Some(WildCardType::Joker) => Ok(()),
        None => {
            if cell.is_occupied() {
                return Err(PlayError::Occupied(pos));
            }
            if cell.rank != card.rank || cell.suit != card.suit {
                return Err(PlayError::Mismatch {
                    card: *card,
                    pos,
                    rank: cell.rank,
                    suit: cell.suit,
                });
            }
            Ok(())
        }
    }
}

pub fn can_play_card(card: &Card, pos: Position, board: &Board) -> bool {
    play_card(card, pos, board).is_ok()
}

pub fn legal_positions(card: &Card, board: &Board) -> Vec<Position> {
    Position::all()
        .filter(|pos| can_play_card(card, *pos, board))
        .collect()
}
