use crate::{can_play_card, Board, Card, Cell, Deck, WildCardType};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BurnError {
    #[error("{0} is playable somewhere on the board; play it instead of burning it")]
    Playable(Card),
    #[error("deck is empty")]
    DeckEmpty,
}

pub fn is_card_playable(card: &Card, board: &Board) -> bool {
    match card.wild {
        Some(WildCardType::TwoEyedJack) => board.cells().any(open_cell),
        Some(WildCardType::OneEyedJack) => board.cells().any(removable_chip),
        Some(WildCardType::Joker) => board
            .cells()
            .any(|cell| open_cell(cell) || removable_chip(cell)),
        None => board
            .cells()
            .any(|cell| can_play_card(card, cell.position(), board)),
    }
}

fn open_cell(cell: &Cell) -> bool {
    !cell.is_corner && !cell.is_occupied()
}

fn removable_chip(cell: &Cell) -> bool {
    !cell.is_corner && cell.is_occupied() && !cell.is_capped
}

/// Exchange an unplayable card for the top of the deck.
///
/// Only the draw happens here. The caller moves `card` from the hand to the
/// discard pile and adds the returned card to the hand. The one-burn-per-turn
/// limit is the caller's to enforce.
pub fn burn_card(card: &Card, board: &Board, deck: &mut Deck) -> Result<Card, BurnError> {
    if is_card_playable(card, board) {
        return Err(BurnError::Playable(*card));
    }
    let drawn = deck.draw().ok_or(BurnError::DeckEmpty)?;
    debug!(burned = %card, drawn = %drawn, "card burned");
    Ok(drawn)
}
