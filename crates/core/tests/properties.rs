//! Property tests over random boards.
//!
//! - A card is burnable exactly when no cell accepts it (capped chips are
//!   never removal targets)
//! - Shuffling permutes the deck without losing or duplicating cards
//! - Every detected score survives re-validation as a player selection

mod common;

use common::mark_capped;
use proptest::prelude::*;
use quadseq_core::{
    can_play_card, detect_scores, is_card_playable, validate_consecutive_line,
    validate_capped_chips_in_score, Board, ChipColor, Deck, Position, RngState, TOTAL_CARDS,
};

/// Per-cell state: 0 empty, 1 red, 2 blue, 3 capped red.
fn board_strategy() -> impl Strategy<Value = Board> {
    proptest::collection::vec(0u8..4, 100).prop_map(|states| {
        let mut board = Board::standard();
        for (at, state) in Position::all().zip(states) {
            if board.cell(at).is_some_and(|cell| cell.is_corner) {
                continue;
            }
            match state {
                1 => board.place_chip(at, ChipColor::Red),
                2 => board.place_chip(at, ChipColor::Blue),
                3 => {
                    board.place_chip(at, ChipColor::Red);
                    mark_capped(&mut board, at);
                }
                _ => {}
            }
        }
        board
    })
}

/// Dense red boards, no capped chips.
fn red_board_strategy() -> impl Strategy<Value = Board> {
    proptest::collection::vec(prop::bool::weighted(0.7), 100).prop_map(|filled| {
        let mut board = Board::standard();
        for (at, red) in Position::all().zip(filled) {
            if red && board.cell(at).is_some_and(|cell| !cell.is_corner) {
                board.place_chip(at, ChipColor::Red);
            }
        }
        board
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_playable_iff_some_cell_accepts(
        board in board_strategy(),
        index in 0usize..TOTAL_CARDS,
    ) {
        common::init_logging();
        let card = Deck::initialize().cards[index];
        let accepted = Position::all().any(|at| {
            can_play_card(&card, at, &board)
                && board.cell(at).is_some_and(|cell| !cell.is_capped)
        });
        prop_assert_eq!(is_card_playable(&card, &board), accepted, "{}", card);
    }

    #[test]
    fn prop_shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut deck = Deck::initialize();
        deck.shuffle(&mut RngState::from_seed(seed));
        let mut ids: Vec<u32> = deck.cards.iter().map(|card| card.id).collect();
        ids.sort_unstable();
        prop_assert_eq!(ids, (0..TOTAL_CARDS as u32).collect::<Vec<_>>());
    }

    #[test]
    fn prop_detected_scores_validate_as_selections(board in red_board_strategy()) {
        for score in detect_scores(&board, ChipColor::Red, &[]) {
            prop_assert!(validate_capped_chips_in_score(&score, &board, &[]));
            let mut clicked = score.cells.clone();
            clicked.reverse();
            let selected = validate_consecutive_line(&clicked, &board, ChipColor::Red);
            prop_assert_eq!(selected.map(|line| line.key()), Some(score.key()));
        }
    }
}
