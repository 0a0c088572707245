use crate::{Card, CardId, Rank, RngState, Suit};
use serde::{Deserialize, Serialize};

pub const CARDS_PER_DECK: usize = 52;
pub const DECKS_IN_GAME: usize = 2;
pub const JOKERS_IN_GAME: usize = 4;
pub const TOTAL_CARDS: usize = CARDS_PER_DECK * DECKS_IN_GAME + JOKERS_IN_GAME;

/// Draw pile. The top of the deck is the end of `cards`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn initialize() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS);
        let mut next_id: CardId = 0;
        for _ in 0..DECKS_IN_GAME {
            for suit in Suit::STANDARD {
                for rank in Rank::STANDARD {
                    cards.push(Card::standard(suit, rank, next_id));
                    next_id += 1;
                }
            }
        }
        for _ in 0..JOKERS_IN_GAME {
            cards.push(Card::joker(next_id));
            next_id += 1;
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(card) = self.draw() {
                cards.push(card);
            } else {
                break;
            }
        }
        cards
    }

    pub fn reset(&mut self, rng: &mut RngState) {
        *self = Self::initialize();
        self.shuffle(rng);
    }
}
