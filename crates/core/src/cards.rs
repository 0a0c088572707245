use serde::{Deserialize, Serialize};
use std::fmt;

pub type CardId = u32;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
    Joker,
}

impl Suit {
    pub const STANDARD: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Joker,
}

impl Rank {
    pub const STANDARD: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn is_court(self) -> bool {
        matches!(self, Rank::King | Rank::Queen)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WildCardType {
    TwoEyedJack,
    OneEyedJack,
    Joker,
}

impl WildCardType {
    /// Diamonds and clubs jacks look at the player with both eyes; hearts and
    /// spades jacks are drawn in profile.
    pub fn for_card(suit: Suit, rank: Rank) -> Option<Self> {
        match (rank, suit) {
            (Rank::Joker, _) | (_, Suit::Joker) => Some(WildCardType::Joker),
            (Rank::Jack, Suit::Diamonds | Suit::Clubs) => Some(WildCardType::TwoEyedJack),
            (Rank::Jack, Suit::Hearts | Suit::Spades) => Some(WildCardType::OneEyedJack),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub id: CardId,
    #[serde(default)]
    pub wild: Option<WildCardType>,
}

impl Card {
    pub fn standard(suit: Suit, rank: Rank, id: CardId) -> Self {
        Self {
            suit,
            rank,
            id,
            wild: WildCardType::for_card(suit, rank),
        }
    }

    pub fn joker(id: CardId) -> Self {
        Self::standard(Suit::Joker, Rank::Joker, id)
    }

    pub fn is_wild(&self) -> bool {
        self.wild.is_some()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rank == Rank::Joker {
            return write!(f, "Joker");
        }
        write!(f, "{:?} of {:?}", self.rank, self.suit)
    }
}
