use crate::{Card, ChipColor, Position};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    GameStarted {
        starting: ChipColor,
        players: usize,
        deck_remaining: usize,
    },
    ChipPlaced {
        color: ChipColor,
        pos: Position,
        card: Card,
    },
    ChipRemoved {
        by: ChipColor,
        owner: ChipColor,
        pos: Position,
        card: Card,
    },
    CardDrawn {
        color: ChipColor,
        deck_remaining: usize,
    },
    CardBurned {
        color: ChipColor,
        burned: Card,
        drawn: Card,
    },
    TurnPassed {
        from: ChipColor,
        to: ChipColor,
    },
    CapModeEntered { color: ChipColor },
    CapModeExited { color: ChipColor },
    ScoresCapped {
        color: ChipColor,
        score_ids: Vec<String>,
        total: usize,
    },
    GameWon { color: ChipColor },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
