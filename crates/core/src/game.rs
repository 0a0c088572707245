use crate::{
    Board, BurnError, Card, CardId, ChipColor, ConfigError, Deck, Event, EventBus, Hand,
    PlayError, Position, RngState, RulesConfig, Score, WildCardError,
};
use thiserror::Error;
use tracing::info;

mod cap;
mod turn;

pub use cap::{CapMode, CapOutcome, CapSelectionError};
pub use turn::TurnOutcome;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("game is over: {0} has won")]
    GameOver(ChipColor),
    #[error("cap mode is active for {0}")]
    CapModeActive(ChipColor),
    #[error("cap mode is not active")]
    CapModeInactive,
    #[error("card {0} is not in the current player's hand")]
    CardNotInHand(CardId),
    #[error("a card was already burned this turn")]
    AlreadyBurned,
    #[error("{0} is not a wild card")]
    NotWildCard(Card),
    #[error("{0} is a wild card")]
    WildCardPlay(Card),
    #[error("choose whether the joker adds or removes a chip")]
    JokerActionRequired,
    #[error("chip at {0} belongs to the current player")]
    OwnChip(Position),
    #[error("{0} is not seated in this game")]
    NotSeated(ChipColor),
    #[error("invalid rules config: {0}")]
    Config(#[from] ConfigError),
    #[error("illegal play: {0}")]
    Play(#[from] PlayError),
    #[error("illegal wild card use: {0}")]
    Wild(#[from] WildCardError),
    #[error("cannot burn: {0}")]
    Burn(#[from] BurnError),
    #[error("cannot select cell: {0}")]
    CapSelection(#[from] CapSelectionError),
}

#[derive(Debug)]
pub struct Game {
    pub config: RulesConfig,
    pub rng: RngState,
    pub board: Board,
    pub deck: Deck,
    /// Indexed by seat, parallel to `config.players`.
    pub hands: Vec<Hand>,
    pub discard: Vec<Card>,
    pub capped_scores: Vec<Score>,
    current: usize,
    games_started: usize,
    burned_this_turn: bool,
    cap_mode: Option<CapMode>,
    winner: Option<ChipColor>,
}

impl Game {
    pub fn new(config: RulesConfig, rng: RngState) -> Result<Self, GameError> {
        config.validate()?;
        let hands = vec![Hand::new(); config.players.len()];
        Ok(Self {
            config,
            rng,
            board: Board::standard(),
            deck: Deck::initialize(),
            hands,
            discard: Vec::new(),
            capped_scores: Vec::new(),
            current: 0,
            games_started: 0,
            burned_this_turn: false,
            cap_mode: None,
            winner: None,
        })
    }

    pub fn new_game(&mut self, events: &mut EventBus) {
        self.board.reset();
        self.deck.reset(&mut self.rng);
        for hand in &mut self.hands {
            hand.clear();
        }
        self.discard.clear();
        self.capped_scores.clear();
        self.burned_this_turn = false;
        self.cap_mode = None;
        self.winner = None;

        let seats = self.config.players.len();
        self.current = self.games_started % seats;
        self.games_started += 1;
        for _ in 0..self.config.hand_size {
            for offset in 0..seats {
                let seat = (self.current + offset) % seats;
                if let Some(card) = self.deck.draw() {
                    self.hands[seat].add_card(card);
                }
            }
        }

        let starting = self.current_player();
        info!(%starting, seed = self.rng.seed(), "new game dealt");
        events.push(Event::GameStarted {
            starting,
            players: seats,
            deck_remaining: self.deck.len(),
        });
    }

    pub fn current_player(&self) -> ChipColor {
        self.config.players[self.current]
    }

    pub fn winner(&self) -> Option<ChipColor> {
        self.winner
    }

    pub fn has_burned_this_turn(&self) -> bool {
        self.burned_this_turn
    }

    pub fn cap_mode(&self) -> Option<&CapMode> {
        self.cap_mode.as_ref()
    }

    pub fn hand(&self, color: ChipColor) -> Option<&Hand> {
        let seat = self.config.seat_of(color)?;
        self.hands.get(seat)
    }

    pub fn current_hand(&self) -> &Hand {
        &self.hands[self.current]
    }

    pub fn capped_count(&self, color: ChipColor) -> usize {
        self.capped_scores
            .iter()
            .filter(|score| score.is_capped && score.color == color)
            .count()
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        match self.winner {
            Some(color) => Err(GameError::GameOver(color)),
            None => Ok(()),
        }
    }

    fn ensure_can_play(&self) -> Result<(), GameError> {
        self.ensure_active()?;
        match &self.cap_mode {
            Some(mode) => Err(GameError::CapModeActive(mode.color())),
            None => Ok(()),
        }
    }

    fn held_card(&self, id: CardId) -> Result<Card, GameError> {
        self.current_hand()
            .get(id)
            .copied()
            .ok_or(GameError::CardNotInHand(id))
    }

    fn discard_from_hand(&mut self, id: CardId) {
        if let Some(card) = self.hands[self.current].remove_card(id) {
            self.discard.push(card);
        }
    }

    fn draw_for_current(&mut self, events: &mut EventBus) -> Option<Card> {
        let card = self.deck.draw()?;
        self.hands[self.current].add_card(card);
        events.push(Event::CardDrawn {
            color: self.current_player(),
            deck_remaining: self.deck.len(),
        });
        Some(card)
    }

    fn end_turn(&mut self, events: &mut EventBus) {
        let from = self.current_player();
        self.current = (self.current + 1) % self.config.players.len();
        self.burned_this_turn = false;
        events.push(Event::TurnPassed {
            from,
            to: self.current_player(),
        });
    }
}
