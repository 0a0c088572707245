use super::*;
use crate::{
    burn_card, check_for_new_scores, play_card, wild_card_add_chip, wild_card_remove_chip,
    JokerAction, WildCardType,
};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TurnOutcome {
    pub new_scores: Vec<Score>,
    pub drawn: Option<Card>,
    pub turn_ended: bool,
}

impl Game {
    pub fn play_card(
        &mut self,
        card_id: CardId,
        pos: Position,
        events: &mut EventBus,
    ) -> Result<TurnOutcome, GameError> {
        self.ensure_can_play()?;
        let card = self.held_card(card_id)?;
        if card.is_wild() {
            return Err(GameError::WildCardPlay(card));
        }
        play_card(&card, pos, &self.board)?;

        let new_scores = self.place(card, pos, events);
        let drawn = self.draw_for_current(events);
        self.end_turn(events);
        Ok(TurnOutcome {
            new_scores,
            drawn,
            turn_ended: true,
        })
    }

    /// Play a jack or joker. `joker_action` is required for jokers and ignored
    /// for jacks. A two-eyed jack keeps the turn; everything else ends it.
    pub fn play_wild(
        &mut self,
        card_id: CardId,
        pos: Position,
        joker_action: Option<JokerAction>,
        events: &mut EventBus,
    ) -> Result<TurnOutcome, GameError> {
        self.ensure_can_play()?;
        let card = self.held_card(card_id)?;
        let kind = card.wild.ok_or(GameError::NotWildCard(card))?;
        let action = match kind {
            WildCardType::TwoEyedJack => JokerAction::Add,
            WildCardType::OneEyedJack => JokerAction::Remove,
            WildCardType::Joker => joker_action.ok_or(GameError::JokerActionRequired)?,
        };

        let new_scores = match action {
            JokerAction::Add => {
                wild_card_add_chip(pos, self.current_player(), &self.board)?;
                self.place(card, pos, events)
            }
            JokerAction::Remove => {
                self.remove(card, pos, events)?;
                Vec::new()
            }
        };

        let drawn = self.draw_for_current(events);
        let turn_ended = kind != WildCardType::TwoEyedJack;
        if turn_ended {
            self.end_turn(events);
        }
        Ok(TurnOutcome {
            new_scores,
            drawn,
            turn_ended,
        })
    }

    pub fn burn(&mut self, card_id: CardId, events: &mut EventBus) -> Result<Card, GameError> {
        self.ensure_can_play()?;
        if self.burned_this_turn {
            return Err(GameError::AlreadyBurned);
        }
        let card = self.held_card(card_id)?;
        let drawn = burn_card(&card, &self.board, &mut self.deck)?;

        self.discard_from_hand(card_id);
        self.hands[self.current].add_card(drawn);
        self.burned_this_turn = true;
        events.push(Event::CardBurned {
            color: self.current_player(),
            burned: card,
            drawn,
        });
        Ok(drawn)
    }

    fn place(&mut self, card: Card, pos: Position, events: &mut EventBus) -> Vec<Score> {
        let color = self.current_player();
        self.discard_from_hand(card.id);
        self.board.place_chip(pos, color);
        events.push(Event::ChipPlaced { color, pos, card });

        let new_scores = check_for_new_scores(&self.board, pos, color, &self.capped_scores);
        if !new_scores.is_empty() {
            debug!(%color, count = new_scores.len(), "placement completed scores");
        }
        new_scores
    }

    fn remove(&mut self, card: Card, pos: Position, events: &mut EventBus) -> Result<(), GameError> {
        let by = self.current_player();
        // An empty or off-board target has no owner; the removal check below
        // reports why.
        let owner = match self.board.cell(pos).and_then(|cell| cell.chip) {
            Some(owner) if owner == by => return Err(GameError::OwnChip(pos)),
            Some(owner) => owner,
            None => by,
        };
        wild_card_remove_chip(pos, owner, &self.board)?;

        self.discard_from_hand(card.id);
        self.board.clear_chip(pos);
        events.push(Event::ChipRemoved {
            by,
            owner,
            pos,
            card,
        });
        Ok(())
    }
}
