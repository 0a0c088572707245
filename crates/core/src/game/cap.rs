use super::*;
use crate::{
    available_scores, cap_score, check_win_condition_with, detect_scores, is_already_capped,
    record_capped, scores_containing, validate_capped_chips_in_score, validate_consecutive_line,
    CHIPS_IN_SCORE, MAX_REUSED_CAPPED_CHIPS,
};
use std::collections::HashSet;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapMode {
    color: ChipColor,
    selection: Vec<Position>,
}

impl CapMode {
    fn new(color: ChipColor) -> Self {
        Self {
            color,
            selection: Vec::with_capacity(CHIPS_IN_SCORE),
        }
    }

    pub fn color(&self) -> ChipColor {
        self.color
    }

    pub fn selection(&self) -> &[Position] {
        &self.selection
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapSelectionError {
    #[error("position {0} is out of bounds")]
    OutOfBounds(Position),
    #[error("position {pos} holds no {color} chip")]
    NotMatching { pos: Position, color: ChipColor },
    #[error("a score may reuse at most {} capped chips", MAX_REUSED_CAPPED_CHIPS)]
    TooManyCapped,
    #[error("capped chips at {first} and {second} come from the same score")]
    SameOriginScore { first: Position, second: Position },
    #[error("selected cells do not form a straight line of five")]
    NotALine,
    #[error("score {0} is already capped")]
    AlreadyCapped(String),
    #[error("score {0} breaks the capped-chip reuse rules")]
    Composition(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapOutcome {
    Selected { count: usize },
    Deselected { count: usize },
    Capped {
        scores: Vec<Score>,
        cap_mode_active: bool,
        winner: Option<ChipColor>,
    },
}

impl Game {
    pub fn enter_cap_mode(
        &mut self,
        color: ChipColor,
        events: &mut EventBus,
    ) -> Result<(), GameError> {
        self.ensure_active()?;
        if self.config.seat_of(color).is_none() {
            return Err(GameError::NotSeated(color));
        }
        match self.cap_mode.take() {
            Some(mode) if mode.color == color => {
                self.cap_mode = Some(mode);
                return Ok(());
            }
            Some(mode) => events.push(Event::CapModeExited { color: mode.color }),
            None => {}
        }
        self.cap_mode = Some(CapMode::new(color));
        events.push(Event::CapModeEntered { color });
        Ok(())
    }

    pub fn exit_cap_mode(&mut self, events: &mut EventBus) -> Result<(), GameError> {
        let mode = self.cap_mode.take().ok_or(GameError::CapModeInactive)?;
        events.push(Event::CapModeExited { color: mode.color });
        Ok(())
    }

    /// Toggle `pos` in the cap selection. The fifth cell triggers validation;
    /// if it fails the cell is not added and the first four stay selected.
    pub fn select_cap_cell(
        &mut self,
        pos: Position,
        events: &mut EventBus,
    ) -> Result<CapOutcome, GameError> {
        self.ensure_active()?;
        let mode = self.cap_mode.as_ref().ok_or(GameError::CapModeInactive)?;
        let color = mode.color;
        let mut selection = mode.selection.clone();

        let cell = self
            .board
            .cell(pos)
            .ok_or(CapSelectionError::OutOfBounds(pos))?;
        if !cell.matches(color) {
            return Err(CapSelectionError::NotMatching { pos, color }.into());
        }
        let reuses_capped = cell.is_capped;

        if let Some(index) = selection.iter().position(|picked| *picked == pos) {
            selection.remove(index);
            let count = selection.len();
            self.store_selection(selection);
            return Ok(CapOutcome::Deselected { count });
        }

        if reuses_capped {
            self.check_capped_pick(&selection, pos, color)?;
        }

        selection.push(pos);
        if selection.len() < CHIPS_IN_SCORE {
            let count = selection.len();
            self.store_selection(selection);
            return Ok(CapOutcome::Selected { count });
        }

        let scores = self.validate_selection(&selection, color)?;
        Ok(self.cap_selection(scores, color, events))
    }

    fn store_selection(&mut self, selection: Vec<Position>) {
        if let Some(mode) = self.cap_mode.as_mut() {
            mode.selection = selection;
        }
    }

    fn capped_picks(&self, selection: &[Position]) -> Vec<Position> {
        selection
            .iter()
            .copied()
            .filter(|picked| {
                self.board
                    .cell(*picked)
                    .map_or(false, |cell| !cell.is_corner && cell.is_capped)
            })
            .collect()
    }

    fn check_capped_pick(
        &self,
        selection: &[Position],
        pos: Position,
        color: ChipColor,
    ) -> Result<(), CapSelectionError> {
        let capped_picks = self.capped_picks(selection);
        if capped_picks.len() >= MAX_REUSED_CAPPED_CHIPS {
            return Err(CapSelectionError::TooManyCapped);
        }
        if let Some(first) = capped_picks.first().copied() {
            let first_ids: HashSet<&str> = scores_containing(&self.capped_scores, color, first)
                .map(|score| score.id.as_str())
                .collect();
            let shared = scores_containing(&self.capped_scores, color, pos)
                .any(|score| first_ids.contains(score.id.as_str()));
            if shared {
                return Err(CapSelectionError::SameOriginScore { first, second: pos });
            }
        }
        Ok(())
    }

    fn validate_selection(
        &self,
        selection: &[Position],
        color: ChipColor,
    ) -> Result<Vec<Score>, CapSelectionError> {
        let line = validate_consecutive_line(selection, &self.board, color)
            .ok_or(CapSelectionError::NotALine)?;
        if is_already_capped(&line, &self.capped_scores) {
            return Err(CapSelectionError::AlreadyCapped(line.id));
        }
        if !validate_capped_chips_in_score(&line, &self.board, &self.capped_scores) {
            return Err(CapSelectionError::Composition(line.id));
        }

        let mut scores: Vec<Score> = detect_scores(&self.board, color, &self.capped_scores)
            .into_iter()
            .filter(|score| score.same_cells(selection))
            .filter(|score| !is_already_capped(score, &self.capped_scores))
            .collect();
        if !scores.iter().any(|score| score.key() == line.key()) {
            scores.push(line);
        }
        Ok(scores)
    }

    fn cap_selection(
        &mut self,
        scores: Vec<Score>,
        color: ChipColor,
        events: &mut EventBus,
    ) -> CapOutcome {
        let mut capped = Vec::with_capacity(scores.len());
        for mut score in scores {
            cap_score(&mut self.board, &mut score);
            if record_capped(&mut self.capped_scores, score.clone()) {
                capped.push(score);
            }
        }
        events.push(Event::ScoresCapped {
            color,
            score_ids: capped.iter().map(|score| score.id.clone()).collect(),
            total: self.capped_count(color),
        });

        let winner = check_win_condition_with(&self.capped_scores, self.config.scores_to_win);
        if let Some(winner) = winner {
            info!(%winner, "game won");
            self.winner = Some(winner);
            events.push(Event::GameWon { color: winner });
        }

        // Re-scan right away: stay in cap mode only while more scores remain.
        let remaining = available_scores(&self.board, color, &self.capped_scores);
        let cap_mode_active = winner.is_none() && !remaining.is_empty();
        if cap_mode_active {
            debug!(%color, remaining = remaining.len(), "cap mode stays active");
            if let Some(mode) = self.cap_mode.as_mut() {
                mode.selection.clear();
            }
        } else if let Some(mode) = self.cap_mode.take() {
            events.push(Event::CapModeExited { color: mode.color });
        }

        CapOutcome::Capped {
            scores: capped,
            cap_mode_active,
            winner,
        }
    }
}
