//! Game session: mode, scores and turn flow around the core game state
//!
//! A session lives from the moment a mode is picked in the main menu until
//! the player returns to the menu. It owns the current [`GameState`], the
//! running scores, and the schedule for the computer's reply. Frontends call
//! [`GameSession::click`] for human input and [`GameSession::tick`] from
//! their frame loop; all timing goes through the `now` they pass in.

use std::time::{Duration, Instant};

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use crate::board::{Board, GameState, Mark};
use crate::config::Config;
use crate::engine::{AIEngine, MoveResult};
use crate::error::{Error, Result};
use crate::rules::{winning_line, Outcome};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs Player (hotseat)
    PlayerVsPlayer,
    /// Player vs Computer
    PlayerVsComputer,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsComputer => "Player vs Computer",
        }
    }
}

/// Wins per mark and draws, kept across resets within one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub x: u32,
    pub o: u32,
    pub draws: u32,
}

impl Scores {
    #[inline]
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Count a finished game. In-progress outcomes are ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Mark::X) => self.x += 1,
            Outcome::Win(Mark::O) => self.o += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

/// One sitting at the board
pub struct GameSession {
    mode: GameMode,
    config: Config,
    state: GameState,
    scores: Scores,
    /// Mark played by the computer in the current game (PvC only)
    computer_mark: Option<Mark>,
    /// When the scheduled computer move becomes due
    computer_due: Option<Instant>,
    engine: AIEngine,
    rng: StdRng,
    last_move: Option<usize>,
    last_ai_result: Option<MoveResult>,
    pub message: Option<String>,
}

impl GameSession {
    /// Start a session and its first game
    pub fn new(mode: GameMode, config: Config, now: Instant) -> Self {
        Self::with_rng(mode, config, StdRng::from_os_rng(), now)
    }

    /// Start a session with a seeded coin for the first-mover policy
    pub fn with_seed(mode: GameMode, config: Config, seed: u64, now: Instant) -> Self {
        Self::with_rng(mode, config, StdRng::seed_from_u64(seed), now)
    }

    fn with_rng(mode: GameMode, config: Config, rng: StdRng, now: Instant) -> Self {
        info!(mode = mode.label(), ?config, "starting session");
        let mut session = Self {
            mode,
            config,
            state: GameState::new(),
            scores: Scores::default(),
            computer_mark: None,
            computer_due: None,
            engine: AIEngine::new(),
            rng,
            last_move: None,
            last_ai_result: None,
            message: None,
        };
        session.reset(now);
        session
    }

    /// Fresh board with X to move. Scores are kept.
    ///
    /// In PvC the first-mover policy is applied again; when the computer
    /// opens it plays X and its move is due immediately.
    pub fn reset(&mut self, now: Instant) {
        self.state.reset();
        self.computer_due = None;
        self.last_move = None;
        self.last_ai_result = None;
        self.message = None;

        self.computer_mark = match self.mode {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsComputer => {
                let computer_first = self.config.first_mover.computer_moves_first(&mut self.rng);
                Some(if computer_first { Mark::X } else { Mark::O })
            }
        };

        if self.is_computer_turn() {
            debug!("computer opens the game");
            self.computer_due = Some(now);
        }
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    #[inline]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    #[inline]
    pub fn computer_mark(&self) -> Option<Mark> {
        self.computer_mark
    }

    /// Mark the human plays in PvC
    #[inline]
    pub fn human_mark(&self) -> Option<Mark> {
        self.computer_mark.map(Mark::opponent)
    }

    #[inline]
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    #[inline]
    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Cells of the completed line, if the game was won
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        winning_line(self.board()).map(|(line, _)| line)
    }

    /// Computer to move in an unfinished PvC game
    pub fn is_computer_turn(&self) -> bool {
        !self.outcome().is_terminal() && self.computer_mark == Some(self.state.turn())
    }

    /// Computer move scheduled but not yet played
    #[inline]
    pub fn is_computer_pending(&self) -> bool {
        self.computer_due.is_some()
    }

    /// Time left before the scheduled computer move
    pub fn time_until_computer(&self, now: Instant) -> Option<Duration> {
        self.computer_due.map(|due| due.saturating_duration_since(now))
    }

    /// Human move at `index`.
    ///
    /// On a PvC game the computer's reply is scheduled `computer_delay` after
    /// `now`. Rejected clicks change nothing.
    #[instrument(skip(self, now))]
    pub fn click(&mut self, index: usize, now: Instant) -> Result<Outcome> {
        if self.outcome().is_terminal() {
            return Err(Error::GameOver);
        }
        if self.is_computer_turn() {
            return Err(Error::NotYourTurn);
        }

        let outcome = self.state.play(index)?;
        self.last_move = Some(index);
        self.message = None;
        self.finish_move(outcome);

        if self.is_computer_turn() {
            self.computer_due = Some(now + self.config.computer_delay);
        }
        Ok(outcome)
    }

    /// Play the scheduled computer move once it is due.
    ///
    /// Returns true when the board changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.computer_due {
            Some(due) if now >= due => {
                self.computer_due = None;
                self.play_computer_move().is_some()
            }
            _ => false,
        }
    }

    /// Run the computer's turn right away, ignoring any schedule.
    ///
    /// Returns the index played, or `None` when it is not the computer's
    /// turn or no move exists.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) -> Option<usize> {
        self.computer_due = None;
        if !self.is_computer_turn() {
            return None;
        }
        let mark = self.computer_mark?;

        let result = self.engine.get_move_with_stats(self.state.board(), mark);
        self.last_ai_result = Some(result);

        let index = result.best_move?;
        match self.state.play(index) {
            Ok(outcome) => {
                self.last_move = Some(index);
                self.finish_move(outcome);
                Some(index)
            }
            Err(err) => {
                warn!(index, %err, "computer move rejected");
                self.message = Some(err.to_string());
                None
            }
        }
    }

    fn finish_move(&mut self, outcome: Outcome) {
        if outcome.is_terminal() {
            self.scores.record(outcome);
            info!(%outcome, x = self.scores.x, o = self.scores.o, draws = self.scores.draws, "game over");
        }
    }

    /// Status text: winner, tie, or whose turn it is
    pub fn status_line(&self) -> String {
        match self.outcome() {
            Outcome::Win(mark) if self.computer_mark == Some(mark) => "Computer wins!".to_string(),
            Outcome::Win(mark) => format!("Player {mark} wins!"),
            Outcome::Draw => "It's a tie!".to_string(),
            Outcome::InProgress if self.is_computer_turn() => "Computer is thinking...".to_string(),
            Outcome::InProgress => format!("Player {}'s turn", self.state.turn()),
        }
    }
}
