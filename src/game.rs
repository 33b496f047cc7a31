use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GameConfig;
use crate::core::{
    evaluate, step, Direction, Grid, LevelError, MoveCode, MoveOutcome, Rejection, ReplayError,
    RulesError, Verdict,
};
use crate::report::GameReport;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub moves: usize,
    pub pushes: usize,
}

/// A play session over one level: the undo history of board snapshots and
/// the log of moves that produced them.
///
/// `history` is never empty and always holds exactly one more entry than `path`.
#[derive(Clone, Debug)]
pub struct Game {
    level: String,
    config: GameConfig,
    initial: Grid,
    history: Vec<Grid>,
    path: Vec<MoveCode>,
}

impl Game {
    pub fn new(level: &str) -> Result<Game, LevelError> {
        Game::with_config(level, GameConfig::default())
    }

    pub fn with_config(level: &str, config: GameConfig) -> Result<Game, LevelError> {
        let initial = Grid::parse(level)?;
        config.validate(&initial)?;
        Ok(Game {
            level: level.to_string(),
            config,
            history: vec![initial.clone()],
            initial,
            path: Vec::new(),
        })
    }

    pub fn state(&self) -> &Grid {
        self.history.last().unwrap_or(&self.initial)
    }

    pub fn has_won(&self) -> bool {
        self.state().has_won()
    }

    pub fn path(&self) -> &[MoveCode] {
        &self.path
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Moves the player, pushing a box if one is in the way. A rejected move
    /// leaves the session untouched.
    pub fn move_player(&mut self, direction: Direction) -> Result<MoveOutcome, RulesError> {
        if !self.config.allow_moves_after_win && self.has_won() {
            return Ok(MoveOutcome::Rejected(Rejection::AlreadyWon));
        }

        let mut next = self.state().clone();
        let outcome = step(&mut next, direction, true)?;
        if let MoveOutcome::Moved(code) = outcome {
            debug!(code = %code.as_char(), moves = self.path.len() + 1, "move applied");
            self.history.push(next);
            self.path.push(code);
        }
        Ok(outcome)
    }

    pub fn move_delta(&mut self, dx: i32, dy: i32) -> Result<MoveOutcome, RulesError> {
        self.move_player(Direction::from_delta(dx, dy)?)
    }

    /// Whether a move would succeed right now, without making it.
    pub fn can_move(&self, direction: Direction, can_push: bool) -> Result<bool, RulesError> {
        if !self.config.allow_moves_after_win && self.has_won() {
            return Ok(false);
        }
        Ok(matches!(
            evaluate(self.state(), direction, can_push)?,
            Verdict::Legal(_)
        ))
    }

    /// Returns false when already back at the initial board.
    pub fn undo(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        let undone = self.path.pop();
        debug!(code = ?undone.map(|c| c.as_char()), "move undone");
        true
    }

    pub fn reset(&mut self) {
        debug!(discarded = self.path.len(), "session reset");
        self.history.clear();
        self.history.push(self.initial.clone());
        self.path.clear();
    }

    pub fn score(&self) -> Score {
        self.path.iter().fold(Score::default(), |score, code| Score {
            moves: score.moves + 1,
            pushes: score.pushes + usize::from(code.is_push()),
        })
    }

    /// The move log, lowercase for steps and uppercase for pushes.
    pub fn solution(&self) -> String {
        self.path.iter().map(MoveCode::as_char).collect()
    }

    /// Plays back a move log from the current board. Each move has to come
    /// out exactly as logged, step or push; on the first mismatch the session
    /// stays at the board reached before it.
    pub fn replay(&mut self, solution: &str) -> Result<(), ReplayError> {
        for (index, code) in solution.chars().enumerate() {
            let expected =
                MoveCode::from_char(code).ok_or(ReplayError::UnknownCode { code, index })?;
            if !self.config.allow_moves_after_win && self.has_won() {
                return Err(ReplayError::Diverged { code, index });
            }
            let mut next = self.state().clone();
            match step(&mut next, expected.direction, expected.is_push())? {
                MoveOutcome::Moved(actual) if actual == expected => {
                    self.history.push(next);
                    self.path.push(actual);
                }
                _ => return Err(ReplayError::Diverged { code, index }),
            }
        }
        Ok(())
    }

    pub fn report(&self) -> GameReport {
        GameReport {
            level: self.level.clone(),
            board: self.state().to_string(),
            solution: self.solution(),
            score: self.score(),
            won: self.has_won(),
        }
    }
}
