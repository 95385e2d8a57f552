use std::path::Path;

use tracing::{debug, error, info, instrument};

use crate::config::GameConfig;
use crate::core::update::{step, undo_step};
use crate::core::{BlockedReason, Board, Direction, History, MoveOutcome, MoveRecord, Vec2, WinRule};
use crate::error::{LoadError, ReplayError};
use crate::storage;

/// One loaded level plus everything played on it since the last load or restart.
///
/// The player position is cached here and only changed by accepted moves, undo and restart;
/// the board is never rescanned after construction.
#[derive(Clone, Debug)]
pub struct Session {
    initial: Board,
    initial_player: Vec2,
    board: Board,
    player: Vec2,
    history: History,
    win_rule: WinRule,
}

impl Session {
    pub fn new(board: Board, config: &GameConfig) -> Result<Session, LoadError> {
        let player = board.locate_player().ok_or(LoadError::MissingPlayer)?;
        Ok(Session {
            initial: board,
            initial_player: player,
            board,
            player,
            history: History::with_capacity_limit(config.max_history),
            win_rule: config.win_rule,
        })
    }

    pub fn load(path: &Path, config: &GameConfig) -> Result<Session, LoadError> {
        let board = storage::load_board(path)?;
        let session = Session::new(board, config)?;
        info!(path = %path.display(), player = %session.player, "level loaded");
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn win_rule(&self) -> WinRule {
        self.win_rule
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn is_won(&self) -> bool {
        self.board.is_won_by(self.win_rule)
    }

    pub fn attempt(&mut self, direction: Direction) -> MoveOutcome {
        let mut board = self.board;
        let (player, change) = match step(&mut board, self.player, direction) {
            Ok(resolved) => resolved,
            Err(reason) => {
                debug!(?direction, ?reason, "move blocked");
                return MoveOutcome::Blocked(reason);
            }
        };

        let record = MoveRecord::new(direction, change);
        if let Err(err) = self.history.push(record) {
            debug!(%err, "move blocked");
            return MoveOutcome::Blocked(BlockedReason::HistoryFull);
        }
        self.board = board;
        self.player = player;

        let won = self.is_won();
        debug!(code = %(record.code() as char), player = %player, moves = self.history.len(), won, "move accepted");
        MoveOutcome::Moved { change, won }
    }

    /// Takes back the last accepted move. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(&record) = self.history.last() else {
            return false;
        };
        match undo_step(&mut self.board, self.player, record) {
            Ok(previous) => {
                self.history.pop();
                self.player = previous;
                debug!(code = %(record.code() as char), player = %previous, moves = self.history.len(), "move undone");
                true
            }
            Err(err) => {
                error!(%err, ?record, "move log does not match the board");
                if cfg!(debug_assertions) {
                    panic!("undo stepped off the board: {err}");
                }
                false
            }
        }
    }

    /// Puts the level back the way it was loaded and forgets every move.
    pub fn restart(&mut self) {
        self.board = self.initial;
        self.player = self.initial_player;
        self.history.clear();
        info!("session restarted");
    }

    /// Plays an encoded move log from the current position. See [`Session::replay_moves`].
    pub fn replay(&mut self, log: &[u8]) -> Result<usize, ReplayError> {
        let moves = History::parse(log)?;
        self.replay_moves(&moves)
    }

    /// Plays saved moves from the current position. Every move must be accepted and
    /// must step or push exactly as recorded; on the first mismatch the session is put
    /// back to where it was before the replay.
    #[instrument(skip_all, fields(len = moves.len()))]
    pub fn replay_moves(&mut self, moves: &History) -> Result<usize, ReplayError> {
        let checkpoint = (self.board, self.player, self.history.clone());

        for (index, &expected) in moves.iter().enumerate() {
            let actual = match self.attempt(expected.direction) {
                MoveOutcome::Moved { change, .. } => Some(MoveRecord::new(expected.direction, change)),
                MoveOutcome::Blocked(_) => None,
            };
            if actual != Some(expected) {
                (self.board, self.player, self.history) = checkpoint;
                return Err(ReplayError::Diverged {
                    index,
                    expected,
                    actual,
                });
            }
        }

        info!(moves = moves.len(), "move log replayed");
        Ok(moves.len())
    }

    pub fn serialize_board(&self) -> Vec<u8> {
        self.board.serialize()
    }

    pub fn serialize_history(&self) -> Vec<u8> {
        self.history.serialize()
    }
}
