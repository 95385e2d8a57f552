use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Board, History, Session, Vec2};
use crate::error::{HistoryError, LoadError};

pub fn load_board(path: &Path) -> Result<Board, LoadError> {
    let bytes = fs::read(path).map_err(|e| LoadError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Board::parse(&bytes)
}

pub fn save_board(path: &Path, board: &Board) -> std::io::Result<()> {
    fs::write(path, board.serialize())?;
    info!(path = %path.display(), "board saved");
    Ok(())
}

pub fn load_history(path: &Path) -> Result<History, HistoryError> {
    let bytes = fs::read(path)?;
    History::parse(&bytes)
}

pub fn save_history(path: &Path, history: &History) -> std::io::Result<()> {
    fs::write(path, history.serialize())?;
    info!(path = %path.display(), moves = history.len(), "move log saved");
    Ok(())
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonSession {
    rows: Vec<String>,
    player: Vec2,
    move_count: usize,
    moves: String,
    won: bool,
}

/// Snapshot of a session as pretty-printed JSON, with the board rows and move log in
/// their file encodings.
pub fn export_session_json(session: &Session) -> Result<String, serde_json::Error> {
    let rows = session
        .board()
        .rows()
        .map(|row| row.iter().map(|c| c.code() as char).collect::<String>())
        .collect();
    let moves = session.history().iter().map(|m| m.code() as char).collect::<String>();

    let json_data = JsonSession {
        rows,
        player: session.player(),
        move_count: session.move_count(),
        moves,
        won: session.is_won(),
    };
    serde_json::to_string_pretty(&json_data)
}
