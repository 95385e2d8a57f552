use crate::core::{BlockedReason, GameChangeType, Session};

pub struct GameRenderState<'a> {
    pub level_name: &'a str,
    pub session: &'a Session,
    pub status: GameStatus,
    pub blocked: Option<BlockedReason>,
    pub last_change: Option<GameChangeType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Surrendered,
}
