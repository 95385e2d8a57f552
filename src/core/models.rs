use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
    Target,
    Player,
    PlayerOnTarget,
    Box,
    BoxOnTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Whether an accepted move only moved the player, or also pushed a box ahead of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

/// One entry of the move log. Enough to reverse the move without a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub direction: Direction,
    pub change: GameChangeType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockedReason {
    OutOfBounds,
    Wall,
    BoxBlocked,
    HistoryFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { change: GameChangeType, won: bool },
    Blocked(BlockedReason),
}

/// Which cells must be gone from the board for the level to count as solved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinRule {
    /// No bare target and no player standing on a target: every target holds a box.
    #[default]
    BoxesOnTargets,
    /// No bare target: the player standing on a target also covers it.
    TargetsCovered,
}
