mod board;
mod history;
mod model_helpers;
mod models;
mod session;
mod update;

pub use board::Board;
pub use history::History;
pub use models::{BOARD_SIZE, BlockedReason, Cell, Direction, GameChangeType, MoveOutcome, MoveRecord, Vec2, WinRule};
pub use session::Session;
pub use update::{step, undo_step};
