use crate::core::{BlockedReason, Board, Cell, Direction, GameChangeType, MoveRecord, Vec2};
use crate::error::BoardError;

/// Resolves one move of the player standing at `player`. On success the board has been
/// updated and the new player position is returned along with what kind of move it was.
/// A blocked move leaves the board untouched.
pub fn step(board: &mut Board, player: Vec2, dir: Direction) -> Result<(Vec2, GameChangeType), BlockedReason> {
    let dir = dir.to_vec2();

    let next = player + dir;
    if !board.contains(next) {
        return Err(BlockedReason::OutOfBounds);
    }

    let dest = board[next];
    if dest == Cell::Wall {
        return Err(BlockedReason::Wall);
    }
    let pushing = dest.is_box();

    if pushing {
        let beyond = next + dir;
        if !board.contains(beyond) {
            return Err(BlockedReason::BoxBlocked);
        }
        let beyond_cell = board[beyond];
        if !beyond_cell.is_walkable() {
            return Err(BlockedReason::BoxBlocked);
        }

        // Move box
        board[beyond] = beyond_cell.with_box();
        // Clear old box spot (player will step into it)
        board[next] = dest.vacated();
    } else if !dest.is_walkable() {
        // the only other occupant is a second player cell
        return Err(BlockedReason::BoxBlocked);
    }

    // Move player
    board[player] = board[player].vacated();
    board[next] = board[next].with_player();

    let change = if pushing {
        GameChangeType::PlayerAndBoxMove
    } else {
        GameChangeType::PlayerMove
    };
    Ok((next, change))
}

/// Reverses `record`, which must be the last move that brought the player to `player`.
/// Returns where the player stands afterwards. Every touched cell is checked before the
/// first write, so an inconsistent record leaves the board untouched.
pub fn undo_step(board: &mut Board, player: Vec2, record: MoveRecord) -> Result<Vec2, BoardError> {
    let back = record.direction.opposite().to_vec2();
    let previous = player + back;
    let pushed_box = player - back;

    for pos in [player, previous] {
        board.cell_at(pos)?;
    }
    if record.is_push() {
        board.cell_at(pushed_box)?;
    }

    let current = board[player];
    if record.is_push() {
        board[pushed_box] = board[pushed_box].vacated();
        board[player] = current.with_box();
    } else {
        board[player] = current.vacated();
    }
    board[previous] = board[previous].with_player();

    Ok(previous)
}
