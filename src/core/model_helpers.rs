use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::core::{BlockedReason, Cell, Direction, GameChangeType, MoveOutcome, MoveRecord, Vec2};

impl Cell {
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => b' ',
            Cell::Wall => b'#',
            Cell::Target => b'.',
            Cell::Player => b'@',
            Cell::PlayerOnTarget => b'+',
            Cell::Box => b'$',
            Cell::BoxOnTarget => b'*',
        }
    }

    pub fn from_code(code: u8) -> Option<Cell> {
        Some(match code {
            b' ' => Cell::Empty,
            b'#' => Cell::Wall,
            b'.' => Cell::Target,
            b'@' => Cell::Player,
            b'+' => Cell::PlayerOnTarget,
            b'$' => Cell::Box,
            b'*' => Cell::BoxOnTarget,
            _ => return None,
        })
    }

    pub fn is_player(self) -> bool {
        matches!(self, Cell::Player | Cell::PlayerOnTarget)
    }

    pub fn is_box(self) -> bool {
        matches!(self, Cell::Box | Cell::BoxOnTarget)
    }

    /// True for every cell with a target underneath, whatever stands on it.
    pub fn is_target(self) -> bool {
        matches!(self, Cell::Target | Cell::PlayerOnTarget | Cell::BoxOnTarget)
    }

    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Empty | Cell::Target)
    }

    /// What is left behind when the player or a box leaves this cell.
    pub fn vacated(self) -> Cell {
        if self.is_target() { Cell::Target } else { Cell::Empty }
    }

    pub fn with_player(self) -> Cell {
        if self.is_target() { Cell::PlayerOnTarget } else { Cell::Player }
    }

    pub fn with_box(self) -> Cell {
        if self.is_target() { Cell::BoxOnTarget } else { Cell::Box }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { i: self.i + rhs.i, j: self.j + rhs.j }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 { i: self.i - rhs.i, j: self.j - rhs.j }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2 { i: -self.i, j: -self.j }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn to_vec2(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl MoveRecord {
    pub fn new(direction: Direction, change: GameChangeType) -> MoveRecord {
        MoveRecord { direction, change }
    }

    pub fn is_push(&self) -> bool {
        self.change == GameChangeType::PlayerAndBoxMove
    }

    /// Single byte used by the move log: lowercase for a step, uppercase for a push.
    pub fn code(&self) -> u8 {
        let code = match self.direction {
            Direction::Up => b'h',
            Direction::Down => b'b',
            Direction::Left => b'g',
            Direction::Right => b'd',
        };
        if self.is_push() { code.to_ascii_uppercase() } else { code }
    }

    pub fn from_code(code: u8) -> Option<MoveRecord> {
        let change = if code.is_ascii_uppercase() {
            GameChangeType::PlayerAndBoxMove
        } else {
            GameChangeType::PlayerMove
        };
        let direction = match code.to_ascii_lowercase() {
            b'h' => Direction::Up,
            b'b' => Direction::Down,
            b'g' => Direction::Left,
            b'd' => Direction::Right,
            _ => return None,
        };
        Some(MoveRecord { direction, change })
    }
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }

    pub fn is_won(&self) -> bool {
        matches!(self, MoveOutcome::Moved { won: true, .. })
    }

    pub fn blocked_reason(&self) -> Option<BlockedReason> {
        match self {
            MoveOutcome::Blocked(reason) => Some(*reason),
            MoveOutcome::Moved { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_code_maps_back_to_its_cell() {
        let cells = [
            Cell::Empty,
            Cell::Wall,
            Cell::Target,
            Cell::Player,
            Cell::PlayerOnTarget,
            Cell::Box,
            Cell::BoxOnTarget,
        ];
        for cell in cells {
            assert_eq!(Cell::from_code(cell.code()), Some(cell));
        }
        assert_eq!(Cell::from_code(b'x'), None);
        assert_eq!(Cell::from_code(b'\n'), None);
    }

    #[test]
    fn move_codes_match_log_alphabet() {
        use Direction::*;
        use GameChangeType::*;

        let expected = [
            (Up, PlayerMove, b'h'),
            (Down, PlayerMove, b'b'),
            (Left, PlayerMove, b'g'),
            (Right, PlayerMove, b'd'),
            (Up, PlayerAndBoxMove, b'H'),
            (Down, PlayerAndBoxMove, b'B'),
            (Left, PlayerAndBoxMove, b'G'),
            (Right, PlayerAndBoxMove, b'D'),
        ];
        for (direction, change, code) in expected {
            let record = MoveRecord::new(direction, change);
            assert_eq!(record.code(), code);
            assert_eq!(MoveRecord::from_code(code), Some(record));
        }
        assert_eq!(MoveRecord::from_code(b'z'), None);
        assert_eq!(MoveRecord::from_code(b'Z'), None);
    }

    #[test]
    fn opposite_direction_negates_vector() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().to_vec2(), -dir.to_vec2());
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn occupants_keep_target_underneath() {
        assert_eq!(Cell::Target.with_player(), Cell::PlayerOnTarget);
        assert_eq!(Cell::BoxOnTarget.with_player(), Cell::PlayerOnTarget);
        assert_eq!(Cell::Box.with_player(), Cell::Player);
        assert_eq!(Cell::PlayerOnTarget.vacated(), Cell::Target);
        assert_eq!(Cell::Player.vacated(), Cell::Empty);
        assert_eq!(Cell::Target.with_box(), Cell::BoxOnTarget);
        assert_eq!(Cell::Empty.with_box(), Cell::Box);
    }
}
