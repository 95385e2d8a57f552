use serde::{Deserialize, Serialize};

use crate::core::MoveRecord;
use crate::error::HistoryError;

/// Ordered log of accepted moves. Only the last entry is ever removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    moves: Vec<MoveRecord>,
    capacity: Option<usize>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    pub fn with_capacity_limit(capacity: Option<usize>) -> History {
        History {
            moves: Vec::new(),
            capacity,
        }
    }

    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.moves.len() >= cap)
    }

    pub fn push(&mut self, record: MoveRecord) -> Result<(), HistoryError> {
        if let Some(capacity) = self.capacity.filter(|_| self.is_full()) {
            return Err(HistoryError::Full { capacity });
        }
        self.moves.push(record);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.moves.pop()
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter()
    }

    /// One code byte per move, no delimiter.
    pub fn serialize(&self) -> Vec<u8> {
        self.moves.iter().map(MoveRecord::code).collect()
    }

    pub fn parse(bytes: &[u8]) -> Result<History, HistoryError> {
        let moves = bytes
            .iter()
            .enumerate()
            .map(|(index, &byte)| {
                MoveRecord::from_code(byte).ok_or(HistoryError::UnknownCode { index, byte })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(History {
            moves,
            capacity: None,
        })
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a MoveRecord;
    type IntoIter = std::slice::Iter<'a, MoveRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
