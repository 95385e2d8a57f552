//! Terminal Sokoban.
//!
//! - [`core`]: the board, move resolution, undo and the move log
//! - [`storage`]: level, save and move-log files
//! - [`config`]: TOML configuration
//! - [`console_interface`]: crossterm/ratatui glue used by the binary

pub mod config;
pub mod console_interface;
pub mod core;
pub mod error;
pub mod models;
pub mod storage;

#[cfg(test)]
mod test;
