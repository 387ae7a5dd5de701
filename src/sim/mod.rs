//! Simulated maze robot for hardware-free runs.
//!
//! Provides a complete in-process stand-in for a physical maze robot:
//! an ASCII maze map loaded from disk and a [`SimRobot`] that implements
//! [`MazeRobot`](crate::robot::MazeRobot) against it, recording every
//! observable interaction in a journal.
//!
//! # Maze format
//!
//! Plain text, one row per line:
//!
//! ```text
//! #######
//! #S....#
//! #.##.##
//! #...#E#
//! #######
//! ```
//!
//! | Character | Meaning |
//! |-----------|------------------------------|
//! | `#`       | Wall |
//! | `.` or ` `| Floor |
//! | `S`       | Start cell (exactly one) |
//! | `E`       | Exit cell (at most one) |
//!
//! Rows may be ragged; anything beyond a row's end, and anything outside
//! the grid, is wall. A maze without an `E` is valid and unsolvable.

mod maze;
mod robot;

pub use maze::MazeMap;
pub use robot::{RobotEvent, SimRobot};
