//! # BhramanNav: Depth-First Maze Navigation
//!
//! Navigates a robot through an unknown grid maze from its start cell to
//! the exit, using only local sensing and one-cell moves. No map is given
//! in advance: the [`Navigator`] builds one as it explores, depth-first
//! with backtracking, and stops when the robot's exit notification fires or
//! when the whole reachable maze has been searched without success.
//!
//! The robot is opaque to the algorithm. It sits behind the
//! [`MazeRobot`](robot::MazeRobot) trait with four capabilities: a
//! passability query, a one-cell move, a one-shot exit notification, and a
//! terminal failure action. The [`sim`] module provides a simulated robot
//! over ASCII maze files for hardware-free runs and tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use bhraman_nav::{MazeMap, Navigator, SimRobot};
//!
//! let maze = MazeMap::parse("#####\n#S.E#\n#####").unwrap();
//! let mut robot = SimRobot::new(maze);
//!
//! let mut navigator = Navigator::new();
//! navigator.move_to_exit(&mut robot);
//! assert!(robot.at_exit());
//! ```
//!
//! ## Modules
//!
//! - [`grid`]: coordinates, directions, and the exploration map
//! - [`robot`]: the robot capability contract and exit signal
//! - [`exploration`]: the depth-first navigator
//! - [`sim`]: simulated robot and ASCII maze maps
//! - [`config`]: TOML configuration for the binary

pub mod config;
pub mod error;
pub mod exploration;
pub mod grid;
pub mod robot;
pub mod sim;

// Re-export main types at crate root
pub use config::BhramanConfig;
pub use error::{BhramanError, Result};
pub use exploration::Navigator;
pub use grid::{CellCoord, CellState, Direction, ExplorationMap, Passages};
pub use robot::{ExitSignal, MazeRobot};
pub use sim::{MazeMap, RobotEvent, SimRobot};
