//! Maze exploration module.
//!
//! Depth-first traversal of an unknown maze with backtracking, building an
//! [`ExplorationMap`](crate::grid::ExplorationMap) as it goes.

mod navigator;

pub use navigator::Navigator;
