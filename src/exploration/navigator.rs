//! Depth-first maze navigator with backtracking.

use tracing::{debug, info, trace, warn};

use crate::grid::{CellCoord, Direction, ExplorationMap, Passages};
use crate::robot::{ExitSignal, MazeRobot};

/// Drives a robot from its start cell to the maze exit.
///
/// The navigator owns the map it builds and runs a recursive depth-first
/// search: sense the current cell, try each passable direction in canonical
/// order, backtrack with the inverse move when a branch fails. The robot's
/// physical position is the only source of truth during traversal; the
/// navigator tracks it purely through the moves it has issued.
///
/// One instance covers one run. The map is discarded with the navigator and
/// is never persisted.
#[derive(Debug, Default)]
pub struct Navigator {
    map: ExplorationMap,
    exit: ExitSignal,
    moves: usize,
}

impl Navigator {
    /// Create a navigator with an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the robot until it reaches the exit or the reachable maze is
    /// exhausted.
    ///
    /// Success or failure is observed through the robot's own terminal
    /// actions: its exit notification fires on success, and
    /// [`halt_and_catch_fire`](MazeRobot::halt_and_catch_fire) is invoked
    /// exactly once when no exit is reachable. Precondition: the robot
    /// physically stands at the navigator's local origin.
    pub fn move_to_exit<R: MazeRobot>(&mut self, robot: &mut R) {
        robot.subscribe_exit(self.exit.clone());

        info!("Starting exploration from local origin");
        self.explore(robot, CellCoord::ORIGIN);

        if self.exit.is_raised() {
            info!(
                "Exit reached: {} cells visited, {} moves",
                self.map.visited_count(),
                self.moves
            );
        } else {
            warn!(
                "Maze exhausted without finding an exit ({} cells visited)",
                self.map.visited_count()
            );
            robot.halt_and_catch_fire();
        }
    }

    /// Recursive exploration step. The robot physically stands on `cell`.
    fn explore<R: MazeRobot>(&mut self, robot: &mut R, cell: CellCoord) {
        if self.exit.is_raised() {
            return;
        }

        let passages = self.sense(robot, cell);

        for direction in Direction::ALL {
            if !passages.open(direction) {
                continue;
            }

            let neighbour = cell.neighbour(direction);
            if self.map.is_visited(neighbour) {
                continue;
            }

            self.step(robot, direction);
            self.explore(robot, neighbour);

            if self.exit.is_raised() {
                // Leave the robot where the notification caught it.
                return;
            }
            self.step(robot, direction.opposite());
        }
    }

    /// Probe all four directions from `cell` and record the result.
    ///
    /// Passable neighbours not yet in the map are seeded as frontier cells
    /// without committing to visiting them.
    fn sense<R: MazeRobot>(&mut self, robot: &mut R, cell: CellCoord) -> Passages {
        let passages = Passages::probe(|direction| robot.can_move(direction));

        for direction in Direction::ALL {
            if passages.open(direction) {
                self.map.discover(cell.neighbour(direction));
            }
        }
        self.map.mark_visited(cell, passages);

        debug!(
            "Sensed cell ({}, {}): {} open directions",
            cell.x,
            cell.y,
            passages.open_count()
        );
        passages
    }

    fn step<R: MazeRobot>(&mut self, robot: &mut R, direction: Direction) {
        trace!("Move {:?}", direction);
        robot.move_step(direction);
        self.moves += 1;
    }

    /// The map built so far.
    pub fn map(&self) -> &ExplorationMap {
        &self.map
    }

    /// Number of moves issued, backtracking included.
    pub fn moves(&self) -> usize {
        self.moves
    }
}
