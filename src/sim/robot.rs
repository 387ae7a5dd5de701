//! Simulated maze robot.

use std::cell::RefCell;

use tracing::debug;

use crate::grid::Direction;
use crate::robot::{ExitSignal, MazeRobot};

use super::maze::MazeMap;

/// One observable interaction with the robot, in call order.
///
/// The journal is what scenario tests assert against: sensing cost,
/// backtrack ordering, and silence after the exit notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RobotEvent {
    /// Capability query and its answer.
    Sense { direction: Direction, open: bool },
    /// Physical one-cell move.
    Move(Direction),
    /// Terminal failure action.
    Halt,
}

/// Simulated robot driving a [`MazeMap`].
///
/// Holds the robot's true grid position, raises subscribed exit signals
/// when a move lands on the exit cell, and panics on moves into blocked
/// cells (a caller contract violation).
#[derive(Debug)]
pub struct SimRobot {
    maze: MazeMap,
    x: i32,
    y: i32,
    subscribers: Vec<ExitSignal>,
    exit_fired: bool,
    halted: bool,
    // RefCell because capability queries are logically non-mutating.
    journal: RefCell<Vec<RobotEvent>>,
}

impl SimRobot {
    /// Create a robot standing on the maze's start cell.
    pub fn new(maze: MazeMap) -> Self {
        let (x, y) = maze.start();
        Self {
            maze,
            x,
            y,
            subscribers: Vec::new(),
            exit_fired: false,
            halted: false,
            journal: RefCell::new(Vec::new()),
        }
    }

    /// Map a direction onto the simulator grid. North is up on screen
    /// (row index decreases).
    fn target(&self, direction: Direction) -> (i32, i32) {
        match direction {
            Direction::East => (self.x + 1, self.y),
            Direction::West => (self.x - 1, self.y),
            Direction::North => (self.x, self.y - 1),
            Direction::South => (self.x, self.y + 1),
        }
    }

    /// Current grid position.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Is the robot standing on the exit cell?
    pub fn at_exit(&self) -> bool {
        self.maze.exit() == Some((self.x, self.y))
    }

    /// Has `halt_and_catch_fire` been invoked?
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Snapshot of every interaction so far, in call order.
    pub fn journal(&self) -> Vec<RobotEvent> {
        self.journal.borrow().clone()
    }

    /// Number of capability queries answered.
    pub fn sense_count(&self) -> usize {
        self.journal
            .borrow()
            .iter()
            .filter(|event| matches!(event, RobotEvent::Sense { .. }))
            .count()
    }

    /// Number of moves executed.
    pub fn move_count(&self) -> usize {
        self.journal
            .borrow()
            .iter()
            .filter(|event| matches!(event, RobotEvent::Move(_)))
            .count()
    }
}

impl MazeRobot for SimRobot {
    fn can_move(&self, direction: Direction) -> bool {
        let (tx, ty) = self.target(direction);
        let open = self.maze.is_open(tx, ty);
        self.journal
            .borrow_mut()
            .push(RobotEvent::Sense { direction, open });
        open
    }

    fn move_step(&mut self, direction: Direction) {
        let (tx, ty) = self.target(direction);
        assert!(
            self.maze.is_open(tx, ty),
            "contract violation: move {:?} from ({}, {}) into blocked cell",
            direction,
            self.x,
            self.y
        );

        self.x = tx;
        self.y = ty;
        self.journal.borrow_mut().push(RobotEvent::Move(direction));
        debug!("Robot moved {:?} to ({}, {})", direction, tx, ty);

        if self.at_exit() && !self.exit_fired {
            self.exit_fired = true;
            debug!("Robot reached the exit");
            for signal in &self.subscribers {
                signal.notify();
            }
        }
    }

    fn subscribe_exit(&mut self, signal: ExitSignal) {
        self.subscribers.push(signal);
    }

    fn halt_and_catch_fire(&mut self) {
        self.halted = true;
        self.journal.borrow_mut().push(RobotEvent::Halt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> SimRobot {
        SimRobot::new(MazeMap::parse("S.E").unwrap())
    }

    #[test]
    fn test_sense_does_not_move() {
        let robot = corridor();

        assert!(robot.can_move(Direction::East));
        assert!(!robot.can_move(Direction::West));
        assert_eq!(robot.position(), (0, 0));
        assert_eq!(robot.sense_count(), 2);
    }

    #[test]
    fn test_move_updates_position() {
        let mut robot = corridor();

        robot.move_step(Direction::East);
        assert_eq!(robot.position(), (1, 0));
        assert_eq!(robot.move_count(), 1);
    }

    #[test]
    fn test_exit_signal_fires_on_arrival() {
        let mut robot = corridor();
        let signal = ExitSignal::new();
        robot.subscribe_exit(signal.clone());

        robot.move_step(Direction::East);
        assert!(!signal.is_raised());

        robot.move_step(Direction::East);
        assert!(signal.is_raised());
        assert!(robot.at_exit());
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn test_blocked_move_panics() {
        let mut robot = corridor();
        robot.move_step(Direction::West);
    }
}
