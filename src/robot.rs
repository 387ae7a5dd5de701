//! Robot abstraction for maze traversal.
//!
//! The navigator drives an opaque robot through this trait and learns
//! nothing about the maze beyond what the robot's answers reveal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::grid::Direction;

/// One-shot exit notification shared between a robot and its observers.
///
/// Clones observe the same underlying flag. Raising is sticky: once set the
/// signal stays raised for the rest of the run. The robot raises it from
/// inside the [`MazeRobot::move_step`] call that lands on the exit, so with
/// Release/Acquire ordering the raise happens-before the caller's next
/// check.
#[derive(Clone, Debug, Default)]
pub struct ExitSignal(Arc<AtomicBool>);

impl ExitSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the signal. Called by the robot when its position coincides
    /// with the maze exit.
    pub fn notify(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Has the exit been reached?
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Robot capability contract.
///
/// The navigator assumes every call succeeds; there is no timeout, retry or
/// cancellation. Implementations should fail fast on contract violations
/// (e.g. a move in a direction that was not reported passable) rather than
/// silently corrupt their state.
pub trait MazeRobot {
    /// Can the robot move one cell in `direction` from its current position?
    ///
    /// Non-mutating; safe to call repeatedly, and consistent with the
    /// robot's current physical position.
    fn can_move(&self, direction: Direction) -> bool;

    /// Move one cell in `direction`.
    ///
    /// Calling this for a direction that last returned `false` from
    /// [`can_move`](Self::can_move) at the current position is a contract
    /// violation. If the move lands on the maze exit, every subscribed
    /// [`ExitSignal`] is raised before this call returns.
    fn move_step(&mut self, direction: Direction);

    /// Register a signal to be raised when the robot reaches the exit.
    ///
    /// The notification fires at most once per run. Multiple subscribers
    /// are permitted.
    fn subscribe_exit(&mut self, signal: ExitSignal);

    /// Terminal failure action: the maze has no reachable exit.
    ///
    /// Invoked exactly once, only after the whole reachable maze has been
    /// explored. The robot is not expected to be usable afterwards.
    fn halt_and_catch_fire(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_signal_starts_lowered() {
        let signal = ExitSignal::new();
        assert!(!signal.is_raised());
    }

    #[test]
    fn test_exit_signal_clones_share_flag() {
        let signal = ExitSignal::new();
        let observer = signal.clone();

        signal.notify();
        assert!(observer.is_raised());

        // Sticky: raising again changes nothing.
        signal.notify();
        assert!(observer.is_raised());
    }
}
