//! Grid primitives for maze exploration.
//!
//! The navigator works in a local frame anchored at the start cell: it never
//! learns the robot's true position, only the relative displacement implied
//! by the moves it has issued.

use std::collections::HashMap;

/// One step along a grid axis.
///
/// Declaration order is the canonical probe order. Both the sensing pass and
/// the movement pass walk directions in this order, and the per-cell
/// [`Passages`] record is indexed by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    East = 0,
    West = 1,
    North = 2,
    South = 3,
}

impl Direction {
    /// All directions in canonical probe order.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    /// The inverse direction on the same axis.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }

    /// Unit coordinate delta for one step in this direction.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::North => (0, 1),
            Direction::South => (0, -1),
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Grid cell coordinate, relative to the start cell at (0, 0).
///
/// Unbounded in all directions; the maze may extend anywhere around the
/// origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    /// The start cell of a run.
    pub const ORIGIN: CellCoord = CellCoord { x: 0, y: 0 };

    /// Create a new cell coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step in `direction`.
    #[inline]
    pub fn neighbour(self, direction: Direction) -> CellCoord {
        let (dx, dy) = direction.delta();
        CellCoord::new(self.x + dx, self.y + dy)
    }
}

/// Per-cell sensing record: which directions the robot reported passable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Passages([bool; 4]);

impl Passages {
    /// Build a record by probing all four directions in canonical order.
    pub fn probe(mut query: impl FnMut(Direction) -> bool) -> Self {
        let mut open = [false; 4];
        for direction in Direction::ALL {
            open[direction.index()] = query(direction);
        }
        Self(open)
    }

    /// Was `direction` reported passable?
    #[inline]
    pub fn open(self, direction: Direction) -> bool {
        self.0[direction.index()]
    }

    /// Number of passable directions.
    pub fn open_count(self) -> usize {
        self.0.iter().filter(|&&open| open).count()
    }
}

/// Exploration state of a cell known to the map.
///
/// Unknown cells are simply absent from the map. A cell transitions
/// `Discovered` -> `Visited` at most once and never regresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    /// Known reachable from some visited cell, never entered or sensed.
    Discovered,
    /// Physically occupied by the robot and fully sensed.
    Visited(Passages),
}

impl CellState {
    #[inline]
    pub fn is_visited(self) -> bool {
        matches!(self, CellState::Visited(_))
    }

    /// Single character representation for map rendering
    pub fn as_char(self) -> char {
        match self {
            CellState::Discovered => '+',
            CellState::Visited(_) => '.',
        }
    }
}

/// Map of the maze built during a single run.
///
/// Grows monotonically: entries are never removed and never downgraded,
/// which bounds the search (finitely many reachable cells, each sensed at
/// most once) and guarantees termination.
#[derive(Debug, Default)]
pub struct ExplorationMap {
    cells: HashMap<CellCoord, CellState>,
}

impl ExplorationMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// State of `cell`, or `None` if it has never been referenced.
    pub fn state(&self, cell: CellCoord) -> Option<CellState> {
        self.cells.get(&cell).copied()
    }

    /// Has the robot already occupied and sensed `cell`?
    pub fn is_visited(&self, cell: CellCoord) -> bool {
        matches!(self.cells.get(&cell), Some(state) if state.is_visited())
    }

    /// Record `cell` as a frontier cell. No-op if the cell is already known,
    /// so a visited cell is never downgraded.
    pub fn discover(&mut self, cell: CellCoord) {
        self.cells.entry(cell).or_insert(CellState::Discovered);
    }

    /// Record the sensing result for `cell`, marking it visited.
    ///
    /// A cell is sensed exactly once per run; visiting it twice is a
    /// navigator bug.
    pub fn mark_visited(&mut self, cell: CellCoord, passages: Passages) {
        let previous = self.cells.insert(cell, CellState::Visited(passages));
        debug_assert!(
            !previous.is_some_and(|state| state.is_visited()),
            "cell {:?} visited twice",
            cell
        );
    }

    /// Number of visited cells.
    pub fn visited_count(&self) -> usize {
        self.cells.values().filter(|s| s.is_visited()).count()
    }

    /// Number of known cells (visited or frontier).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all known cells and their states.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, CellState)> + '_ {
        self.cells.iter().map(|(&coord, &state)| (coord, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_pairing() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::North.opposite(), Direction::South);
    }

    #[test]
    fn test_opposite_deltas_cancel() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            let (ix, iy) = direction.opposite().delta();
            assert_eq!((dx + ix, dy + iy), (0, 0));
        }
    }

    #[test]
    fn test_neighbour_step() {
        let cell = CellCoord::new(2, -1);
        assert_eq!(cell.neighbour(Direction::East), CellCoord::new(3, -1));
        assert_eq!(cell.neighbour(Direction::West), CellCoord::new(1, -1));
        assert_eq!(cell.neighbour(Direction::North), CellCoord::new(2, 0));
        assert_eq!(cell.neighbour(Direction::South), CellCoord::new(2, -2));
    }

    #[test]
    fn test_passages_probe_order() {
        let mut probed = Vec::new();
        let passages = Passages::probe(|direction| {
            probed.push(direction);
            direction == Direction::North
        });

        assert_eq!(probed, Direction::ALL);
        assert!(passages.open(Direction::North));
        assert!(!passages.open(Direction::East));
        assert_eq!(passages.open_count(), 1);
    }

    #[test]
    fn test_map_discover_then_visit() {
        let mut map = ExplorationMap::new();
        let cell = CellCoord::new(1, 0);

        assert_eq!(map.state(cell), None);

        map.discover(cell);
        assert_eq!(map.state(cell), Some(CellState::Discovered));
        assert!(!map.is_visited(cell));

        let passages = Passages::probe(|_| false);
        map.mark_visited(cell, passages);
        assert!(map.is_visited(cell));
        assert_eq!(map.visited_count(), 1);
    }

    #[test]
    fn test_map_discover_never_downgrades() {
        let mut map = ExplorationMap::new();
        let passages = Passages::probe(|d| d == Direction::East);

        map.mark_visited(CellCoord::ORIGIN, passages);
        map.discover(CellCoord::ORIGIN);

        assert_eq!(
            map.state(CellCoord::ORIGIN),
            Some(CellState::Visited(passages))
        );
    }
}
