//! ASCII maze maps for simulation.

use std::path::Path;

use crate::error::{BhramanError, Result};

/// Maze grid loaded from ASCII text.
///
/// Coordinates are (column, row) with row 0 at the top; the grid is only
/// meaningful to the simulator and is never exposed to the navigator.
#[derive(Clone, Debug)]
pub struct MazeMap {
    /// Open (floor) cells, row-major. Ragged rows are kept ragged.
    open: Vec<Vec<bool>>,
    start: (i32, i32),
    exit: Option<(i32, i32)>,
}

impl MazeMap {
    /// Parse a maze from ASCII text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut open = Vec::new();
        let mut start = None;
        let mut exit = None;

        for (row, line) in text.lines().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let cell_open = match ch {
                    '#' => false,
                    '.' | ' ' => true,
                    'S' => {
                        if start.replace((col as i32, row as i32)).is_some() {
                            return Err(BhramanError::Maze(
                                "maze has more than one start cell".to_string(),
                            ));
                        }
                        true
                    }
                    'E' => {
                        if exit.replace((col as i32, row as i32)).is_some() {
                            return Err(BhramanError::Maze(
                                "maze has more than one exit cell".to_string(),
                            ));
                        }
                        true
                    }
                    other => {
                        return Err(BhramanError::Maze(format!(
                            "unexpected character '{}' at row {}, column {}",
                            other, row, col
                        )));
                    }
                };
                cells.push(cell_open);
            }
            open.push(cells);
        }

        let start =
            start.ok_or_else(|| BhramanError::Maze("maze has no start cell".to_string()))?;

        Ok(Self { open, start, exit })
    }

    /// Load a maze from a text file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    /// Is the cell at (x, y) open floor? Out-of-grid cells are wall.
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.open
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Start cell coordinate.
    pub fn start(&self) -> (i32, i32) {
        self.start
    }

    /// Exit cell coordinate, if the maze has one.
    pub fn exit(&self) -> Option<(i32, i32)> {
        self.exit
    }

    /// Grid height in rows.
    pub fn height(&self) -> usize {
        self.open.len()
    }

    /// Grid width in columns (longest row).
    pub fn width(&self) -> usize {
        self.open.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_maze() {
        let maze = MazeMap::parse("####\n#SE#\n####").unwrap();

        assert_eq!(maze.start(), (1, 1));
        assert_eq!(maze.exit(), Some((2, 1)));
        assert_eq!(maze.width(), 4);
        assert_eq!(maze.height(), 3);
        assert!(maze.is_open(1, 1));
        assert!(!maze.is_open(0, 0));
    }

    #[test]
    fn test_parse_requires_start() {
        assert!(MazeMap::parse("###\n#.#\n###").is_err());
    }

    #[test]
    fn test_parse_rejects_duplicate_start() {
        assert!(MazeMap::parse("SS").is_err());
    }

    #[test]
    fn test_parse_rejects_duplicate_exit() {
        assert!(MazeMap::parse("SEE").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        assert!(MazeMap::parse("S?").is_err());
    }

    #[test]
    fn test_exitless_maze_is_valid() {
        let maze = MazeMap::parse("S.").unwrap();
        assert_eq!(maze.exit(), None);
    }

    #[test]
    fn test_out_of_grid_is_wall() {
        let maze = MazeMap::parse("S.").unwrap();

        assert!(!maze.is_open(-1, 0));
        assert!(!maze.is_open(0, -1));
        assert!(!maze.is_open(2, 0));
        assert!(!maze.is_open(0, 1));
    }

    #[test]
    fn test_ragged_rows_padded_with_wall() {
        let maze = MazeMap::parse("S.\n.").unwrap();

        assert!(maze.is_open(1, 0));
        assert!(maze.is_open(0, 1));
        assert!(!maze.is_open(1, 1));
    }
}
