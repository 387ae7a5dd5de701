//! BhramanNav - Maze Navigation Controller
//!
//! Loads a maze file, runs depth-first exploration against a simulated
//! robot, and reports the outcome. The navigation core itself is agnostic
//! of the simulator; it only ever speaks the `MazeRobot` trait.

use std::path::Path;

use tracing::{info, warn};

use bhraman_nav::config::BhramanConfig;
use bhraman_nav::error::Result;
use bhraman_nav::exploration::Navigator;
use bhraman_nav::grid::{CellCoord, ExplorationMap};
use bhraman_nav::robot::{ExitSignal, MazeRobot};
use bhraman_nav::sim::{MazeMap, SimRobot};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bhraman_nav=info".parse().unwrap()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    let mut config = if args.len() > 1 && !args[1].starts_with("--") {
        // Load config from file
        let config_path = Path::new(&args[1]);
        info!("Loading configuration from {:?}", config_path);
        BhramanConfig::load(config_path)?
    } else if Path::new("bhraman.toml").exists() {
        info!("Loading configuration from bhraman.toml");
        BhramanConfig::load(Path::new("bhraman.toml"))?
    } else {
        info!("Using default configuration");
        BhramanConfig::default()
    };

    // Override maze file if provided
    if let Some(path) = args
        .iter()
        .position(|a| a == "--map")
        .and_then(|i| args.get(i + 1))
        .cloned()
    {
        info!("Using maze file: {}", path);
        config.maze.map_path = path;
    }

    info!("BhramanNav v{}", env!("CARGO_PKG_VERSION"));

    let maze = MazeMap::load(&config.maze.map_path)?;
    info!(
        "Loaded {}x{} maze from {}",
        maze.width(),
        maze.height(),
        config.maze.map_path
    );

    let mut robot = SimRobot::new(maze);
    let outcome = ExitSignal::new();
    robot.subscribe_exit(outcome.clone());

    let mut navigator = Navigator::new();
    navigator.move_to_exit(&mut robot);

    if outcome.is_raised() {
        info!(
            "Run succeeded: exit at {:?} after {} moves ({} cells visited, {} sense queries)",
            robot.position(),
            navigator.moves(),
            navigator.map().visited_count(),
            robot.sense_count()
        );
    } else {
        warn!(
            "Run failed: no exit reachable ({} cells visited, robot halted at {:?})",
            navigator.map().visited_count(),
            robot.position()
        );
    }

    if config.output.print_map {
        print!("{}", render_map(navigator.map()));
    }

    Ok(())
}

/// Render the explored map in the navigator's local frame, north up.
/// Unknown cells print as '?', frontier cells as '+', visited cells as '.',
/// and the origin as 'S'.
fn render_map(map: &ExplorationMap) -> String {
    let mut min_x = 0;
    let mut max_x = 0;
    let mut min_y = 0;
    let mut max_y = 0;
    for (cell, _) in map.iter() {
        min_x = min_x.min(cell.x);
        max_x = max_x.max(cell.x);
        min_y = min_y.min(cell.y);
        max_y = max_y.max(cell.y);
    }

    let mut out = String::new();
    for y in (min_y..=max_y).rev() {
        for x in min_x..=max_x {
            let cell = CellCoord::new(x, y);
            let ch = if cell == CellCoord::ORIGIN {
                'S'
            } else {
                match map.state(cell) {
                    Some(state) => state.as_char(),
                    None => '?',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
