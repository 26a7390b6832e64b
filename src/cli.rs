use crate::error::{Result, SnakeError};
use crate::surface::GridSize;
use crate::utils::{DEFAULT_CELL_SIZE, SURFACE_PADDING};
use clap::Parser;
use std::time::Duration;

/// CLI arguments for the snake simulation
#[derive(Parser, Debug)]
#[command(name = "astar_snake", about = "🐍 Self-driving snake steered by A* search")]
pub struct Args {
    /// Grid columns (overrides the surface size)
    #[arg(long, requires = "rows")]
    pub cols: Option<u32>,

    /// Grid rows (overrides the surface size)
    #[arg(long, requires = "cols")]
    pub rows: Option<u32>,

    /// Drawing surface width in pixels
    #[arg(long, default_value_t = 840)]
    pub width: u32,

    /// Drawing surface height in pixels
    #[arg(long, default_value_t = 640)]
    pub height: u32,

    /// Pixels per grid cell
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Scenario file to start every run from
    #[arg(short = 's', long = "scenario", conflicts_with_all = ["cols", "rows"])]
    pub scenario: Option<String>,

    /// Maximum ticks per run
    #[arg(long, default_value_t = 10_000)]
    pub max_ticks: u64,

    /// Number of runs; each run after the first is a restart
    #[arg(long, default_value_t = 1)]
    pub runs: u32,

    /// Milliseconds between tick starts; 0 runs flat out (use 50 for real-time play)
    #[arg(long, default_value_t = 0)]
    pub tick_ms: u64,

    /// Draw the board after every tick
    #[arg(long, default_value_t = false)]
    pub watch: bool,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress per-event logs (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

impl Args {
    /// Grid size from `--cols/--rows`, or derived from the surface size
    pub fn grid_size(&self) -> Result<GridSize> {
        match (self.cols, self.rows) {
            (Some(cols), Some(rows)) => Ok(GridSize { cols, rows }),
            (None, None) => GridSize::from_surface(self.width, self.height, self.cell_size, SURFACE_PADDING),
            _ => Err(SnakeError::InvalidGrid(
                "--cols and --rows must be given together".to_string(),
            )),
        }
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_derive_grid_from_surface() {
        let args = Args::parse_from(["astar_snake"]);

        assert_eq!(args.grid_size().unwrap(), GridSize { cols: 40, rows: 30 });
        assert_eq!(args.max_ticks, 10_000);
        assert_eq!(args.runs, 1);
        assert!(args.tick_interval().is_zero());
    }

    #[test]
    fn test_explicit_grid() {
        let args = Args::parse_from(["astar_snake", "--cols", "12", "--rows", "8", "--tick-ms", "50"]);

        assert_eq!(args.grid_size().unwrap(), GridSize { cols: 12, rows: 8 });
        assert_eq!(args.tick_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_cols_without_rows_rejected() {
        assert!(Args::try_parse_from(["astar_snake", "--cols", "12"]).is_err());
    }

    #[test]
    fn test_scenario_conflicts_with_grid() {
        assert!(Args::try_parse_from(["astar_snake", "-s", "x.txt", "--cols", "3", "--rows", "3"]).is_err());
        assert!(Args::try_parse_from(["astar_snake", "-s", "x.txt"]).is_ok());
    }
}
