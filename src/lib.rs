//! # grid_wavefront
//!
//! A bidirectional, level-synchronized
//! [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search) wave
//! search on rectangular obstacle grids. Two waves expand in lockstep from
//! the start and finish cells, one full layer per round; the first round in
//! which their frontiers touch yields a shortest path, reconstructed from
//! compact per-cell arrival directions instead of a parent table.
//! Pre-computes [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! so reachability can be checked without flood-filling.
//!
//! The search can run to completion in one call
//! ([WaveSearchEngine::run]) or be driven one round at a time through
//! [StepController], which suits live visualization and mid-search
//! cancellation.

pub mod direction;
pub mod engine;
pub mod error;
pub mod grid;
pub mod path;
pub mod stepper;
pub mod wave;

pub use direction::{Direction, DEFAULT_PRIORITY};
pub use engine::{RoundOutcome, WaveSearchEngine};
pub use error::{ReconstructionError, ValidationError};
pub use grid::{CellClass, GridModel};
pub use path::{full_path, half_path, steps};
pub use stepper::{SearchPhase, StepController, StepReport};
pub use wave::{WaveRecord, WaveState};

pub use grid_util::point::Point;

/// One-shot convenience: run a search on a throwaway engine and reconstruct
/// the path. [None] means no path exists. Keep a [WaveSearchEngine] around
/// instead when searching repeatedly, to reuse its buffers.
pub fn find_shortest_path(grid: &GridModel) -> Result<Option<Vec<Point>>, ReconstructionError> {
    WaveSearchEngine::new().shortest_path(grid)
}
