use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;
use log::info;

use crate::error::ReconstructionError;
use crate::grid::GridModel;
use crate::path;
use crate::wave::WaveState;

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Outcome of one synchronized expansion round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Neither wave met the other and both frontiers still hold cells.
    Continue,
    /// The waves touched; the chosen meeting cell is carried.
    Met(Point),
    /// A frontier drained with no meeting: no path exists.
    Exhausted,
}

/// Runs two level-synchronized breadth-first waves, one from each endpoint,
/// until their frontiers intersect.
///
/// Each round drains the start frontier's round-entry contents, then the
/// finish frontier's, before any intersection check, so the first meeting
/// round is depth-optimal. Among co-optimal meeting cells of that round the
/// one minimizing `(start_order + finish_order, start_order, finish_order)`
/// is chosen; orders are unique per wave, which makes the choice total.
///
/// All internal buffers are retained across searches and cleared rather than
/// reallocated, so one engine can serve many searches cheaply.
#[derive(Clone, Debug, Default)]
pub struct WaveSearchEngine {
    wave_start: WaveState,
    wave_finish: WaveState,
    newly_start: Vec<Point>,
    newly_finish: Vec<Point>,
    candidates: FxIndexSet<Point>,
    round: u32,
}

impl WaveSearchEngine {
    pub fn new() -> WaveSearchEngine {
        WaveSearchEngine::default()
    }

    /// Seeds both waves with their origins at order 0 and resets the round
    /// counter. Any state of a previous search is discarded.
    pub fn begin(&mut self, grid: &GridModel) {
        self.wave_start.reset(grid.width(), grid.height());
        self.wave_finish.reset(grid.width(), grid.height());
        self.newly_start.clear();
        self.newly_finish.clear();
        self.candidates.clear();
        self.round = 0;
        self.wave_start.visit(grid.start(), None);
        self.wave_finish.visit(grid.finish(), None);
        info!(
            "wave search seeded: start {}, finish {}",
            grid.start(),
            grid.finish()
        );
    }

    /// Discards all wave state without producing a result.
    pub fn clear(&mut self) {
        self.wave_start.reset(0, 0);
        self.wave_finish.reset(0, 0);
        self.newly_start.clear();
        self.newly_finish.clear();
        self.candidates.clear();
        self.round = 0;
    }

    /// Performs one synchronized round: expands both waves by one full layer,
    /// then checks whether the layers touched.
    pub fn expand_round(&mut self, grid: &GridModel) -> RoundOutcome {
        if self.wave_start.frontier_len() == 0 || self.wave_finish.frontier_len() == 0 {
            return RoundOutcome::Exhausted;
        }
        self.round += 1;
        self.newly_start.clear();
        self.newly_finish.clear();
        self.candidates.clear();

        expand_wave(&mut self.wave_start, grid, &mut self.newly_start);
        expand_wave(&mut self.wave_finish, grid, &mut self.newly_finish);

        // A cell discovered by both sides in the same round shows up in both
        // sweeps; the set keeps the candidate list duplicate-free.
        for &cell in &self.newly_start {
            if self.wave_finish.is_visited(cell) {
                self.candidates.insert(cell);
            }
        }
        for &cell in &self.newly_finish {
            if self.wave_start.is_visited(cell) {
                self.candidates.insert(cell);
            }
        }

        if let Some(meeting) = self.select_meeting() {
            info!("waves met at {} after {} rounds", meeting, self.round);
            return RoundOutcome::Met(meeting);
        }
        if self.wave_start.frontier_len() == 0 || self.wave_finish.frontier_len() == 0 {
            info!("frontier exhausted after {} rounds, no path", self.round);
            return RoundOutcome::Exhausted;
        }
        RoundOutcome::Continue
    }

    fn select_meeting(&self) -> Option<Point> {
        self.candidates
            .iter()
            .copied()
            .filter_map(|cell| {
                let start = self.wave_start.record(cell)?;
                let finish = self.wave_finish.record(cell)?;
                Some((
                    (start.order + finish.order, start.order, finish.order),
                    cell,
                ))
            })
            .min_by_key(|&(key, _)| key)
            .map(|(_, cell)| cell)
    }

    /// Runs rounds to completion. [Some] carries the meeting cell, [None]
    /// means the waves cannot meet.
    pub fn run(&mut self, grid: &GridModel) -> Option<Point> {
        self.begin(grid);
        loop {
            match self.expand_round(grid) {
                RoundOutcome::Continue => {}
                RoundOutcome::Met(meeting) => return Some(meeting),
                RoundOutcome::Exhausted => return None,
            }
        }
    }

    /// Runs to completion and reconstructs the full start-to-finish path.
    pub fn shortest_path(
        &mut self,
        grid: &GridModel,
    ) -> Result<Option<Vec<Point>>, ReconstructionError> {
        match self.run(grid) {
            Some(meeting) => {
                path::full_path(&self.wave_start, &self.wave_finish, grid, meeting).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Completed rounds since [begin](Self::begin).
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn wave_start(&self) -> &WaveState {
        &self.wave_start
    }

    pub fn wave_finish(&self) -> &WaveState {
        &self.wave_finish
    }
}

/// Drains the frontier's round-entry contents (cells enqueued during the
/// round wait for the next one) and records every traversable, unvisited
/// neighbor in priority order.
fn expand_wave(wave: &mut WaveState, grid: &GridModel, newly: &mut Vec<Point>) {
    let pending = wave.frontier_len();
    for _ in 0..pending {
        let Some(cell) = wave.pop_frontier() else {
            break;
        };
        for (direction, neighbor) in grid.neighbors_in_priority_order(cell) {
            if grid.is_traversable(neighbor) && wave.visit(neighbor, Some(direction)) {
                newly.push(neighbor);
            }
        }
    }
}
