use grid_util::point::Point;

use crate::engine::{RoundOutcome, WaveSearchEngine};
use crate::error::ReconstructionError;
use crate::grid::GridModel;
use crate::path;
use crate::wave::WaveState;

/// Where a stepped search currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    /// No search in progress; [StepController::start] (or the first
    /// [advance](StepController::advance)) begins one.
    Ready,
    /// Rounds are being expanded; more [advance](StepController::advance)
    /// calls are needed.
    Running,
    /// The waves met at the carried cell.
    Met(Point),
    /// Both endpoints can never connect; no path exists.
    Exhausted,
}

/// Snapshot handed back by [StepController::advance]: the completed round
/// count, the phase after the round, and borrows of both wave matrices for
/// overlay rendering.
#[derive(Debug)]
pub struct StepReport<'a> {
    pub round: u32,
    pub phase: SearchPhase,
    pub wave_start: &'a WaveState,
    pub wave_finish: &'a WaveState,
}

/// Externally driven, one-round-at-a-time wrapper around
/// [WaveSearchEngine], for consumers that animate the expansion or may
/// cancel mid-search.
///
/// The controller borrows the grid for its whole lifetime, pinning one
/// search to one immutable grid. `advance()` in a terminal phase is a no-op
/// that reports the terminal result again.
pub struct StepController<'g> {
    grid: &'g GridModel,
    engine: WaveSearchEngine,
    phase: SearchPhase,
}

impl<'g> StepController<'g> {
    pub fn new(grid: &'g GridModel) -> StepController<'g> {
        StepController {
            grid,
            engine: WaveSearchEngine::new(),
            phase: SearchPhase::Ready,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Seeds the wave state and enters [SearchPhase::Running]. Restarts from
    /// scratch when called again later.
    pub fn start(&mut self) {
        self.engine.begin(self.grid);
        self.phase = SearchPhase::Running;
    }

    /// Performs exactly one synchronized round (starting the search first if
    /// needed) and reports the state after it. Once [SearchPhase::Met] or
    /// [SearchPhase::Exhausted] is reached, further calls change nothing and
    /// return the same terminal report.
    pub fn advance(&mut self) -> StepReport<'_> {
        match self.phase {
            SearchPhase::Ready => {
                self.start();
                self.step_once()
            }
            SearchPhase::Running => self.step_once(),
            SearchPhase::Met(_) | SearchPhase::Exhausted => self.report(),
        }
    }

    fn step_once(&mut self) -> StepReport<'_> {
        self.phase = match self.engine.expand_round(self.grid) {
            RoundOutcome::Continue => SearchPhase::Running,
            RoundOutcome::Met(meeting) => SearchPhase::Met(meeting),
            RoundOutcome::Exhausted => SearchPhase::Exhausted,
        };
        self.report()
    }

    fn report(&self) -> StepReport<'_> {
        StepReport {
            round: self.engine.round(),
            phase: self.phase,
            wave_start: self.engine.wave_start(),
            wave_finish: self.engine.wave_finish(),
        }
    }

    /// Discards all wave state and returns to [SearchPhase::Ready]. Valid in
    /// any phase; the grid itself is untouched.
    pub fn cancel(&mut self) {
        self.engine.clear();
        self.phase = SearchPhase::Ready;
    }

    /// The reconstructed start-to-finish path, available once the phase is
    /// [SearchPhase::Met]; [None] in every other phase.
    pub fn path(&self) -> Result<Option<Vec<Point>>, ReconstructionError> {
        match self.phase {
            SearchPhase::Met(meeting) => path::full_path(
                self.engine.wave_start(),
                self.engine.wave_finish(),
                self.grid,
                meeting,
            )
            .map(Some),
            _ => Ok(None),
        }
    }
}
