use grid_util::point::Point;
use log::warn;

use crate::error::ReconstructionError;
use crate::grid::GridModel;
use crate::wave::WaveState;

/// Walks backward from `meeting` through one wave's stored arrival
/// directions until `origin`, returning the visited cells in walk order
/// (meeting first, origin last).
///
/// Fails if a cell along the walk carries no record, or an origin record
/// shows up anywhere other than the expected origin. Both indicate a
/// corrupted wave state; a correct engine never produces them.
pub fn half_path(
    wave: &WaveState,
    origin: Point,
    meeting: Point,
) -> Result<Vec<Point>, ReconstructionError> {
    let mut walk = vec![meeting];
    let mut current = meeting;
    while current != origin {
        let Some(record) = wave.record(current) else {
            warn!("no wave record at {} while backtracking", current);
            return Err(ReconstructionError::MissingRecord(current));
        };
        let Some(arrival) = record.arrival else {
            warn!("origin record at {} before reaching {}", current, origin);
            return Err(ReconstructionError::BrokenChain(current));
        };
        current = arrival.reversed().apply(current);
        walk.push(current);
        // Arrival chains strictly decrease the discovery order, so a walk
        // longer than the matrix means the chain loops.
        if walk.len() > wave.cell_count() {
            warn!("backtracking from {} cycled without reaching {}", meeting, origin);
            return Err(ReconstructionError::BrokenChain(current));
        }
    }
    Ok(walk)
}

/// Splices the two half-paths into the full start-to-finish route: the
/// start-side walk reversed, then the finish-side walk without its leading
/// meeting duplicate.
pub fn full_path(
    wave_start: &WaveState,
    wave_finish: &WaveState,
    grid: &GridModel,
    meeting: Point,
) -> Result<Vec<Point>, ReconstructionError> {
    let mut route = half_path(wave_start, grid.start(), meeting)?;
    route.reverse();
    let finish_walk = half_path(wave_finish, grid.finish(), meeting)?;
    route.extend(finish_walk.into_iter().skip(1));
    Ok(route)
}

/// Number of moves along a path, `len - 1` for non-empty paths.
pub fn steps(path: &[Point]) -> usize {
    path.len().saturating_sub(1)
}
