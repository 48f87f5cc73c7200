use std::collections::VecDeque;

use grid_util::point::Point;

use crate::direction::Direction;

/// Discovery record for one cell within one wave: the per-wave discovery
/// index and the move that first reached the cell. The origin cell carries
/// order 0 and no arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaveRecord {
    pub order: u64,
    pub arrival: Option<Direction>,
}

/// One side's expansion state: a write-once record matrix plus the FIFO
/// frontier of enqueued-but-unexpanded cells.
///
/// The backing storage is flat and kept across searches;
/// [reset](Self::reset) clears contents without shrinking capacity, so
/// stepping-driven consumers pay for allocation once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaveState {
    records: Vec<Option<WaveRecord>>,
    frontier: VecDeque<Point>,
    width: usize,
    height: usize,
    next_order: u64,
}

impl WaveState {
    pub fn new() -> WaveState {
        WaveState::default()
    }

    /// Clears all records and the frontier and re-sizes to the given grid.
    pub(crate) fn reset(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.records.clear();
        self.records.resize(width * height, None);
        self.frontier.clear();
        self.next_order = 0;
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// The record stored for a cell, or [None] if this wave has not
    /// discovered it (or the cell is out of bounds).
    pub fn record(&self, p: Point) -> Option<WaveRecord> {
        self.idx(p).and_then(|i| self.records[i])
    }

    pub fn is_visited(&self, p: Point) -> bool {
        self.record(p).is_some()
    }

    /// How many cells this wave has discovered so far.
    pub fn visited_count(&self) -> usize {
        self.next_order as usize
    }

    /// Total number of cells in the matrix.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// All discovered cells with their records, in matrix order. Intended for
    /// overlay rendering.
    pub fn visited(&self) -> impl Iterator<Item = (Point, WaveRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter_map(move |(i, record)| record.map(|r| (self.point(i), r)))
    }

    /// Records the cell with the next discovery order and enqueues it.
    /// Returns [false] without touching anything if the cell was already
    /// visited by this wave (records are write-once) or lies out of bounds.
    pub(crate) fn visit(&mut self, p: Point, arrival: Option<Direction>) -> bool {
        let Some(i) = self.idx(p) else {
            return false;
        };
        if self.records[i].is_some() {
            return false;
        }
        self.records[i] = Some(WaveRecord {
            order: self.next_order,
            arrival,
        });
        self.next_order += 1;
        self.frontier.push_back(p);
        true
    }

    pub(crate) fn pop_frontier(&mut self) -> Option<Point> {
        self.frontier.pop_front()
    }

    pub(crate) fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}
