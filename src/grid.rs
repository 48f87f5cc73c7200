use core::fmt;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use petgraph::unionfind::UnionFind;

use crate::direction::{Direction, DEFAULT_PRIORITY};
use crate::error::ValidationError;

/// Classification of a cell in the input contract (`0..=3` in matrix form).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellClass {
    Free,
    Obstacle,
    Start,
    Finish,
}

impl CellClass {
    fn from_value(value: u8) -> Option<CellClass> {
        match value {
            0 => Some(CellClass::Free),
            1 => Some(CellClass::Obstacle),
            2 => Some(CellClass::Start),
            3 => Some(CellClass::Finish),
            _ => None,
        }
    }
}

/// Immutable view of a rectangular obstacle grid with one start and one
/// finish cell. Obstacles live in a [BoolGrid] ([true] means blocked) and
/// connected components are linked up once at construction with a [UnionFind],
/// so reachability can be queried without running a search.
///
/// Coordinates follow `grid_util`: `x` is the column, `y` is the row, row 0 on
/// top. The start and finish cells are always traversable.
#[derive(Clone, Debug)]
pub struct GridModel {
    blocked: BoolGrid,
    start: Point,
    finish: Point,
    priority: [Direction; 4],
    components: UnionFind<usize>,
}

impl GridModel {
    /// Builds a grid from the integer matrix contract: `0` free, `1` obstacle,
    /// `2` start, `3` finish. Exactly one start and one finish must be present
    /// and all rows must have equal length.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<GridModel, ValidationError> {
        let height = rows.len();
        if height == 0 || rows[0].is_empty() {
            return Err(ValidationError::EmptyGrid);
        }
        let width = rows[0].len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(ValidationError::RaggedRow {
                    row,
                    len: cells.len(),
                    expected: width,
                });
            }
        }
        let mut blocked = BoolGrid::new(width, height, false);
        let mut starts: Vec<Point> = Vec::new();
        let mut finishes: Vec<Point> = Vec::new();
        for (y, x) in iproduct!(0..height, 0..width) {
            let value = rows[y][x];
            let p = Point::new(x as i32, y as i32);
            match CellClass::from_value(value) {
                Some(CellClass::Free) => {}
                Some(CellClass::Obstacle) => blocked.set(x, y, true),
                Some(CellClass::Start) => starts.push(p),
                Some(CellClass::Finish) => finishes.push(p),
                None => {
                    return Err(ValidationError::UnknownCellValue {
                        value,
                        x: p.x,
                        y: p.y,
                    })
                }
            }
        }
        if starts.len() != 1 {
            return Err(ValidationError::StartCount(starts.len()));
        }
        if finishes.len() != 1 {
            return Err(ValidationError::FinishCount(finishes.len()));
        }
        GridModel::assemble(blocked, starts[0], finishes[0])
    }

    /// Builds a grid from explicit obstacle positions. The start and finish
    /// cells are forced free, overriding any obstacle listed there.
    pub fn from_parts(
        width: usize,
        height: usize,
        obstacles: &[Point],
        start: Point,
        finish: Point,
    ) -> Result<GridModel, ValidationError> {
        if width == 0 || height == 0 {
            return Err(ValidationError::EmptyGrid);
        }
        let mut blocked = BoolGrid::new(width, height, false);
        for &p in obstacles {
            if p.x < 0 || p.y < 0 || !blocked.index_in_bounds(p.x as usize, p.y as usize) {
                return Err(ValidationError::OutOfBounds(p, width, height));
            }
            blocked.set(p.x as usize, p.y as usize, true);
        }
        for &endpoint in &[start, finish] {
            if endpoint.x < 0
                || endpoint.y < 0
                || !blocked.index_in_bounds(endpoint.x as usize, endpoint.y as usize)
            {
                return Err(ValidationError::OutOfBounds(endpoint, width, height));
            }
            blocked.set(endpoint.x as usize, endpoint.y as usize, false);
        }
        GridModel::assemble(blocked, start, finish)
    }

    /// Parses an ASCII sketch: `.` free, `#` obstacle, `S` start, `F` finish.
    /// Blank lines and surrounding whitespace are ignored.
    pub fn from_ascii(text: &str) -> Result<GridModel, ValidationError> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = rows.len();
            let cells = line
                .chars()
                .map(|glyph| match glyph {
                    '.' => Ok(0),
                    '#' => Ok(1),
                    'S' => Ok(2),
                    'F' => Ok(3),
                    other => Err(ValidationError::UnknownGlyph { glyph: other, row }),
                })
                .collect::<Result<Vec<u8>, ValidationError>>()?;
            rows.push(cells);
        }
        GridModel::from_rows(&rows)
    }

    fn assemble(
        blocked: BoolGrid,
        start: Point,
        finish: Point,
    ) -> Result<GridModel, ValidationError> {
        if start == finish {
            return Err(ValidationError::StartIsFinish(start));
        }
        let components = generate_components(&blocked);
        Ok(GridModel {
            blocked,
            start,
            finish,
            priority: DEFAULT_PRIORITY,
            components,
        })
    }

    /// Replaces the direction priority used by
    /// [neighbors_in_priority_order](Self::neighbors_in_priority_order).
    /// The order must name each direction exactly once.
    pub fn with_priority(mut self, priority: [Direction; 4]) -> Result<GridModel, ValidationError> {
        if !priority.iter().all_unique() {
            return Err(ValidationError::DuplicatedDirection);
        }
        self.priority = priority;
        Ok(self)
    }

    pub fn width(&self) -> usize {
        self.blocked.width
    }

    pub fn height(&self) -> usize {
        self.blocked.height
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn finish(&self) -> Point {
        self.finish
    }

    pub fn priority(&self) -> [Direction; 4] {
        self.priority
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && self.blocked.index_in_bounds(p.x as usize, p.y as usize)
    }

    /// [false] for out-of-bounds cells and obstacles; the start and finish
    /// cells are traversable like any free cell.
    pub fn is_traversable(&self, p: Point) -> bool {
        self.in_bounds(p) && !self.blocked.get(p.x as usize, p.y as usize)
    }

    /// The classification of an in-bounds cell.
    pub fn class_of(&self, p: Point) -> Option<CellClass> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(if p == self.start {
            CellClass::Start
        } else if p == self.finish {
            CellClass::Finish
        } else if self.blocked.get(p.x as usize, p.y as usize) {
            CellClass::Obstacle
        } else {
            CellClass::Free
        })
    }

    /// In-bounds neighbors of `p` in the configured priority order, paired
    /// with the direction that reaches them. Obstacles are not filtered here;
    /// traversability is the search's concern.
    pub fn neighbors_in_priority_order(
        &self,
        p: Point,
    ) -> impl Iterator<Item = (Direction, Point)> + '_ {
        self.priority
            .into_iter()
            .map(move |dir| (dir, dir.apply(p)))
            .filter(|&(_, neighbor)| self.in_bounds(neighbor))
    }

    /// Checks if two traversable cells are on the same connected component.
    pub fn reachable(&self, a: Point, b: Point) -> bool {
        self.is_traversable(a)
            && self.is_traversable(b)
            && self.components.equiv(
                self.blocked.get_ix(a.x as usize, a.y as usize),
                self.blocked.get_ix(b.x as usize, b.y as usize),
            )
    }

    pub fn unreachable(&self, a: Point, b: Point) -> bool {
        !self.reachable(a, b)
    }
}

/// Links 4-connected free cells into components. The grid is immutable, so
/// this runs once at construction and needs no dirty tracking.
fn generate_components(blocked: &BoolGrid) -> UnionFind<usize> {
    let w = blocked.width;
    let h = blocked.height;
    let mut components = UnionFind::new(w * h);
    for (y, x) in iproduct!(0..h, 0..w) {
        if blocked.get(x, y) {
            continue;
        }
        let parent_ix = blocked.get_ix(x, y);
        if x + 1 < w && !blocked.get(x + 1, y) {
            components.union(parent_ix, blocked.get_ix(x + 1, y));
        }
        if y + 1 < h && !blocked.get(x, y + 1) {
            components.union(parent_ix, blocked.get_ix(x, y + 1));
        }
    }
    components
}

impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let p = Point::new(x as i32, y as i32);
                let glyph = match self.class_of(p) {
                    Some(CellClass::Start) => 'S',
                    Some(CellClass::Finish) => 'F',
                    Some(CellClass::Obstacle) => '#',
                    _ => '.',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_ragged_input() {
        assert_eq!(
            GridModel::from_rows(&[]).unwrap_err(),
            ValidationError::EmptyGrid
        );
        assert_eq!(
            GridModel::from_rows(&[vec![]]).unwrap_err(),
            ValidationError::EmptyGrid
        );
        assert_eq!(
            GridModel::from_rows(&[vec![2, 0], vec![0, 3, 0]]).unwrap_err(),
            ValidationError::RaggedRow {
                row: 1,
                len: 3,
                expected: 2
            }
        );
    }

    #[test]
    fn rejects_bad_endpoint_counts() {
        assert_eq!(
            GridModel::from_rows(&[vec![0, 0], vec![0, 3]]).unwrap_err(),
            ValidationError::StartCount(0)
        );
        assert_eq!(
            GridModel::from_rows(&[vec![2, 2], vec![0, 3]]).unwrap_err(),
            ValidationError::StartCount(2)
        );
        assert_eq!(
            GridModel::from_rows(&[vec![2, 0], vec![3, 3]]).unwrap_err(),
            ValidationError::FinishCount(2)
        );
    }

    #[test]
    fn rejects_unknown_values() {
        assert_eq!(
            GridModel::from_rows(&[vec![2, 7], vec![0, 3]]).unwrap_err(),
            ValidationError::UnknownCellValue {
                value: 7,
                x: 1,
                y: 0
            }
        );
    }

    #[test]
    fn rejects_coincident_endpoints() {
        let p = Point::new(1, 1);
        assert_eq!(
            GridModel::from_parts(3, 3, &[], p, p).unwrap_err(),
            ValidationError::StartIsFinish(p)
        );
    }

    #[test]
    fn rejects_out_of_bounds_parts() {
        assert_eq!(
            GridModel::from_parts(2, 2, &[Point::new(5, 0)], Point::new(0, 0), Point::new(1, 1))
                .unwrap_err(),
            ValidationError::OutOfBounds(Point::new(5, 0), 2, 2)
        );
    }

    #[test]
    fn rejects_duplicated_priority() {
        let grid = GridModel::from_rows(&[vec![2, 0], vec![0, 3]]).unwrap();
        let result = grid.with_priority([
            Direction::Up,
            Direction::Up,
            Direction::Down,
            Direction::Left,
        ]);
        assert_eq!(result.unwrap_err(), ValidationError::DuplicatedDirection);
    }

    #[test]
    fn ascii_matches_matrix_form() {
        let from_ascii = GridModel::from_ascii(
            "
            S..
            #.#
            ..F
            ",
        )
        .unwrap();
        let from_rows =
            GridModel::from_rows(&[vec![2, 0, 0], vec![1, 0, 1], vec![0, 0, 3]]).unwrap();
        assert_eq!(from_ascii.start(), from_rows.start());
        assert_eq!(from_ascii.finish(), from_rows.finish());
        assert!(!from_ascii.is_traversable(Point::new(0, 1)));
        assert!(!from_ascii.is_traversable(Point::new(2, 1)));
    }

    #[test]
    fn neighbor_order_follows_priority() {
        let grid = GridModel::from_rows(&[vec![0, 0, 0], vec![0, 2, 3], vec![0, 0, 0]]).unwrap();
        let center = Point::new(1, 1);
        let neighbors: Vec<(Direction, Point)> =
            grid.neighbors_in_priority_order(center).collect();
        assert_eq!(
            neighbors,
            vec![
                (Direction::Up, Point::new(1, 0)),
                (Direction::Right, Point::new(2, 1)),
                (Direction::Down, Point::new(1, 2)),
                (Direction::Left, Point::new(0, 1)),
            ]
        );
        // Corner cells only yield in-bounds neighbors.
        let corner: Vec<(Direction, Point)> =
            grid.neighbors_in_priority_order(Point::new(0, 0)).collect();
        assert_eq!(
            corner,
            vec![
                (Direction::Right, Point::new(1, 0)),
                (Direction::Down, Point::new(0, 1)),
            ]
        );
    }

    #[test]
    fn traversability_and_classes() {
        let grid = GridModel::from_rows(&[vec![2, 1], vec![0, 3]]).unwrap();
        assert!(grid.is_traversable(grid.start()));
        assert!(grid.is_traversable(grid.finish()));
        assert!(!grid.is_traversable(Point::new(1, 0)));
        assert!(!grid.is_traversable(Point::new(-1, 0)));
        assert!(!grid.is_traversable(Point::new(0, 2)));
        assert_eq!(grid.class_of(Point::new(0, 0)), Some(CellClass::Start));
        assert_eq!(grid.class_of(Point::new(1, 0)), Some(CellClass::Obstacle));
        assert_eq!(grid.class_of(Point::new(0, 1)), Some(CellClass::Free));
        assert_eq!(grid.class_of(Point::new(1, 1)), Some(CellClass::Finish));
        assert_eq!(grid.class_of(Point::new(2, 0)), None);
    }

    /// A wall splitting the grid puts the endpoints on different components.
    #[test]
    fn component_reachability() {
        let split = GridModel::from_ascii(
            "
            S.#..
            ..#..
            ..#.F
            ",
        )
        .unwrap();
        assert!(split.unreachable(split.start(), split.finish()));

        let open = GridModel::from_ascii(
            "
            S....
            ..#..
            ....F
            ",
        )
        .unwrap();
        assert!(open.reachable(open.start(), open.finish()));
    }

    #[test]
    fn display_round_trips_through_ascii() {
        let grid = GridModel::from_ascii(
            "
            S.#
            ..F
            ",
        )
        .unwrap();
        assert_eq!(format!("{}", grid), "S.#\n..F\n");
    }
}
