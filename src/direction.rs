use grid_util::point::Point;

/// The four orthogonal moves on the grid. `y` grows downward, so [Up](Direction::Up)
/// decreases the row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// The expansion priority used when no explicit order is configured on the grid.
pub const DEFAULT_PRIORITY: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

impl Direction {
    /// The coordinate delta of a single move in this direction.
    pub fn offset(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
        }
    }

    /// The opposite move, used to backtrack along stored arrival directions.
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// The cell reached by taking one step from `from` in this direction.
    pub fn apply(self, from: Point) -> Point {
        let delta = self.offset();
        Point::new(from.x + delta.x, from.y + delta.y)
    }

    /// Single-character marker for overlay display.
    pub fn glyph(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Right => '>',
            Direction::Down => 'v',
            Direction::Left => '<',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_is_involutive() {
        for dir in DEFAULT_PRIORITY {
            assert_eq!(dir.reversed().reversed(), dir);
        }
    }

    #[test]
    fn apply_then_reverse_returns_home() {
        let home = Point::new(3, 5);
        for dir in DEFAULT_PRIORITY {
            assert_eq!(dir.reversed().apply(dir.apply(home)), home);
        }
    }

    #[test]
    fn offsets_are_unit_steps() {
        for dir in DEFAULT_PRIORITY {
            let delta = dir.offset();
            assert_eq!(delta.x.abs() + delta.y.abs(), 1);
        }
    }
}
