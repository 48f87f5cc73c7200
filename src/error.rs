use grid_util::point::Point;
use thiserror::Error;

/// Rejections raised when constructing a [GridModel](crate::GridModel) from
/// malformed input. These are caller errors and are never retried internally.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("grid must have at least one row and one column")]
    EmptyGrid,
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unknown cell value {value} at ({x}, {y})")]
    UnknownCellValue { value: u8, x: i32, y: i32 },
    #[error("unknown glyph '{glyph}' in row {row}")]
    UnknownGlyph { glyph: char, row: usize },
    #[error("expected exactly one start cell, found {0}")]
    StartCount(usize),
    #[error("expected exactly one finish cell, found {0}")]
    FinishCount(usize),
    #[error("start and finish both placed at {0}")]
    StartIsFinish(Point),
    #[error("cell {0} lies outside the {1}x{2} grid")]
    OutOfBounds(Point, usize, usize),
    #[error("direction priority lists a direction more than once")]
    DuplicatedDirection,
}

/// Internal-consistency failures while backtracking a path out of the wave
/// matrices. A correct engine never produces these; they indicate a corrupted
/// wave state rather than a caller mistake.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReconstructionError {
    #[error("no wave record at {0} while backtracking")]
    MissingRecord(Point),
    #[error("backtracking hit an origin record at {0} before the expected origin")]
    BrokenChain(Point),
}
