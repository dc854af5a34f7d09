pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Zero-based `(row, col)` address of one grid cell.
///
/// Ordering is row-major, which is the order every scan in this crate visits cells.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CellCoord {
    /// Row index (y).
    pub row: usize,
    /// Column index (x).
    pub col: usize,
}

impl CellCoord {
    /// Create a cell address.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset this cell by a signed delta, returning `None` when it would leave the
    /// non-negative quadrant.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

/// Integer lattice vertex where grid lines cross.
///
/// `x` counts column lines and `y` counts row lines, so cell `(row, col)` spans
/// `(col, row)..(col + 1, row + 1)` in lattice space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GridPoint {
    /// Column line.
    pub x: usize,
    /// Row line.
    pub y: usize,
}

impl GridPoint {
    /// Create a lattice vertex.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step one unit along `dir`. `None` when stepping west/north of the origin.
    pub fn step(self, dir: Direction) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dir.dx())?,
            y: self.y.checked_add_signed(dir.dy())?,
        })
    }

    /// The up to four cells sharing this vertex, as `[nw, ne, sw, se]`.
    ///
    /// Cells that would have a negative index are `None`; upper bounds are the grid's concern.
    pub fn surrounding_cells(self) -> [Option<CellCoord>; 4] {
        let nw = (self.y.checked_sub(1), self.x.checked_sub(1));
        let ne = (self.y.checked_sub(1), Some(self.x));
        let sw = (Some(self.y), self.x.checked_sub(1));
        let se = (Some(self.y), Some(self.x));
        [nw, ne, sw, se].map(|(r, c)| Some(CellCoord::new(r?, c?)))
    }

    /// Convert to a floating-point point in lattice units.
    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

/// Axis-aligned travel direction along a grid line, in y-down screen space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Direction {
    /// +x
    East,
    /// +y
    South,
    /// -x
    West,
    /// -y
    North,
}

/// How the boundary bends when moving from one direction to the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Turn {
    /// Clockwise on screen; wraps tightest around the filled side.
    Right,
    /// No change.
    Straight,
    /// Counter-clockwise on screen.
    Left,
    /// U-turn. Never produced by a well-formed boundary.
    Reverse,
}

impl Turn {
    /// Priority used when several boundary edges leave the same vertex. Lower wins.
    pub fn rank(self) -> u8 {
        match self {
            Self::Right => 0,
            Self::Straight => 1,
            Self::Left => 2,
            Self::Reverse => 3,
        }
    }
}

impl Direction {
    /// All directions in clockwise order starting from east.
    pub const ALL: [Direction; 4] = [Self::East, Self::South, Self::West, Self::North];

    /// Horizontal unit component.
    pub fn dx(self) -> isize {
        match self {
            Self::East => 1,
            Self::West => -1,
            Self::South | Self::North => 0,
        }
    }

    /// Vertical unit component (positive is down).
    pub fn dy(self) -> isize {
        match self {
            Self::South => 1,
            Self::North => -1,
            Self::East | Self::West => 0,
        }
    }

    /// Direction after a right (clockwise) turn.
    pub fn turn_right(self) -> Self {
        match self {
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
            Self::North => Self::East,
        }
    }

    /// Direction after a left (counter-clockwise) turn.
    pub fn turn_left(self) -> Self {
        match self {
            Self::East => Self::North,
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
        }
    }

    /// Opposite direction.
    pub fn reverse(self) -> Self {
        self.turn_right().turn_right()
    }

    /// Classify the bend from `self` into `next`.
    pub fn turn_to(self, next: Direction) -> Turn {
        if next == self.turn_right() {
            Turn::Right
        } else if next == self {
            Turn::Straight
        } else if next == self.turn_left() {
            Turn::Left
        } else {
            Turn::Reverse
        }
    }

    /// Unit vector in lattice space.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.dx() as f64, self.dy() as f64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
