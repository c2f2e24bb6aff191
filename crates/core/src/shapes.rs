//! Shapes module - the tetromino catalog
//!
//! Each kind has a canonical spawn matrix. The other three orientations are
//! derived at compile time by rotating 90° clockwise
//! (`new[c][rows - 1 - r] = old[r][c]`), giving 28 immutable shapes indexed by
//! `(kind, rotation % 4)`. Nothing is allocated or transposed at runtime.
//!
//! The origin of every shape is the top-left cell of its bounding matrix, so
//! rotating a piece keeps its origin where it was (no wall kicks).

use crate::types::PieceKind;

/// Offset of a single mino relative to the matrix origin, as `(col, row)`.
pub type MinoOffset = (i8, i8);

/// One orientation of a tetromino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Matrix columns
    pub width: u8,
    /// Matrix rows
    pub height: u8,
    /// The four occupied cells in row-major order.
    pub cells: [MinoOffset; 4],
}

impl Shape {
    /// Build a shape from rows of `#` (filled) and `.` (empty).
    const fn from_rows(rows: &[&str]) -> Shape {
        let height = rows.len();
        let width = rows[0].len();
        assert!(height <= 4 && width <= 4);

        let mut cells = [(0i8, 0i8); 4];
        let mut n = 0;
        let mut r = 0;
        while r < height {
            let row = rows[r].as_bytes();
            let mut c = 0;
            while c < width {
                if row[c] == b'#' {
                    cells[n] = (c as i8, r as i8);
                    n += 1;
                }
                c += 1;
            }
            r += 1;
        }
        assert!(n == 4);

        Shape {
            width: width as u8,
            height: height as u8,
            cells,
        }
    }

    /// Rotate 90° clockwise. Width and height swap.
    const fn rotate_cw(self) -> Shape {
        let mut grid = [[false; 4]; 4];
        let mut i = 0;
        while i < 4 {
            let (c, r) = self.cells[i];
            let new_row = c as usize;
            let new_col = self.height as usize - 1 - r as usize;
            grid[new_row][new_col] = true;
            i += 1;
        }

        let width = self.height;
        let height = self.width;
        let mut cells = [(0i8, 0i8); 4];
        let mut n = 0;
        let mut r = 0;
        while r < height as usize {
            let mut c = 0;
            while c < width as usize {
                if grid[r][c] {
                    cells[n] = (c as i8, r as i8);
                    n += 1;
                }
                c += 1;
            }
            r += 1;
        }

        Shape {
            width,
            height,
            cells,
        }
    }
}

const fn orientations(base: Shape) -> [Shape; 4] {
    let east = base.rotate_cw();
    let south = east.rotate_cw();
    let west = south.rotate_cw();
    [base, east, south, west]
}

/// All orientations, indexed by `[kind.index()][rotation]`.
static SHAPES: [[Shape; 4]; 7] = [
    orientations(Shape::from_rows(&["####"])),
    orientations(Shape::from_rows(&["##", "##"])),
    orientations(Shape::from_rows(&["###", ".#."])),
    orientations(Shape::from_rows(&["###", "#.."])),
    orientations(Shape::from_rows(&["###", "..#"])),
    orientations(Shape::from_rows(&[".##", "##."])),
    orientations(Shape::from_rows(&["##.", ".##"])),
];

/// Get the shape for a piece kind and rotation (taken mod 4).
pub fn get_shape(kind: PieceKind, rotation: u8) -> &'static Shape {
    &SHAPES[kind.index()][(rotation % 4) as usize]
}

/// Spawn orientation of a piece kind.
pub fn get_spawn_shape(kind: PieceKind) -> &'static Shape {
    get_shape(kind, 0)
}

/// Colour index stored in the board for a locked cell of this kind.
pub fn color_of(kind: PieceKind) -> u8 {
    kind.index() as u8
}
