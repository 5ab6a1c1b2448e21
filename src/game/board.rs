use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::BoardError;

/// The default (and standard) board edge length.
pub const DEFAULT_SIZE: usize = 8;

/// The state of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

/// A board coordinate, addressed as (column, row). Both are 0-indexed and the
/// (col, row) order is used uniformly across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    pub fn new(col: usize, row: usize) -> Self {
        Coord { col, row }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// A square Othello board.
///
/// Cells are stored row-major. The board is only mutated through
/// [`set`](Board::set), which the rules module uses for token placement and
/// line flipping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a starting board of the given edge length.
    ///
    /// The four center squares are pre-placed diagonally: Light on the main
    /// diagonal, Dark on the anti-diagonal.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < 2 {
            return Err(BoardError::SizeTooSmall(size));
        }
        if size % 2 != 0 {
            return Err(BoardError::OddSize(size));
        }

        let mut board = Board {
            size,
            cells: vec![Cell::Empty; size * size],
        };

        let mid = size / 2;
        board.set(Coord::new(mid - 1, mid - 1), Cell::Light);
        board.set(Coord::new(mid, mid - 1), Cell::Dark);
        board.set(Coord::new(mid - 1, mid), Cell::Dark);
        board.set(Coord::new(mid, mid), Cell::Light);

        Ok(board)
    }

    /// Rebuild a board from a flat row-major cell sequence, as produced by
    /// serialization. Fails unless the length is a valid even-sized square.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, BoardError> {
        let size = (cells.len() as f64).sqrt() as usize;
        if size * size != cells.len() {
            return Err(BoardError::NotSquare(cells.len()));
        }
        if size < 2 {
            return Err(BoardError::SizeTooSmall(size));
        }
        if size % 2 != 0 {
            return Err(BoardError::OddSize(size));
        }
        Ok(Board { size, cells })
    }

    /// Edge length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.col < self.size && coord.row < self.size
    }

    /// Step one cell from `coord` in direction `(dx, dy)`, staying in bounds.
    pub fn step(&self, coord: Coord, dx: i32, dy: i32) -> Option<Coord> {
        let col = coord.col as i32 + dx;
        let row = coord.row as i32 + dy;
        if col < 0 || row < 0 || col >= self.size as i32 || row >= self.size as i32 {
            None
        } else {
            Some(Coord::new(col as usize, row as usize))
        }
    }

    /// Get the cell at a coordinate. The coordinate must be in bounds.
    pub fn get(&self, coord: Coord) -> Cell {
        debug_assert!(self.contains(coord), "coordinate {} out of bounds", coord);
        self.cells[coord.row * self.size + coord.col]
    }

    /// Place a token or flip a cell. Only the rules module mutates the board.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        debug_assert!(self.contains(coord), "coordinate {} out of bounds", coord);
        self.cells[coord.row * self.size + coord.col] = cell;
    }

    /// Count the squares holding the given cell state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(col, row)))
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.cells.iter())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cells = Vec::<Cell>::deserialize(deserializer)?;
        Board::from_cells(cells).map_err(D::Error::custom)
    }
}

impl fmt::Display for Board {
    /// Plain-text render: one line per row, one symbol per cell state.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.get(Coord::new(col, row)) {
                    Cell::Empty => '.',
                    Cell::Dark => 'D',
                    Cell::Light => 'L',
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", symbol)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_starting_pattern() {
        let board = Board::new(8).unwrap();

        assert_eq!(board.get(Coord::new(3, 3)), Cell::Light);
        assert_eq!(board.get(Coord::new(4, 3)), Cell::Dark);
        assert_eq!(board.get(Coord::new(3, 4)), Cell::Dark);
        assert_eq!(board.get(Coord::new(4, 4)), Cell::Light);
        assert_eq!(board.count(Cell::Empty), 60);
    }

    #[test]
    fn test_any_even_size_has_four_center_tokens() {
        for size in [2, 4, 6, 8, 10] {
            let board = Board::new(size).unwrap();
            assert_eq!(board.count(Cell::Dark), 2, "size {}", size);
            assert_eq!(board.count(Cell::Light), 2, "size {}", size);
            assert_eq!(board.count(Cell::Empty), size * size - 4, "size {}", size);
        }
    }

    #[test]
    fn test_odd_size_rejected() {
        assert_eq!(Board::new(7), Err(BoardError::OddSize(7)));
    }

    #[test]
    fn test_too_small_size_rejected() {
        assert_eq!(Board::new(0), Err(BoardError::SizeTooSmall(0)));
        assert_eq!(Board::new(1), Err(BoardError::SizeTooSmall(1)));
    }

    #[test]
    fn test_serde_round_trip() {
        let board = Board::new(8).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_serialization_is_flat_row_major() {
        let board = Board::new(2).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"["light","dark","dark","light"]"#);
    }

    #[test]
    fn test_non_square_cell_count_rejected() {
        let json = r#"["empty","empty","empty"]"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }

    #[test]
    fn test_unrecognized_cell_tag_rejected() {
        let json = r#"["empty","empty","empty","green"]"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }

    #[test]
    fn test_step_stays_in_bounds() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.step(Coord::new(0, 0), -1, 0), None);
        assert_eq!(board.step(Coord::new(3, 3), 1, 1), None);
        assert_eq!(board.step(Coord::new(1, 2), 1, -1), Some(Coord::new(2, 1)));
    }

    #[test]
    fn test_display_render() {
        let board = Board::new(2).unwrap();
        assert_eq!(board.to_string(), "L D\nD L\n");
    }

    #[test]
    fn test_coords_are_row_major() {
        let board = Board::new(2).unwrap();
        let coords: Vec<Coord> = board.coords().collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1)
            ]
        );
    }
}
