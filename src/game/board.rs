use super::PlayerId;

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;

/// Pieces in a row needed to win
pub const CONNECT: usize = 4;

/// A cell is either empty or owned by a player.
pub type Cell = Option<PlayerId>;

/// Window shapes checked from every anchor cell, as (row step, col step):
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    /// Row-major, row 0 is the top
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            cells: vec![None; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    /// Get the cell at a specific position. Out-of-range positions read as empty.
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.index(row, col).and_then(|idx| self.cells[idx])
    }

    /// Lowest unoccupied row in `col`, or `None` if the column is full or out of range
    pub fn find_spot_for_column(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height).rev().find(|&row| self.get(row, col).is_none())
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.find_spot_for_column(col).is_none()
    }

    /// Record `player` at (row, col). The caller must have just resolved the spot with
    /// [`Board::find_spot_for_column`]; out-of-range coordinates are ignored.
    pub fn place_piece(&mut self, row: usize, col: usize, player: PlayerId) {
        if let Some(idx) = self.index(row, col) {
            debug_assert!(self.cells[idx].is_none(), "cell ({row}, {col}) already occupied");
            self.cells[idx] = Some(player);
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Check if `player` has four in a row anywhere on the board
    pub fn check_for_win(&self, player: PlayerId) -> bool {
        self.winning_line(player).is_some()
    }

    /// First four-in-a-row owned by `player`, scanning anchors in row-major order
    pub fn winning_line(&self, player: PlayerId) -> Option<[(usize, usize); CONNECT]> {
        for row in 0..self.height {
            for col in 0..self.width {
                for &(dr, dc) in &DIRECTIONS {
                    if let Some(line) = self.window(row, col, dr, dc) {
                        if line.iter().all(|&(r, c)| self.get(r, c) == Some(player)) {
                            return Some(line);
                        }
                    }
                }
            }
        }
        None
    }

    /// The four cells starting at the anchor, or `None` if any falls off the board
    fn window(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> Option<[(usize, usize); CONNECT]> {
        let mut line = [(0, 0); CONNECT];
        for (k, cell) in line.iter_mut().enumerate() {
            let r = row.checked_add_signed(dr * k as isize)?;
            let c = col.checked_add_signed(dc * k as isize)?;
            self.index(r, c)?;
            *cell = (r, c);
        }
        Some(line)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}
