use crate::error::EngineError;
use super::types::{BOARD_SIZE, CELL_COUNT, Cell, Player, Position};

/// 3x3 grid plus a running count of marked cells.
///
/// Every mutation goes through `place` or `clear`, which keep
/// `occupied_count` equal to the number of non-empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    occupied_count: usize,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an arbitrary (possibly unreachable) board, recounting occupancy.
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let occupied_count = cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count();
        Self {
            cells,
            occupied_count,
        }
    }

    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied_count
    }

    pub fn get(&self, pos: Position) -> Result<Cell, EngineError> {
        check_bounds(pos)?;
        Ok(self.cells[pos.row][pos.col])
    }

    pub fn is_empty(&self, pos: Position) -> Result<bool, EngineError> {
        self.get(pos).map(Cell::is_empty)
    }

    /// Marks an empty cell. On error the board is left untouched.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), EngineError> {
        check_bounds(pos)?;
        let cell = &mut self.cells[pos.row][pos.col];
        if !cell.is_empty() {
            return Err(EngineError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        *cell = Cell::Mark(player);
        self.occupied_count += 1;
        Ok(())
    }

    /// Undoes a trial `place`. Only meaningful on a cell the caller just marked;
    /// clearing an empty cell is a contract violation and leaves the board as is.
    pub fn clear(&mut self, pos: Position) {
        debug_assert!(pos.is_in_bounds(), "clear out of range: {:?}", pos);
        let Some(cell) = self
            .cells
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
        else {
            return;
        };
        debug_assert!(!cell.is_empty(), "clear on empty cell: {:?}", pos);
        if cell.is_empty() {
            return;
        }
        *cell = Cell::Empty;
        self.occupied_count -= 1;
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count == CELL_COUNT
    }

    /// Empty cells in row-major order. Call again to restart.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_empty())
                .map(move |(col, _)| Position::new(row, col))
        })
    }
}

fn check_bounds(pos: Position) -> Result<(), EngineError> {
    if pos.is_in_bounds() {
        Ok(())
    } else {
        Err(EngineError::InvalidCoordinate {
            row: pos.row,
            col: pos.col,
        })
    }
}

#[cfg(test)]
pub(crate) fn board_from_rows(rows: [&str; BOARD_SIZE]) -> Board {
    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            cells[row][col] = match ch {
                'X' => Cell::Mark(Player::First),
                'O' => Cell::Mark(Player::Second),
                _ => Cell::Empty,
            };
        }
    }
    Board::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().count(), CELL_COUNT);
    }

    #[test]
    fn test_place_marks_cell_and_counts() {
        let mut board = Board::new();
        board.place(Position::new(2, 1), Player::First).unwrap();

        assert_eq!(board.get(Position::new(2, 1)).unwrap(), Cell::Mark(Player::First));
        assert!(!board.is_empty(Position::new(2, 1)).unwrap());
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_place_on_occupied_cell_leaves_board_unchanged() {
        let mut board = board_from_rows(["X  ", " O ", "   "]);
        let snapshot = board.clone();

        let result = board.place(Position::new(1, 1), Player::First);

        assert_eq!(result, Err(EngineError::CellOccupied { row: 1, col: 1 }));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_out_of_range_is_invalid_coordinate() {
        let mut board = Board::new();
        assert_eq!(
            board.is_empty(Position::new(3, 0)),
            Err(EngineError::InvalidCoordinate { row: 3, col: 0 })
        );
        assert_eq!(
            board.place(Position::new(0, 7), Player::Second),
            Err(EngineError::InvalidCoordinate { row: 0, col: 7 })
        );
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_place_then_clear_restores_board() {
        let mut board = board_from_rows(["XO ", "   ", "  X"]);
        let snapshot = board.clone();

        for pos in snapshot.empty_cells() {
            board.place(pos, Player::Second).unwrap();
            board.clear(pos);
            assert_eq!(board, snapshot);
        }
    }

    #[test]
    fn test_empty_cells_row_major_order() {
        let board = board_from_rows(["X O", " X ", "O  "]);
        let cells: Vec<Position> = board.empty_cells().collect();

        assert_eq!(
            cells,
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
        let again: Vec<Position> = board.empty_cells().collect();
        assert_eq!(cells, again);
    }

    #[test]
    fn test_full_board() {
        let board = board_from_rows(["XOX", "XOO", "OXX"]);
        assert!(board.is_full());
        assert_eq!(board.empty_cells().next(), None);
    }

    #[test]
    fn test_from_cells_counts_occupancy() {
        let board = board_from_rows(["XX ", "   ", "O  "]);
        assert_eq!(board.occupied_count(), 3);
    }
}
