#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    InvalidCoordinate { row: usize, col: usize },
    CellOccupied { row: usize, col: usize },
    NoLegalMove,
    GameOver,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate out of range: ({}, {})", row, col)
            }
            EngineError::CellOccupied { row, col } => {
                write!(f, "Cell is already marked: ({}, {})", row, col)
            }
            EngineError::NoLegalMove => write!(f, "No legal move available"),
            EngineError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for EngineError {}
