/// Grid coordinate. Row 0 is the top row; gravity pulls tiles toward
/// larger row indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// One playable unit in the grid. `Color` values are in `0..colors_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Color(u32),
    Super,
}

impl Tile {
    pub fn is_super(&self) -> bool {
        matches!(self, Tile::Super)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
}

/// Observable effect of a resolution step, returned to the caller in the
/// order it happened. `TileFell` carries the destination position of a
/// single-row move, so a multi-row fall shows up as a sequence of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    TileRemoved(Position),
    TileFell(Position),
    CascadeSettled,
    SuperTileCreated(Position),
    BoardReshuffled,
    GameOver(GameResult),
}
