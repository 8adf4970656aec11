use super::session_rng::SessionRng;
use super::types::{Position, Tile};

/// Fixed-size tile matrix. Cells are `None` only transiently, between the
/// removal and refill phases of a resolution step; between taps every cell
/// holds a tile.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    pub fn new_random(height: usize, width: usize, colors_count: u32, rng: &mut SessionRng) -> Self {
        let cells = (0..height * width)
            .map(|_| Some(Tile::Color(rng.random_range(0..colors_count))))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.row < self.height && position.column < self.width
    }

    fn index(&self, position: Position) -> usize {
        position.row * self.width + position.column
    }

    pub fn tile_at(&self, position: Position) -> Option<Tile> {
        self.cells[self.index(position)]
    }

    pub fn set_tile(&mut self, position: Position, tile: Tile) {
        let idx = self.index(position);
        self.cells[idx] = Some(tile);
    }

    pub fn clear_tile(&mut self, position: Position) {
        let idx = self.index(position);
        self.cells[idx] = None;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Row-major copy of the board for read-only collaborators.
    pub fn snapshot(&self) -> Vec<Vec<Option<Tile>>> {
        (0..self.height)
            .map(|row| (0..self.width).map(|col| self.cells[row * self.width + col]).collect())
            .collect()
    }

    /// Maximal 4-connected set of cells holding the same tile as `start`.
    /// Iterative DFS with an explicit visited matrix; enumeration order is
    /// incidental, the returned set is not.
    pub fn flood_fill(&self, start: Position) -> Vec<Position> {
        let Some(start_tile) = self.tile_at(start) else {
            return Vec::new();
        };

        let mut visited = vec![false; self.cells.len()];
        let mut combination = Vec::new();
        let mut stack = vec![start];
        visited[self.index(start)] = true;

        while let Some(position) = stack.pop() {
            combination.push(position);
            for neighbor in self.neighbors(position) {
                let idx = self.index(neighbor);
                if !visited[idx] && self.cells[idx] == Some(start_tile) {
                    visited[idx] = true;
                    stack.push(neighbor);
                }
            }
        }

        combination
    }

    fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> {
        let Position { row, column } = position;
        let up = (row > 0).then(|| Position::new(row - 1, column));
        let down = (row + 1 < self.height).then(|| Position::new(row + 1, column));
        let left = (column > 0).then(|| Position::new(row, column - 1));
        let right = (column + 1 < self.width).then(|| Position::new(row, column + 1));
        [up, down, left, right].into_iter().flatten()
    }

    /// Diamond-shaped area selection of a Super tile tapped at `origin`,
    /// clipped to the board. Any other Super tile caught in the selection
    /// chains: its own diamond is unioned in, duplicate-free, until no new
    /// Super is absorbed.
    pub fn super_selection(&self, origin: Position, radius: usize) -> Vec<Position> {
        let mut included = vec![false; self.cells.len()];
        let mut selection = Vec::new();
        let mut pending = vec![origin];
        included[self.index(origin)] = true;
        selection.push(origin);

        while let Some(center) = pending.pop() {
            for position in self.diamond_around(center, radius) {
                let idx = self.index(position);
                if included[idx] {
                    continue;
                }
                included[idx] = true;
                selection.push(position);
                if self.cells[idx] == Some(Tile::Super) {
                    pending.push(position);
                }
            }
        }

        selection
    }

    fn diamond_around(&self, center: Position, radius: usize) -> Vec<Position> {
        let span = radius as isize - 1;
        let mut positions = Vec::new();
        for row_offset in -span..=span {
            let half_width = span - row_offset.abs();
            for column_offset in -half_width..=half_width {
                let row = center.row as isize + row_offset;
                let column = center.column as isize + column_offset;
                if row < 0 || column < 0 || row >= self.height as isize || column >= self.width as isize {
                    continue;
                }
                positions.push(Position::new(row as usize, column as usize));
            }
        }
        positions
    }

    /// Compacts every column downward until no tile has an empty cell
    /// directly beneath it. Runs whole-grid sweeps to a fixed point, one
    /// row per tile per sweep; returns the destination of every single-row
    /// move in the order it happened.
    pub fn fall_tiles(&mut self) -> Vec<Position> {
        let mut fallen = Vec::new();
        loop {
            let mut moved = false;
            for row in (1..self.height).rev() {
                for column in 0..self.width {
                    let below = row * self.width + column;
                    let above = (row - 1) * self.width + column;
                    if self.cells[below].is_none() && self.cells[above].is_some() {
                        self.cells[below] = self.cells[above].take();
                        fallen.push(Position::new(row, column));
                        moved = true;
                    }
                }
            }
            if !moved {
                break;
            }
        }
        fallen
    }

    /// Fills every empty cell with a fresh random colored tile. Refill
    /// never produces a Super tile.
    pub fn refill(&mut self, colors_count: u32, rng: &mut SessionRng) {
        for cell in &mut self.cells {
            if cell.is_none() {
                *cell = Some(Tile::Color(rng.random_range(0..colors_count)));
            }
        }
    }

    /// Uniform random permutation of all cells (Fisher-Yates). Super tiles
    /// are shuffled like any other tile.
    pub fn reshuffle(&mut self, rng: &mut SessionRng) {
        for i in (1..self.cells.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cells.swap(i, j);
        }
    }

    /// Whether any tap on the current board would activate. A Super tile
    /// anywhere short-circuits true; otherwise every cell's combination is
    /// flood-filled once, with a checked matrix to skip positions already
    /// swept into an undersized combination.
    pub fn move_exists(&self, min_combination_count: usize) -> bool {
        if self.cells.iter().any(|c| *c == Some(Tile::Super)) {
            return true;
        }

        let mut checked = vec![false; self.cells.len()];
        for row in 0..self.height {
            for column in 0..self.width {
                if checked[row * self.width + column] {
                    continue;
                }
                let combination = self.flood_fill(Position::new(row, column));
                if combination.len() >= min_combination_count {
                    return true;
                }
                for position in combination {
                    checked[self.index(position)] = true;
                }
            }
        }
        false
    }

    #[cfg(test)]
    pub(crate) fn set_cells(&mut self, cells: Vec<Option<Tile>>) {
        assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
    }

    #[cfg(test)]
    pub(crate) fn cells(&self) -> &[Option<Tile>] {
        &self.cells
    }
}
