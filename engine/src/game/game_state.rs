use super::grid::Grid;
use super::session_rng::SessionRng;
use super::settings::BlastSettings;
use super::types::{GameEvent, GameResult, GameStatus, Position, Tile};

pub const SMALL_COMBINATION_POINTS: u32 = 10;
pub const MEDIUM_COMBINATION_POINTS: u32 = 15;
pub const LARGE_COMBINATION_POINTS: u32 = 20;
pub const MEDIUM_COMBINATION_MIN: usize = 5;
pub const LARGE_COMBINATION_MIN: usize = 8;

/// Points for removing a combination of the given size.
pub fn score_for(combination_size: usize) -> u32 {
    let size = combination_size as u32;
    if combination_size >= LARGE_COMBINATION_MIN {
        size * LARGE_COMBINATION_POINTS
    } else if combination_size >= MEDIUM_COMBINATION_MIN {
        size * MEDIUM_COMBINATION_POINTS
    } else {
        size * SMALL_COMBINATION_POINTS
    }
}

/// The match engine. Owns the grid and resolves each tap synchronously,
/// returning the observable effects in order. Not reentrant; one tap runs
/// to completion before the next is accepted.
pub struct BlastGameState {
    grid: Grid,
    settings: BlastSettings,
    score: u32,
    moves_left: u32,
    status: GameStatus,
}

impl BlastGameState {
    /// Fills the board with uniformly random colored tiles. The fresh board
    /// is not deadlock-checked here; the session runs `reshuffle_if_needed`
    /// once before the first tap.
    pub fn new(settings: &BlastSettings, rng: &mut SessionRng) -> Self {
        let grid = Grid::new_random(settings.height, settings.width, settings.colors_count, rng);
        Self {
            grid,
            settings: settings.clone(),
            score: 0,
            moves_left: settings.moves_count,
            status: GameStatus::InProgress,
        }
    }

    /// Resolves a player's tap: selection, activation check, removal,
    /// gravity, refill, super promotion, anti-deadlock reshuffle, win/loss.
    /// A tap that does not activate is a no-op with no events; a tap after
    /// the game ended is likewise a no-op. Out-of-bounds taps are rejected.
    pub fn tap_tile(
        &mut self,
        position: Position,
        rng: &mut SessionRng,
    ) -> Result<Vec<GameEvent>, String> {
        if !self.grid.in_bounds(position) {
            return Err(format!(
                "Tap out of bounds: ({}, {}) on a {}x{} field",
                position.row, position.column, self.settings.height, self.settings.width
            ));
        }
        if self.status != GameStatus::InProgress {
            return Ok(Vec::new());
        }

        let Some(tapped) = self.grid.tile_at(position) else {
            debug_assert!(false, "empty cell between resolutions");
            return Ok(Vec::new());
        };

        let selection = match tapped {
            Tile::Super => self
                .grid
                .super_selection(position, self.settings.super_tile_radius),
            Tile::Color(_) => self.grid.flood_fill(position),
        };

        // A lone Super always activates, however small its area.
        if !tapped.is_super() && selection.len() < self.settings.min_combination_count {
            return Ok(Vec::new());
        }

        let mut events = Vec::new();

        self.moves_left = self.moves_left.saturating_sub(1);
        self.score += score_for(selection.len());

        for &removed in &selection {
            self.grid.clear_tile(removed);
            events.push(GameEvent::TileRemoved(removed));
        }

        for destination in self.grid.fall_tiles() {
            events.push(GameEvent::TileFell(destination));
        }

        self.grid.refill(self.settings.colors_count, rng);
        events.push(GameEvent::CascadeSettled);
        debug_assert!(self.grid.is_full(), "empty cell survived cascade settlement");

        if !tapped.is_super() && selection.len() >= self.settings.super_tile_activate_threshold {
            self.grid.set_tile(position, Tile::Super);
            events.push(GameEvent::SuperTileCreated(position));
        }

        events.extend(self.reshuffle_if_needed(rng));

        // Reshuffle exhaustion already ended the game; otherwise check
        // termination, win before loss.
        if self.status == GameStatus::InProgress {
            if self.score >= self.settings.score_goal {
                self.status = GameStatus::Won;
                events.push(GameEvent::GameOver(GameResult::Win));
            } else if self.moves_left == 0 {
                self.status = GameStatus::Lost;
                events.push(GameEvent::GameOver(GameResult::Loss));
            }
        }

        Ok(events)
    }

    /// Reshuffles until a move exists, bounded by `max_reshuffle_count`.
    /// Emits `BoardReshuffled` iff at least one reshuffle ran; declares a
    /// Loss if the budget is exhausted with the board still dead.
    pub fn reshuffle_if_needed(&mut self, rng: &mut SessionRng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let mut reshuffles = 0;
        let mut movable = self.grid.move_exists(self.settings.min_combination_count);

        while !movable && reshuffles < self.settings.max_reshuffle_count {
            self.grid.reshuffle(rng);
            reshuffles += 1;
            movable = self.grid.move_exists(self.settings.min_combination_count);
        }

        if reshuffles > 0 {
            events.push(GameEvent::BoardReshuffled);
        }
        if !movable {
            self.status = GameStatus::Lost;
            events.push(GameEvent::GameOver(GameResult::Loss));
        }
        events
    }

    /// Read-only board copy for collaborators.
    pub fn tiles(&self) -> Vec<Vec<Option<Tile>>> {
        self.grid.snapshot()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn height(&self) -> usize {
        self.settings.height
    }

    pub fn width(&self) -> usize {
        self.settings.width
    }

    #[cfg(test)]
    fn set_cells(&mut self, cells: Vec<Option<Tile>>) {
        self.grid.set_cells(cells);
    }
}
