use super::game_state::BlastGameState;
use super::session_rng::SessionRng;
use super::settings::BlastSettings;
use super::types::{GameEvent, Position};

/// Bundles validated settings, the engine state, and the session RNG.
/// Construction runs the pre-game deadlock check so the first board
/// handed to the player is guaranteed playable (or the session is already
/// declared lost, for settings no reshuffle can save).
pub struct BlastSession {
    state: BlastGameState,
    rng: SessionRng,
}

impl BlastSession {
    pub fn create(settings: &BlastSettings, seed: u64) -> Result<(Self, Vec<GameEvent>), String> {
        settings.validate()?;

        let mut rng = SessionRng::new(seed);
        let mut state = BlastGameState::new(settings, &mut rng);
        let opening_events = state.reshuffle_if_needed(&mut rng);

        Ok((Self { state, rng }, opening_events))
    }

    pub fn tap(&mut self, position: Position) -> Result<Vec<GameEvent>, String> {
        self.state.tap_tile(position, &mut self.rng)
    }

    pub fn state(&self) -> &BlastGameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
