mod game_state;
mod grid;
mod session;
mod session_rng;
mod settings;
mod types;

pub use game_state::{BlastGameState, score_for};
pub use grid::Grid;
pub use session::BlastSession;
pub use session_rng::SessionRng;
pub use settings::BlastSettings;
pub use types::{GameEvent, GameResult, GameStatus, Position, Tile};
