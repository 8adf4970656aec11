pub mod config;
pub mod game;
pub mod logger;

pub use game::{BlastGameState, BlastSession, BlastSettings, GameEvent, GameResult, GameStatus, Position, Tile};
