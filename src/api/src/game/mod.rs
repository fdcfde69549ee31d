pub mod board;
pub mod conversion;
pub mod rack;
pub mod scoring;
pub mod session;
pub mod tiles;

pub use board::{Board, Bonus, Square};
pub use conversion::*;
pub use rack::Rack;
pub use scoring::{compute_score, ScoredTile, Scorer};
pub use session::{GameSession, Phase, Status, StatusKind};
pub use tiles::{TileBag, TileDefinition};
