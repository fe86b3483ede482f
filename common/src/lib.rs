pub mod config;
pub mod error;
pub mod logger;
pub mod session_rng;
pub mod tictactoe;

pub use error::EngineError;
pub use session_rng::SessionRng;
