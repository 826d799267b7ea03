//! # life-tile
//!
//! Game-state engine for Life Tile, a turn-based grid-tiling game.
//!
//! Players alternately claim axis-aligned rectangles of empty cells on a
//! small grid seeded with a handful of blocked cells. The player forced to
//! fill the last empty cell loses the round and forfeits their round score;
//! everyone else banks theirs. Rounds repeat with a rotating first player
//! and cumulative scoring.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: rendering, input mapping, and layout live in a
//!    presentation layer that calls into this crate and draws snapshots.
//!    The engine never reads ambient state; every input is a parameter.
//!
//! 2. **Value semantics**: every operation takes a [`RoundState`] snapshot
//!    and returns a new one (or a typed error). Consecutive snapshots share
//!    no mutable structure, so a caller can hold the old and new state at
//!    once without aliasing. Backed by `im` persistent data structures so
//!    the copy at the commit boundary is cheap.
//!
//! 3. **N-Player**: turn advancement is modular over the player count.
//!    Nothing assumes two players, even though the reference game is 1v1.
//!
//! 4. **Deterministic**: obstacle seeding draws from a seeded ChaCha8 RNG
//!    carried in the state, so a whole session replays from one seed.
//!
//! ## Modules
//!
//! - `core`: players and scores, rectangles, the grid, RNG, configuration,
//!   claim history records
//! - `engine`: `RoundState` and the round operations (initialize, validate
//!   selection, commit, start next round) plus the error taxonomy

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Cell, Claim, GameRng, GameRngState, Grid, PlayerId, PlayerMap, PlayerScore, Rect, RoundConfig,
};

pub use crate::engine::{EngineError, RoundState};
