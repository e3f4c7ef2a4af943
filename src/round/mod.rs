//! The round engine: slots, tiles, and per-round rules.
//!
//! One [`RoundState`] exists at a time; the session engine deals a new one
//! after each correct answer and resets the current one after a wrong
//! answer. All mutation goes through the methods here, which enforce the
//! lock held during judgment.

pub mod slot;
pub mod state;
pub mod tile;

pub use slot::Slot;
pub use state::RoundState;
pub use tile::{Tile, TileId, TileIdAlloc, TileState};
