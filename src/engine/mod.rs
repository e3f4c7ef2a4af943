//! The session engine: game loop, events, time, snapshots, speech.

pub mod event;
pub mod game;
pub mod scheduler;
pub mod snapshot;
pub mod speech;

pub use event::{EngineEvent, Mood};
pub use game::SpellingGame;
pub use scheduler::{Scheduler, Transition};
pub use snapshot::{Snapshot, SlotView, TileView};
pub use speech::{NullSpeaker, Speaker};
