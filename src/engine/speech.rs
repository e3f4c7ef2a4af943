//! Word pronunciation hook.
//!
//! The engine never talks to an audio device; hosts plug in a [`Speaker`]
//! and the engine hands it the current answer word when asked. Sessions
//! without audio use [`NullSpeaker`].

/// Pronounces words for the player.
pub trait Speaker {
    /// Speak `text` aloud. Implementations decide voice, rate, and
    /// whether to queue or interrupt.
    fn speak(&self, text: &str);
}

/// A speaker that stays silent.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn speak(&self, _text: &str) {}
}
