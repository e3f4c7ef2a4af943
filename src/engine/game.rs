//! The session engine: one full game from first deal to game over.
//!
//! [`SpellingGame`] wires the round engine, the progression policy, the
//! virtual-time scheduler, and the event queue into a single entry point.
//! Hosts call the mutating methods for player input, [`SpellingGame::tick`]
//! with elapsed time, and read back [`SpellingGame::snapshot`] plus the
//! drained events to render.
//!
//! ```
//! use kingdom_spellers::{GameConfig, SpellingGame, WordBank};
//!
//! let bank = WordBank::from_entries(&[("cat", "a small furry pet")]);
//! let mut game = SpellingGame::new(bank, GameConfig::default(), 42);
//!
//! // Tap the first pool tile; it lands in the leftmost blank.
//! let id = game.round().tiles()[0].id;
//! game.tap_tile(id);
//! ```

use std::time::Duration;

use crate::core::{GameConfig, GameRng, UndoPolicy, WordBank};
use crate::progression::{ProgressionState, Rank};
use crate::round::{RoundState, TileId, TileIdAlloc, TileState};

use super::snapshot::{SlotView, TileView};
use super::{EngineEvent, Mood, Scheduler, Snapshot, Speaker, Transition};

/// A complete single-player spelling session.
pub struct SpellingGame {
    config: GameConfig,
    bank: WordBank,
    rng: GameRng,
    progression: ProgressionState,
    round: RoundState,
    scheduler: Scheduler,
    tile_ids: TileIdAlloc,
    mood: Mood,
    events: Vec<EngineEvent>,
    speaker: Option<Box<dyn Speaker>>,
}

impl SpellingGame {
    /// Start a session over `bank` with the given rules and seed.
    ///
    /// The same bank, config, and seed always produce the same session.
    ///
    /// # Panics
    ///
    /// Panics if the bank is empty.
    #[must_use]
    pub fn new(bank: WordBank, config: GameConfig, seed: u64) -> Self {
        assert!(!bank.is_empty(), "Word bank must not be empty");

        let mut rng = GameRng::new(seed);
        let mut tile_ids = TileIdAlloc::new();
        let progression = ProgressionState::new(&bank, config.starting_lives, &mut rng);
        let word = progression.current_word().to_string();
        let definition = bank.definition_or_stock(&word).to_string();
        let round = RoundState::deal(
            &word,
            &definition,
            progression.tier(),
            &mut tile_ids,
            &mut rng,
        );

        let mut game = Self {
            config,
            bank,
            rng,
            progression,
            round,
            scheduler: Scheduler::new(),
            tile_ids,
            mood: Mood::Idle,
            events: Vec::new(),
            speaker: None,
        };
        game.emit_round_dealt();
        game
    }

    /// Start a session with a seed drawn from system entropy.
    ///
    /// The seed is readable back through [`SpellingGame::seed`] for replay.
    #[must_use]
    pub fn from_entropy(bank: WordBank, config: GameConfig) -> Self {
        Self::new(bank, config, rand::random())
    }

    /// Attach a speaker for word pronunciation.
    #[must_use]
    pub fn with_speaker(mut self, speaker: Box<dyn Speaker>) -> Self {
        self.speaker = Some(speaker);
        self
    }

    // === Player input ===

    /// Place an available tile into the first empty slot.
    ///
    /// Filling the last slot triggers judgment immediately. Returns `false`
    /// if the input was dropped (locked round, finished game, unknown or
    /// already-placed tile).
    pub fn place_tile(&mut self, id: TileId) -> bool {
        if self.progression.is_game_over() {
            return false;
        }
        match self.round.place_tile(id) {
            Some(slot) => {
                self.events.push(EngineEvent::TilePlaced { tile: id, slot });
                if self.round.needs_judgment() {
                    self.judge();
                }
                true
            }
            None => false,
        }
    }

    /// Tap a tile: place it if it is in the pool, or (under
    /// [`UndoPolicy::ToggleTile`]) return it to the pool if it is placed.
    pub fn tap_tile(&mut self, id: TileId) -> bool {
        if self.progression.is_game_over() {
            return false;
        }
        let state = match self.round.tile(id) {
            Some(tile) => tile.state,
            None => return false,
        };
        match state {
            TileState::Available => self.place_tile(id),
            TileState::Placed(slot) => match self.config.undo_policy {
                UndoPolicy::ToggleTile => self.clear_slot(slot),
                UndoPolicy::UndoLast => false,
            },
        }
    }

    /// Return the tile in `slot` to the pool.
    ///
    /// Only available under [`UndoPolicy::ToggleTile`].
    pub fn clear_slot(&mut self, slot: usize) -> bool {
        if self.progression.is_game_over() || self.config.undo_policy != UndoPolicy::ToggleTile {
            return false;
        }
        match self.round.clear_slot(slot) {
            Some(tile) => {
                self.events.push(EngineEvent::TileReturned { tile, slot });
                true
            }
            None => false,
        }
    }

    /// Pop the most recent placement, minting a fresh tile for the letter.
    ///
    /// Only available under [`UndoPolicy::UndoLast`].
    pub fn undo_last(&mut self) -> bool {
        if self.progression.is_game_over() || self.config.undo_policy != UndoPolicy::UndoLast {
            return false;
        }
        match self.round.undo_last(&mut self.tile_ids) {
            Some((slot, tile)) => {
                self.events.push(EngineEvent::TileReturned { tile, slot });
                true
            }
            None => false,
        }
    }

    // === Judgment ===

    fn judge(&mut self) {
        self.round.begin_judgment();
        let correct = self.round.formed_word().as_deref() == Some(self.round.word());
        if correct {
            self.on_correct();
        } else {
            self.on_wrong();
        }
    }

    fn on_correct(&mut self) {
        let xp = self.config.xp_per_word;
        self.progression.award_xp(xp);
        self.mood = Mood::Cheer;
        self.events.push(EngineEvent::Correct { xp });
        self.scheduler
            .schedule_after(self.config.correct_delay, Transition::AdvanceRound);
    }

    fn on_wrong(&mut self) {
        self.mood = Mood::Cry;
        let lives_left = self.progression.lose_life();
        self.events.push(EngineEvent::Incorrect { lives_left });
        if self.progression.is_game_over() {
            self.events.push(EngineEvent::GameOver);
        }
        // Scheduled even at game over; it re-checks when it fires and
        // leaves a finished session locked.
        self.scheduler
            .schedule_after(self.config.wrong_delay, Transition::RetryRound);
    }

    // === Time ===

    /// Report elapsed time and apply every transition that came due.
    pub fn tick(&mut self, elapsed: Duration) {
        for transition in self.scheduler.advance(elapsed) {
            self.apply_transition(transition);
        }
    }

    fn apply_transition(&mut self, transition: Transition) {
        // A transition that comes due after lives ran out must not revive
        // the session.
        if self.progression.is_game_over() {
            return;
        }
        match transition {
            Transition::AdvanceRound => {
                let tier_before = self.progression.tier();
                self.progression
                    .advance(&self.bank, self.config.max_tier, &mut self.rng);
                if self.progression.tier() != tier_before {
                    self.events.push(EngineEvent::TierAdvanced {
                        tier: self.progression.tier(),
                    });
                }
                self.deal_round();
            }
            Transition::RetryRound => {
                self.round.reset_for_retry();
                self.mood = Mood::Idle;
                self.events.push(EngineEvent::RoundReset);
            }
        }
    }

    // === Session control ===

    /// Throw the session away and start over on the same bank: fresh word
    /// order, full lives, tier 1, nothing pending.
    pub fn restart(&mut self) {
        self.scheduler.clear();
        self.progression =
            ProgressionState::new(&self.bank, self.config.starting_lives, &mut self.rng);
        self.events.push(EngineEvent::Restarted);
        self.deal_round();
    }

    /// Swap in a different word bank and start over on it.
    ///
    /// # Panics
    ///
    /// Panics if the bank is empty.
    pub fn switch_bank(&mut self, bank: WordBank) {
        assert!(!bank.is_empty(), "Word bank must not be empty");
        self.bank = bank;
        self.scheduler.clear();
        self.progression =
            ProgressionState::new(&self.bank, self.config.starting_lives, &mut self.rng);
        self.events.push(EngineEvent::BankSwitched);
        self.deal_round();
    }

    fn deal_round(&mut self) {
        let word = self.progression.current_word().to_string();
        let definition = self.bank.definition_or_stock(&word).to_string();
        self.round = RoundState::deal(
            &word,
            &definition,
            self.progression.tier(),
            &mut self.tile_ids,
            &mut self.rng,
        );
        self.mood = Mood::Idle;
        self.emit_round_dealt();
    }

    fn emit_round_dealt(&mut self) {
        self.events.push(EngineEvent::RoundDealt {
            blanks: self.round.blanks_remaining(),
            tiles: self.round.tiles().len(),
        });
    }

    // === Output ===

    /// Hand the current answer word to the attached speaker, if any.
    pub fn speak_word(&self) {
        if let Some(speaker) = &self.speaker {
            speaker.speak(self.round.word());
        }
    }

    /// Render-ready view of the whole session. Hides the answer word.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            slots: self
                .round
                .slots()
                .iter()
                .map(|&s| SlotView::from(s))
                .collect(),
            tiles: self.round.tiles().iter().map(TileView::from).collect(),
            definition: self.round.definition().to_string(),
            xp: self.progression.xp(),
            lives: self.progression.lives(),
            rank: self.progression.rank(),
            tier: self.progression.tier(),
            mood: self.mood,
            locked: self.round.is_locked() || self.progression.is_game_over(),
            game_over: self.progression.is_game_over(),
        }
    }

    /// Drain the event queue.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// Peek at queued events without draining them.
    #[must_use]
    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    // === Accessors ===

    /// The live round.
    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// The answer word of the live round.
    #[must_use]
    pub fn current_word(&self) -> &str {
        self.round.word()
    }

    /// The seed this session was started with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The rules this session runs under.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The bank this session draws from.
    #[must_use]
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Accumulated XP.
    #[must_use]
    pub fn xp(&self) -> u32 {
        self.progression.xp()
    }

    /// Lives remaining.
    #[must_use]
    pub fn lives(&self) -> u32 {
        self.progression.lives()
    }

    /// Current difficulty tier.
    #[must_use]
    pub fn tier(&self) -> u32 {
        self.progression.tier()
    }

    /// Rank implied by the current XP.
    #[must_use]
    pub fn rank(&self) -> Rank {
        self.progression.rank()
    }

    /// Current mascot mood.
    #[must_use]
    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// True once lives have run out.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.progression.is_game_over()
    }

    /// True while judgment (or game over) is holding input.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.round.is_locked()
    }

    /// Number of transitions waiting on the scheduler.
    #[must_use]
    pub fn pending_transitions(&self) -> usize {
        self.scheduler.pending_count()
    }
}
