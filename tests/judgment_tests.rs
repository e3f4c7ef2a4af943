//! Judgment state machine integration tests.
//!
//! These tests drive full sessions through `SpellingGame`: completing the
//! last slot triggers judgment, correct answers cheer and advance, wrong
//! answers cry and retry, and a finished game stays finished.

use std::time::Duration;

use kingdom_spellers::{
    EngineEvent, GameConfig, Mood, SpellingGame, TileId, UndoPolicy, WordBank,
};

fn new_game(words: &[(&str, &str)], config: GameConfig) -> SpellingGame {
    SpellingGame::new(WordBank::from_entries(words), config, 42)
}

/// Fill every blank with the right letter; the last placement judges.
fn solve_round(game: &mut SpellingGame) {
    while let Some(slot_idx) = game.round().first_empty() {
        let want = game.current_word().chars().nth(slot_idx).unwrap();
        let id = game
            .round()
            .tiles()
            .iter()
            .find(|t| t.state.is_available() && t.letter == want)
            .map(|t| t.id)
            .expect("a tile for every hidden letter");
        assert!(game.place_tile(id));
    }
}

/// Fill the first blank with a wrong letter and the rest with anything;
/// the last placement judges.
fn flub_round(game: &mut SpellingGame) {
    let slot_idx = game.round().first_empty().expect("an unfilled round");
    let right = game.current_word().chars().nth(slot_idx).unwrap();
    let wrong = game
        .round()
        .tiles()
        .iter()
        .find(|t| t.state.is_available() && t.letter != right)
        .map(|t| t.id)
        .expect("decoys guarantee a wrong letter");
    assert!(game.place_tile(wrong));

    while game.round().first_empty().is_some() {
        let id = game
            .round()
            .tiles()
            .iter()
            .find(|t| t.state.is_available())
            .map(|t| t.id)
            .expect("enough tiles to fill the board");
        assert!(game.place_tile(id));
    }
}

// =============================================================================
// Correct Judgment
// =============================================================================

/// Test that a correct spelling awards XP, cheers, and locks the round.
#[test]
fn test_correct_awards_xp_and_cheers() {
    let mut game = new_game(&[("cat", "a small furry pet")], GameConfig::default());
    game.take_events();

    solve_round(&mut game);

    assert_eq!(game.xp(), 10);
    assert_eq!(game.lives(), 3);
    assert_eq!(game.mood(), Mood::Cheer);
    assert!(game.is_locked());
    assert_eq!(game.pending_transitions(), 1);

    let events = game.take_events();
    assert!(events.contains(&EngineEvent::Correct { xp: 10 }));
}

/// Test that judgment emits exactly one verdict per completion.
#[test]
fn test_judgment_fires_once_per_completion() {
    let mut game = new_game(&[("cat", "a small furry pet")], GameConfig::default());
    game.take_events();

    solve_round(&mut game);

    let verdicts = game
        .take_events()
        .iter()
        .filter(|e| matches!(e, EngineEvent::Correct { .. } | EngineEvent::Incorrect { .. }))
        .count();
    assert_eq!(verdicts, 1);
}

/// Test that the verdict event comes after the placement that caused it.
#[test]
fn test_verdict_follows_final_placement() {
    let mut game = new_game(&[("cat", "a small furry pet")], GameConfig::default());
    game.take_events();

    solve_round(&mut game);

    let events = game.take_events();
    let placed = events
        .iter()
        .rposition(|e| matches!(e, EngineEvent::TilePlaced { .. }))
        .unwrap();
    let verdict = events
        .iter()
        .position(|e| matches!(e, EngineEvent::Correct { .. }))
        .unwrap();
    assert!(verdict > placed);
}

/// Test that the next round deals only after the configured pause.
#[test]
fn test_next_round_deals_after_delay() {
    let mut game = new_game(
        &[("sun", "the bright star"), ("map", "a drawing of a place")],
        GameConfig::default(),
    );
    let first_word = game.current_word().to_string();

    solve_round(&mut game);
    game.take_events();

    // One millisecond short: still locked on the solved round.
    game.tick(Duration::from_millis(999));
    assert!(game.is_locked());
    assert_eq!(game.current_word(), first_word);
    assert!(game.take_events().is_empty());

    // The boundary fires.
    game.tick(Duration::from_millis(1));
    assert!(!game.is_locked());
    assert_ne!(game.current_word(), first_word);
    assert_eq!(game.mood(), Mood::Idle);

    let events = game.take_events();
    assert!(events.contains(&EngineEvent::RoundDealt {
        blanks: game.round().blanks_remaining(),
        tiles: game.round().tiles().len(),
    }));
}

// =============================================================================
// Wrong Judgment
// =============================================================================

/// Test that a wrong spelling costs a life, cries, and locks the round.
#[test]
fn test_wrong_costs_life_and_cries() {
    let mut game = new_game(&[("cat", "a small furry pet")], GameConfig::default());
    game.take_events();

    flub_round(&mut game);

    assert_eq!(game.xp(), 0);
    assert_eq!(game.lives(), 2);
    assert_eq!(game.mood(), Mood::Cry);
    assert!(game.is_locked());
    assert!(!game.is_game_over());
    assert_eq!(game.pending_transitions(), 1);

    let events = game.take_events();
    assert!(events.contains(&EngineEvent::Incorrect { lives_left: 2 }));
}

/// Test that the retry clears the player's tiles but keeps the hints
/// and tile identities.
#[test]
fn test_retry_restores_the_board() {
    // A six-letter word at tier 1 deals four hints and two blanks.
    let mut game = new_game(&[("castle", "a big stone home")], GameConfig::default());
    let slots_before = game.round().slots().to_vec();
    let tile_ids_before: Vec<TileId> = game.round().tiles().iter().map(|t| t.id).collect();

    flub_round(&mut game);
    game.take_events();
    game.tick(Duration::from_millis(700));

    assert!(!game.is_locked());
    assert_eq!(game.mood(), Mood::Idle);
    assert_eq!(game.round().slots(), slots_before.as_slice());
    let tile_ids_after: Vec<TileId> = game.round().tiles().iter().map(|t| t.id).collect();
    assert_eq!(tile_ids_after, tile_ids_before);
    assert!(game.round().tiles().iter().all(|t| t.state.is_available()));
    assert!(game.take_events().contains(&EngineEvent::RoundReset));
}

/// Test that the same word can be solved on the retry.
#[test]
fn test_retry_then_solve_succeeds() {
    let mut game = new_game(&[("cat", "a small furry pet")], GameConfig::default());

    flub_round(&mut game);
    game.tick(Duration::from_millis(700));
    solve_round(&mut game);

    assert_eq!(game.xp(), 10);
    assert_eq!(game.lives(), 2);
    assert_eq!(game.mood(), Mood::Cheer);
}

/// Test that the retry pause honors the configured duration.
#[test]
fn test_retry_waits_for_wrong_delay() {
    let config = GameConfig::default().with_wrong_delay(Duration::from_millis(300));
    let mut game = new_game(&[("cat", "a small furry pet")], config);

    flub_round(&mut game);

    game.tick(Duration::from_millis(299));
    assert!(game.is_locked());
    game.tick(Duration::from_millis(1));
    assert!(!game.is_locked());
}

// =============================================================================
// Input Lock
// =============================================================================

/// Test that every input path is dropped while judgment holds the round.
#[test]
fn test_locked_round_drops_all_input() {
    let mut game = new_game(&[("cat", "a small furry pet")], GameConfig::default());
    solve_round(&mut game);
    game.take_events();

    let someone = game.round().tiles()[0].id;
    assert!(!game.place_tile(someone));
    assert!(!game.tap_tile(someone));
    assert!(!game.clear_slot(0));
    assert!(!game.undo_last());
    assert!(game.take_events().is_empty());
    assert_eq!(game.xp(), 10);
}

/// Test that undo-last is also held by the judgment lock.
#[test]
fn test_undo_last_dropped_while_locked() {
    let config = GameConfig::default().with_undo_policy(UndoPolicy::UndoLast);
    let mut game = new_game(&[("cat", "a small furry pet")], config);
    solve_round(&mut game);

    assert!(game.is_locked());
    assert!(!game.undo_last());
    assert!(game.round().is_complete());
}

// =============================================================================
// Game Over
// =============================================================================

/// Test that losing the last life ends the game immediately.
#[test]
fn test_last_life_ends_the_game() {
    let config = GameConfig::default().with_starting_lives(1);
    let mut game = new_game(&[("cat", "a small furry pet")], config);
    game.take_events();

    flub_round(&mut game);

    assert_eq!(game.lives(), 0);
    assert!(game.is_game_over());
    assert_eq!(game.mood(), Mood::Cry);

    let events = game.take_events();
    assert!(events.contains(&EngineEvent::Incorrect { lives_left: 0 }));
    assert!(events.contains(&EngineEvent::GameOver));
}

/// Test that the retry pause expiring after game over changes nothing.
#[test]
fn test_delayed_retry_never_revives_a_finished_game() {
    let config = GameConfig::default().with_starting_lives(1);
    let mut game = new_game(&[("cat", "a small furry pet")], config);

    flub_round(&mut game);
    game.take_events();

    game.tick(Duration::from_secs(10));

    assert!(game.is_game_over());
    assert!(game.is_locked());
    assert_eq!(game.mood(), Mood::Cry);
    assert!(game.take_events().is_empty());
}

/// Test that player input is dropped once the game is over.
#[test]
fn test_input_dropped_after_game_over() {
    let config = GameConfig::default().with_starting_lives(1);
    let mut game = new_game(&[("cat", "a small furry pet")], config);
    flub_round(&mut game);
    game.tick(Duration::from_secs(10));
    game.take_events();

    let someone = game.round().tiles()[0].id;
    assert!(!game.tap_tile(someone));
    assert!(!game.place_tile(someone));
    assert!(!game.clear_slot(0));
    assert!(game.take_events().is_empty());
}

/// Test that two lives survive one mistake.
#[test]
fn test_lives_count_down_one_per_mistake() {
    let config = GameConfig::default().with_starting_lives(2);
    let mut game = new_game(&[("cat", "a small furry pet")], config);

    flub_round(&mut game);
    assert_eq!(game.lives(), 1);
    assert!(!game.is_game_over());

    game.tick(Duration::from_millis(700));
    flub_round(&mut game);
    assert_eq!(game.lives(), 0);
    assert!(game.is_game_over());
}

// =============================================================================
// Undo Policies
// =============================================================================

/// Test that the toggle policy returns the very same tile to the pool.
#[test]
fn test_toggle_policy_returns_same_tile() {
    let mut game = new_game(&[("castle", "a big stone home")], GameConfig::default());
    game.take_events();

    let id = game.round().tiles()[0].id;
    assert!(game.tap_tile(id));
    let slot = game.round().tile(id).unwrap().state.slot().unwrap();

    assert!(game.tap_tile(id));
    assert!(game.round().tile(id).unwrap().state.is_available());

    let events = game.take_events();
    assert!(events.contains(&EngineEvent::TilePlaced { tile: id, slot }));
    assert!(events.contains(&EngineEvent::TileReturned { tile: id, slot }));
}

/// Test that undo-last is rejected under the toggle policy.
#[test]
fn test_toggle_policy_rejects_undo_last() {
    let mut game = new_game(&[("castle", "a big stone home")], GameConfig::default());

    let id = game.round().tiles()[0].id;
    assert!(game.tap_tile(id));
    assert!(!game.undo_last());
    // The tile stays placed.
    assert!(game.round().tile(id).unwrap().state.slot().is_some());
}

/// Test that undo-last pops the most recent placement as a fresh tile.
#[test]
fn test_undo_last_policy_mints_fresh_tile() {
    let config = GameConfig::default().with_undo_policy(UndoPolicy::UndoLast);
    // Nine letters at tier 1 leave three blanks, room for two placements.
    let mut game = new_game(&[("adventure", "a long brave journey")], config);
    game.take_events();

    let dealt: Vec<TileId> = game.round().tiles().iter().map(|t| t.id).collect();
    let first = game
        .round()
        .tiles()
        .iter()
        .find(|t| t.state.is_available())
        .map(|t| t.id)
        .unwrap();
    assert!(game.place_tile(first));
    let second = game
        .round()
        .tiles()
        .iter()
        .find(|t| t.state.is_available())
        .map(|t| t.id)
        .unwrap();
    assert!(game.place_tile(second));

    assert!(game.undo_last());

    // The popped letter is back under a brand-new identity; the first
    // placement is untouched.
    assert!(game.round().tile(second).is_none());
    assert!(game.round().tile(first).unwrap().state.slot().is_some());
    let fresh: Vec<TileId> = game
        .round()
        .tiles()
        .iter()
        .map(|t| t.id)
        .filter(|id| !dealt.contains(id))
        .collect();
    assert_eq!(fresh.len(), 1);
    assert_eq!(game.round().tiles().len(), dealt.len());
}

/// Test that slot clearing and tap-to-remove are rejected under undo-last.
#[test]
fn test_undo_last_policy_rejects_clear_and_toggle() {
    let config = GameConfig::default().with_undo_policy(UndoPolicy::UndoLast);
    let mut game = new_game(&[("adventure", "a long brave journey")], config);

    let id = game.round().tiles()[0].id;
    assert!(game.tap_tile(id));
    let slot = game.round().tile(id).unwrap().state.slot().unwrap();

    assert!(!game.clear_slot(slot));
    assert!(!game.tap_tile(id));
    assert!(game.round().tile(id).unwrap().state.slot().is_some());
}

// =============================================================================
// Mood
// =============================================================================

/// Test that the mood tracks the full judge-retry-advance cycle.
#[test]
fn test_mood_follows_the_round() {
    let mut game = new_game(&[("cat", "a small furry pet")], GameConfig::default());
    assert_eq!(game.mood(), Mood::Idle);

    flub_round(&mut game);
    assert_eq!(game.mood(), Mood::Cry);

    game.tick(Duration::from_millis(700));
    assert_eq!(game.mood(), Mood::Idle);

    solve_round(&mut game);
    assert_eq!(game.mood(), Mood::Cheer);

    game.tick(Duration::from_millis(1000));
    assert_eq!(game.mood(), Mood::Idle);
}
