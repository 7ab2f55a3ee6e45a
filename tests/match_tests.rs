//! Full matches driven by the built-in strategies.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{init_logger, pool};
use rust_codenames::board::BoardData;
use rust_codenames::core::{GameConfig, GameError, GameRng, Seat, Team};
use rust_codenames::rules::{Game, GameBuilder, MatchRunner, MatchState, Player};
use rust_codenames::strategy::StrategyKind;

fn players(kind: StrategyKind, seed: u64) -> Vec<Player> {
    let mut rng = GameRng::new(seed);
    Team::ALL
        .into_iter()
        .flat_map(|team| [Seat::operative(team), Seat::spymaster(team)])
        .map(|seat| Player::boxed(seat, kind.build(seat.role, rng.fork())))
        .collect()
}

// =============================================================================
// Complete Matches
// =============================================================================

#[test]
fn test_smart_match_finishes() {
    init_logger();
    let mut game = GameBuilder::new(7).build_from_source(&mut pool(7, 40)).unwrap();
    let report = MatchRunner::new().run(&mut game).unwrap();

    assert!(report.outcome.is_decided());
    assert!(!report.is_abandoned());
    let winner = report.outcome.winner().unwrap();
    if !game.state().hazard_revealed() {
        assert_eq!(report.revealed[winner], game.state().target(winner));
    }
    assert_eq!(report.rounds, game.round());
}

#[test]
fn test_random_match_finishes() {
    init_logger();
    for seed in 0..10 {
        let mut game = GameBuilder::new(seed)
            .with_strategy(Team::Red, StrategyKind::Random)
            .with_strategy(Team::Blue, StrategyKind::Random)
            .build_from_source(&mut pool(seed, 30))
            .unwrap();
        let report = MatchRunner::new().run(&mut game).unwrap();
        assert!(report.outcome.is_decided(), "seed {seed} undecided");
        for team in Team::ALL {
            assert!(report.revealed[team] <= game.state().target(team));
        }
    }
}

#[test]
fn test_same_seed_same_match() {
    let play = |seed| {
        let mut game = GameBuilder::new(seed).build_from_source(&mut pool(seed, 50)).unwrap();
        let report = MatchRunner::new().run(&mut game).unwrap();
        (report, game.snapshot())
    };

    let (report_a, state_a) = play(21);
    let (report_b, state_b) = play(21);
    assert_eq!(report_a, report_b);
    assert_eq!(state_a, state_b);
}

#[test]
fn test_runner_turn_limit() {
    let mut game = GameBuilder::new(1).build_from_source(&mut pool(1, 30)).unwrap();
    let report = MatchRunner::new().with_max_turns(2).run(&mut game).unwrap();

    assert!(report.is_abandoned());
    assert_eq!(report.sub_turns, 2);
    // spymaster then operative
    assert_eq!(game.current_seat().role, rust_codenames::core::Role::Spymaster);
    assert_eq!(game.current_seat().team, game.state().starting_team().opponent());
}

/// Standard board where w8 (red) and w16 (blue) have no candidate clues.
fn data_with_unclued_entries() -> BoardData {
    common::words()
        .into_iter()
        .filter(|w| w != "w8" && w != "w16")
        .fold(common::standard_data(), |data, w| {
            let hint = format!("{w}-hint");
            data.with_clues(&w, [hint])
        })
}

#[test]
fn test_unclued_entries_still_finish() {
    init_logger();
    let data = data_with_unclued_entries();
    for seed in 0..20 {
        let mut game = GameBuilder::new(seed).build(&data).unwrap();
        let report = MatchRunner::new().run(&mut game).unwrap();
        assert!(report.outcome.is_decided(), "seed {seed} undecided");
        assert!(!report.is_abandoned());
    }
}

#[test]
fn test_unclued_entries_random_spymasters() {
    init_logger();
    let data = data_with_unclued_entries();
    for seed in 0..10 {
        let mut game = GameBuilder::new(seed)
            .with_seat(Seat::spymaster(Team::Red), StrategyKind::Random)
            .with_seat(Seat::spymaster(Team::Blue), StrategyKind::Random)
            .build(&data)
            .unwrap();
        let report = MatchRunner::new().run(&mut game).unwrap();
        assert!(report.outcome.is_decided(), "seed {seed} undecided");
    }
}

// =============================================================================
// Notifications
// =============================================================================

#[test]
fn test_notifications_in_order() {
    let mut game = GameBuilder::new(4).build_from_source(&mut pool(4, 30)).unwrap();
    let starting = game.state().starting_team();
    let log = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&log);
    game.on_phase_changed(move |label| sink.borrow_mut().push(format!("phase {label}")));
    let sink = Rc::clone(&log);
    game.on_clue_given(move |clue| sink.borrow_mut().push(format!("clue {}", clue.word())));
    let sink = Rc::clone(&log);
    game.on_round_changed(move |round| sink.borrow_mut().push(format!("round {round}")));

    for _ in 0..4 {
        if game.outcome().is_decided() {
            return;
        }
        game.enter_next_game_turn().unwrap();
    }

    let log = log.borrow();
    let phases: Vec<&String> = log.iter().filter(|l| l.starts_with("phase")).collect();
    assert_eq!(phases[0], &format!("phase {starting} Spymaster"));
    assert_eq!(phases[1], &format!("phase {starting} Operative"));
    assert!(log[1].starts_with("clue "));
    assert_eq!(log.last().unwrap(), "round 2");
    assert_eq!(log.iter().filter(|l| l.starts_with("clue")).count(), 2);
}

#[test]
fn test_clue_subscribers_see_suggestion_counts() {
    let mut game = GameBuilder::new(9).build_from_source(&mut pool(9, 30)).unwrap();
    let team = game.state().starting_team();
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    game.on_clue_given(move |clue| *sink.borrow_mut() = Some(clue.clone()));

    game.enter_next_game_turn().unwrap();
    let clue = seen.borrow().clone().unwrap();
    assert!(clue.declared_count() >= 1);
    assert_eq!(clue.suggested_for(team), clue.declared_count());
    assert!(!clue.is_board_word());
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn test_resume_from_snapshot() {
    let mut game = GameBuilder::new(12).build_from_source(&mut pool(12, 40)).unwrap();
    for _ in 0..3 {
        game.enter_next_game_turn().unwrap();
    }

    let bytes = game.snapshot().to_bytes().unwrap();
    let state = MatchState::from_bytes(&bytes).unwrap();
    assert_eq!(state, game.snapshot());

    let mut resumed = Game::resume(state, players(StrategyKind::Smart, 99)).unwrap();
    assert_eq!(resumed.current_seat(), game.current_seat());
    assert_eq!(resumed.round(), game.round());

    let report = MatchRunner::new().run(&mut resumed).unwrap();
    assert!(report.outcome.is_decided());
}

#[test]
fn test_resume_requires_four_players() {
    let game = GameBuilder::new(2).build_from_source(&mut pool(2, 30)).unwrap();
    let mut list = players(StrategyKind::Random, 0);
    list.truncate(2);
    let err = Game::resume(game.snapshot(), list).unwrap_err();
    assert!(matches!(err, GameError::WrongPlayerCount(2)));
}

#[test]
fn test_config_json_round_trip() {
    let config = GameConfig::new().with_grid(4, 4).with_base_target(5).with_starting_bonus(1);
    let json = serde_json::to_string(&config).unwrap();
    let back: GameConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

// =============================================================================
// Setup Errors
// =============================================================================

#[test]
fn test_pool_too_small() {
    let err = GameBuilder::new(0).build_from_source(&mut pool(0, 20)).unwrap_err();
    assert!(matches!(err, GameError::WordCountMismatch { expected: 25, actual: 20 }));
}

#[test]
fn test_duplicate_board_word() {
    let mut data = common::standard_data();
    data.words[3] = "W0".to_string();
    let err = GameBuilder::new(0).build(&data).unwrap_err();
    assert!(matches!(err, GameError::DuplicateWord(_)));
}

#[test]
fn test_layout_mismatch() {
    let data = BoardData::new(
        rust_codenames::board::BoardLayout::parse("blue", common::STANDARD).unwrap(),
        common::words(),
    );
    let err = GameBuilder::new(0).build(&data).unwrap_err();
    assert!(matches!(err, GameError::InvalidLayout(_)));
}
