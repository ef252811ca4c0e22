//! Integration tests for whole games
//!
//! Every scenario drives the public API only: moves go through `Game` or
//! `Session` exactly as the GUI and the self-play command use them.

use std::time::Duration;

use renju::rules::forbidden_reason;
use renju::{
    AIEngine, Color, Game, GameConfig, GameEvent, GameMode, GameStatus, MoveRejection, Pos,
    Session,
};

// =============================================================================
// Helper functions
// =============================================================================

/// Hotseat game, both seats fed through `submit`
fn hotseat(size: usize, restricted: Color) -> Game {
    Game::from_config(&GameConfig {
        board_size: size,
        restricted,
        mode: GameMode::PvP,
        ai_delay: Duration::ZERO,
        ..Default::default()
    })
}

fn computer_game(size: usize) -> Game {
    Game::from_config(&GameConfig {
        board_size: size,
        mode: GameMode::AiVsAi,
        ai_delay: Duration::ZERO,
        ..Default::default()
    })
}

/// Play `(col, row)` cells in order for whoever is to move; every one must land
fn play(game: &mut Game, cells: &[(u8, u8)]) {
    for &(col, row) in cells {
        game.submit(Pos::new(col, row));
        assert!(
            game.try_proceed_move(),
            "({col}, {row}) refused: {:?}",
            game.drain_events()
        );
    }
}

/// Interleave two stone lists, Black first
fn alternate(black: &[(u8, u8)], white: &[(u8, u8)]) -> Vec<(u8, u8)> {
    let mut cells = Vec::with_capacity(black.len() + white.len());
    for i in 0..black.len().max(white.len()) {
        cells.extend(black.get(i));
        cells.extend(white.get(i));
    }
    cells
}

// =============================================================================
// Winning and drawing
// =============================================================================

#[test]
fn test_five_in_a_row_wins() {
    let mut game = hotseat(15, Color::Black);
    play(
        &mut game,
        &alternate(
            &[(7, 7), (7, 8), (7, 9), (7, 10), (7, 6)],
            &[(0, 0), (0, 2), (0, 4), (7, 11)],
        ),
    );

    assert_eq!(game.status(), GameStatus::Over { winner: Some(Color::Black) });
    let events = game.drain_events();
    assert_eq!(events.len(), 10);
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver { winner: Some(Color::Black) })
    );

    let line = game.session().winning_line().expect("five on the board");
    let expected: Vec<Pos> = (6..=10).map(|row| Pos::new(7, row)).collect();
    assert_eq!(line, expected);
}

#[test]
fn test_moves_after_the_end_are_refused() {
    let mut game = hotseat(15, Color::Black);
    play(
        &mut game,
        &alternate(
            &[(7, 7), (7, 8), (7, 9), (7, 10), (7, 6)],
            &[(0, 0), (0, 2), (0, 4), (7, 11)],
        ),
    );
    game.drain_events();

    assert!(!game.is_interactive_turn());
    game.submit(Pos::new(14, 14));
    assert!(!game.try_proceed_move());
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::MoveRejected {
            color: Color::White,
            pos: Pos::new(14, 14),
            reason: MoveRejection::GameOver,
        }]
    );
    assert_eq!(game.session().board().stone_count(), 9);
}

#[test]
fn test_full_board_without_five_is_a_draw() {
    // Checkerboard with the centre and the cell above it swapped, so
    // neither diagonal nor any row or column is one color
    let is_black = |col: u8, row: u8| {
        ((col + row) % 2 == 0 && (col, row) != (2, 2)) || (col, row) == (2, 1)
    };
    let cells = (0..5u8).flat_map(|row| (0..5u8).map(move |col| (col, row)));
    let black: Vec<_> = cells.clone().filter(|&(c, r)| is_black(c, r)).collect();
    let white: Vec<_> = cells.filter(|&(c, r)| !is_black(c, r)).collect();
    assert_eq!((black.len(), white.len()), (13, 12));

    let mut game = hotseat(5, Color::Black);
    play(&mut game, &alternate(&black, &white));

    assert!(game.session().board().is_full());
    assert_eq!(game.status(), GameStatus::Over { winner: None });
    assert_eq!(
        game.drain_events().last(),
        Some(&GameEvent::GameOver { winner: None })
    );
}

// =============================================================================
// Forbidden moves
// =============================================================================

#[test]
fn test_double_three_is_refused_without_side_effects() {
    let mut game = hotseat(15, Color::Black);
    play(
        &mut game,
        &alternate(&[(6, 7), (8, 7), (7, 6), (7, 8)], &[(0, 0), (0, 2), (0, 4), (0, 6)]),
    );
    game.drain_events();
    let before = game.session().clone();

    game.submit(Pos::new(7, 7));
    assert!(!game.try_proceed_move());
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::MoveRejected {
            color: Color::Black,
            pos: Pos::new(7, 7),
            reason: MoveRejection::DoubleThree,
        }]
    );

    let after = game.session();
    assert_eq!(after.board().history(), before.board().history());
    assert_eq!(after.current_color(), Color::Black);
    for color in [Color::Black, Color::White] {
        assert_eq!(after.analyser(color), before.analyser(color));
        assert_eq!(after.weights(color), before.weights(color));
    }
}

#[test]
fn test_overline_refused_for_restricted_color() {
    let mut game = hotseat(15, Color::Black);
    play(
        &mut game,
        &alternate(
            &[(2, 7), (3, 7), (4, 7), (6, 7), (7, 7)],
            &[(0, 0), (0, 2), (0, 4), (0, 6), (0, 8)],
        ),
    );
    game.drain_events();

    game.submit(Pos::new(5, 7));
    assert!(!game.try_proceed_move());
    assert!(matches!(
        game.drain_events().as_slice(),
        [GameEvent::MoveRejected { reason: MoveRejection::Overline, .. }]
    ));
    assert!(!game.is_game_over());
}

#[test]
fn test_overline_wins_for_unrestricted_color() {
    let mut game = hotseat(15, Color::Black);
    play(
        &mut game,
        &alternate(
            &[(0, 0), (0, 2), (0, 4), (0, 6), (0, 8), (0, 10)],
            &[(2, 7), (3, 7), (4, 7), (6, 7), (7, 7), (5, 7)],
        ),
    );

    assert_eq!(game.status(), GameStatus::Over { winner: Some(Color::White) });
    let line = game.session().winning_line().expect("overline on the board");
    assert_eq!(line.len(), 6);
}

#[test]
fn test_restriction_follows_configured_color() {
    // Same double-three shape, but White is the restricted side here
    let mut game = hotseat(15, Color::White);
    play(
        &mut game,
        &alternate(&[(6, 7), (8, 7), (7, 6), (7, 8), (7, 7)], &[(0, 0), (0, 2), (0, 4), (0, 6)]),
    );
    assert!(!game.is_game_over());
    assert_eq!(game.session().board().stone_count(), 9);
}

// =============================================================================
// Computer games
// =============================================================================

#[test]
fn test_computer_game_alternates_colors() {
    let mut game = computer_game(15);
    game.play_out();

    let history = game.session().board().history();
    assert!(!history.is_empty());
    for (i, mv) in history.iter().enumerate() {
        let expected = if i % 2 == 0 { Color::Black } else { Color::White };
        assert_eq!(mv.color, expected, "move {}", i + 1);
        assert_eq!(mv.seq as usize, i + 1);
    }
}

#[test]
fn test_computer_never_plays_a_forbidden_move() {
    let mut game = computer_game(15);
    game.play_out();

    // Replay and inspect every restricted move before it lands
    let mut replay = Session::new(15, Color::Black);
    for mv in game.session().board().history() {
        if mv.color == Color::Black {
            let figures = replay.analyser(Color::Black).figures_at(mv.pos);
            assert_eq!(forbidden_reason(&figures), None, "move {mv}");
        }
        replay.play(mv.pos, mv.color).expect("replayed move is legal");
    }
    assert_eq!(replay.status(), game.status());
}

#[test]
fn test_incremental_fields_match_rebuild_after_a_game() {
    let mut game = computer_game(15);
    game.play_out();

    let played = game.session().clone();
    let mut rebuilt = played.clone();
    rebuilt.rebuild();
    for color in [Color::Black, Color::White] {
        assert_eq!(played.analyser(color), rebuilt.analyser(color));
        assert_eq!(played.weights(color), rebuilt.weights(color));
    }
}

#[test]
fn test_suggestion_is_stable_and_legal() {
    let mut game = hotseat(15, Color::Black);
    play(&mut game, &[(7, 7), (8, 8), (6, 7)]);

    let engine = AIEngine::new();
    let session = game.session();
    let first = engine.get_move(session, Color::White);
    assert_eq!(first, engine.get_move(session, Color::White));

    let pos = first.expect("a move on an open board");
    assert!(session.move_allowed(pos, Color::White, false));
}
