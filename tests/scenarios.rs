//! End-to-end scenario tests driven through the public round API.
//!
//! Each scenario hand-builds a board, walks the declaration and order
//! phases, resolves, and checks the resulting board and verdict.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use gridwar::game::{initialize, RoundRecord};
use gridwar::{
    Board, Coord, EngineError, GameConfig, GameState, OrderPolicy, Square, Verdict,
};

/// Build a game mid-match: the given board is the live round's
/// `boardBefore`, with filler records padding the history so the round
/// counter is honest.
fn game_at_round(
    board: Board,
    num_players: u8,
    config: GameConfig,
    round_number: u32,
) -> GameState {
    let rounds = (1..=round_number)
        .map(|n| RoundRecord::fresh(n, board.clone()))
        .collect();
    GameState {
        game_id: "scenario".to_string(),
        config,
        num_players,
        seed: 0,
        current_round: round_number,
        rounds,
        verdict: Verdict::Ongoing,
    }
}

fn game_with(board: Board, num_players: u8, config: GameConfig) -> GameState {
    game_at_round(board, num_players, config, 1)
}

/// Complete every declaration phase with empty lines.
fn declare_all(state: &mut GameState) {
    let lines = vec![String::new(); usize::from(state.num_players)];
    for _ in 0..state.config.declaration_count {
        state.submit_declarations(&lines).unwrap();
    }
}

/// Declare, submit the given order lines, and resolve.
fn play_round(state: &mut GameState, lines: &[&str]) -> Verdict {
    declare_all(state);
    let lines: Vec<String> = lines.iter().map(ToString::to_string).collect();
    state.submit_orders(&lines, OrderPolicy::Reject).unwrap();
    state.resolve().unwrap()
}

fn square(state: &GameState, x: u16, y: u16) -> Square {
    *state
        .latest_round()
        .unwrap()
        .board
        .get(Coord::new(x, y))
        .unwrap()
}

#[test]
fn simple_move_and_production() {
    // S1: a@(0,0)=7 sends 3 right; b@(4,4)=8 passes.
    let mut board = Board::new(5).unwrap();
    board.set(Coord::new(0, 0), Square::held(0, 7));
    board.set(Coord::new(4, 4), Square::held(1, 8));
    let mut state = game_with(board, 2, GameConfig::default());

    let verdict = play_round(&mut state, &["0,0,R,3", ""]);

    assert_eq!(verdict, Verdict::Ongoing);
    assert_eq!(state.current_round, 2);

    let left = square(&state, 0, 0);
    assert_eq!((left.owner, left.units), (Some(0), 5)); // 7 - 3 + 1
    let moved = square(&state, 1, 0);
    assert_eq!((moved.owner, moved.units), (Some(0), 4)); // 3 + 1
    let b = square(&state, 4, 4);
    assert_eq!((b.owner, b.units), (Some(1), 9)); // 8 + 1
}

#[test]
fn emptied_source_goes_neutral() {
    // S2: a sends everything; the source square neutralizes and earns
    // no production.
    let mut board = Board::new(5).unwrap();
    board.set(Coord::new(0, 0), Square::held(0, 5));
    board.set(Coord::new(4, 4), Square::held(1, 5));
    let mut state = game_with(board, 2, GameConfig::default());

    play_round(&mut state, &["0,0,R,5", ""]);

    let source = square(&state, 0, 0);
    assert_eq!((source.owner, source.units), (None, 0));
    let dest = square(&state, 1, 0);
    assert_eq!((dest.owner, dest.units), (Some(0), 6)); // 5 + 1
    let b = square(&state, 4, 4);
    assert_eq!((b.owner, b.units), (Some(1), 6));
}

#[test]
fn domination_ends_the_game() {
    // S3: production lifts a to 21 of 25 total, past half.
    let config = GameConfig {
        map_size: 7,
        ..GameConfig::default()
    };
    let mut board = Board::new(7).unwrap();
    board.set(Coord::new(4, 4), Square::held(0, 20));
    board.set(Coord::new(5, 4), Square::held(1, 1));
    board.set(Coord::new(6, 4), Square::held(2, 1));
    let mut state = game_with(board, 3, config);

    let verdict = play_round(&mut state, &["", "", ""]);

    assert_eq!(verdict, Verdict::Winner(0));
    assert!(state.is_finished());
    // Frozen: no new round appended.
    assert_eq!(state.rounds.len(), 1);
    assert_eq!(state.current_round, 1);
}

#[test]
fn timeout_shares_the_win() {
    // S4: round 15 of 15, a and b tied, nobody past half.
    let mut board = Board::new(5).unwrap();
    board.set(Coord::new(0, 0), Square::held(0, 10));
    board.set(Coord::new(4, 4), Square::held(1, 10));
    let mut state = game_at_round(board, 2, GameConfig::default(), 15);

    let verdict = play_round(&mut state, &["", ""]);

    assert_eq!(verdict, Verdict::MultiWinner(vec![0, 1]));
    assert_eq!(state.rounds.len(), 15);
}

#[test]
fn tied_leaders_before_timeout_play_on() {
    let mut board = Board::new(5).unwrap();
    board.set(Coord::new(0, 0), Square::held(0, 10));
    board.set(Coord::new(4, 4), Square::held(1, 10));
    let mut state = game_at_round(board, 2, GameConfig::default(), 3);

    let verdict = play_round(&mut state, &["", ""]);
    assert_eq!(verdict, Verdict::Ongoing);
}

#[test]
fn mutual_annihilation_is_a_draw() {
    // S5: both stacks meet at (1,0) and wipe out.
    let mut board = Board::new(5).unwrap();
    board.set(Coord::new(0, 0), Square::held(0, 5));
    board.set(Coord::new(2, 0), Square::held(1, 5));
    let mut state = game_with(board, 2, GameConfig::default());

    let verdict = play_round(&mut state, &["0,0,R,5", "2,0,L,5"]);

    assert_eq!(verdict, Verdict::Draw);
    assert_eq!(state.rounds.len(), 1);
    let battlefield = square(&state, 1, 0);
    assert_eq!((battlefield.owner, battlefield.units), (None, 0));
}

#[test]
fn cumulative_overdraw_names_square_and_total() {
    // S6: two orders from (2,2) totaling 13 against 10 available.
    let mut board = Board::new(5).unwrap();
    board.set(Coord::new(2, 2), Square::held(0, 10));
    board.set(Coord::new(0, 0), Square::held(1, 5));
    board.set(Coord::new(4, 4), Square::held(2, 5));
    let mut state = game_with(board, 3, GameConfig::default());
    declare_all(&mut state);

    let lines = vec![
        "2,2,R,7|2,2,U,6".to_string(),
        String::new(),
        String::new(),
    ];
    let err = state
        .submit_orders(&lines, OrderPolicy::Reject)
        .unwrap_err();

    match err {
        EngineError::ValidationError { detail } => {
            assert!(detail.contains("(2, 2)"), "got: {detail}");
            assert!(detail.contains("13"), "got: {detail}");
            assert!(detail.contains("10"), "got: {detail}");
        }
        other => panic!("expected ValidationError, got {other:?}"),
    }
}

#[test]
fn forfeit_policy_plays_on_without_the_offender() {
    let mut board = Board::new(5).unwrap();
    board.set(Coord::new(2, 2), Square::held(0, 10));
    board.set(Coord::new(0, 0), Square::held(1, 5));
    let mut state = game_with(board, 2, GameConfig::default());
    declare_all(&mut state);

    let lines = vec!["2,2,R,7|2,2,U,6".to_string(), "0,0,D,2".to_string()];
    state.submit_orders(&lines, OrderPolicy::Forfeit).unwrap();
    state.resolve().unwrap();

    // a's whole line was dropped; b's move went through.
    let a = square(&state, 2, 2);
    assert_eq!((a.owner, a.units), (Some(0), 11));
    let b_moved = square(&state, 0, 1);
    assert_eq!((b_moved.owner, b_moved.units), (Some(1), 3));
}

#[test]
fn swap_exchanges_squares_cleanly() {
    let mut board = Board::new(5).unwrap();
    board.set(Coord::new(0, 0), Square::held(0, 5));
    board.set(Coord::new(1, 0), Square::held(1, 5));
    let mut state = game_with(board, 2, GameConfig::default());

    play_round(&mut state, &["0,0,R,5", "1,0,L,5"]);

    let left = square(&state, 0, 0);
    assert_eq!((left.owner, left.units), (Some(1), 6)); // 5 + production
    let right = square(&state, 1, 0);
    assert_eq!((right.owner, right.units), (Some(0), 6));
}

#[test]
fn tie_at_destination_destroys_both_and_skips_production() {
    let mut board = Board::new(5).unwrap();
    board.set(Coord::new(0, 2), Square::held(0, 8));
    board.set(Coord::new(2, 2), Square::held(1, 8));
    let mut state = game_with(board, 2, GameConfig::default());

    play_round(&mut state, &["0,2,R,5", "2,2,L,5"]);

    let battlefield = square(&state, 1, 2);
    assert_eq!((battlefield.owner, battlefield.units), (None, 0));
    // The stay-behind halves survive and produce.
    assert_eq!(square(&state, 0, 2).units, 4);
    assert_eq!(square(&state, 2, 2).units, 4);
}

#[test]
fn three_way_combat_winner_pays_runner_up() {
    let mut board = Board::new(5).unwrap();
    board.set(Coord::new(1, 2), Square::held(0, 10));
    board.set(Coord::new(3, 2), Square::held(1, 7));
    board.set(Coord::new(2, 1), Square::held(2, 5));
    let mut state = game_with(board, 3, GameConfig::default());

    play_round(&mut state, &["1,2,R,10", "3,2,L,7", "2,1,D,5"]);

    // 10 - 7 = 3, then +1 production.
    let battlefield = square(&state, 2, 2);
    assert_eq!((battlefield.owner, battlefield.units), (Some(0), 4));
}

#[test]
fn production_cap_boundaries_end_to_end() {
    let mut board = Board::new(5).unwrap();
    board.set(Coord::new(0, 0), Square::held(0, 20));
    board.set(Coord::new(2, 0), Square::held(1, 21));
    let mut at_cap_resource = Square::held(2, 20);
    at_cap_resource.is_resource = true;
    board.set(Coord::new(4, 0), at_cap_resource);
    let mut state = game_with(board, 3, GameConfig::default());

    play_round(&mut state, &["", "", ""]);

    assert_eq!(square(&state, 0, 0).units, 21); // 20 < cap: produces
    assert_eq!(square(&state, 2, 0).units, 21); // at cap: suppressed
    assert_eq!(square(&state, 4, 0).units, 22); // resource crosses the cap
}

#[test]
fn empty_orders_round_is_production_only() {
    let mut state = initialize("idle", 3, GameConfig::default(), 123).unwrap();
    let before = state.latest_round().unwrap().board.clone();

    play_round(&mut state, &["", "", ""]);

    let after = &state.latest_round().unwrap().board;
    for (coord, square_before) in before.iter() {
        let square_after = after.get(coord).unwrap();
        assert_eq!(square_after.owner, square_before.owner);
        if square_before.owner.is_some() {
            assert_eq!(square_after.units, square_before.units + 1);
        } else {
            assert_eq!(square_after.units, 0);
        }
    }
}

#[test]
fn smallest_board_seats_three_players() {
    let config = GameConfig {
        map_size: 2,
        resource_square_pct: 0,
        ..GameConfig::default()
    };
    let mut state = initialize("tiny", 3, config, 9).unwrap();
    let verdict = play_round(&mut state, &["", "", ""]);
    assert_eq!(verdict, Verdict::Ongoing);
}

#[test]
fn full_match_runs_to_timeout() {
    // Nobody moves; totals stay level until the round limit shares the
    // win among everyone.
    let config = GameConfig {
        max_rounds: 4,
        ..GameConfig::default()
    };
    let mut state = initialize("stalemate", 3, config, 55).unwrap();

    let mut verdict = Verdict::Ongoing;
    for _ in 0..4 {
        assert!(!state.is_finished());
        verdict = play_round(&mut state, &["", "", ""]);
    }

    assert_eq!(verdict, Verdict::MultiWinner(vec![0, 1, 2]));
    assert_eq!(state.rounds.len(), 4);
}

#[test]
fn declarations_are_stored_but_change_nothing() {
    let mut a = initialize("talk", 3, GameConfig::default(), 8).unwrap();
    let mut b = initialize("talk", 3, GameConfig::default(), 8).unwrap();

    a.submit_declarations(&[
        "I claim the north".to_string(),
        "lies".to_string(),
        String::new(),
    ])
    .unwrap();
    b.submit_declarations(&vec![String::new(); 3]).unwrap();

    let order_lines = vec![String::new(); 3];
    a.submit_orders(&order_lines, OrderPolicy::Reject).unwrap();
    b.submit_orders(&order_lines, OrderPolicy::Reject).unwrap();
    a.resolve().unwrap();
    b.resolve().unwrap();

    assert_eq!(
        a.latest_round().unwrap().board,
        b.latest_round().unwrap().board
    );
    assert_eq!(a.rounds[0].declarations[0], "I claim the north");
}
