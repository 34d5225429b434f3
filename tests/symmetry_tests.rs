//! Symmetry integration tests: boards and policies must move together.

use boop_zero::core::{Cell, Graduation, Line, Move, Piece, Player, Rank};
use boop_zero::{random_playout, BoopGame, GameState, Symmetry, TwoPlayerGame, ACTION_SPACE_SIZE};

fn cell(r: usize, c: usize) -> Cell {
    Cell::new(r, c).unwrap()
}

fn one_hot(index: usize) -> Vec<f32> {
    let mut pi = vec![0.0; ACTION_SPACE_SIZE];
    pi[index] = 1.0;
    pi
}

// =============================================================================
// Policy / Board Consistency
// =============================================================================

#[test]
fn test_symmetric_move_reaches_symmetric_board() {
    let game = BoopGame::default();
    let playout = random_playout(&game, 99, 12).unwrap();
    let board = playout.final_board.clone();
    let player = playout.final_player;

    let mask = game.valid_moves(&board, player).unwrap();
    let action = mask.iter().position(|&m| m == 1).unwrap();
    let (after, _) = game.next_state(&board, player, action as i64).unwrap();

    for (sym, (sym_board, sym_pi)) in Symmetry::ALL
        .into_iter()
        .zip(game.symmetries(&board, &one_hot(action)).unwrap())
    {
        let sym_action = sym_pi.iter().position(|&p| p == 1.0).unwrap();
        let (sym_after, _) = game
            .next_state(&sym_board, player, sym_action as i64)
            .unwrap();
        assert_eq!(sym_after, sym.apply(&after), "{:?}", sym);
    }
}

#[test]
fn test_symmetric_masks_agree() {
    let game = BoopGame::default();
    let playout = random_playout(&game, 5, 9).unwrap();
    let board = playout.final_board;
    let player = playout.final_player;

    let mask: Vec<f32> = game
        .valid_moves(&board, player)
        .unwrap()
        .into_iter()
        .map(f32::from)
        .collect();

    for (sym_board, sym_mask) in game.symmetries(&board, &mask).unwrap() {
        let expected: Vec<f32> = game
            .valid_moves(&sym_board, player)
            .unwrap()
            .into_iter()
            .map(f32::from)
            .collect();
        assert_eq!(sym_mask, expected);
    }
}

#[test]
fn test_triple_policy_follows_rotation() {
    let game = BoopGame::default();
    let mut state = GameState::new(8);
    for c in 0..3 {
        state.set_cell(cell(1, c), Some(Piece::new(Player::A, Rank::Kitten)));
    }
    let board = game.encode(&state);
    let row = Move::Graduate(Graduation::triple(Line::Horizontal, cell(1, 1)).unwrap());

    let syms = game.symmetries(&board, &one_hot(row.to_index())).unwrap();
    let (_, rotated_pi) = &syms[1];
    assert_eq!(Symmetry::ALL[1], Symmetry::Rot90);

    // (1,0),(1,1),(1,2) rotate onto (0,4),(1,4),(2,4).
    let column = Move::Graduate(Graduation::triple(Line::Vertical, cell(1, 4)).unwrap());
    assert_eq!(rotated_pi[column.to_index()], 1.0);
}

// =============================================================================
// Group Structure
// =============================================================================

#[test]
fn test_all_symmetries_distinct_on_asymmetric_board() {
    let game = BoopGame::default();
    let mut state = GameState::new(8);
    state.set_cell(cell(0, 1), Some(Piece::new(Player::A, Rank::Kitten)));
    state.set_cell(cell(2, 0), Some(Piece::new(Player::B, Rank::Cat)));
    let board = game.encode(&state);

    let boards: Vec<_> = Symmetry::ALL.iter().map(|s| s.apply(&board)).collect();
    for i in 0..boards.len() {
        for j in (i + 1)..boards.len() {
            assert_ne!(boards[i], boards[j], "{:?} == {:?}", Symmetry::ALL[i], Symmetry::ALL[j]);
        }
    }
}

#[test]
fn test_inverse_restores_board_and_policy() {
    let game = BoopGame::default();
    let board = random_playout(&game, 17, 15).unwrap().final_board;
    let pi: Vec<f32> = (0..ACTION_SPACE_SIZE).map(|i| (i % 7) as f32).collect();

    for sym in Symmetry::ALL {
        let inv = sym.inverse();
        assert_eq!(inv.apply(&sym.apply(&board)), board);
        assert_eq!(
            inv.permute_policy(&sym.permute_policy(&pi).unwrap()).unwrap(),
            pi
        );
    }
}

#[test]
fn test_symmetries_keep_fingerprint_inventory() {
    let game = BoopGame::default();
    let board = random_playout(&game, 23, 10).unwrap().final_board;
    let key = game.string_representation(&board).unwrap();
    let header = key.rsplit_once('|').unwrap().0.to_string();

    for (sym_board, _) in game.symmetries(&board, &one_hot(0)).unwrap() {
        let sym_key = game.string_representation(&sym_board).unwrap();
        assert!(sym_key.starts_with(&header));
    }
}
