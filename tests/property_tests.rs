//! Property tests over states reached by random play.

use proptest::prelude::*;

use boop_zero::core::{Move, Phase, Player, Rank};
use boop_zero::nn::{PlaneEncoder, StateEncoder};
use boop_zero::{
    random_playout, BoopConfig, BoopGame, PromotionRule, TwoPlayerGame, ACTION_SPACE_SIZE,
};

fn config_strategy() -> impl Strategy<Value = BoopConfig> {
    (4u8..=10, any::<bool>(), any::<bool>()).prop_map(|(kittens, booping, promote_all)| {
        let promotion = if promote_all {
            PromotionRule::PromoteAll
        } else {
            PromotionRule::PromoteOne
        };
        BoopConfig::default()
            .with_kittens_per_player(kittens)
            .with_booping(booping)
            .with_promotion(promotion)
    })
}

// =============================================================================
// Codec Round-Trips
// =============================================================================

#[test]
fn test_action_index_bijection() {
    for i in 0..ACTION_SPACE_SIZE {
        assert_eq!(Move::from_index(i as i64).unwrap().to_index(), i);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_tensor_round_trip_on_reachable_states(
        seed in any::<u64>(),
        moves in 0usize..120,
        config in config_strategy(),
    ) {
        let game = BoopGame::new(config);
        let playout = random_playout(&game, seed, moves).unwrap();

        for board in playout.steps.iter().map(|s| &s.board).chain([&playout.final_board]) {
            let state = PlaneEncoder.decode(board).unwrap();
            prop_assert_eq!(&PlaneEncoder.encode(&state), board);
            prop_assert_eq!(PlaneEncoder.decode(&PlaneEncoder.encode(&state)).unwrap(), state);
        }
    }

    #[test]
    fn prop_piece_conservation(
        seed in any::<u64>(),
        moves in 0usize..150,
        config in config_strategy(),
    ) {
        let kittens = config.kittens_per_player;
        let game = BoopGame::new(config);
        let playout = random_playout(&game, seed, moves).unwrap();

        let boards: Vec<_> = playout
            .steps
            .iter()
            .map(|s| &s.board)
            .chain([&playout.final_board])
            .map(|b| game.decode(b).unwrap())
            .collect();

        for state in &boards {
            for player in Player::ALL {
                let held: u32 = Rank::ALL
                    .iter()
                    .map(|&r| {
                        u32::from(state.pieces_on_board(player, r))
                            + u32::from(state.inventory(player, r))
                    })
                    .sum();
                let ascended = u32::from(state.ascended(player, kittens));
                prop_assert_eq!(held + ascended, u32::from(kittens));
            }
        }

        // Placements only move pieces around; ranks change only on graduation.
        for (step, after) in playout.steps.iter().zip(boards.iter().skip(1)) {
            let before = game.decode(&step.board).unwrap();
            if Move::from_index(step.action as i64).unwrap().is_placement() {
                for player in Player::ALL {
                    for rank in Rank::ALL {
                        prop_assert_eq!(
                            before.pieces_on_board(player, rank) + before.inventory(player, rank),
                            after.pieces_on_board(player, rank) + after.inventory(player, rank)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn prop_next_player_follows_phase(
        seed in any::<u64>(),
        moves in 1usize..150,
    ) {
        let game = BoopGame::default();
        let playout = random_playout(&game, seed, moves).unwrap();

        for (step, next) in playout.steps.iter().zip(playout.steps.iter().skip(1)) {
            let phase = game.decode(&next.board).unwrap().phase();
            let expected = match phase {
                Phase::AwaitingGraduationChoice => step.player,
                Phase::AwaitingPlacement => step.player.opponent(),
            };
            prop_assert_eq!(next.player, expected);
        }
    }

    #[test]
    fn prop_mask_matches_next_state(
        seed in any::<u64>(),
        moves in 0usize..80,
        action in 0i64..(ACTION_SPACE_SIZE as i64),
    ) {
        let game = BoopGame::default();
        let playout = random_playout(&game, seed, moves).unwrap();
        let board = &playout.final_board;
        let player = playout.final_player;
        prop_assume!(!game.game_ended(board, player).unwrap().is_terminal());

        let mask = game.valid_moves(board, player).unwrap();
        let result = game.next_state(board, player, action);
        prop_assert_eq!(mask[action as usize] == 1, result.is_ok());
    }

    #[test]
    fn prop_canonical_form_involution(seed in any::<u64>(), moves in 0usize..60) {
        let game = BoopGame::default();
        let board = random_playout(&game, seed, moves).unwrap().final_board;

        for player in Player::ALL {
            let once = game.canonical_form(&board, player);
            prop_assert_eq!(&game.canonical_form(&once, player), &board);
        }
    }
}
