//! Boop game facade.

use tracing::warn;

use crate::core::{
    BoopConfig, BoopError, Cell, GameState, Move, Phase, Player, Rank, Result,
    ACTION_SPACE_SIZE, BOARD_SIZE,
};
use crate::nn::encoder::{PlaneEncoder, StateEncoder};
use crate::nn::tensor::BoardTensor;
use crate::rules::{Outcome, Symmetry, TwoPlayerGame};

/// Boop rules bound to one configuration.
///
/// Stateless between calls: every operation decodes the board it is given,
/// so one `BoopGame` can serve any number of concurrent searches.
#[derive(Clone, Debug, Default)]
pub struct BoopGame {
    config: BoopConfig,
    encoder: PlaneEncoder,
}

fn rejected(err: BoopError) -> BoopError {
    warn!(%err, "rejected input");
    err
}

impl BoopGame {
    #[must_use]
    pub fn new(config: BoopConfig) -> Self {
        Self {
            config,
            encoder: PlaneEncoder,
        }
    }

    #[must_use]
    pub fn config(&self) -> &BoopConfig {
        &self.config
    }

    // === State-level API ===

    #[must_use]
    pub fn initial_state(&self) -> GameState {
        GameState::new(self.config.kittens_per_player)
    }

    /// Decode a board tensor, logging the reason when it is malformed.
    pub fn decode(&self, board: &BoardTensor) -> Result<GameState> {
        self.encoder.decode(board).map_err(rejected)
    }

    #[must_use]
    pub fn encode(&self, state: &GameState) -> BoardTensor {
        self.encoder.encode(state)
    }

    /// Every legal move for `player`.
    ///
    /// During a pending graduation only the candidate graduations are
    /// legal. Otherwise any empty cell accepts either rank the player still
    /// holds.
    #[must_use]
    pub fn legal_moves(&self, state: &GameState, player: Player) -> Vec<Move> {
        match state.phase() {
            Phase::AwaitingGraduationChoice => state
                .graduation_candidates(player)
                .into_iter()
                .map(Move::Graduate)
                .collect(),
            Phase::AwaitingPlacement => {
                let empty: Vec<_> = Cell::all()
                    .filter(|&c| state.cell(c).is_none())
                    .collect();
                Rank::ALL
                    .into_iter()
                    .filter(|&rank| state.inventory(player, rank) > 0)
                    .flat_map(|rank| empty.iter().map(move |&cell| Move::Place { rank, cell }))
                    .collect()
            }
        }
    }

    /// Apply `mv` in place and return the player to act next.
    ///
    /// A placement outside the placement phase fails with `InvalidMove`; a
    /// graduation outside the choice phase fails with `InvalidChoice`.
    pub fn apply_move(&self, state: &mut GameState, player: Player, mv: Move) -> Result<Player> {
        match mv {
            Move::Place { rank, cell } => state.place_piece(player, rank, cell, &self.config)?,
            Move::Graduate(graduation) => {
                state.choose_graduation(player, graduation, &self.config)?
            }
        }
        Ok(match state.phase() {
            Phase::AwaitingGraduationChoice => player,
            Phase::AwaitingPlacement => player.opponent(),
        })
    }

    /// Win check from `player`'s point of view. Only aligned cats count.
    #[must_use]
    pub fn outcome(&self, state: &GameState, player: Player) -> Outcome {
        match (
            state.aligned_cats(player),
            state.aligned_cats(player.opponent()),
        ) {
            (true, true) => Outcome::Draw,
            (true, false) => Outcome::Win,
            (false, true) => Outcome::Loss,
            (false, false) => Outcome::Ongoing,
        }
    }
}

impl TwoPlayerGame for BoopGame {
    type Board = BoardTensor;

    fn initial_board(&self) -> BoardTensor {
        self.encode(&self.initial_state())
    }

    fn board_size(&self) -> (usize, usize) {
        (BOARD_SIZE, BOARD_SIZE)
    }

    fn action_size(&self) -> usize {
        ACTION_SPACE_SIZE
    }

    fn next_state(
        &self,
        board: &BoardTensor,
        player: Player,
        action: i64,
    ) -> Result<(BoardTensor, Player)> {
        let mut state = self.decode(board)?;
        let mv = Move::from_index(action).map_err(rejected)?;
        let next = self
            .apply_move(&mut state, player, mv)
            .map_err(rejected)?;
        Ok((self.encode(&state), next))
    }

    fn valid_moves(&self, board: &BoardTensor, player: Player) -> Result<Vec<u8>> {
        let state = self.decode(board)?;
        let mut mask = vec![0u8; ACTION_SPACE_SIZE];
        for mv in self.legal_moves(&state, player) {
            mask[mv.to_index()] = 1;
        }
        Ok(mask)
    }

    fn game_ended(&self, board: &BoardTensor, player: Player) -> Result<Outcome> {
        let state = self.decode(board)?;
        Ok(self.outcome(&state, player))
    }

    fn canonical_form(&self, board: &BoardTensor, player: Player) -> BoardTensor {
        match player {
            Player::A => board.clone(),
            Player::B => board.swap_players(),
        }
    }

    fn symmetries(&self, board: &BoardTensor, pi: &[f32]) -> Result<Vec<(BoardTensor, Vec<f32>)>> {
        let mut out = Vec::with_capacity(Symmetry::ALL.len());
        for sym in Symmetry::ALL {
            out.push((sym.apply(board), sym.permute_policy(pi).map_err(rejected)?));
        }
        Ok(out)
    }

    fn string_representation(&self, board: &BoardTensor) -> Result<String> {
        Ok(self.decode(board)?.fingerprint())
    }
}
