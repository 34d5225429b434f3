//! Game state and the rules that mutate it.
//!
//! ## GameState
//!
//! The human-readable form of a Boop position:
//! - 6x6 grid of optional pieces
//! - Per-player inventories of kittens and cats not on the board
//! - Turn phase (placement vs. pending graduation choice)
//!
//! Whose turn it is lives outside the state: the training framework passes
//! the acting player alongside the board, and the same convention is used
//! here. A pending graduation choice always belongs to the player that just
//! placed a piece.
//!
//! ## Turn structure
//!
//! 1. `place_piece`: take a piece from inventory, put it on an empty cell,
//!    boop the neighbours, then scan for the mover's aligned triples.
//! 2. If any triple exists (or the mover just emptied their inventory) the
//!    phase becomes `AwaitingGraduationChoice` and the same player must call
//!    `choose_graduation` before the turn passes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::action::{Graduation, Line};
use super::config::{BoopConfig, PromotionRule};
use super::error::{BoopError, Result};
use super::piece::{Cell, Piece, Rank, BOARD_SIZE};
use super::player::{Player, PlayerMap};

/// Turn sub-state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The active player must place a piece from inventory.
    #[default]
    AwaitingPlacement,
    /// The active player must pick which piece(s) to graduate.
    AwaitingGraduationChoice,
}

/// Candidate graduations. Four triples covers every ordinary position.
pub type Candidates = SmallVec<[Graduation; 4]>;

/// Complete Boop position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    /// Pieces off the board, indexed by `Rank::index()`.
    inventory: PlayerMap<[u8; 2]>,
    phase: Phase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BoopConfig::default().kittens_per_player)
    }
}

impl GameState {
    /// Fresh game: empty board, `kittens` kittens each, no cats.
    #[must_use]
    pub fn new(kittens: u8) -> Self {
        Self {
            board: [[None; BOARD_SIZE]; BOARD_SIZE],
            inventory: PlayerMap::with_value([kittens, 0]),
            phase: Phase::AwaitingPlacement,
        }
    }

    /// A state with nothing anywhere: empty board, empty inventories.
    ///
    /// Used by the tensor decoder and for hand-built test positions.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(0)
    }

    // === Queries ===

    #[must_use]
    pub fn cell(&self, cell: Cell) -> Option<Piece> {
        self.board[cell.row()][cell.col()]
    }

    #[must_use]
    pub fn inventory(&self, player: Player, rank: Rank) -> u8 {
        self.inventory[player][rank.index()]
    }

    /// Kittens plus cats in a player's inventory.
    #[must_use]
    pub fn total_inventory(&self, player: Player) -> u16 {
        self.inventory[player].iter().map(|&n| u16::from(n)).sum()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn pieces_on_board(&self, player: Player, rank: Rank) -> u8 {
        Cell::all()
            .filter(|&c| self.cell(c) == Some(Piece::new(player, rank)))
            .count() as u8
    }

    /// Cats removed from play by ascension, derived from conservation:
    /// every player owns exactly `kittens_per_player` pieces in total.
    #[must_use]
    pub fn ascended(&self, player: Player, kittens_per_player: u8) -> u8 {
        let held = Rank::ALL
            .iter()
            .map(|&r| {
                u16::from(self.pieces_on_board(player, r)) + u16::from(self.inventory(player, r))
            })
            .sum::<u16>();
        u16::from(kittens_per_player).saturating_sub(held) as u8
    }

    /// Every aligned same-owner, same-rank triple belonging to `player`.
    #[must_use]
    pub fn triples(&self, player: Player) -> Candidates {
        let mut found = Candidates::new();
        for line in Line::ALL {
            for centre in Cell::all() {
                let Some(triple) = Graduation::triple(line, centre) else {
                    continue;
                };
                let Some(first) = self.cell(centre) else {
                    continue;
                };
                if first.owner != player {
                    continue;
                }
                if triple.cells().iter().all(|&c| self.cell(c) == Some(first)) {
                    found.push(triple);
                }
            }
        }
        found
    }

    /// Whether `player` has three cats in a row anywhere on the board.
    #[must_use]
    pub fn aligned_cats(&self, player: Player) -> bool {
        self.triples(player)
            .iter()
            .any(|t| self.triple_rank(t) == Some(Rank::Cat))
    }

    fn triple_rank(&self, graduation: &Graduation) -> Option<Rank> {
        match graduation {
            Graduation::Triple(triple) => self.cell(triple.centre()).map(|p| p.rank),
            Graduation::Single(_) => None,
        }
    }

    /// Graduations `player` may currently choose between.
    ///
    /// Aligned triples take precedence. With no triple but an empty
    /// inventory, any single piece of the player's may graduate. Otherwise
    /// there is nothing to choose.
    #[must_use]
    pub fn graduation_candidates(&self, player: Player) -> Candidates {
        let triples = self.triples(player);
        if !triples.is_empty() {
            return triples;
        }
        if self.total_inventory(player) > 0 {
            return Candidates::new();
        }
        Cell::all()
            .filter(|&c| self.cell(c).map(|p| p.owner) == Some(player))
            .map(Graduation::Single)
            .collect()
    }

    /// Lossless one-line key: `<phase>|<Ak>,<Bk>,<Ac>,<Bc>|<36 cell symbols>`.
    ///
    /// The phase is `0` for placement and `1` for a pending graduation.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let phase = match self.phase {
            Phase::AwaitingPlacement => '0',
            Phase::AwaitingGraduationChoice => '1',
        };
        let cells: String = self
            .board
            .iter()
            .flatten()
            .map(|&p| Piece::cell_symbol(p))
            .collect();
        format!(
            "{}|{},{},{},{}|{}",
            phase,
            self.inventory(Player::A, Rank::Kitten),
            self.inventory(Player::B, Rank::Kitten),
            self.inventory(Player::A, Rank::Cat),
            self.inventory(Player::B, Rank::Cat),
            cells
        )
    }

    // === Raw setters (position construction) ===

    pub fn set_cell(&mut self, cell: Cell, piece: Option<Piece>) {
        self.board[cell.row()][cell.col()] = piece;
    }

    pub fn set_inventory(&mut self, player: Player, rank: Rank, count: u8) {
        self.inventory[player][rank.index()] = count;
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Return `amount` pieces of `rank` to `player`'s inventory.
    ///
    /// Fails with `InvalidMove` when the count would not fit in a `u8`,
    /// which only a hand-built or decoded position can provoke.
    fn credit(&mut self, player: Player, rank: Rank, amount: u8) -> Result<()> {
        let slot = &mut self.inventory[player][rank.index()];
        *slot = slot.checked_add(amount).ok_or_else(|| {
            BoopError::invalid_move(format!(
                "{} cannot hold {} more {:?} pieces",
                player, amount, rank
            ))
        })?;
        Ok(())
    }

    // === Rules ===

    /// Place a piece from `player`'s inventory on an empty cell.
    ///
    /// Fails with `InvalidMove` outside the placement phase, with an empty
    /// inventory for `rank`, or on an occupied cell.
    pub fn place_piece(
        &mut self,
        player: Player,
        rank: Rank,
        cell: Cell,
        config: &BoopConfig,
    ) -> Result<()> {
        if self.phase != Phase::AwaitingPlacement {
            return Err(BoopError::invalid_move(
                "a graduation choice is pending",
            ));
        }
        if self.inventory(player, rank) == 0 {
            return Err(BoopError::invalid_move(format!(
                "{} has no {:?} left in inventory",
                player, rank
            )));
        }
        if let Some(occupant) = self.cell(cell) {
            return Err(BoopError::invalid_move(format!(
                "cell {} is occupied by '{}'",
                cell,
                occupant.symbol()
            )));
        }

        let mut next = self.clone();
        next.inventory[player][rank.index()] -= 1;
        next.set_cell(cell, Some(Piece::new(player, rank)));
        if config.booping {
            next.boop_from(cell)?;
        }
        *self = next;

        let candidates = self.graduation_candidates(player);
        if !candidates.is_empty() {
            debug!(%player, count = candidates.len(), "graduation choice pending");
            self.phase = Phase::AwaitingGraduationChoice;
        }
        Ok(())
    }

    /// Push every boopable neighbour of `origin` one step further away.
    ///
    /// Pieces pushed off the board return to their owner's inventory.
    /// A piece whose destination is occupied stays where it is. Destinations
    /// all lie on the distance-2 ring, so the order of pushes is irrelevant.
    fn boop_from(&mut self, origin: Cell) -> Result<()> {
        let Some(placed) = self.cell(origin) else {
            return Ok(());
        };
        for (dr, dc) in Cell::NEIGHBOURS {
            let Some(neighbour) = origin.offset(dr, dc) else {
                continue;
            };
            let Some(piece) = self.cell(neighbour) else {
                continue;
            };
            if !placed.can_boop(piece) {
                continue;
            }
            match neighbour.offset(dr, dc) {
                Some(dest) if self.cell(dest).is_some() => {}
                Some(dest) => {
                    trace!(from = %neighbour, to = %dest, "boop");
                    self.set_cell(neighbour, None);
                    self.set_cell(dest, Some(piece));
                }
                None => {
                    trace!(from = %neighbour, owner = %piece.owner, "booped off the board");
                    self.set_cell(neighbour, None);
                    self.credit(piece.owner, piece.rank, 1)?;
                }
            }
        }
        Ok(())
    }

    /// Resolve a pending graduation for `player`.
    ///
    /// Kitten triples return to inventory according to the configured
    /// promotion rule; cat triples ascend and leave play. A single piece
    /// returns to inventory as a cat. If the player still has a triple
    /// afterwards, the choice phase continues.
    pub fn choose_graduation(
        &mut self,
        player: Player,
        graduation: Graduation,
        config: &BoopConfig,
    ) -> Result<()> {
        if self.phase != Phase::AwaitingGraduationChoice {
            return Err(BoopError::invalid_choice("no graduation choice is pending"));
        }
        if !self.graduation_candidates(player).contains(&graduation) {
            return Err(BoopError::invalid_choice(format!(
                "{:?} is not a valid graduation for {}",
                graduation, player
            )));
        }

        let mut next = self.clone();
        match graduation {
            Graduation::Single(cell) => {
                next.set_cell(cell, None);
                next.credit(player, Rank::Cat, 1)?;
            }
            Graduation::Triple(_) => {
                let rank = self.triple_rank(&graduation).unwrap_or(Rank::Kitten);
                for cell in graduation.cells() {
                    next.set_cell(cell, None);
                }
                match (rank, config.promotion) {
                    (Rank::Kitten, PromotionRule::PromoteOne) => {
                        next.credit(player, Rank::Kitten, 2)?;
                        next.credit(player, Rank::Cat, 1)?;
                    }
                    (Rank::Kitten, PromotionRule::PromoteAll) => {
                        next.credit(player, Rank::Cat, 3)?;
                    }
                    (Rank::Cat, _) => {
                        debug!(%player, "cat triple ascended");
                    }
                }
            }
        }
        *self = next;

        self.phase = if self.triples(player).is_empty() {
            Phase::AwaitingPlacement
        } else {
            Phase::AwaitingGraduationChoice
        };
        debug!(%player, ?graduation, phase = ?self.phase, "graduation resolved");
        Ok(())
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.board {
            let line: String = row.iter().map(|&p| Piece::cell_symbol(p)).collect();
            writeln!(f, "{}", line)?;
        }
        write!(
            f,
            "A: {}k {}c | B: {}k {}c | {:?}",
            self.inventory(Player::A, Rank::Kitten),
            self.inventory(Player::A, Rank::Cat),
            self.inventory(Player::B, Rank::Kitten),
            self.inventory(Player::B, Rank::Cat),
            self.phase
        )
    }
}
