//! Game state: pieces, turn bookkeeping, and action history.
//!
//! ## TurnState
//!
//! Who is to act and how far through their turn they are:
//! - Current player
//! - Dice showing (set once rolled, cleared at handoff)
//! - Piece moved this turn, if any
//! - Selected piece, if any
//!
//! `has_rolled`, `has_moved` and the bonus flag are derived from these, so
//! they cannot disagree with each other.
//!
//! ## GameState
//!
//! Complete game state:
//! - Four players with four pieces each
//! - Turn state
//! - Turn counter and action history

use derive_more::Display;
use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::config::GameConfig;
use super::dice::DicePair;
use super::piece::{Piece, PieceId, PieceState};
use super::player::{Player, PlayerId, PlayerMap, PIECES_PER_PLAYER};

/// Where the current player is within their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Dice not rolled yet.
    #[display("awaiting roll")]
    AwaitingRoll,
    /// Rolled; a piece may be selected and moved.
    #[display("awaiting move")]
    AwaitingMove,
    /// Moved; the turn can be ended.
    #[display("awaiting end of turn")]
    AwaitingEndTurn,
}

/// Per-turn bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    current: PlayerId,
    dice: Option<DicePair>,
    moved: Option<PieceId>,
    selected: Option<PieceId>,
}

impl TurnState {
    /// Fresh turn for `player`: nothing rolled, nothing selected.
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self {
            current: player,
            dice: None,
            moved: None,
            selected: None,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// The dice rolled this turn.
    #[must_use]
    pub fn dice(&self) -> Option<DicePair> {
        self.dice
    }

    #[must_use]
    pub fn has_rolled(&self) -> bool {
        self.dice.is_some()
    }

    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved.is_some()
    }

    /// The piece moved this turn.
    #[must_use]
    pub fn moved_piece(&self) -> Option<PieceId> {
        self.moved
    }

    #[must_use]
    pub fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    /// Rolled a double: the same player rolls again after ending the turn.
    #[must_use]
    pub fn bonus_roll(&self) -> bool {
        self.dice.is_some_and(DicePair::is_double)
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        match (self.has_rolled(), self.has_moved()) {
            (false, _) => TurnPhase::AwaitingRoll,
            (true, false) => TurnPhase::AwaitingMove,
            (true, true) => TurnPhase::AwaitingEndTurn,
        }
    }

    pub(crate) fn set_rolled(&mut self, dice: DicePair) {
        self.dice = Some(dice);
        self.moved = None;
    }

    pub(crate) fn set_moved(&mut self, piece: PieceId) {
        self.moved = Some(piece);
    }

    pub(crate) fn select(&mut self, piece: Option<PieceId>) {
        self.selected = piece;
    }

    /// Start a new turn for `player`, clearing dice, move and selection.
    pub(crate) fn hand_to(&mut self, player: PlayerId) {
        *self = Self::new(player);
    }
}

/// A broken state invariant.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// What went wrong.
    pub description: String,
}

impl InvariantViolation {
    fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Full game state.
///
/// Cloning is cheap: the history is an `im::Vector`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    players: PlayerMap<Player>,

    turn: TurnState,

    /// Turn number (starts at 1, increments on every handoff, bonus turns included).
    turn_number: u32,

    /// Action sequence within turn.
    action_sequence: u32,

    /// Applied actions, oldest first.
    history: Vector<ActionRecord>,

    record_history: bool,
}

impl GameState {
    /// Create the opening position: every piece home, starting player to roll.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            players: PlayerMap::new(Player::new),
            turn: TurnState::new(config.starting_player),
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
            record_history: config.record_history,
        }
    }

    // === Pieces ===

    /// All four players.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        self.players[id.player()].piece(id.index())
    }

    /// Iterate over every piece, player by player.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.players.values().flat_map(|p| p.pieces().iter())
    }

    /// Put a piece in the given state, bypassing the movement rules.
    ///
    /// For setting up positions; play goes through the rules engine.
    pub fn place_piece(&mut self, id: PieceId, state: PieceState) {
        self.players[id.player()].piece_mut(id.index()).set_state(state);
    }

    // === Turn ===

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub(crate) fn turn_mut(&mut self) -> &mut TurnState {
        &mut self.turn
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.current()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Hand the turn to `player`, clearing per-turn state.
    pub(crate) fn advance_turn(&mut self, player: PlayerId) {
        self.turn.hand_to(player);
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    // === Outcome ===

    /// The lowest seat whose four pieces have all finished.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, player)| player.has_won())
            .map(|(id, _)| id)
    }

    // === Action History ===

    /// Applied actions, oldest first. Empty when recording is off.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Record an action taken by `player` in history.
    pub(crate) fn record_action(&mut self, player: PlayerId, action: Action) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        if self.record_history {
            self.history.push_back(ActionRecord::new(
                player,
                action,
                self.turn.dice(),
                self.turn_number,
                sequence,
            ));
        }
    }

    // === Invariants ===

    /// Check every structural invariant, collecting all violations.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        for (player_id, player) in self.players.iter() {
            if player.id() != player_id {
                violations.push(InvariantViolation::new(format!(
                    "seat {} holds player {}",
                    player_id.raw(),
                    player.id().raw()
                )));
            }
            for (index, piece) in player.pieces().iter().enumerate() {
                if piece.id() != PieceId::new(player_id, index as u8) {
                    violations.push(InvariantViolation::new(format!(
                        "slot {}#{} holds piece {}",
                        player_id, index, piece.id()
                    )));
                }
            }
        }

        let current = self.turn.current();
        if self.turn.has_moved() && !self.turn.has_rolled() {
            violations.push(InvariantViolation::new("moved without rolling"));
        }
        let turn_pieces = [("selected", self.turn.selected()), ("moved", self.turn.moved_piece())];
        for (role, id) in turn_pieces {
            let Some(id) = id else { continue };
            if usize::from(id.index()) >= PIECES_PER_PLAYER {
                violations.push(InvariantViolation::new(format!("{role} piece {id} has no slot")));
            }
            if id.player() != current {
                violations.push(InvariantViolation::new(format!(
                    "{role} piece {id} does not belong to {current}"
                )));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Panic if any invariant is broken.
    ///
    /// A broken invariant means the engine itself is wrong; continuing would
    /// only spread the corruption.
    pub fn assert_invariants(&self) {
        if let Err(violations) = self.check_invariants() {
            let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
            panic!("Game state invariant violated: {}", descriptions.join("; "));
        }
    }
}
