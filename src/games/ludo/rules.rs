//! Ludo rules: the turn protocol on top of the movement arithmetic.
//!
//! A turn runs `Roll -> (Select) -> Move -> (Capture) -> EndTurn`. A double
//! keeps the turn with the same player. `Pass` replaces `Move` when nothing
//! can move.

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{
    Action, DiceSource, GameConfig, GameRng, GameState, PieceId, PieceState, TurnPhase,
};
use crate::rules::movement::advance;
use crate::rules::{ActionOutcome, Captured, GameResult, RuleError, RulesEngine};

/// A move the current player could make with the dice showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalMove {
    pub piece: PieceId,
    pub from: PieceState,
    pub to: PieceState,
}

/// Legal moves for one roll; a player has at most four.
pub type LegalMoves = SmallVec<[LegalMove; 4]>;

/// Ludo rules, owning the dice.
#[derive(Clone, Debug)]
pub struct LudoRules<D = GameRng> {
    config: GameConfig,
    dice: D,
}

impl LudoRules<GameRng> {
    /// Rules with seeded dice from `config.seed`.
    #[must_use]
    pub fn seeded(config: GameConfig) -> Self {
        let dice = GameRng::new(config.seed);
        Self::new(config, dice)
    }
}

impl<D: DiceSource> LudoRules<D> {
    /// Rules rolling with the given dice source.
    pub fn new(config: GameConfig, dice: D) -> Self {
        Self { config, dice }
    }

    /// The dice source.
    pub fn dice_source(&self) -> &D {
        &self.dice
    }

    fn roll(&mut self, state: &mut GameState) -> Result<ActionOutcome, RuleError> {
        let phase = state.turn().phase();
        if phase != TurnPhase::AwaitingRoll {
            return Err(RuleError::phase(Action::Roll, phase));
        }

        let dice = self.dice.roll();
        state.turn_mut().set_rolled(dice);

        debug!(player = %state.current_player(), %dice, bonus = dice.is_double(), "rolled");
        Ok(ActionOutcome::Rolled(dice))
    }
}

/// Every move the current player could make with the dice showing.
///
/// Empty unless the player has rolled and not yet moved.
#[must_use]
pub fn legal_moves(state: &GameState) -> LegalMoves {
    let turn = state.turn();
    let Some(dice) = turn.dice() else {
        return LegalMoves::new();
    };
    if turn.has_moved() {
        return LegalMoves::new();
    }

    let player = turn.current();
    state
        .player(player)
        .pieces()
        .iter()
        .filter_map(|piece| {
            let from = piece.state();
            advance(player, from, dice).ok().map(|to| LegalMove {
                piece: piece.id(),
                from,
                to,
            })
        })
        .collect()
}

/// Opponent pieces standing on `piece`'s ring cell.
///
/// Empty when `piece` is not on the ring; stretch cells are private.
#[must_use]
pub fn capture_targets(state: &GameState, piece: PieceId) -> Captured {
    let Some(cell) = state.piece(piece).state().ring() else {
        return Captured::new();
    };

    state
        .pieces()
        .filter(|other| other.owner() != piece.player() && other.state().ring() == Some(cell))
        .map(|other| other.id())
        .collect()
}

/// Selection is allowed in every phase, so a piece picked before the roll
/// stays selected for the move.
fn select(state: &mut GameState, piece: PieceId) -> Result<ActionOutcome, RuleError> {
    let turn = state.turn();
    if piece.player() != turn.current() {
        return Err(RuleError::WrongOwner {
            piece,
            current: turn.current(),
        });
    }

    state.turn_mut().select(Some(piece));
    Ok(ActionOutcome::Selected(piece))
}

fn move_selected(state: &mut GameState) -> Result<ActionOutcome, RuleError> {
    let turn = state.turn();
    let phase = turn.phase();
    let Some(dice) = turn.dice().filter(|_| phase == TurnPhase::AwaitingMove) else {
        return Err(RuleError::phase(Action::Move, phase));
    };
    let piece = turn.selected().ok_or(RuleError::NoSelection)?;

    let from = state.piece(piece).state();
    let to = advance(piece.player(), from, dice)?;

    state.place_piece(piece, to);
    state.turn_mut().set_moved(piece);

    debug!(%piece, %from, %to, steps = dice.sum(), "moved");
    if to.is_finished() && state.player(piece.player()).has_won() {
        debug!(winner = %piece.player(), turn = state.turn_number(), "won");
    }
    Ok(ActionOutcome::Moved { piece, from, to })
}

fn capture(state: &mut GameState) -> Result<ActionOutcome, RuleError> {
    let turn = state.turn();
    let Some(mover) = turn.moved_piece() else {
        return Err(RuleError::phase(Action::Capture, turn.phase()));
    };

    let captured = capture_targets(state, mover);
    for &victim in &captured {
        state.place_piece(victim, PieceState::Home);
        debug!(%mover, %victim, "captured");
    }

    Ok(ActionOutcome::Captured(captured))
}

fn finish_turn(state: &mut GameState, action: Action) -> ActionOutcome {
    let player = state.current_player();
    let bonus = state.turn().bonus_roll();
    let next = if bonus { player } else { player.next() };

    state.record_action(player, action);
    state.advance_turn(next);

    debug!(%player, %next, bonus, turn = state.turn_number(), "turn ended");
    ActionOutcome::TurnEnded { next, bonus }
}

fn end_turn(state: &mut GameState) -> Result<ActionOutcome, RuleError> {
    let phase = state.turn().phase();
    if phase != TurnPhase::AwaitingEndTurn {
        return Err(RuleError::phase(Action::EndTurn, phase));
    }
    Ok(finish_turn(state, Action::EndTurn))
}

fn pass(state: &mut GameState) -> Result<ActionOutcome, RuleError> {
    let phase = state.turn().phase();
    if phase != TurnPhase::AwaitingMove {
        return Err(RuleError::phase(Action::Pass, phase));
    }
    if !legal_moves(state).is_empty() {
        return Err(RuleError::MoveAvailable {
            player: state.current_player(),
        });
    }
    Ok(finish_turn(state, Action::Pass))
}

impl<D: DiceSource> RulesEngine for LudoRules<D> {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        let turn = state.turn();
        let player = turn.current();
        let mut actions = Vec::new();

        match turn.phase() {
            TurnPhase::AwaitingRoll => actions.push(Action::Roll),
            TurnPhase::AwaitingMove => {
                let moves = legal_moves(state);
                if moves.is_empty() {
                    actions.push(Action::Pass);
                } else if turn.selected().is_some_and(|s| moves.iter().any(|m| m.piece == s)) {
                    actions.push(Action::Move);
                }
            }
            TurnPhase::AwaitingEndTurn => {
                actions.push(Action::Capture);
                actions.push(Action::EndTurn);
            }
        }

        actions.extend(PieceId::all_of(player).map(Action::Select));
        if turn.selected().is_some() {
            actions.push(Action::Deselect);
        }

        actions
    }

    fn apply_action(&mut self, state: &mut GameState, action: &Action) -> Result<ActionOutcome, RuleError> {
        let player = state.current_player();

        let outcome = match *action {
            Action::Roll => self.roll(state)?,
            Action::Select(piece) => select(state, piece)?,
            Action::Deselect => {
                state.turn_mut().select(None);
                ActionOutcome::Deselected
            }
            Action::Move => move_selected(state)?,
            Action::Capture => capture(state)?,
            // Handoffs record themselves before the turn state is cleared.
            Action::EndTurn => return end_turn(state),
            Action::Pass => return pass(state),
        };

        state.record_action(player, *action);
        Ok(outcome)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner().map(|winner| GameResult { winner })
    }
}
