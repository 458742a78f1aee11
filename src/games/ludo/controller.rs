//! Turn controller: the command and query surface a front-end drives.
//!
//! Commands follow the UI contract: rejected commands return `false` (or are
//! silently ignored) and leave the state untouched, so the player can try
//! something else. Use [`LudoGame::apply`] to get the reason instead.

use tracing::trace;

use crate::core::{
    Action, ActionRecord, DicePair, DiceSource, GameConfig, GameRng, GameState, Piece, PieceId,
    PieceState, Player, PlayerColor, PlayerId, PlayerMap, TurnPhase,
};
use crate::rules::{ActionOutcome, Captured, GameResult, RuleError, RulesEngine};

use super::rules::{self, LegalMoves, LudoRules};
use super::view::GameSnapshot;

/// A game in progress: rules, dice and state together.
#[derive(Clone, Debug)]
pub struct LudoGame<D = GameRng> {
    rules: LudoRules<D>,
    state: GameState,
}

/// Builder for creating a LudoGame.
#[derive(Clone, Debug, Default)]
pub struct LudoGameBuilder {
    config: GameConfig,
    placements: Vec<(PieceId, PieceState)>,
}

impl LudoGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn starting_player(mut self, player: PlayerId) -> Self {
        self.config.starting_player = player;
        self
    }

    pub fn record_history(mut self, record: bool) -> Self {
        self.config.record_history = record;
        self
    }

    /// Start a piece somewhere other than home.
    pub fn with_piece(mut self, piece: PieceId, state: PieceState) -> Self {
        self.placements.push((piece, state));
        self
    }

    /// Build with seeded dice.
    pub fn build(self) -> LudoGame<GameRng> {
        let dice = GameRng::new(self.config.seed);
        self.build_with_dice(dice)
    }

    /// Build with the given dice source.
    pub fn build_with_dice<D: DiceSource>(self, dice: D) -> LudoGame<D> {
        let mut state = GameState::new(&self.config);
        for (piece, piece_state) in self.placements {
            state.place_piece(piece, piece_state);
        }
        LudoGame {
            rules: LudoRules::new(self.config, dice),
            state,
        }
    }
}

impl LudoGame<GameRng> {
    /// New game with seeded dice.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        LudoGameBuilder::new().config(config).build()
    }
}

impl<D: DiceSource> LudoGame<D> {
    /// New game rolling with the given dice source.
    pub fn with_dice(config: GameConfig, dice: D) -> Self {
        LudoGameBuilder::new().config(config).build_with_dice(dice)
    }

    /// Apply an action, reporting why it was rejected.
    ///
    /// # Panics
    ///
    /// Panics if the resulting state breaks an invariant.
    pub fn apply(&mut self, action: Action) -> Result<ActionOutcome, RuleError> {
        let result = self.rules.apply_action(&mut self.state, &action);
        if let Err(err) = &result {
            trace!(player = %self.state.current_player(), %action, %err, "rejected");
        }
        self.state.assert_invariants();
        result
    }

    // === Commands ===

    /// Roll both dice. `false` if already rolled this turn.
    pub fn roll_dice(&mut self) -> bool {
        self.apply(Action::Roll).is_ok()
    }

    /// Select a piece to move, before or after rolling. Ignored for another
    /// player's piece.
    pub fn select_piece(&mut self, piece: PieceId) {
        let _ = self.apply(Action::Select(piece));
    }

    /// Clear the selection.
    pub fn deselect_piece(&mut self) {
        let _ = self.apply(Action::Deselect);
    }

    /// Move the selected piece by the dice sum.
    ///
    /// `false` when nothing is selected, the phase is wrong, or the move is
    /// illegal; the player may then pick another piece.
    pub fn move_selected_piece(&mut self) -> bool {
        self.apply(Action::Move).is_ok()
    }

    /// Send opponents on the moved piece's ring cell home.
    ///
    /// Call right after a successful move. Returns the captured pieces; empty
    /// when nothing was captured or no move was made.
    pub fn check_and_remove_opponent_piece(&mut self) -> Captured {
        match self.apply(Action::Capture) {
            Ok(ActionOutcome::Captured(captured)) => captured,
            _ => Captured::new(),
        }
    }

    /// Move the selected piece and resolve captures in one step.
    ///
    /// `None` if the move was rejected.
    pub fn play_selected_piece(&mut self) -> Option<Captured> {
        self.move_selected_piece()
            .then(|| self.check_and_remove_opponent_piece())
    }

    /// End the turn after moving. A double keeps the turn for another roll.
    pub fn end_turn(&mut self) -> bool {
        self.apply(Action::EndTurn).is_ok()
    }

    /// Give up the turn when no piece can move with the dice rolled.
    pub fn pass_turn(&mut self) -> bool {
        self.apply(Action::Pass).is_ok()
    }

    // === Queries ===

    pub fn config(&self) -> &GameConfig {
        self.rules.config()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn dice_source(&self) -> &D {
        self.rules.dice_source()
    }

    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    pub fn current_player_color(&self) -> PlayerColor {
        self.current_player().color()
    }

    pub fn current_player_name(&self) -> &'static str {
        self.current_player_color().name()
    }

    pub fn dice(&self) -> Option<DicePair> {
        self.state.turn().dice()
    }

    pub fn dice1(&self) -> Option<u8> {
        self.dice().map(DicePair::first)
    }

    pub fn dice2(&self) -> Option<u8> {
        self.dice().map(DicePair::second)
    }

    pub fn has_rolled(&self) -> bool {
        self.state.turn().has_rolled()
    }

    pub fn has_moved(&self) -> bool {
        self.state.turn().has_moved()
    }

    pub fn has_bonus_roll(&self) -> bool {
        self.state.turn().bonus_roll()
    }

    pub fn selected_piece(&self) -> Option<PieceId> {
        self.state.turn().selected()
    }

    pub fn turn_number(&self) -> u32 {
        self.state.turn_number()
    }

    pub fn phase(&self) -> TurnPhase {
        self.state.turn().phase()
    }

    pub fn players(&self) -> &PlayerMap<Player> {
        self.state.players()
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        self.state.piece(id)
    }

    /// Moves available to the current player with the dice showing.
    pub fn legal_moves(&self) -> LegalMoves {
        rules::legal_moves(&self.state)
    }

    /// Every action the current player may take now.
    pub fn legal_actions(&self) -> Vec<Action> {
        self.rules.legal_actions(&self.state)
    }

    /// The first player to bring all four pieces home.
    pub fn winner(&self) -> Option<PlayerId> {
        self.result().map(|r| r.winner)
    }

    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.state.history().iter()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state)
    }
}
