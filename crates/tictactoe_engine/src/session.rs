//! Mutable game session.
//!
//! [`GameSession`] owns the one live game: the board, whose turn it is,
//! whether a game is running and who won last. Every state change goes
//! through the operations here; the rules themselves live in
//! [`rules`](crate::rules).

use crate::rules::{WinResult, evaluate_winner, is_draw, next_player};
use crate::tiebreak::StartingPlayerDecider;
use crate::{Board, Cell, Player, Position, Snapshot};
use tracing::{debug, info, instrument};

/// What a call to [`GameSession::apply_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was not legal (game not running, cell taken or off the
    /// board). Nothing changed.
    Ignored,
    /// The mark was placed and play passes to `next`.
    Continue {
        /// Player to move now.
        next: Player,
    },
    /// The mark completed `line`.
    Won {
        /// The winner.
        player: Player,
        /// The completed line.
        line: [Position; 3],
    },
    /// The board filled up without a winner.
    Draw,
}

impl MoveOutcome {
    /// Returns true if the board changed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored)
    }
}

/// Result of the start/stop toggle once it has fully resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// A running game was stopped; the board was kept as it was.
    Stopped,
    /// A new game started with `starter` to move.
    Started {
        /// Player moving first.
        starter: Player,
    },
}

/// First half of a start/stop toggle.
#[derive(Debug, PartialEq, Eq)]
pub enum RestartStep {
    /// The toggle finished without outside input.
    Done(Toggle),
    /// A new game needs a starting player from the tie-break. Hand the token
    /// back to [`GameSession::complete_restart`] with the decision; dropping
    /// it abandons the restart and leaves the session as it is.
    AwaitingStarter(PendingRestart),
}

/// Proof that a restart is waiting for its starting player.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending restart does nothing until it is completed"]
pub struct PendingRestart {
    _private: (),
}

/// Lifecycle phase, inferred from the session fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Not running and nothing on the board to look at.
    Idle,
    /// A game is running.
    InProgress,
    /// Not running, with a played board or a recorded winner.
    Finished,
}

/// The single live game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    running: bool,
    last_winner: Option<Player>,
    winning_line: Option<[Position; 3]>,
}

impl GameSession {
    /// Creates an idle session with an empty board and X as the placeholder
    /// current player.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            running: false,
            last_winner: None,
            winning_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move. Only meaningful while running.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true while a game is in progress.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Winner of the most recently won game, if any.
    pub fn last_winner(&self) -> Option<Player> {
        self.last_winner
    }

    /// Line to highlight after a win.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// Infers the lifecycle phase.
    pub fn phase(&self) -> Phase {
        if self.running {
            Phase::InProgress
        } else if self.last_winner.is_some() || !self.board.is_clear() {
            Phase::Finished
        } else {
            Phase::Idle
        }
    }

    /// Places the current player's mark at `cell_index` (0-8).
    ///
    /// Illegal moves are ignored rather than reported as errors: a stray click
    /// on a taken cell or a stopped game simply does nothing.
    #[instrument(skip(self), fields(player = %self.current_player, running = self.running))]
    pub fn apply_move(&mut self, cell_index: usize) -> MoveOutcome {
        let Some(pos) = Position::from_index(cell_index) else {
            debug!("Cell index off the board, ignoring");
            return MoveOutcome::Ignored;
        };
        if !self.running || !self.board.is_empty(pos) {
            debug!("Move not legal right now, ignoring");
            return MoveOutcome::Ignored;
        }

        let player = self.current_player;
        self.board.set(pos, Cell::from(player));

        if let WinResult::Winner { player, line } = evaluate_winner(&self.board) {
            info!(winner = %player, ?line, "Game won");
            self.running = false;
            self.last_winner = Some(player);
            self.winning_line = Some(line);
            return MoveOutcome::Won { player, line };
        }

        if is_draw(&self.board) {
            info!("Game drawn");
            self.running = false;
            return MoveOutcome::Draw;
        }

        self.current_player = next_player(player);
        MoveOutcome::Continue {
            next: self.current_player,
        }
    }

    /// Start/stop toggle for callers that can answer the tie-break on the spot.
    ///
    /// Stops a running game, otherwise starts a fresh one. The starting player
    /// is the last winner if there is one, otherwise `decider` is asked.
    #[instrument(skip(self, decider))]
    pub fn start_or_restart<D>(&mut self, decider: &mut D) -> Toggle
    where
        D: StartingPlayerDecider + ?Sized,
    {
        match self.begin_restart() {
            RestartStep::Done(toggle) => toggle,
            RestartStep::AwaitingStarter(pending) => {
                let starter = decider.decide_starting_player();
                self.complete_restart(pending, starter)
            }
        }
    }

    /// First half of the start/stop toggle.
    ///
    /// A running game is stopped on the spot. Otherwise, with a previous
    /// winner the new game starts right away; without one the board is left
    /// untouched and a [`PendingRestart`] is returned for
    /// [`complete_restart`](Self::complete_restart).
    #[instrument(skip(self), fields(running = self.running, last_winner = ?self.last_winner))]
    pub fn begin_restart(&mut self) -> RestartStep {
        if self.running {
            info!("Game stopped");
            self.running = false;
            return RestartStep::Done(Toggle::Stopped);
        }

        match self.last_winner {
            Some(winner) => RestartStep::Done(self.start_fresh(winner)),
            None => {
                debug!("No previous winner, waiting for tie-break");
                RestartStep::AwaitingStarter(PendingRestart { _private: () })
            }
        }
    }

    /// Second half of the start/stop toggle: starts a fresh game with
    /// `starter` to move.
    #[instrument(skip(self, pending))]
    pub fn complete_restart(&mut self, pending: PendingRestart, starter: Player) -> Toggle {
        let PendingRestart { _private: () } = pending;
        self.start_fresh(starter)
    }

    /// Starts a game for a brand-new save file: empty board, X to move,
    /// running. The last winner is left alone and no tie-break is held.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!("New game file started");
        self.board = Board::new();
        self.current_player = Player::X;
        self.running = true;
        self.winning_line = None;
    }

    /// Projects the persisted fields.
    pub fn export_snapshot(&self) -> Snapshot {
        Snapshot::new(self.board, self.current_player, self.running)
    }

    /// Replaces the board, current player and running flag with the
    /// snapshot's. The last winner is kept; any win highlight is dropped.
    #[instrument(skip(self))]
    pub fn load_snapshot(&mut self, snapshot: Snapshot) {
        info!(running = *snapshot.running(), "Snapshot loaded");
        self.board = *snapshot.board();
        self.current_player = *snapshot.current_player();
        self.running = *snapshot.running();
        self.winning_line = None;
    }

    fn start_fresh(&mut self, starter: Player) -> Toggle {
        info!(%starter, "Game started");
        self.board = Board::new();
        self.current_player = starter;
        self.running = true;
        self.winning_line = None;
        Toggle::Started { starter }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
