//! Application state and logic.

use crate::config::TuiConfig;
use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tictactoe_engine::{
    DiceTieBreak, GameSession, JsonFileStore, MoveOutcome, PendingRestart, Player, Position,
    RestartStep, SnapshotStore, TieBreakOutcome, Toggle,
};
use tracing::{debug, info, instrument, warn};

/// Why the path prompt is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPurpose {
    /// Create a fresh save file and start a game in it.
    New,
    /// Load an existing save file.
    Open,
}

/// What the keyboard is currently driving.
#[derive(Debug)]
pub enum Mode {
    /// Playing on the board.
    Board,
    /// Collecting the two tie-break guesses.
    Guess {
        /// Player one's guess, once entered.
        first: Option<String>,
        /// Text typed so far.
        input: String,
        /// Restart waiting for the outcome.
        pending: PendingRestart,
    },
    /// Typing a save file path.
    Path {
        /// What the path is for.
        purpose: PathPurpose,
        /// Text typed so far.
        input: String,
        /// Status shown before the prompt opened.
        previous_status: String,
    },
}

/// Main application state.
pub struct App {
    session: GameSession,
    store: Option<JsonFileStore>,
    tie_break: DiceTieBreak<StdRng>,
    config: TuiConfig,
    mode: Mode,
    cursor: Position,
    status: String,
    should_quit: bool,
}

impl App {
    /// Creates the application with an OS-seeded die.
    pub fn new(config: TuiConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates the application with the given die.
    #[instrument(skip(rng))]
    pub fn with_rng(config: TuiConfig, rng: StdRng) -> Self {
        let tie_break = DiceTieBreak::new(rng, *config.tie_break_default());
        Self {
            session: GameSession::new(),
            store: None,
            tie_break,
            config,
            mode: Mode::Board,
            cursor: Position::Center,
            status: "Press Start to begin.".to_string(),
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The keyboard mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The save file every change is written to, if one is attached.
    pub fn save_path(&self) -> Option<&std::path::Path> {
        self.store.as_ref().map(JsonFileStore::path)
    }

    /// Label of the start/stop toggle.
    pub fn start_label(&self) -> &'static str {
        if self.session.running() { "Clear" } else { "Start" }
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.mode {
            Mode::Board => self.handle_board_key(key),
            Mode::Guess { .. } => self.handle_guess_key(key),
            Mode::Path { .. } => self.handle_path_key(key),
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor.to_index()),
            KeyCode::Char('s') => self.toggle(),
            KeyCode::Char('n') => self.prompt_path(PathPurpose::New),
            KeyCode::Char('o') => self.prompt_path(PathPurpose::Open),
            KeyCode::Char(c) => {
                if let Some(index) = digit_cell(c) {
                    self.place(index);
                }
            }
            _ => {}
        }
    }

    fn handle_guess_key(&mut self, key: KeyCode) {
        let Mode::Guess { first, input, .. } = &mut self.mode else {
            return;
        };
        match key {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Enter if first.is_none() => {
                *first = Some(std::mem::take(input));
                self.status = "Player 2, guess a number from 1 to 6:".to_string();
            }
            KeyCode::Enter => {
                let guess_two = std::mem::take(input);
                let guess_one = first.take().unwrap_or_default();
                if let Mode::Guess { pending, .. } =
                    std::mem::replace(&mut self.mode, Mode::Board)
                {
                    self.finish_tie_break(pending, &guess_one, &guess_two);
                }
            }
            KeyCode::Esc => {
                debug!("Tie-break abandoned");
                self.mode = Mode::Board;
                self.status = "Start cancelled.".to_string();
            }
            _ => {}
        }
    }

    fn handle_path_key(&mut self, key: KeyCode) {
        let Mode::Path {
            purpose,
            input,
            previous_status,
        } = &mut self.mode
        else {
            return;
        };
        match key {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Enter => {
                let purpose = *purpose;
                let path = PathBuf::from(input.trim());
                self.mode = Mode::Board;
                match purpose {
                    PathPurpose::New => self.create_game_file(path),
                    PathPurpose::Open => self.open_game_file(path),
                }
            }
            KeyCode::Esc => {
                debug!("File prompt dismissed");
                self.status = std::mem::take(previous_status);
                self.mode = Mode::Board;
            }
            _ => {}
        }
    }

    /// Plays the current player's mark at `index`; ignored moves do nothing.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize) {
        let outcome = self.session.apply_move(index);
        match outcome {
            MoveOutcome::Ignored => return,
            MoveOutcome::Continue { next } => self.status = format!("{}'s turn", next),
            MoveOutcome::Won { player, .. } => self.status = format!("{} wins!", player),
            MoveOutcome::Draw => self.status = "Draw!".to_string(),
        }
        if let Some(pos) = Position::from_index(index) {
            self.cursor = pos;
        }
        self.autosave();
    }

    /// The start/stop button.
    #[instrument(skip(self))]
    pub fn toggle(&mut self) {
        match self.session.begin_restart() {
            RestartStep::Done(toggle) => {
                self.status = match toggle {
                    Toggle::Stopped => "Game stopped.".to_string(),
                    Toggle::Started { starter } => format!("{}'s turn", starter),
                };
                self.autosave();
            }
            RestartStep::AwaitingStarter(pending) => {
                self.status = "Player 1, guess a number from 1 to 6:".to_string();
                self.mode = Mode::Guess {
                    first: None,
                    input: String::new(),
                    pending,
                };
            }
        }
    }

    fn finish_tie_break(&mut self, pending: PendingRestart, guess_one: &str, guess_two: &str) {
        let outcome = self.tie_break.decide(guess_one, guess_two);
        self.session.complete_restart(pending, outcome.starter());
        let report = tie_break_report(&outcome, self.tie_break.default_player());
        self.status = format!("{} {}", report, self.turn_status());
        self.autosave();
    }

    fn prompt_path(&mut self, purpose: PathPurpose) {
        let suggested = self
            .save_path()
            .unwrap_or(self.config.snapshot_path().as_path())
            .display()
            .to_string();
        let prompt = match purpose {
            PathPurpose::New => "Save new game as:".to_string(),
            PathPurpose::Open => "Open game file:".to_string(),
        };
        let previous_status = std::mem::replace(&mut self.status, prompt);
        self.mode = Mode::Path {
            purpose,
            input: suggested,
            previous_status,
        };
    }

    /// Starts a new game in a fresh save file.
    ///
    /// The file is written before anything changes; if that fails the
    /// current game and save target stay as they were.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn create_game_file(&mut self, path: PathBuf) {
        let store = JsonFileStore::new(path).with_pretty(*self.config.pretty());
        let mut next = self.session.clone();
        next.new_game();
        match store.save(&next.export_snapshot()) {
            Ok(()) => {
                info!("New game file created");
                self.session = next;
                self.store = Some(store);
                self.cursor = Position::Center;
                self.status = self.turn_status();
            }
            Err(e) => {
                warn!(error = %e, "Could not create game file");
                self.status = e.to_string();
            }
        }
    }

    /// Loads a save file and keeps saving to it.
    ///
    /// A file that cannot be read or decoded changes nothing.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn open_game_file(&mut self, path: PathBuf) {
        let store = JsonFileStore::new(path).with_pretty(*self.config.pretty());
        match store.load() {
            Ok(snapshot) => {
                self.session.load_snapshot(snapshot);
                self.store = Some(store);
                self.cursor = Position::Center;
                self.status = if self.session.running() {
                    self.turn_status()
                } else {
                    "Game Over".to_string()
                };
            }
            Err(e) => {
                warn!(error = %e, "Could not open game file");
                self.status = e.to_string();
            }
        }
    }

    fn turn_status(&self) -> String {
        if self.session.running() {
            format!("{}'s turn", self.session.current_player())
        } else {
            "Press Start to begin.".to_string()
        }
    }

    fn autosave(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.save(&self.session.export_snapshot()) {
            warn!(error = %e, "Autosave failed");
            self.status = format!("{} (save failed: {})", self.status, e);
        }
    }
}

/// Describes a settled tie-break the way the players hear it.
fn tie_break_report(outcome: &TieBreakOutcome, player_one: Player) -> String {
    match outcome {
        TieBreakOutcome::InvalidGuesses { .. } => {
            "Invalid guesses. Defaulting Player 1 to start.".to_string()
        }
        TieBreakOutcome::Rolled { roll, starter, tie } => {
            let who = if *tie {
                format!("Tie! Player 1 starts ({})!", starter)
            } else if *starter == player_one {
                format!("Player 1 starts ({})!", starter)
            } else {
                format!("Player 2 starts ({})!", starter)
            };
            format!("Rolled a {}! {}", roll, who)
        }
    }
}
