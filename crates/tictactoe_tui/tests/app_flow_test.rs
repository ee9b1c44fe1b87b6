//! Key-driven flows through the front-end, backed by real save files.

use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use tictactoe_engine::{Cell, JsonFileStore, Player, Snapshot, SnapshotStore};
use tictactoe_tui::{App, Mode, TuiConfig, ui};

fn app() -> App {
    App::with_rng(TuiConfig::default(), StdRng::seed_from_u64(3))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

fn clear_input(app: &mut App) {
    for _ in 0..256 {
        app.handle_key(KeyCode::Backspace);
    }
}

/// Opens the start prompt and answers both guesses.
fn start_with_guesses(app: &mut App, one: &str, two: &str) {
    app.handle_key(KeyCode::Char('s'));
    assert!(matches!(app.mode(), Mode::Guess { .. }));
    type_text(app, one);
    app.handle_key(KeyCode::Enter);
    type_text(app, two);
    app.handle_key(KeyCode::Enter);
    assert!(matches!(app.mode(), Mode::Board));
}

fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn screen_text(app: &App) -> String {
    render(app).content().iter().map(|cell| cell.symbol()).collect()
}

/// Counts rendered `marker` glyphs drawn in red.
fn red_marks(app: &App, marker: &str) -> usize {
    render(app)
        .content()
        .iter()
        .filter(|cell| cell.symbol() == marker && cell.fg == Color::Red)
        .count()
}

/// Starts with invalid guesses (O moves first) and lets O take the top row.
fn win_top_row_for_o(app: &mut App) {
    start_with_guesses(app, "", "");
    for key in ['1', '4', '2', '5', '3'] {
        app.handle_key(KeyCode::Char(key));
    }
}

#[test]
fn test_initial_status() {
    let app = app();
    assert_eq!(app.status(), "Press Start to begin.");
    assert_eq!(app.start_label(), "Start");
    assert!(!app.session().running());
}

#[test]
fn test_invalid_guesses_default_to_player_one() {
    let mut app = app();
    start_with_guesses(&mut app, "banana", "3");
    assert!(app.session().running());
    assert_eq!(app.session().current_player(), Player::O);
    assert_eq!(
        app.status(),
        "Invalid guesses. Defaulting Player 1 to start. O's turn"
    );
}

#[test]
fn test_equal_guesses_tie_to_player_one() {
    let mut app = app();
    start_with_guesses(&mut app, "5", "5");
    assert_eq!(app.session().current_player(), Player::O);
    assert!(app.status().contains("Tie! Player 1 starts (O)!"));
}

#[test]
fn test_cancelled_tie_break_changes_nothing() {
    let mut app = app();
    app.handle_key(KeyCode::Char('s'));
    type_text(&mut app, "2");
    app.handle_key(KeyCode::Esc);
    assert!(matches!(app.mode(), Mode::Board));
    assert!(!app.session().running());
    assert!(app.session().board().is_clear());
}

#[test]
fn test_play_to_win_then_restart_with_winner() {
    let mut app = app();
    win_top_row_for_o(&mut app);
    assert_eq!(app.status(), "O wins!");
    assert!(!app.session().running());
    assert_eq!(app.session().last_winner(), Some(Player::O));

    // No tie-break this time: the winner starts.
    app.handle_key(KeyCode::Char('s'));
    assert!(matches!(app.mode(), Mode::Board));
    assert!(app.session().running());
    assert!(app.session().board().is_clear());
    assert_eq!(app.status(), "O's turn");
}

#[test]
fn test_stop_keeps_board() {
    let mut app = app();
    start_with_guesses(&mut app, "x", "x");
    app.handle_key(KeyCode::Enter);
    app.handle_key(KeyCode::Char('s'));
    assert_eq!(app.status(), "Game stopped.");
    assert_eq!(app.session().board().get(app.cursor()), Cell::O);

    app.handle_key(KeyCode::Char('9'));
    assert_eq!(app.session().board().cell(8), Some(Cell::Empty));
}

#[test]
fn test_new_file_then_autosave() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tic-tac-toe.json");
    let mut app = app();

    app.handle_key(KeyCode::Char('n'));
    clear_input(&mut app);
    type_text(&mut app, path.to_str().unwrap());
    app.handle_key(KeyCode::Enter);

    assert_eq!(app.save_path(), Some(path.as_path()));
    assert!(app.session().running());
    assert_eq!(app.session().current_player(), Player::X);

    let store = JsonFileStore::new(&path);
    assert_eq!(store.load().unwrap(), app.session().export_snapshot());

    app.handle_key(KeyCode::Char('5'));
    let saved = store.load().unwrap();
    assert_eq!(saved.board().cell(4), Some(Cell::X));
    assert_eq!(*saved.current_player(), Player::O);

    // Ignored moves do not rewrite the file.
    std::fs::remove_file(&path).unwrap();
    app.handle_key(KeyCode::Char('5'));
    assert!(!path.exists());
}

#[test]
fn test_open_file_loads_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.json");
    let store = JsonFileStore::new(&path);
    let mut finished = tictactoe_engine::GameSession::new();
    finished.new_game();
    for cell in [0, 3, 1, 4, 2] {
        finished.apply_move(cell);
    }
    store.save(&finished.export_snapshot()).unwrap();

    let mut app = app();
    app.open_game_file(path.clone());
    assert_eq!(app.status(), "Game Over");
    assert_eq!(app.session().export_snapshot(), finished.export_snapshot());
    assert_eq!(app.save_path(), Some(path.as_path()));
    // A loaded win does not count as a recorded winner.
    assert_eq!(app.session().last_winner(), None);
}

#[test]
fn test_open_missing_file_reports_and_keeps_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app();
    start_with_guesses(&mut app, "", "");
    app.handle_key(KeyCode::Char('1'));
    let before = app.session().export_snapshot();

    app.open_game_file(dir.path().join("missing.json"));
    assert!(app.status().contains("could not be accessed"));
    assert_eq!(app.session().export_snapshot(), before);
    assert_eq!(app.save_path(), None);
}

#[test]
fn test_open_malformed_file_keeps_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"board":[],"currentPlayer":"X","running":true}"#).unwrap();

    let mut app = app();
    app.open_game_file(path);
    assert!(app.status().starts_with("Malformed snapshot"));
    assert!(!app.session().running());
    assert!(app.session().board().is_clear());
}

#[test]
fn test_dismissed_file_prompt_changes_nothing() {
    let mut app = app();
    app.handle_key(KeyCode::Char('o'));
    assert!(matches!(app.mode(), Mode::Path { .. }));
    app.handle_key(KeyCode::Esc);
    assert!(matches!(app.mode(), Mode::Board));
    assert_eq!(app.save_path(), None);
    assert!(!app.should_quit());
}

#[test]
fn test_new_file_in_missing_directory_keeps_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app();
    app.create_game_file(dir.path().join("no").join("such").join("dir.json"));
    assert!(!app.session().running());
    assert_eq!(app.save_path(), None);
    assert!(app.status().contains("could not be accessed"));
}

#[test]
fn test_saved_file_matches_snapshot_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.json");
    let mut app = app();
    app.create_game_file(path.clone());
    app.handle_key(KeyCode::Char('1'));

    let text = std::fs::read_to_string(&path).unwrap();
    let snapshot = Snapshot::from_json(&text).unwrap();
    assert_eq!(snapshot.board().cell(0), Some(Cell::X));
    assert!(text.contains("\"currentPlayer\": \"O\""));
}

#[test]
fn test_render_shows_board_and_status() {
    let mut app = app();
    start_with_guesses(&mut app, "", "");
    app.handle_key(KeyCode::Char('5'));

    let screen = screen_text(&app);
    assert!(screen.contains("Tic-Tac-Toe"));
    assert!(screen.contains("X's turn"));
    assert!(screen.contains(" O "));
    assert!(screen.contains("[s] Clear"));
}

#[test]
fn test_render_prompt_shows_input() {
    let mut app = app();
    app.handle_key(KeyCode::Char('s'));
    type_text(&mut app, "4");

    let screen = screen_text(&app);
    assert!(screen.contains("Player 1, guess a number from 1 to 6:"));
    assert!(screen.contains("> 4_"));
}

#[test]
fn test_quit() {
    let mut app = app();
    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_render_highlights_whole_winning_line() {
    let mut app = app();
    win_top_row_for_o(&mut app);
    // The cursor sits on the cell that completed the line.
    assert_eq!(app.cursor().to_index(), 2);
    assert_eq!(red_marks(&app, "O"), 3);
    assert_eq!(red_marks(&app, "X"), 0);
}

#[test]
fn test_opening_file_clears_highlight() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("finished.json");
    let mut app = app();
    win_top_row_for_o(&mut app);
    JsonFileStore::new(&path)
        .save(&app.session().export_snapshot())
        .unwrap();
    assert_eq!(red_marks(&app, "O"), 3);

    app.open_game_file(path);
    assert_eq!(app.status(), "Game Over");
    assert_eq!(app.session().winning_line(), None);
    assert_eq!(red_marks(&app, "O"), 0);
}

#[test]
fn test_dismissed_file_prompt_keeps_result_message() {
    let mut app = app();
    win_top_row_for_o(&mut app);
    app.handle_key(KeyCode::Char('o'));
    assert_eq!(app.status(), "Open game file:");
    app.handle_key(KeyCode::Esc);
    assert_eq!(app.status(), "O wins!");

    app.handle_key(KeyCode::Char('n'));
    app.handle_key(KeyCode::Esc);
    assert_eq!(app.status(), "O wins!");
}
