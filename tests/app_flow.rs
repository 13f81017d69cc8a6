mod common;

use common::{press, type_text};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use user_entry::config::Config;
use user_entry::export::UserExport;
use user_entry::form::User;
use user_entry::ui::app::App;
use user_entry::ui::input::handle_key;
use user_entry::ui::render::draw;

fn enter_user(app: &mut App, name: &str, age: &str) {
    for key in type_text(name) {
        handle_key(app, key);
    }
    handle_key(app, press(KeyCode::Tab));
    for key in type_text(age) {
        handle_key(app, key);
    }
    handle_key(app, press(KeyCode::Enter));
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn accepted_submission_lands_in_users_list() {
    let mut app = App::new(&Config::default());
    enter_user(&mut app, "Max", "30");

    assert_eq!(app.users().len(), 1);
    assert_eq!(app.users()[0].name, "Max");
    assert_eq!(app.users()[0].age, "30");
    assert!(app.form().name_input().is_empty());

    let text = screen(&app);
    assert!(text.contains("Max (30 years old)"));
    assert!(text.contains("1 user added"));
}

#[test]
fn rejected_submission_shows_overlay_and_adds_nothing() {
    let mut app = App::new(&Config::default());
    enter_user(&mut app, "Max", "0");

    assert!(app.users().is_empty());
    let text = screen(&app);
    assert!(text.contains("Invalid age"));
    assert!(text.contains("Okay"));

    handle_key(&mut app, press(KeyCode::Enter));
    assert!(app.form().error().is_none());
    assert!(!screen(&app).contains("Okay"));
}

#[test]
fn ctrl_q_quits_even_with_overlay() {
    let mut app = App::new(&Config::default());
    handle_key(&mut app, press(KeyCode::Enter));
    assert!(app.form().error().is_some());

    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}

#[test]
fn paste_fills_focused_field() {
    let mut app = App::new(&Config::default());
    app.on_paste("Anna");
    assert_eq!(app.form().name_input().value(), "Anna");
}

#[test]
fn users_are_exported_as_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.jsonl");
    let export = UserExport::open(&path).unwrap();
    let mut app = App::new(&Config::default()).with_export(export);

    enter_user(&mut app, "Max", "30");
    enter_user(&mut app, "Anna", "28");
    enter_user(&mut app, "", "");

    let content = std::fs::read_to_string(&path).unwrap();
    let exported: Vec<User> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(exported, app.users());
    assert!(app.last_export_error().is_none());
}

#[test]
fn lenient_config_reaches_the_form() {
    let mut config = Config::default();
    config.validation.age_policy = user_entry::form::AgePolicy::Lenient;
    let mut app = App::new(&config);

    // The age field accepts 'e' for exponents, but on its own it is not a number
    enter_user(&mut app, "Max", "e");
    assert_eq!(app.users().len(), 1);
}
