// TUI tests against ratatui's TestBackend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dsplay::config::ResolvedConfig;
use dsplay::playground::Playground;
use dsplay::presentation::Phase;
use dsplay::structure::StructureKind;
use dsplay::ui::App;
use ratatui::{backend::TestBackend, Terminal};

fn app(kind: StructureKind) -> App {
    App::new(Playground::new(kind), &ResolvedConfig::default())
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn draw(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_enter_pushes_and_clears_input() {
    let mut app = app(StructureKind::Stack);
    type_text(&mut app, "42");
    press(&mut app, KeyCode::Enter);

    assert!(app.input.is_empty());
    assert_eq!(app.playground.snapshot().values(), vec!["42"]);
    assert_eq!(app.status_message, "Pushed 42 to Stack");
    assert!(!app.status_is_error);
}

#[test]
fn test_empty_enter_is_ignored() {
    let mut app = app(StructureKind::Queue);
    press(&mut app, KeyCode::Enter);
    assert!(app.playground.is_empty());
    assert!(app.playground.log().is_empty());
    assert!(app.status_is_error);
}

#[test]
fn test_delete_on_empty_reports_underflow() {
    let mut app = app(StructureKind::Stack);
    press(&mut app, KeyCode::Delete);
    assert_eq!(app.status_message, "Error: Stack Underflow");
    assert!(app.status_is_error);
}

#[test]
fn test_ctrl_l_clears() {
    let mut app = app(StructureKind::LinkedList);
    type_text(&mut app, "a");
    press(&mut app, KeyCode::Enter);
    app.handle_key_event(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
    assert!(app.playground.is_empty());
    assert!(app.playground.log().is_empty());
    assert!(app.input.is_empty());
}

#[test]
fn test_tab_switches_and_resets() {
    let mut app = app(StructureKind::Stack);
    type_text(&mut app, "1");
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "pending");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.playground.kind(), StructureKind::Queue);
    assert!(app.playground.is_empty());
    assert!(app.input.is_empty());
    assert!(app.animator.frame().is_empty());

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.playground.kind(), StructureKind::Stack);
}

#[test]
fn test_new_node_is_entering() {
    let mut app = app(StructureKind::Queue);
    type_text(&mut app, "1");
    press(&mut app, KeyCode::Enter);
    for _ in 0..ResolvedConfig::default().animation_frames {
        app.animator.tick();
    }
    type_text(&mut app, "2");
    press(&mut app, KeyCode::Enter);

    let frame = app.animator.frame();
    assert_eq!(frame[0].phase, Phase::Steady);
    assert_eq!(frame[1].phase, Phase::Entering);
}

#[test]
fn test_render_stack() {
    let mut app = app(StructureKind::Stack);
    for v in ["3", "7"] {
        type_text(&mut app, v);
        press(&mut app, KeyCode::Enter);
    }

    let screen = draw(&mut app);
    assert!(screen.contains("Data Structures Playground"));
    assert!(screen.contains("Stack (LIFO)"));
    assert!(screen.contains("TOP → │ 7 │"));
    assert!(screen.contains("Concept Log"));
    assert!(screen.contains("Pushed 7 to Stack"));
    assert!(screen.contains("2 elements"));
}

#[test]
fn test_render_empty_queue() {
    let mut app = app(StructureKind::Queue);
    let screen = draw(&mut app);
    assert!(screen.contains("Empty Queue"));
    assert!(screen.contains("Enqueue"));
    assert!(screen.contains("(no operations yet)"));
}

#[test]
fn test_render_linked_list_pointer() {
    let mut app = app(StructureKind::LinkedList);
    for v in ["a", "b"] {
        type_text(&mut app, v);
        press(&mut app, KeyCode::Enter);
    }

    let screen = draw(&mut app);
    assert!(screen.contains("HEAD"));
    assert!(screen.contains("──→"));
    assert!(screen.contains("Appended b"));
}
