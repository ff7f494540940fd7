//! Main TUI application state and logic

use crate::config::ResolvedConfig;
use crate::playground::{Effect, Playground, Transition};
use crate::presentation::{describe, Animator};
use crate::structure::StructureKind;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane scrolls with the arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Canvas,
    Log,
}

impl FocusedPane {
    pub fn toggle(self) -> Self {
        match self {
            FocusedPane::Canvas => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Canvas,
        }
    }
}

/// The main application state
pub struct App {
    /// The operation core driven by the UI
    pub playground: Playground,

    /// Enter/exit animation bookkeeping for the canvas
    pub animator: Animator,

    /// Contents of the value input box
    pub input: String,

    /// Pane receiving Up/Down scrolling
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub canvas_scroll: usize,
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    pub status_is_error: bool,

    /// Animation frame interval
    tick: Duration,
    last_tick: Instant,
}

impl App {
    /// Create a new app around a playground
    pub fn new(playground: Playground, config: &ResolvedConfig) -> Self {
        let mut app = App {
            playground,
            animator: Animator::new(config.animation_frames),
            input: String::new(),
            focused_pane: FocusedPane::Canvas,
            canvas_scroll: 0,
            log_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            tick: Duration::from_millis(config.tick_ms),
            last_tick: Instant::now(),
        };
        app.sync_animator();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let timeout = self.tick.saturating_sub(self.last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            if self.last_tick.elapsed() >= self.tick {
                self.animator.tick();
                self.last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Tabs, body, control deck, status bar
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        // Body: canvas (left) | concept log (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(rows[1]);

        let kind = self.playground.kind();

        super::panes::render_tabs(frame, rows[0], kind);

        let nodes = self.animator.frame();
        super::panes::render_canvas_pane(
            frame,
            columns[0],
            super::panes::CanvasRenderData {
                kind,
                nodes: &nodes,
            },
            self.focused_pane == FocusedPane::Canvas,
            &mut self.canvas_scroll,
        );

        super::panes::render_log_pane(
            frame,
            columns[1],
            self.playground.log(),
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        super::panes::render_controls(frame, rows[2], kind, &self.input);

        super::panes::render_status_bar(
            frame,
            rows[3],
            super::panes::StatusRenderData {
                kind,
                message: &self.status_message,
                is_error: self.status_is_error,
                element_count: self.playground.len(),
                is_animating: self.animator.is_animating(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Char('l') if ctrl => {
                let transition = self.playground.clear();
                self.after_transition(&transition);
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                let transition = self.playground.add(&self.input);
                // Keep the text around when it was rejected
                if transition.is_ok() {
                    self.input.clear();
                }
                self.after_transition(&transition);
            }
            KeyCode::Delete => {
                let transition = self.playground.remove();
                self.after_transition(&transition);
            }
            KeyCode::Tab => {
                self.switch_structure(self.playground.kind().next());
            }
            KeyCode::BackTab => {
                self.switch_structure(self.playground.kind().prev());
            }
            KeyCode::F(2) => {
                self.focused_pane = self.focused_pane.toggle();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Canvas => self.canvas_scroll = self.canvas_scroll.saturating_sub(1),
                FocusedPane::Log => self.log_scroll = self.log_scroll.saturating_sub(1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Canvas => self.canvas_scroll = self.canvas_scroll.saturating_add(1),
                FocusedPane::Log => self.log_scroll = self.log_scroll.saturating_add(1),
            },
            KeyCode::PageUp => {
                self.log_scroll = self.log_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                self.log_scroll = self.log_scroll.saturating_add(5);
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    /// Select another structure kind, dropping all state
    pub fn switch_structure(&mut self, kind: StructureKind) {
        self.playground.select_structure(kind);
        self.animator.reset();
        self.sync_animator();
        self.input.clear();
        self.canvas_scroll = 0;
        self.log_scroll = 0;
        self.status_message = format!("Switched to {}", kind.title());
        self.status_is_error = false;
    }

    fn after_transition(&mut self, transition: &Transition) {
        self.status_is_error = transition.result.is_err();
        self.status_message = match (&transition.entry, &transition.result) {
            (Some(entry), _) => entry.message.clone(),
            (None, Ok(Effect::Cleared)) => format!("Cleared {}", self.playground.kind()),
            (None, Err(e)) => e.to_string(),
            (None, Ok(effect)) => format!("{:?}", effect),
        };
        debug!("status: {}", self.status_message);

        // Newest entry is at the top of the log
        self.log_scroll = 0;
        self.sync_animator();
    }

    fn sync_animator(&mut self) {
        let kind = self.playground.kind();
        let diff = self.animator.observe(kind, describe(kind, self.playground.elements()));
        if !diff.is_empty() {
            debug!(
                "animating {} entering, {} exiting",
                diff.entered.len(),
                diff.exited.len()
            );
        }
    }
}
