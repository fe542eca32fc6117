//! TUI for pluvio.
//!
//! Renders the rain field, a small output level readout, and a controls
//! hint that appears shortly after launch and goes away once the user has
//! interacted.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::Consumer;

use pluvio::{EngineState, RainEngine};

use crate::rainfield::RainField;

/// Controls hint appears this long after launch...
const HINT_DELAY: Duration = Duration::from_secs(1);
/// ...and stays up this long before hiding.
const HINT_DURATION: Duration = Duration::from_secs(4);

/// Glyph and style per depth layer, nearest first.
const LAYER_GLYPHS: [char; 3] = ['|', ':', '.'];
const LAYER_COLORS: [Color; 3] = [Color::Cyan, Color::Blue, Color::DarkGray];

pub struct UiApp {
    engine: RainEngine,
    field: Arc<Mutex<RainField>>,
    level_rx: Option<Consumer<f32>>,
    /// Smoothed peak level for the readout, decayed every frame.
    level: f32,
    /// Focus mode hides all chrome, leaving just the rain (fullscreen analog).
    focus: bool,
    /// Set on the first toggle; permanently hides the controls hint.
    interacted: bool,
    started_at: Instant,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        engine: RainEngine,
        field: Arc<Mutex<RainField>>,
        level_rx: Option<Consumer<f32>>,
    ) -> Self {
        Self {
            engine,
            field,
            level_rx,
            level: 0.0,
            focus: false,
            interacted: false,
            started_at: Instant::now(),
            should_quit: false,
        }
    }

    /// Run the UI event loop.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_levels();

            terminal.draw(|frame| self.render(frame))?;

            // Non-blocking input poll, ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn poll_levels(&mut self) {
        if let Some(rx) = self.level_rx.as_mut() {
            while let Ok(peak) = rx.pop() {
                self.level = self.level.max(peak);
            }
        }
        self.level *= 0.95;
    }

    fn handle_key(&mut self, key: KeyCode) -> EyreResult<()> {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.interacted = true;
                self.engine.toggle()?;
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                self.focus = !self.focus;
            }
            _ => {}
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.render_rain(frame, area);

        if self.focus {
            return;
        }
        self.render_status(frame, area);
        if self.hint_visible() {
            self.render_hint(frame, area);
        }
    }

    fn render_rain(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let suspended = self.engine.state() != EngineState::Active;
        let buf = frame.buffer_mut();
        let field = match self.field.lock() {
            Ok(field) => field,
            Err(_) => return,
        };
        for drop in field.drops() {
            let x = area.x + (drop.x * area.width as f32) as u16;
            let y = area.y + (drop.y * area.height as f32) as u16;
            if let Some(cell) = buf.cell_mut((x.min(area.right() - 1), y.min(area.bottom() - 1))) {
                let mut style = Style::new().fg(LAYER_COLORS[drop.layer]);
                if suspended {
                    style = style.add_modifier(Modifier::DIM);
                }
                cell.set_char(LAYER_GLYPHS[drop.layer]);
                cell.set_style(style);
            }
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if area.height < 1 {
            return;
        }
        let state = match self.engine.state() {
            EngineState::Active => "raining",
            EngineState::Suspended => "paused",
            EngineState::Idle => "press space",
        };
        // Eight-step bar driven by the per-block peak feed.
        let steps = ((self.level * 40.0).clamp(0.0, 8.0)) as usize;
        let meter: String = "▮".repeat(steps);
        let line = Line::from(format!(" {state}  {meter}"))
            .style(Style::new().fg(Color::Gray).add_modifier(Modifier::DIM));
        let status_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        frame.render_widget(Paragraph::new(line), status_area);
    }

    fn hint_visible(&self) -> bool {
        if self.interacted {
            return false;
        }
        let elapsed = self.started_at.elapsed();
        elapsed >= HINT_DELAY && elapsed < HINT_DELAY + HINT_DURATION
    }

    fn render_hint(&self, frame: &mut Frame, area: Rect) {
        if area.height < 3 {
            return;
        }
        let hint = Line::from("space: rain on/off   f: focus   q: quit")
            .style(Style::new().fg(Color::White))
            .centered();
        let hint_area = Rect::new(area.x, area.bottom() - 3, area.width, 1);
        frame.render_widget(Paragraph::new(hint), hint_area);
    }
}
