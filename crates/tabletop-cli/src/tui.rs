//! Interactive terminal editor.
//!
//! Four lists on the left (shapes, background colors, pattern colors,
//! pattern kinds), a rasterized preview on the right and a status line at
//! the bottom. Moving in a palette list applies that choice to the selected
//! shape right away.

use std::cell::Cell;
use std::io::{self, stdout};
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use image::{DynamicImage, RgbaImage};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use ratatui_image::{picker::{Picker, ProtocolType}, protocol::StatefulProtocol, StatefulImage};

use tabletop::export::{self, ExportOptions};
use tabletop::{Editor, EditorConfig, EditorEvent, Fill, PatternKind, Selection, raster};

/// Preview width in pixels; height follows the scene's aspect ratio.
const PREVIEW_WIDTH: f64 = 1600.0;

const PNG_OUTPUT: &str = "tabletop-design.png";
const SVG_OUTPUT: &str = "tabletop-design.svg";

/// Which list arrow keys move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Shapes,
    Background,
    Foreground,
    Pattern,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Shapes, Focus::Background, Focus::Foreground, Focus::Pattern];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Status line contents.
struct Status {
    text: String,
    is_error: bool,
}

/// Application state for TUI
struct App {
    editor: Editor,
    rng: StdRng,
    focus: Focus,
    shape_state: ListState,
    background_state: ListState,
    foreground_state: ListState,
    pattern_state: ListState,
    status: Status,
    should_quit: bool,
    /// Image picker for terminal protocol detection
    picker: Picker,
    /// Current rendered image protocol state
    image_state: Option<Box<dyn StatefulProtocol>>,
    /// Set by the editor observer whenever the scene or selection changes
    needs_image_update: Rc<Cell<bool>>,
}

impl App {
    fn new(config: EditorConfig, seed: Option<u64>) -> Result<Self> {
        let mut editor = Editor::new(config).context("building scene")?;

        let needs_image_update = Rc::new(Cell::new(true));
        let dirty = Rc::clone(&needs_image_update);
        editor.set_observer(move |event: &EditorEvent| {
            log::debug!("editor event: {:?}", event);
            dirty.set(true);
        });

        // Initialize image picker - force Sixel protocol
        let mut picker = Picker::from_termios()
            .unwrap_or_else(|_| Picker::new((8, 16)));
        picker.protocol_type = ProtocolType::Sixel;

        let seed = seed.unwrap_or_else(rand::random);

        let mut app = App {
            editor,
            rng: StdRng::seed_from_u64(seed),
            focus: Focus::Shapes,
            shape_state: ListState::default(),
            background_state: ListState::default(),
            foreground_state: ListState::default(),
            pattern_state: ListState::default(),
            status: Status {
                text: format!("Select a shape to start (seed {})", seed),
                is_error: false,
            },
            should_quit: false,
            picker,
            image_state: None,
            needs_image_update,
        };
        app.sync_palette_states();
        Ok(app)
    }

    fn info(&mut self, text: impl Into<String>) {
        self.status = Status { text: text.into(), is_error: false };
    }

    fn error(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::warn!("{}", text);
        self.status = Status { text, is_error: true };
    }

    /// Point the palette cursors at the pending choices.
    fn sync_palette_states(&mut self) {
        let pending = self.editor.pending();
        let palette = &self.editor.config().palette;
        self.background_state
            .select(palette.colors.iter().position(|c| *c == pending.background));
        self.foreground_state
            .select(palette.colors.iter().position(|c| *c == pending.foreground));
        self.pattern_state
            .select(palette.patterns.iter().position(|p| *p == pending.pattern));
        self.shape_state.select(self.editor.selection().index());
    }

    fn focused_len(&self) -> usize {
        let palette = &self.editor.config().palette;
        match self.focus {
            Focus::Shapes => self.editor.store().len(),
            Focus::Background | Focus::Foreground => palette.colors.len(),
            Focus::Pattern => palette.patterns.len(),
        }
    }

    fn focused_state(&mut self) -> &mut ListState {
        match self.focus {
            Focus::Shapes => &mut self.shape_state,
            Focus::Background => &mut self.background_state,
            Focus::Foreground => &mut self.foreground_state,
            Focus::Pattern => &mut self.pattern_state,
        }
    }

    /// Move the cursor of the focused list and act on the new entry.
    fn move_cursor(&mut self, delta: isize) {
        let len = self.focused_len();
        if len == 0 {
            return;
        }
        let current = self.focused_state().selected();
        let i = match current {
            Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
            None => 0,
        };
        self.focused_state().select(Some(i));
        self.activate(i);
    }

    fn activate(&mut self, i: usize) {
        let palette = self.editor.config().palette.clone();
        let result = match self.focus {
            Focus::Shapes => self.editor.select_shape(i).map(|_| None),
            Focus::Background => self.editor.choose_background(palette.colors[i]),
            Focus::Foreground => self.editor.choose_foreground(palette.colors[i]),
            Focus::Pattern => self.editor.choose_pattern(palette.patterns[i]),
        };

        match result {
            Ok(_) if self.focus == Focus::Shapes => {
                self.sync_palette_states();
                self.info(format!("Shape {} selected", i));
            }
            Ok(Some(fill)) => self.info(describe_fill(&fill)),
            Ok(None) => self.info("No shape selected: choice kept for the next shape"),
            Err(e) => self.error(e.to_string()),
        }
    }

    fn rotate(&mut self) {
        match self.editor.rotate() {
            Ok(Some(fill)) => self.info(describe_fill(&fill)),
            Ok(None) => self.info("Select a shape to rotate its fill"),
            Err(e) => self.error(e.to_string()),
        }
    }

    fn randomize(&mut self) {
        match self.editor.randomize_all(&mut self.rng) {
            Ok(()) => {
                self.sync_palette_states();
                self.info("Randomized every shape");
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    fn reset(&mut self) {
        match self.editor.reset() {
            Ok(()) => {
                self.sync_palette_states();
                self.info("Design reset");
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    fn save(&mut self, path: &str) {
        match self.editor.save(Path::new(path)) {
            Ok(format) => self.info(format!("Saved {} to {}", format, path)),
            Err(e) => self.error(format!("Export failed: {}", e)),
        }
    }

    fn update_image(&mut self) {
        if !self.needs_image_update.get() {
            return;
        }
        self.needs_image_update.set(false);

        match self.render_preview() {
            Ok(img) => self.image_state = Some(self.picker.new_resize_protocol(img)),
            Err(e) => self.error(format!("Preview failed: {:#}", e)),
        }
    }

    /// Rasterize the scene with the selected shape outlined.
    fn render_preview(&self) -> Result<DynamicImage> {
        let options = ExportOptions {
            scale: 1.0,
            highlight: self.editor.selection().index(),
        };
        let svg = export::render_svg(self.editor.store(), self.editor.registry(), &options)?;

        let view = self.editor.store().view_box();
        let scale = (PREVIEW_WIDTH / view.width().max(1.0)) as f32;
        let pixmap = raster::render_pixmap(&svg, view.width(), view.height(), scale)?;

        let (width, height) = (pixmap.width(), pixmap.height());
        let rgba = RgbaImage::from_raw(width, height, pixmap.take())
            .context("pixmap size does not match its buffer")?;
        Ok(DynamicImage::ImageRgba8(rgba))
    }
}

fn describe_fill(fill: &Fill) -> String {
    match fill {
        Fill::Solid(color) => format!("Applied solid {}", color),
        Fill::Pattern(pattern) => format!("Applied {}", pattern.id),
    }
}

pub fn run_tui(config: EditorConfig, seed: Option<u64>) -> Result<()> {
    // Build the app before touching the terminal so config errors print normally.
    let mut app = App::new(config, seed)?;

    // Initialize terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.update_image();

        terminal.draw(|frame| ui(frame, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Tab => app.focus = app.focus.next(),
                        KeyCode::BackTab => app.focus = app.focus.prev(),
                        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
                        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
                        KeyCode::Char('r') => app.rotate(),
                        KeyCode::Char('x') => app.randomize(),
                        KeyCode::Char('c') => app.reset(),
                        KeyCode::Char('s') => app.save(PNG_OUTPUT),
                        KeyCode::Char('v') => app.save(SVG_OUTPUT),
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Terminal color closest to a palette color.
fn swatch_color(color: tabletop::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

fn list_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Yellow } else { Color::Cyan };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn highlight_style() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn ui(frame: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let top_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30),
            Constraint::Min(40),
        ])
        .split(main_layout[0]);

    let sidebar_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(top_layout[0]);

    // Shapes
    let shape_items: Vec<ListItem> = app.editor.store()
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            let key = shape.assignment();
            let label = if key.pattern == PatternKind::Solid {
                format!("{:>2} solid {}", i, key.background)
            } else {
                format!("{:>2} {} {}°", i, key.pattern, key.rotation)
            };
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(swatch_color(key.background))),
                Span::raw(label),
            ]))
        })
        .collect();
    let shapes = List::new(shape_items)
        .block(list_block(" Shapes ", app.focus == Focus::Shapes))
        .highlight_style(highlight_style())
        .highlight_symbol("► ");
    frame.render_stateful_widget(shapes, sidebar_layout[0], &mut app.shape_state);

    // Palettes
    let color_items = |colors: &[tabletop::Color]| -> Vec<ListItem<'static>> {
        colors
            .iter()
            .map(|c| {
                ListItem::new(Line::from(vec![
                    Span::styled("██ ", Style::default().fg(swatch_color(*c))),
                    Span::raw(c.to_string()),
                ]))
            })
            .collect()
    };
    let palette = app.editor.config().palette.clone();

    let backgrounds = List::new(color_items(&palette.colors))
        .block(list_block(" Background ", app.focus == Focus::Background))
        .highlight_style(highlight_style())
        .highlight_symbol("► ");
    frame.render_stateful_widget(backgrounds, sidebar_layout[1], &mut app.background_state);

    let foregrounds = List::new(color_items(&palette.colors))
        .block(list_block(" Pattern color ", app.focus == Focus::Foreground))
        .highlight_style(highlight_style())
        .highlight_symbol("► ");
    frame.render_stateful_widget(foregrounds, sidebar_layout[2], &mut app.foreground_state);

    let pattern_items: Vec<ListItem> = palette.patterns
        .iter()
        .map(|p| ListItem::new(p.name()))
        .collect();
    let patterns = List::new(pattern_items)
        .block(list_block(" Pattern ", app.focus == Focus::Pattern))
        .highlight_style(highlight_style())
        .highlight_symbol("► ");
    frame.render_stateful_widget(patterns, sidebar_layout[3], &mut app.pattern_state);

    // Preview
    let title = match app.editor.selection() {
        Selection::NoSelection => " Preview ".to_string(),
        Selection::ShapeSelected(i) => {
            let pending = app.editor.pending();
            format!(" Preview - shape {} - {} {}° ", i, pending.pattern, pending.rotation)
        }
    };
    let image_block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner_area = image_block.inner(top_layout[1]);
    frame.render_widget(image_block, top_layout[1]);

    if let Some(ref mut image_state) = app.image_state {
        let image_widget = StatefulImage::new(None);
        frame.render_stateful_widget(image_widget, inner_area, image_state);
    }

    // Status
    let status_style = if app.status.is_error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let status = Paragraph::new(app.status.text.as_str())
        .style(status_style)
        .block(Block::default()
            .title(format!(" {} shapes, {} fills ", app.editor.store().len(), app.editor.registry().len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)));
    frame.render_widget(status, main_layout[1]);

    // Help
    let help = Paragraph::new("Tab focus  ↑↓/jk choose  r rotate  x randomize  c reset  s save PNG  v save SVG  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, main_layout[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_both_ways() {
        let mut focus = Focus::Shapes;
        for _ in 0..Focus::ORDER.len() {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Shapes);
        assert_eq!(Focus::Shapes.prev(), Focus::Pattern);
        assert_eq!(Focus::Background.prev(), Focus::Shapes);
    }

    #[test]
    fn describes_fills() {
        assert_eq!(
            describe_fill(&Fill::Solid(tabletop::Color::WHITE)),
            "Applied solid #FFFFFF"
        );
    }
}
