use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::paths;
use crate::io::store_io::{load_tasks, save_tasks};
use crate::model::board::{Board, Day};
use crate::model::task::TaskItem;
use crate::ops::action::{self, Action};

use super::input;
use super::render;
use super::theme::Theme;

/// Which widget is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The flat, persisted list
    List,
    /// The day-partitioned week board (session-only)
    Week,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Insert,
}

/// State of an in-progress mouse drag. Only the visual order lives here;
/// the collection itself is untouched until the drop commits.
#[derive(Debug, Clone)]
pub struct DragState {
    /// Display order: position → collection index
    pub display: Vec<usize>,
    /// Display position of the row being dragged
    pub grabbed: usize,
}

/// Main application state
pub struct App {
    pub data_dir: PathBuf,
    /// Variant 1: the persisted flat list
    pub tasks: Vec<TaskItem>,
    /// Variant 2: the in-memory week board
    pub board: Board,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor row within the visible collection
    pub cursor: usize,
    /// First visible row (set by the renderer to keep the cursor on screen)
    pub scroll: usize,
    /// Insert-mode input buffer
    pub input: String,
    /// Transient validation message; cleared by the next successful action
    pub notice: Option<String>,
    pub drag: Option<DragState>,
    /// Terminal row where the task rows start, recorded during render so
    /// mouse coordinates can be mapped back to display positions
    pub content_top: u16,
}

impl App {
    pub fn new(data_dir: PathBuf, tasks: Vec<TaskItem>, view: View) -> Self {
        let mut board = Board::new();
        board.current = Some(Day::today());
        App {
            data_dir,
            tasks,
            board,
            view,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::default(),
            cursor: 0,
            scroll: 0,
            input: String::new(),
            notice: None,
            drag: None,
            content_top: 0,
        }
    }

    /// The collection the current view displays
    pub fn visible_tasks(&self) -> &[TaskItem] {
        match self.view {
            View::List => &self.tasks,
            View::Week => self.board.current_tasks().unwrap_or(&[]),
        }
    }

    pub fn visible_len(&self) -> usize {
        self.visible_tasks().len()
    }

    /// Apply an action to the current view's collection. On success the
    /// notice clears and (list view only) the store is persisted; on failure
    /// the error message becomes the notice and state is unchanged.
    pub fn dispatch(&mut self, action: Action) {
        let result = match self.view {
            View::List => action::apply_to_list(&mut self.tasks, &action),
            View::Week => action::apply_to_board(&mut self.board, &action),
        };
        match result {
            Ok(()) => {
                self.notice = None;
                if self.view == View::List
                    && let Err(e) = save_tasks(&self.data_dir, &self.tasks)
                {
                    self.notice = Some(format!("save failed: {}", e));
                }
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
        self.clamp_cursor();
    }

    /// Switch the board's active day, clearing notice and cursor state.
    pub fn select_day(&mut self, day: Day) {
        self.dispatch(Action::SelectDay(day));
        self.cursor = 0;
        self.scroll = 0;
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::List => View::Week,
            View::Week => View::List,
        };
        self.cursor = 0;
        self.scroll = 0;
        self.drag = None;
        self.notice = None;
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

/// Run the TUI application
pub fn run(data_dir_override: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = paths::data_dir(data_dir_override);
    let config = read_config(&data_dir);
    let tasks = load_tasks(&data_dir);

    let view = match config.ui.start_view.as_deref() {
        Some("week") => View::Week,
        _ => View::List,
    };
    let mut app = App::new(data_dir, tasks, view);
    app.theme = Theme::from_config(&config.ui);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => {
                    input::handle_mouse(app, mouse);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
