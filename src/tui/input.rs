use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::model::board::Day;
use crate::ops::action::Action;
use crate::ops::reorder;
use crate::util::unicode::pop_grapheme;

use super::app::{App, DragState, Mode, View};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match app.mode {
        Mode::Insert => handle_insert_key(app, key),
        Mode::Navigate => handle_navigate_key(app, key),
    }
}

fn handle_insert_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let text = app.input.clone();
            app.dispatch(Action::Add(text));
            // On validation failure keep the buffer so the user can fix it
            if app.notice.is_none() {
                app.input.clear();
                app.mode = Mode::Navigate;
                app.cursor = app.visible_len().saturating_sub(1);
            }
        }
        KeyCode::Esc => {
            app.input.clear();
            app.notice = None;
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => pop_grapheme(&mut app.input),
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}

fn handle_navigate_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.mode = Mode::Insert;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.cursor + 1 < app.visible_len() {
                app.cursor += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.cursor = 0,
        KeyCode::Char('G') => app.cursor = app.visible_len().saturating_sub(1),
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if app.visible_len() > 0 {
                app.dispatch(Action::Toggle(app.cursor));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if app.visible_len() > 0 {
                app.dispatch(Action::Delete(app.cursor));
            }
        }
        // Keyboard reorder: one step is an atomic grab-and-drop
        KeyCode::Char('J') => move_cursor_task(app, 1),
        KeyCode::Char('K') => move_cursor_task(app, -1),
        KeyCode::Tab => app.toggle_view(),
        // Week view day selection
        KeyCode::Left | KeyCode::Char('h') if app.view == View::Week => {
            let day = app.board.current.unwrap_or(Day::Mon);
            app.select_day(day.prev());
        }
        KeyCode::Right | KeyCode::Char('l') if app.view == View::Week => {
            let day = app.board.current.unwrap_or(Day::Sun);
            app.select_day(day.next());
        }
        KeyCode::Char(c @ '1'..='7') if app.view == View::Week => {
            let idx = c as usize - '1' as usize;
            app.select_day(Day::ALL[idx]);
        }
        _ => {}
    }
}

/// Move the task under the cursor one step up or down, going through the
/// same permutation path as a mouse drop.
fn move_cursor_task(app: &mut App, direction: i32) {
    let len = app.visible_len();
    if len < 2 {
        return;
    }
    let from = app.cursor;
    let to = (from as i32 + direction).clamp(0, len as i32 - 1) as usize;
    if to == from {
        return;
    }
    let mut order: Vec<usize> = (0..len).collect();
    order.swap(from, to);
    app.dispatch(Action::Reorder(order));
    if app.notice.is_none() {
        app.cursor = to;
    }
}

/// Handle a mouse event: press grabs a row, drag reorders the visual order
/// through the geometry engine, release commits the permutation once.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.mode != Mode::Navigate {
                return;
            }
            if let Some(pos) = display_pos(app, mouse.row) {
                app.cursor = pos;
                app.drag = Some(DragState {
                    display: (0..app.visible_len()).collect(),
                    grabbed: pos,
                });
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let Some(drag) = app.drag.as_mut() else {
                return;
            };
            let pointer_y = pointer_y(app.content_top, app.scroll, mouse.row);
            let rects = reorder::uniform_rects(drag.display.len());
            let target = reorder::drop_target(pointer_y, &rects, drag.grabbed);
            let item = drag.display[drag.grabbed];
            reorder::reinsert(&mut drag.display, drag.grabbed, target);
            // Track the dragged row at its new position
            if let Some(pos) = drag.display.iter().position(|&i| i == item) {
                drag.grabbed = pos;
            }
            app.cursor = drag.grabbed;
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(drag) = app.drag.take() else {
                return;
            };
            let identity: Vec<usize> = (0..drag.display.len()).collect();
            app.cursor = drag.grabbed;
            // Resync the authoritative collection once, at drop time
            if drag.display != identity {
                app.dispatch(Action::Reorder(drag.display));
            }
        }
        _ => {}
    }
}

/// Map a terminal row to a display position, if it lands on a task row.
fn display_pos(app: &App, row: u16) -> Option<usize> {
    if row < app.content_top {
        return None;
    }
    let pos = app.scroll + (row - app.content_top) as usize;
    (pos < app.visible_len()).then_some(pos)
}

/// Pointer position in the same coordinate space as the row rects. The
/// terminal only reports whole cells, so the pointer maps to the top edge of
/// its row: entering a row counts as being above that row's midpoint.
fn pointer_y(content_top: u16, scroll: usize, row: u16) -> f64 {
    let screen_row = row.saturating_sub(content_top) as f64;
    screen_row + scroll as f64
}

/// The display order to render rows in: the drag's visual order while a
/// drag is live, identity otherwise.
pub fn render_order(app: &App) -> Vec<usize> {
    match &app.drag {
        Some(drag) if drag.display.len() == app.visible_len() => drag.display.clone(),
        _ => (0..app.visible_len()).collect(),
    }
}
