use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::model::board::Day;
use crate::util::unicode::truncate_to_width;

use super::app::{App, Mode, View};
use super::input::render_order;

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_tab_bar(frame, app, chunks[0]);
    render_task_rows(frame, app, chunks[1]);
    render_status_row(frame, app, chunks[2]);
}

/// Top bar: the two views, and the day tabs when the week board is showing
fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let active = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    spans.push(Span::styled(
        "List",
        if app.view == View::List { active } else { inactive },
    ));
    spans.push(Span::styled("  ", Style::default().bg(bg)));
    spans.push(Span::styled(
        "Week",
        if app.view == View::Week { active } else { inactive },
    ));

    if app.view == View::Week {
        spans.push(Span::styled("   ", Style::default().bg(bg)));
        for day in Day::ALL {
            let count = app.board.tasks(day).len();
            let selected = app.board.current == Some(day);
            let style = if selected {
                Style::default().fg(app.theme.highlight).bg(bg)
            } else {
                inactive
            };
            let label = if count > 0 {
                format!("{}({}) ", day.as_str(), count)
            } else {
                format!("{} ", day.as_str())
            };
            spans.push(Span::styled(label, style));
        }
    }

    let line = Line::from(spans);
    let sep = Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    frame.render_widget(Paragraph::new(vec![line, sep]), area);
}

/// The task rows, in visual order (live drag order while dragging)
fn render_task_rows(frame: &mut Frame, app: &mut App, area: Rect) {
    app.content_top = area.y;
    let bg = app.theme.background;
    let tasks = app.visible_tasks();

    if tasks.is_empty() {
        let hint = if app.view == View::Week && app.board.current.is_none() {
            "no day selected \u{2014} press 1-7"
        } else {
            "no tasks \u{2014} press a to add one"
        };
        let line = Line::from(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    // Keep the cursor on screen
    let height = area.height as usize;
    if app.cursor < app.scroll {
        app.scroll = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll + height {
        app.scroll = app.cursor + 1 - height;
    }

    let order = render_order(app);
    let tasks = app.visible_tasks();
    let dragging = app.drag.is_some();
    let mut lines: Vec<Line> = Vec::new();
    for (pos, &idx) in order.iter().enumerate().skip(app.scroll).take(height) {
        let task = &tasks[idx];
        let on_cursor = pos == app.cursor;

        let row_bg = if on_cursor { app.theme.selection_bg } else { bg };
        let check_style = if task.completed {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        let mut text_style = if task.completed {
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        if on_cursor && dragging {
            text_style = Style::default()
                .fg(app.theme.highlight)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD);
        }

        let check = if task.completed { "[x] " } else { "[ ] " };
        let text_width = (area.width as usize).saturating_sub(check.len() + 1);
        lines.push(Line::from(vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(check, check_style),
            Span::styled(truncate_to_width(&task.text, text_width), text_style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// Bottom row: insert prompt, transient notice, or key hints
fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = match app.mode {
        Mode::Insert => {
            let mut spans = vec![
                Span::styled(
                    format!("> {}", app.input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ];
            if let Some(ref notice) = app.notice {
                spans.push(Span::styled(
                    format!("  {}", notice),
                    Style::default().fg(app.theme.red).bg(bg),
                ));
            } else {
                spans.push(Span::styled(
                    "  Enter add  Esc cancel",
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
            Line::from(spans)
        }
        Mode::Navigate => {
            if let Some(ref notice) = app.notice {
                Line::from(Span::styled(
                    notice.clone(),
                    Style::default().fg(app.theme.red).bg(bg),
                ))
            } else {
                let hints = match app.view {
                    View::List => "a add  space toggle  d delete  drag/J/K move  Tab week  q quit",
                    View::Week => "1-7/h/l day  a add  space toggle  d delete  Tab list  q quit",
                };
                Line::from(Span::styled(hints, Style::default().fg(app.theme.dim).bg(bg)))
            }
        }
    };
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
