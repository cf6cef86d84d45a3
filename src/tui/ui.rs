//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timeline_tictactoe::Status;

use super::app::{App, Focus};
use crate::view::{CellView, GameView};

/// Renders the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board + history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if *app.display().show_history() {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);
        draw_board(frame, body[0], app, &view);
        draw_history(frame, body[1], app, &view);
    } else {
        draw_board(frame, chunks[1], app, &view);
    }

    draw_status(frame, chunks[2], app, &view);
    draw_controls(frame, chunks[3], app, &view);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let board_area = center_rect(area, 23, 5);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    for (i, cells) in view.rows().enumerate() {
        draw_row(frame, rows[i * 2], app, cells);
        if i < 2 {
            let sep = Paragraph::new("───────┼───────┼───────")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, cells: &[CellView]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for (i, cell) in cells.iter().enumerate() {
        draw_cell(frame, cols[i * 2], app, cell);
        if i < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, cell: &CellView) {
    let hint = (cell.index + 1).to_string();
    let (symbol, base_style) = match cell.label {
        "X" => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        "O" => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        _ if *app.display().show_hints() => (hint.as_str(), Style::default().fg(Color::DarkGray)),
        _ => (" ", Style::default()),
    };

    let style = if cell.winning {
        base_style.bg(Color::Green)
    } else if app.focus() == Focus::Board && cell.position == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let items: Vec<ListItem> = view
        .jumps
        .iter()
        .map(|jump| {
            let style = if jump.current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if jump.current { "▶ " } else { "  " };
            ListItem::new(Line::from(Span::styled(format!("{}{}", marker, jump.label), style)))
        })
        .collect();

    let border = if app.focus() == Focus::History {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title("History"),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black));

    let mut state = ListState::default();
    if app.focus() == Focus::History {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let color = match view.status_kind {
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::Turn(_) => Color::Yellow,
    };
    let text = match app.error() {
        Some(error) => format!("{}  ({})", view.status, error),
        None => view.status.clone(),
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_controls(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let mut controls = vec!["[r] Restart"];
    if view.can_revert {
        controls.push("[u] Revert");
    }
    if *app.display().show_history() {
        controls.push("[Tab] History");
    }
    controls.push("[q] Quit");

    let legend = Paragraph::new(controls.join("  "))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(legend, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
