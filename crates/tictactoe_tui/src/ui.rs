//! Stateless UI rendering for the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Mark, Position};

use crate::app::App;
use crate::theme::Theme;
use crate::view::{self, CellHighlight};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the whole screen: players, board, status and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.secondary())),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Players
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Cursor label
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(
            Style::default()
                .fg(theme.primary())
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_players(frame, chunks[2], app);
    draw_board(frame, chunks[3], app);
    draw_status(frame, chunks[4], app);

    let label = Paragraph::new(view::cell_label(app.engine(), *app.cursor()))
        .style(Style::default().fg(theme.grid()))
        .alignment(Alignment::Center);
    frame.render_widget(label, chunks[5]);

    let help = Paragraph::new("arrows move | enter place | 1-9 cell | r reset | q quit")
        .style(Style::default().fg(theme.grid()))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[6]);
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let mut spans = Vec::new();

    for (i, mark) in [Mark::X, Mark::O].into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("     "));
        }
        let color = theme.mark_color(mark);
        spans.push(Span::styled(
            format!("Player {}", mark),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        if view::turn_badge(app.engine(), mark) {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                " Your turn ",
                Style::default().fg(theme.secondary()).bg(color),
            ));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let grid = Style::default().fg(app.theme().grid());

    frame.render_widget(
        Block::default().borders(Borders::ALL).border_style(grid),
        board_area,
    );

    let inner = Rect {
        x: board_area.x + 1,
        y: board_area.y + 1,
        width: board_area.width.saturating_sub(2),
        height: board_area.height.saturating_sub(2),
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(inner);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);

        for (col, cell_area) in cols.iter().enumerate() {
            if let Some(pos) = Position::from_row_col(row, col) {
                draw_cell(frame, *cell_area, app, pos);
            }
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let engine = app.engine();
    let theme = app.theme();

    let (symbol, mut style) = match engine.board().get(pos).mark() {
        None => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(theme.grid()),
        ),
        Some(mark) => (
            mark.to_string(),
            Style::default().fg(theme.mark_color(mark)),
        ),
    };

    style = match view::cell_highlight(engine, pos) {
        CellHighlight::Winning => style.bg(theme.winning_bg()).add_modifier(Modifier::BOLD),
        CellHighlight::LastMove => style.bg(theme.last_move_bg()),
        CellHighlight::None => style,
    };

    if !view::cell_enabled(engine, pos) && engine.board().is_empty(pos) {
        style = style.add_modifier(Modifier::DIM);
    }

    let border = if pos == *app.cursor() {
        Style::default().fg(theme.accent()).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.grid())
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(border));

    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let theme: &Theme = app.theme();
    let color = view::status_mark(app.engine())
        .map(|mark| theme.mark_color(mark))
        .unwrap_or(theme.primary());

    let status = Paragraph::new(view::status_message(app.engine()))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.grid())),
        );

    frame.render_widget(status, area);
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
