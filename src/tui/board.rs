//! Stateless board rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::board::{Player, Pos, Square, BOARD_SIZE};
use crate::engine::{Move, Renju};

/// What to draw on top of the game state
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub renju: &'a Renju,
    /// Hovered point while a human is choosing
    pub cursor: Option<Pos>,
    /// Last line of the status panel
    pub hint: &'a str,
}

pub fn glyph(square: Square) -> &'static str {
    match square {
        Square::Occupied(Player::First) => "o",
        Square::Occupied(Player::Second) => "x",
        Square::Empty => ".",
    }
}

fn cell_style(view: &View, pos: Pos) -> Style {
    let renju = view.renju;
    let base = match renju.square(pos) {
        Square::Occupied(_) => Style::default().add_modifier(Modifier::BOLD),
        Square::Empty => Style::default().fg(Color::DarkGray),
    };

    let Some(cursor) = view.cursor else {
        return base;
    };
    if pos == cursor {
        return base.bg(Color::Red).fg(Color::White);
    }
    if renju.square(pos).is_empty() {
        // Colour every empty point by whether the putter may take it.
        let color = if renju.is_legal(Move::at(pos)) {
            Color::Yellow
        } else {
            Color::Blue
        };
        return base.fg(color);
    }
    base
}

/// Board rows with row/column labels.
pub fn board_lines(view: &View) -> Vec<Line<'static>> {
    let mut header = String::from("   ");
    for col in 0..BOARD_SIZE {
        header.push_str(&format!("{col:>2} "));
    }
    let mut lines = vec![Line::styled(header, Style::default().fg(Color::DarkGray))];

    for row in 0..BOARD_SIZE {
        let mut spans = vec![Span::styled(
            format!("{row:>2} "),
            Style::default().fg(Color::DarkGray),
        )];
        for col in 0..BOARD_SIZE {
            let Ok(pos) = Pos::new(row as i32, col as i32) else {
                continue;
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(glyph(view.renju.square(pos)), cell_style(view, pos)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Turn, putter, result and selection info.
pub fn status_lines(view: &View) -> Vec<String> {
    let renju = view.renju;
    let mut lines = vec![
        format!("[Info] TURN = {}", renju.turn()),
        format!("[Info] PUTTER = {} ({})", renju.putter(), glyph(Square::Occupied(renju.putter()))),
    ];

    if renju.finished() {
        match renju.winner() {
            Some(winner) => lines.push(format!("[Info] FINISHED, WINNER = {winner}")),
            None => lines.push("[Info] FINISHED".to_string()),
        }
    }

    if let Some(pos) = view.cursor {
        let verdict = match renju.violation(Move::at(pos)) {
            None => "legal".to_string(),
            Some(reason) => reason.to_string(),
        };
        lines.push(format!("[Select] {pos}: {verdict}"));
    }

    if !view.hint.is_empty() {
        lines.push(view.hint.to_string());
    }
    lines
}

pub fn draw(frame: &mut Frame, view: &View) {
    let status = status_lines(view);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(BOARD_SIZE as u16 + 1),
            Constraint::Length(status.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(frame.area());

    let title = Paragraph::new("Renju")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board = Paragraph::new(board_lines(view));
    frame.render_widget(board, center_columns(chunks[1], 3 + 3 * BOARD_SIZE as u16));

    let status = Paragraph::new(status.into_iter().map(Line::from).collect::<Vec<_>>())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn center_columns(area: Rect, width: u16) -> Rect {
    let margin = area.width.saturating_sub(width) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(margin),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area)[1]
}
