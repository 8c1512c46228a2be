use crate::game::{GameSettings, PieceColor, PlayerId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_view::BoardView;

pub fn render(
    frame: &mut Frame,
    view: &BoardView,
    selected_column: usize,
    next_settings: &GameSettings,
    hint: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Header
            Constraint::Min(view.height as u16 + 4),     // Board
            Constraint::Length(3),                       // Message
            Constraint::Length(4),                       // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    render_board(frame, view, selected_column, chunks[1]);
    render_message(frame, view, hint, chunks[2]);
    render_controls(frame, next_settings, chunks[3]);
}

/// Terminal color for a piece color token
pub fn piece_color(color: PieceColor) -> Color {
    match color {
        PieceColor::Red => Color::Red,
        PieceColor::Yellow => Color::Yellow,
        PieceColor::Blue => Color::Blue,
        PieceColor::Green => Color::Green,
        PieceColor::Magenta => Color::Magenta,
        PieceColor::Cyan => Color::Cyan,
        PieceColor::White => Color::White,
    }
}

fn player_color(view: &BoardView, id: PlayerId) -> Color {
    piece_color(view.players.get(id).color())
}

fn render_header(frame: &mut Frame, view: &BoardView, area: Rect) {
    let active = view.players.get(view.active);
    let (status, color) = if view.is_game_over() {
        ("Game Over".to_string(), Color::White)
    } else {
        (
            format!("Current Player: {}", active.label()),
            piece_color(active.color()),
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, view: &BoardView, selected_column: usize, area: Rect) {
    let mut lines = Vec::new();
    let frame_width = view.width * 3 + 1;

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..view.width {
        let label = format!("{:^3}", (col + 1) % 100);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(frame_width))));

    for row in 0..view.height {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..view.width {
            let span = match view.get(row, col) {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(id) => {
                    let mut style = Style::default().fg(player_color(view, id));
                    if view.is_winning_cell(row, col) {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    } else if view.last_drop == Some((row, col)) {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(frame_width))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..view.width {
        if col == selected_column && !view.is_game_over() {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, view: &BoardView, hint: Option<&str>, area: Rect) {
    let text = hint.or(view.message.as_deref()).unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, next_settings: &GameSettings, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  R: New game  |  Q: Quit");
    let [first, second] = &next_settings.players;
    let line2 = Line::from(vec![
        Span::raw("1: "),
        Span::styled(
            format!("Player {} color", first.label),
            Style::default()
                .fg(piece_color(first.color))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   2: "),
        Span::styled(
            format!("Player {} color", second.label),
            Style::default()
                .fg(piece_color(second.color))
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
