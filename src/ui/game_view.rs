use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{legal_moves, Cell, Coord, GameState, Player};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    cursor: Coord,
    show_hints: bool,
    opponent_name: &str,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, opponent_name, chunks[0]);
    render_board(frame, game_state, cursor, show_hints, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    opponent_name: &str,
    area: ratatui::layout::Rect,
) {
    let score = game_state.score();
    let (player_name, color) = match game_state.current_player() {
        Player::Dark => ("Dark", Color::Red),
        Player::Light => ("Light", Color::Green),
    };

    let status = if game_state.is_finished() {
        format!(
            "Game Over  |  Dark {} : {} Light  |  vs {}",
            score.dark, score.light, opponent_name
        )
    } else {
        format!(
            "Current Player: {}  |  Dark {} : {} Light  |  vs {}",
            player_name, score.dark, score.light, opponent_name
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Othello"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    cursor: Coord,
    show_hints: bool,
    area: ratatui::layout::Rect,
) {
    let board = game_state.board();
    let size = board.size();
    let hints = if show_hints && !game_state.is_finished() {
        legal_moves(board, game_state.current_player())
    } else {
        Vec::new()
    };

    let mut lines = Vec::new();

    // Column labels with the cursor column highlighted
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..size {
        let label = format!(" {} ", col);
        if col == cursor.col {
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
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(size * 3))));

    for row in 0..size {
        let row_label = if row == cursor.row {
            Span::styled(
                format!("{} ", row),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(format!("{} ", row))
        };
        let mut row_spans = vec![row_label, Span::raw("║")];

        for col in 0..size {
            let coord = Coord::new(col, row);
            let (symbol, color) = match board.get(coord) {
                Cell::Empty if hints.contains(&coord) => (" * ", Color::Cyan),
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Dark => (" ● ", Color::Red),
                Cell::Light => (" ● ", Color::Green),
            };

            let mut style = Style::default().fg(color);
            if coord == cursor {
                style = style.bg(Color::Blue).add_modifier(Modifier::BOLD);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(size * 3))));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line1 = Line::from("Arrows: Move cursor  |  Enter: Place  |  R: Restart  |  Q: Quit");
    let line2 = Line::from(vec![
        Span::styled(
            "Dark",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" is you, "),
        Span::styled(
            "Light",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" is the computer  |  H: Toggle move hints (*)"),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
