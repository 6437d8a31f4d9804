use crate::engine::Snapshot;
use crate::game::{GameOutcome, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{board_lines, board_size, player_color};

/// Draw one frame. Returns the screen area the board itself occupies, for
/// translating mouse positions.
pub fn render(frame: &mut Frame, snapshot: &Snapshot<'_>, message: &Option<String>) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Scores
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, snapshot, chunks[0]);
    let board_area = render_board(frame, snapshot, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
    board_area
}

fn score_style(snapshot: &Snapshot<'_>, player: Player) -> Style {
    let style = Style::default().fg(player_color(player));
    if snapshot.current_turn == player {
        style.add_modifier(Modifier::BOLD)
    } else {
        style.add_modifier(Modifier::DIM)
    }
}

fn render_header(frame: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(area);

    for (player, column) in [(Player::Human, columns[0]), (Player::Computer, columns[2])] {
        let score = match player {
            Player::Human => snapshot.human_score,
            Player::Computer => snapshot.computer_score,
        };
        let style = score_style(snapshot, player);
        let widget = Paragraph::new(vec![
            Line::from(Span::styled(player.name(), style)),
            Line::from(Span::styled(score.to_string(), style)),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, column);
    }

    let result = match snapshot.outcome {
        Some(GameOutcome::Winner(player)) => vec![
            Line::from(Span::styled(
                player.name(),
                Style::default().fg(player_color(player)).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "WINS!",
                Style::default().fg(player_color(player)).add_modifier(Modifier::BOLD),
            )),
        ],
        Some(GameOutcome::Draw) => vec![Line::from(Span::styled(
            "DRAW!",
            Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
        ))],
        None => vec![Line::from(format!("{} to move", snapshot.current_turn.name()))],
    };
    let middle = Paragraph::new(result)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Dots and Boxes"));
    frame.render_widget(middle, columns[1]);
}

/// Centre the board in `area` and draw it. Returns the rectangle used.
fn render_board(frame: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) -> Rect {
    let (width, height) = board_size(snapshot.board.dimension());
    let board_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    };

    frame.render_widget(Paragraph::new(board_lines(snapshot)), board_area);
    board_area
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(
        "Mouse/arrows: pick edge  |  Click/Enter: claim  |  +/-: size  |  N: new game  |  Q: quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
