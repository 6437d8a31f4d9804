use crate::engine::Snapshot;
use crate::game::{Edge, Player, Side};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Terminal columns per cell, including the left line.
pub const CELL_WIDTH: u16 = 5;
/// Terminal rows per cell, including the top line.
pub const CELL_HEIGHT: u16 = 2;

const DOT: &str = "•";
const DOT_COLOR: Color = Color::Rgb(160, 82, 45);

/// Strong colour for claimed edges and scores.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::Human => Color::Rgb(65, 105, 225),
        Player::Computer => Color::Rgb(220, 20, 60),
    }
}

/// Light colour for staged edges and owned boxes.
pub fn highlight_color(player: Player) -> Color {
    match player {
        Player::Human => Color::Rgb(176, 196, 222),
        Player::Computer => Color::Rgb(255, 182, 193),
    }
}

/// Width and height of the rendered board in terminal cells.
pub fn board_size(dimension: usize) -> (u16, u16) {
    let n = dimension as u16;
    (n * CELL_WIDTH + 1, n * CELL_HEIGHT + 1)
}

/// Render the board as text: dots at corners, claimed edges in the owner's
/// colour, the staged edge in the mover's light colour, owned boxes labelled.
pub fn board_lines(snapshot: &Snapshot<'_>) -> Vec<Line<'static>> {
    let n = snapshot.board.dimension();
    let mut lines = Vec::with_capacity(2 * n + 1);

    for row in 0..=n {
        // Dot row: the top side of `row`, or the bottom side of the last row
        let (cell_row, side) = if row < n { (row, Side::Top) } else { (n - 1, Side::Bottom) };
        let mut spans = Vec::with_capacity(2 * n + 1);
        for col in 0..n {
            spans.push(Span::styled(DOT, Style::default().fg(DOT_COLOR)));
            spans.push(edge_span(snapshot, cell_row, col, side, "────"));
        }
        spans.push(Span::styled(DOT, Style::default().fg(DOT_COLOR)));
        lines.push(Line::from(spans));

        if row == n {
            break;
        }

        // Box row: left sides, interiors, and the right side of the last column
        let mut spans = Vec::with_capacity(2 * n + 1);
        for col in 0..n {
            spans.push(edge_span(snapshot, row, col, Side::Left, "│"));
            spans.push(interior_span(snapshot, row, col));
        }
        spans.push(edge_span(snapshot, row, n - 1, Side::Right, "│"));
        lines.push(Line::from(spans));
    }

    lines
}

fn edge_span(
    snapshot: &Snapshot<'_>,
    row: usize,
    col: usize,
    side: Side,
    glyph: &'static str,
) -> Span<'static> {
    let owner = snapshot.board.edge_at(row, col, side).and_then(Edge::owner);
    match (owner, snapshot.highlight_owner) {
        (Some(player), _) => Span::styled(glyph, Style::default().fg(player_color(player))),
        (None, Some(mover)) if snapshot.is_highlighted(row, col, side) => {
            Span::styled(glyph, Style::default().fg(highlight_color(mover)))
        }
        _ => Span::raw(" ".repeat(glyph.chars().count())),
    }
}

fn interior_span(snapshot: &Snapshot<'_>, row: usize, col: usize) -> Span<'static> {
    let owner = snapshot.board.cell(row, col).and_then(|cell| cell.owner());
    match owner {
        Some(player) => Span::styled(
            player.short_name(),
            Style::default()
                .fg(player_color(player))
                .bg(highlight_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::raw("    "),
    }
}
