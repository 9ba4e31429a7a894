//! Snake board rendering.
//!
//! Uses half-block pixel rendering. Each board cell maps to a colored pixel;
//! pairs of vertical pixels are packed into one terminal row using the `▀`
//! (upper half block) character with fg=top, bg=bottom colors. Empty cells
//! alternate between two dark tones so the grid stays visible.

use super::game_common::{
    create_game_layout, render_game_over_overlay, render_info_panel_frame, render_status_bar,
};
use crate::constants::TICK_INTERVAL_MS;
use crate::game::Snapshot;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Border characters ────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀
const FULL_BLOCK: char = '\u{2588}'; // █

// ── Palette ──────────────────────────────────────────────────────────
const HEAD_COLOR: Color = Color::Rgb(0, 255, 0);
const BODY_COLOR: Color = Color::Rgb(192, 192, 192);
const APPLE_COLOR: Color = Color::Rgb(255, 0, 0);
const CELL_DARK: Color = Color::Rgb(10, 10, 14);
const CELL_LIGHT: Color = Color::Rgb(24, 24, 32);
const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

/// Render the Snake scene for a snapshot.
pub fn render_snake_scene(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    if !snapshot.running {
        render_snake_game_over(frame, area, snapshot);
        return;
    }

    let layout = create_game_layout(frame, area, " Snake ", Color::LightGreen, 20, 22);

    render_play_field(frame, layout.content, snapshot);
    render_status_bar(
        frame,
        layout.status_bar,
        "Slither!",
        Color::Green,
        &[("[Arrows]", "Move"), ("[Esc]", "Quit")],
    );
    render_info_panel(frame, layout.info_panel, snapshot);
}

/// Background color of an empty cell (checker pattern).
fn empty_color(x: usize, y: usize) -> Color {
    if (x + y) % 2 == 0 {
        CELL_DARK
    } else {
        CELL_LIGHT
    }
}

/// Build the per-cell color grid. Cells outside the drawn board are skipped.
fn build_pixels(snapshot: &Snapshot) -> Vec<Vec<Color>> {
    let grid_w = snapshot.board.width.max(0) as usize;
    let grid_h = snapshot.board.height.max(0) as usize;

    let mut pixels: Vec<Vec<Color>> = (0..grid_h)
        .map(|y| (0..grid_w).map(|x| empty_color(x, y)).collect())
        .collect();

    if snapshot.board.contains(snapshot.apple) {
        pixels[snapshot.apple.y as usize][snapshot.apple.x as usize] = APPLE_COLOR;
    }

    // Tail first so the head wins on stacked segments
    for (i, seg) in snapshot.segments.iter().enumerate().rev() {
        if snapshot.board.contains(*seg) {
            pixels[seg.y as usize][seg.x as usize] = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
        }
    }

    pixels
}

/// Render the board: bordered half-block grid with the score in the top border.
fn render_play_field(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    if area.height < 3 || area.width < 5 {
        return;
    }

    let pixels = build_pixels(snapshot);
    let grid_w = snapshot.board.width.max(0) as usize;
    let grid_h = pixels.len();

    let content_rows = grid_h.div_ceil(2);
    let render_w = ((grid_w + 2) as u16).min(area.width);
    let inner_w = render_w as usize - 2;

    let x_off = area.x + (area.width.saturating_sub(render_w)) / 2;
    let y_off = area.y;
    let border = Style::default().fg(BORDER_COLOR);

    // ── Top border with score ───────────────────────────────────
    {
        let score_val = snapshot.score.to_string();
        let label = " Score: ";
        let score_full_len = label.len() + score_val.len() + 1;
        let pad_before = inner_w.saturating_sub(score_full_len + 1);
        let pad_after = inner_w.saturating_sub(pad_before + score_full_len);

        let mut spans: Vec<Span> = vec![Span::styled(BORDER_TL.to_string(), border)];
        if pad_before > 0 {
            spans.push(Span::styled(
                std::iter::repeat(BORDER_H).take(pad_before).collect::<String>(),
                border,
            ));
        }
        spans.push(Span::styled(label, border));
        spans.push(Span::styled(
            score_val,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(" ", border));
        if pad_after > 0 {
            spans.push(Span::styled(
                std::iter::repeat(BORDER_H).take(pad_after).collect::<String>(),
                border,
            ));
        }
        spans.push(Span::styled(BORDER_TR.to_string(), border));

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, y_off, render_w, 1),
        );
    }

    // ── Board rows (half-block pixels) ──────────────────────────
    for term_row in 0..content_rows {
        let row_y = y_off + 1 + term_row as u16;
        if row_y >= area.y + area.height {
            break;
        }

        let top_row = &pixels[term_row * 2];
        let bot_row = pixels.get(term_row * 2 + 1);

        let mut spans: Vec<Span> = vec![Span::styled(BORDER_V.to_string(), border)];

        // Batch consecutive cells with the same style
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();

        for (x, &fg) in top_row.iter().take(inner_w).enumerate() {
            let bg = match bot_row {
                Some(row) => row[x],
                None => Color::Reset,
            };

            if fg != cur_fg || bg != cur_bg {
                if !cur_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut cur_text),
                        Style::default().fg(cur_fg).bg(cur_bg),
                    ));
                }
                cur_fg = fg;
                cur_bg = bg;
            }
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }

        spans.push(Span::styled(BORDER_V.to_string(), border));

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, row_y, render_w, 1),
        );
    }

    // ── Bottom border ───────────────────────────────────────────
    let bot_y = y_off + 1 + content_rows as u16;
    if bot_y < area.y + area.height {
        let mut s = String::with_capacity(inner_w + 2);
        s.push(BORDER_BL);
        s.extend(std::iter::repeat(BORDER_H).take(inner_w));
        s.push(BORDER_BR);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(s, border))),
            Rect::new(x_off, bot_y, render_w, 1),
        );
    }
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let inner = render_info_panel_frame(frame, area);
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(snapshot.body_parts().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Heading: ", label),
            Span::styled(snapshot.direction.name(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Grid: ", label),
            Span::styled(
                format!("{}x{}", snapshot.board.width, snapshot.board.height),
                value,
            ),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(format!("{}ms", TICK_INTERVAL_MS), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(HEAD_COLOR)),
            Span::styled("Head", label),
        ]),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(BODY_COLOR)),
            Span::styled("Body", label),
        ]),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(APPLE_COLOR)),
            Span::styled("Apple", label),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the full-screen game over overlay with the final score.
fn render_snake_game_over(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let mut message = vec![format!("Score: {}", snapshot.score)];
    if let Some(cause) = snapshot.game_over {
        message.push(cause.description().to_string());
    }

    render_game_over_overlay(
        frame,
        area,
        Color::Red,
        "Game Over",
        &message,
        "[Esc] Quit",
    );
}
