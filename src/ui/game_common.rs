//! Shared UI components for the two trainer scenes.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Main content area (board) - top left, inside the outer border.
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left, inside the outer border.
    pub status_bar: Rect,
    /// Info panel area - right side, with its own border.
    pub info_panel: Rect,
}

/// Create the standard trainer layout with an outer border:
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │   [content area]                │  [info]     │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Render a 2-line status bar: status message on top, key hints below.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render the bordered " Info " panel frame and return its inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// The score / streak / best-streak lines shared by both info panels.
pub fn score_lines(score: u32, streak: u32, best_streak: u32) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled("Score:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(score.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Streak: ", Style::default().fg(Color::DarkGray)),
            Span::styled(streak.to_string(), Style::default().fg(Color::LightGreen)),
        ]),
        Line::from(vec![
            Span::styled("Best:   ", Style::default().fg(Color::DarkGray)),
            Span::styled(best_streak.to_string(), Style::default().fg(Color::Yellow)),
        ]),
    ]
}
