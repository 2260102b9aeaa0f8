//! Trainer selection menu.

use crate::build_info;
use crate::stats::TrainerStats;
use chrono::DateTime;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// The two menu entries, in display order.
pub const MENU_ITEMS: [(&str, &str); 2] = [
    (
        "Name the Square",
        "Type the algebraic name of the highlighted square",
    ),
    (
        "Capture the Pawn",
        "Pick the one pawn your piece can actually take",
    ),
];

/// Menu screen state: just the highlighted entry.
pub struct MenuScreen {
    pub selected_index: usize,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < MENU_ITEMS.len() {
            self.selected_index += 1;
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, stats: &TrainerStats) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Boardwise ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightCyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Learn the board, one square at a time",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];

        let best = [stats.naming_best_streak, stats.capture_best_streak];
        for (i, (title, description)) in MENU_ITEMS.iter().enumerate() {
            let is_selected = i == self.selected_index;
            let marker = if is_selected { "> " } else { "  " };
            let title_style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(*title, title_style),
                Span::styled(
                    format!("   (best streak: {})", best[i]),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", description),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }

        if stats.last_played > 0 {
            if let Some(when) = DateTime::from_timestamp(stats.last_played, 0) {
                lines.push(Line::from(Span::styled(
                    format!("Last played: {}", when.format("%Y-%m-%d")),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[\u{2191}\u{2193}]", Style::default().fg(Color::White)),
            Span::styled(" Choose  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Enter]", Style::default().fg(Color::White)),
            Span::styled(" Play  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[q]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "boardwise {} ({})",
                build_info::BUILD_DATE,
                build_info::BUILD_COMMIT
            ),
            Style::default().fg(Color::Rgb(80, 80, 80)),
        )));

        let text = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(text, inner);
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}
