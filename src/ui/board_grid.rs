//! Shared 8x8 board grid rendering with rank labels down the left and file
//! labels along the bottom.

use crate::board::{FILES, RANKS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Grid footprint: 2 label cols + left border + 8 cells of 5 + right border.
pub const GRID_WIDTH: u16 = 3 + 5 * 8 + 1;
/// Grid footprint: borders + 8 rows with separators + file label line.
pub const GRID_HEIGHT: u16 = 18;

/// What to draw inside one cell: exactly 4 columns of text plus a style.
pub struct CellView {
    pub content: String,
    pub style: Style,
}

impl CellView {
    pub fn empty() -> Self {
        Self {
            content: "    ".to_string(),
            style: Style::default(),
        }
    }

    /// A single glyph, padded the way the board expects.
    pub fn glyph(c: char, color: Color) -> Self {
        Self {
            content: format!(" {}  ", c),
            style: Style::default().fg(color),
        }
    }

    /// A glyph wrapped in cursor brackets.
    pub fn bracketed(c: char, color: Color) -> Self {
        Self {
            content: format!("[{}] ", c),
            style: Style::default().fg(color),
        }
    }

    /// A glyph wrapped in selection chevrons.
    pub fn selected(c: char, color: Color) -> Self {
        Self {
            content: format!("<{}> ", c),
            style: Style::default().fg(color),
        }
    }
}

/// One render pass over the grid. Cell contents come from `cell_for`; the
/// label emphasis fields let the naming hint point at a file/rank label.
pub struct BoardGrid<'a> {
    pub cell_for: &'a dyn Fn(u8, u8) -> CellView,
    pub emphasized_file: Option<u8>,
    pub emphasized_rank_row: Option<u8>,
}

impl BoardGrid<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let cell_width: u16 = 5;
        let x_offset = area.x + (area.width.saturating_sub(GRID_WIDTH)) / 2;
        let y_offset = area.y + (area.height.saturating_sub(GRID_HEIGHT)) / 2;

        let border_color = Color::Rgb(80, 80, 80);
        let label_style = Style::default().fg(Color::DarkGray);
        let emphasized_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        // Top border
        let mut top_border = String::from("  \u{250C}");
        for i in 0..8 {
            top_border.push_str("\u{2500}\u{2500}\u{2500}\u{2500}");
            if i < 7 {
                top_border.push('\u{252C}');
            }
        }
        top_border.push('\u{2510}');
        let top = Paragraph::new(top_border).style(Style::default().fg(border_color));
        frame.render_widget(top, Rect::new(x_offset, y_offset, GRID_WIDTH, 1));

        for row in 0..8u8 {
            let y = y_offset + 1 + (row as u16 * 2);

            // Rank label on the left edge
            let style = if self.emphasized_rank_row == Some(row) {
                emphasized_style
            } else {
                label_style
            };
            let label = Paragraph::new(format!("{} ", RANKS[row as usize])).style(style);
            frame.render_widget(label, Rect::new(x_offset, y, 2, 1));

            let left_border = Paragraph::new("\u{2502}").style(Style::default().fg(border_color));
            frame.render_widget(left_border, Rect::new(x_offset + 2, y, 1, 1));

            for col in 0..8u8 {
                let x = x_offset + 3 + (col as u16 * cell_width);
                let cell = (self.cell_for)(col, row);
                let square = Paragraph::new(cell.content).style(cell.style);
                frame.render_widget(square, Rect::new(x, y, 4, 1));

                let sep = Paragraph::new("\u{2502}").style(Style::default().fg(border_color));
                frame.render_widget(sep, Rect::new(x + 4, y, 1, 1));
            }

            // Row separator
            if row < 7 {
                let mut sep_line = String::from("  \u{251C}");
                for col in 0..8 {
                    sep_line.push_str("\u{2500}\u{2500}\u{2500}\u{2500}");
                    if col < 7 {
                        sep_line.push('\u{253C}');
                    }
                }
                sep_line.push('\u{2524}');
                let sep = Paragraph::new(sep_line).style(Style::default().fg(border_color));
                frame.render_widget(sep, Rect::new(x_offset, y + 1, GRID_WIDTH, 1));
            }
        }

        // Bottom border
        let mut bottom_border = String::from("  \u{2514}");
        for i in 0..8 {
            bottom_border.push_str("\u{2500}\u{2500}\u{2500}\u{2500}");
            if i < 7 {
                bottom_border.push('\u{2534}');
            }
        }
        bottom_border.push('\u{2518}');
        let bottom = Paragraph::new(bottom_border).style(Style::default().fg(border_color));
        frame.render_widget(bottom, Rect::new(x_offset, y_offset + 16, GRID_WIDTH, 1));

        // File labels, one per column so the hint can emphasize one of them
        for col in 0..8u8 {
            let x = x_offset + 3 + (col as u16 * cell_width);
            let style = if self.emphasized_file == Some(col) {
                emphasized_style
            } else {
                label_style
            };
            let label = Paragraph::new(format!(" {}  ", FILES[col as usize])).style(style);
            frame.render_widget(label, Rect::new(x, y_offset + 17, 4, 1));
        }
    }
}
