//! Capture the Pawn scene: piece, pawns, cursor, movement-ray hint.

use super::board_grid::{BoardGrid, CellView};
use super::game_common::{
    create_game_layout, render_info_panel_frame, render_status_bar, score_lines,
};
use crate::board::Square;
use crate::games::capture::CaptureGame;
use crate::games::Feedback;
use crate::hints;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Black pawn glyph.
const PAWN: char = '\u{265F}';

pub fn render_capture_scene(frame: &mut Frame, area: Rect, game: &CaptureGame) {
    let layout = create_game_layout(frame, area, " Capture the Pawn ", Color::LightGreen, 20, 24);

    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Task line
            Constraint::Min(18),   // Board
        ])
        .split(layout.content);

    render_task_line(frame, content_chunks[0], game);
    render_board(frame, content_chunks[1], game);
    render_status(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

fn render_task_line(frame: &mut Frame, area: Rect, game: &CaptureGame) {
    let text = Paragraph::new(Line::from(Span::styled(
        format!("Which pawn can the {} take?", game.puzzle.kind.name()),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
    )))
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(text, area);
}

fn render_board(frame: &mut Frame, area: Rect, game: &CaptureGame) {
    let ray_squares: Vec<Square> = if game.hint_shown {
        hints::movement_rays(game.puzzle.kind, game.puzzle.piece)
            .into_iter()
            .flat_map(|ray| ray.squares)
            .collect()
    } else {
        Vec::new()
    };

    let puzzle = game.puzzle;
    let cursor = game.cursor;
    let selected = game.selected;
    let ray_color = Color::Rgb(200, 100, 200);

    let cell_for = move |col: u8, row: u8| -> CellView {
        let here = Square::new(col, row);

        let piece_char = if here == puzzle.piece {
            Some(puzzle.kind.symbol())
        } else if puzzle.has_pawn_at(here) {
            Some(PAWN)
        } else {
            None
        };

        let base_color = if here == puzzle.piece {
            Color::White
        } else {
            Color::Rgb(140, 140, 140)
        };

        if here == cursor {
            return match piece_char {
                Some(c) => CellView::bracketed(c, base_color),
                None => CellView::glyph('\u{25A1}', Color::Rgb(100, 100, 100)),
            };
        }
        if selected == Some(here) {
            // Selection only ever lands on the piece.
            return CellView::selected(puzzle.kind.symbol(), Color::Rgb(100, 200, 100));
        }
        if let Some(c) = piece_char {
            let color = if ray_squares.contains(&here) {
                ray_color
            } else {
                base_color
            };
            return CellView::glyph(c, color);
        }
        if ray_squares.contains(&here) {
            return CellView::glyph('\u{00B7}', ray_color);
        }
        CellView::empty()
    };

    let grid = BoardGrid {
        cell_for: &cell_for,
        emphasized_file: None,
        emphasized_rank_row: None,
    };
    grid.render(frame, area);
}

fn render_status(frame: &mut Frame, area: Rect, game: &CaptureGame) {
    match game.feedback {
        Feedback::Correct => {
            render_status_bar(frame, area, "nom nom nom", Color::Green, &[]);
            return;
        }
        Feedback::Wrong => {
            render_status_bar(
                frame,
                area,
                "\u{2717} That pawn is safe",
                Color::Red,
                &[("[Arrows]", "Move"), ("[Enter]", "Select")],
            );
            return;
        }
        Feedback::None => {}
    }

    let (status_text, status_color) = if game.selected.is_some() {
        ("Choose a pawn to capture", Color::Cyan)
    } else {
        ("Select your piece", Color::White)
    };

    let controls: &[(&str, &str)] = if game.selected.is_some() {
        &[
            ("[Arrows]", "Move"),
            ("[Enter]", "Capture"),
            ("[Esc]", "Deselect"),
        ]
    } else {
        &[("[Arrows]", "Move"), ("[Enter]", "Select"), ("[Esc]", "Menu")]
    };

    render_status_bar(frame, area, status_text, status_color, controls);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &CaptureGame) {
    let inner = render_info_panel_frame(frame, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "CAPTURE THE PAWN",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Exactly one pawn sits on a square your piece attacks.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Piece:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.puzzle.kind.name(),
                Style::default().fg(Color::LightGreen),
            ),
        ]),
        Line::from(""),
    ];
    lines.extend(score_lines(
        game.tracker.score,
        game.tracker.streak,
        game.tracker.best_streak,
    ));
    if game.hint_shown {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Hint shown - this one won't count",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let text = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(text, inner);
}
