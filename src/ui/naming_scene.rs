//! Name the Square scene: highlighted target, answer echo, label-pointer hint.

use super::board_grid::{BoardGrid, CellView};
use super::game_common::{
    create_game_layout, render_info_panel_frame, render_status_bar, score_lines,
};
use crate::games::naming::NamingGame;
use crate::games::Feedback;
use crate::hints;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render_naming_scene(frame: &mut Frame, area: Rect, game: &NamingGame) {
    let layout = create_game_layout(frame, area, " Name the Square ", Color::LightCyan, 20, 24);

    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Answer echo
            Constraint::Min(18),   // Board
        ])
        .split(layout.content);

    render_answer_echo(frame, content_chunks[0], game);
    render_board(frame, content_chunks[1], game);
    render_status(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

fn render_answer_echo(frame: &mut Frame, area: Rect, game: &NamingGame) {
    let spans = vec![
        Span::styled("Answer: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:_<2}", game.input),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    let text = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(text, area);
}

fn render_board(frame: &mut Frame, area: Rect, game: &NamingGame) {
    let pointers = game
        .hint_shown
        .then(|| hints::label_pointers(game.target));

    let target = game.target;
    let solved = game.feedback == Feedback::Correct;
    let emphasized_file = pointers.as_ref().map(|p| p.file_col);
    let emphasized_rank_row = pointers.as_ref().map(|p| p.rank_row);

    let cell_for = move |col: u8, row: u8| -> CellView {
        if target.col == col && target.row == row {
            return if solved {
                CellView {
                    content: " \u{2713}  ".to_string(),
                    style: Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                }
            } else {
                CellView {
                    content: " ?  ".to_string(),
                    style: Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                }
            };
        }

        if let Some(pointers) = &pointers {
            let here = crate::board::Square::new(col, row);
            if pointers.toward_file_label.contains(&here) {
                return CellView::glyph('\u{2193}', Color::LightCyan);
            }
            if pointers.toward_rank_label.contains(&here) {
                return CellView::glyph('\u{2190}', Color::LightCyan);
            }
        }

        CellView::empty()
    };

    let grid = BoardGrid {
        cell_for: &cell_for,
        emphasized_file,
        emphasized_rank_row,
    };
    grid.render(frame, area);
}

fn render_status(frame: &mut Frame, area: Rect, game: &NamingGame) {
    match game.feedback {
        Feedback::Correct => {
            render_status_bar(frame, area, "\u{2713} Correct!", Color::Green, &[]);
        }
        Feedback::Wrong => {
            render_status_bar(
                frame,
                area,
                "\u{2717} Not that one - follow the arrows",
                Color::Red,
                &[("[a-h1-8]", "Answer"), ("[Esc]", "Menu")],
            );
        }
        Feedback::None => {
            render_status_bar(
                frame,
                area,
                "Type the highlighted square's name",
                Color::White,
                &[
                    ("[a-h1-8]", "Answer"),
                    ("[Enter]", "Submit"),
                    ("[Esc]", "Menu"),
                ],
            );
        }
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &NamingGame) {
    let inner = render_info_panel_frame(frame, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "NAME THE SQUARE",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "A square lights up. Type its file and rank, like e4.",
            Style::default().fg(Color::Gray),
        )),
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
