use boardwise::build_info;
use boardwise::games::capture::{logic as capture_logic, CaptureGame, CaptureInput};
use boardwise::games::naming::{logic as naming_logic, NamingGame, NamingInput};
use boardwise::games::{RoundOutcome, TICK_INTERVAL_MS};
use boardwise::stats::TrainerStats;
use boardwise::ui::capture_scene::render_capture_scene;
use boardwise::ui::menu_scene::MenuScreen;
use boardwise::ui::naming_scene::render_naming_scene;
use chrono::Utc;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Which screen owns input. Game screens own their session state.
enum Screen {
    Menu,
    Naming(NamingGame),
    Capture(CaptureGame),
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "boardwise {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Boardwise - Terminal Chess-Square Trainers\n");
                println!("Usage: boardwise\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'boardwise --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut stats = TrainerStats::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut stats);

    // Cleanup terminal before surfacing any error
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    stats.last_played = Utc::now().timestamp();
    stats.save()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    stats: &mut TrainerStats,
) -> io::Result<()> {
    let mut menu = MenuScreen::new();
    let mut screen = Screen::Menu;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            match &screen {
                Screen::Menu => menu.draw(frame, area, stats),
                Screen::Naming(game) => render_naming_scene(frame, area, game),
                Screen::Capture(game) => render_capture_scene(frame, area, game),
            }
        })?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                match &mut screen {
                    Screen::Menu => match key_event.code {
                        KeyCode::Up => menu.move_up(),
                        KeyCode::Down => menu.move_down(),
                        KeyCode::Enter => {
                            let mut rng = rand::thread_rng();
                            screen = if menu.selected_index == 0 {
                                Screen::Naming(NamingGame::new(
                                    stats.naming_best_streak,
                                    &mut rng,
                                ))
                            } else {
                                Screen::Capture(CaptureGame::new(
                                    capture_logic::generate_puzzle(&mut rng),
                                    stats.capture_best_streak,
                                ))
                            };
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        _ => {}
                    },

                    Screen::Naming(game) => match key_event.code {
                        KeyCode::Esc => {
                            stats.last_played = Utc::now().timestamp();
                            stats.save()?;
                            screen = Screen::Menu;
                        }
                        KeyCode::Enter => {
                            handle_naming(game, NamingInput::Enter, stats)?;
                        }
                        KeyCode::Backspace => {
                            handle_naming(game, NamingInput::Backspace, stats)?;
                        }
                        KeyCode::Char(c) => {
                            handle_naming(game, NamingInput::Char(c), stats)?;
                        }
                        _ => {}
                    },

                    Screen::Capture(game) => match key_event.code {
                        KeyCode::Esc => {
                            // Esc deselects first; from a clean board it
                            // returns to the menu.
                            if game.selected.is_some() {
                                capture_logic::process_input(game, CaptureInput::Cancel);
                            } else {
                                stats.last_played = Utc::now().timestamp();
                                stats.save()?;
                                screen = Screen::Menu;
                            }
                        }
                        KeyCode::Up => {
                            capture_logic::process_input(game, CaptureInput::Up);
                        }
                        KeyCode::Down => {
                            capture_logic::process_input(game, CaptureInput::Down);
                        }
                        KeyCode::Left => {
                            capture_logic::process_input(game, CaptureInput::Left);
                        }
                        KeyCode::Right => {
                            capture_logic::process_input(game, CaptureInput::Right);
                        }
                        KeyCode::Enter => {
                            let outcome = capture_logic::process_input(game, CaptureInput::Select);
                            if let RoundOutcome::Correct { new_best: true } = outcome {
                                stats.capture_best_streak = game.tracker.best_streak;
                                stats.save()?;
                            }
                        }
                        _ => {}
                    },
                }
            }
        }

        // Feedback countdowns advance every 100ms
        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            let mut rng = rand::thread_rng();
            match &mut screen {
                Screen::Menu => {}
                Screen::Naming(game) => naming_logic::tick(game, &mut rng),
                Screen::Capture(game) => capture_logic::tick(game, &mut rng),
            }
            last_tick = Instant::now();
        }
    }
}

fn handle_naming(
    game: &mut NamingGame,
    input: NamingInput,
    stats: &mut TrainerStats,
) -> io::Result<()> {
    let outcome = naming_logic::process_input(game, input);
    if let RoundOutcome::Correct { new_best: true } = outcome {
        stats.naming_best_streak = game.tracker.best_streak;
        stats.save()?;
    }
    Ok(())
}
