use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::audio::TerminalBell;
use flappy::build_info;
use flappy::config::GameConfig;
use flappy::high_score::{self, HighScoreStore};
use flappy::input;
use flappy::ui::{self, viewport::Viewport};
use flappy::utils::logging;
use flappy::{FrameClock, FrameOutcome, GameInput, GameLoop};
use rand::rngs::ThreadRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

type Game = GameLoop<TerminalBell<Stdout>, Box<dyn HighScoreStore>, ThreadRng>;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "flappy {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flappy - Terminal Flappy Bird\n");
                println!("Usage: flappy [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Controls:");
                println!("  Space/Up   Flap (starts the run)");
                println!("  Enter      Start without flapping");
                println!("  P          Pause / resume");
                println!("  N          Toggle day / night");
                println!("  R / click  Restart after a crash");
                println!("  Esc/Q      Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'flappy --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config = GameConfig::load();
    log::info!(
        "Starting flappy {} ({}) at {} fps",
        build_info::BUILD_DATE,
        build_info::BUILD_COMMIT,
        config.target_fps
    );

    let store = high_score::open_default_store();
    let audio = TerminalBell::new(io::stdout(), config.sound);
    let mut game = GameLoop::new(&config, audio, store, rand::thread_rng());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut game, config.target_fps);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => log::info!("Exited with high score {}", game.state().high_score),
        Err(e) => log::error!("Game loop failed: {}", e),
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut Game,
    target_fps: u32,
) -> io::Result<()> {
    let mut clock = FrameClock::new(target_fps);
    let mut viewport: Option<Viewport> = None;
    let mut inputs: Vec<GameInput> = Vec::new();

    loop {
        // Wait out the rest of the frame budget while collecting input
        while event::poll(clock.time_until_next_frame())? {
            let ev = event::read()?;
            if let Some(input) = input::map_event(&ev, viewport.as_ref()) {
                inputs.push(input);
            }
        }

        let dt = clock.tick();
        if game.frame(inputs.drain(..), dt) == FrameOutcome::Quit {
            return Ok(());
        }

        terminal.draw(|f| {
            viewport = Some(ui::draw_game(f, game.state()));
        })?;
    }
}
