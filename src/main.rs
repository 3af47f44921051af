use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dinorun::assets::SpriteSet;
use dinorun::audio;
use dinorun::config::GameConfig;
use dinorun::constants::{CONFIG_FILE, FPS};
use dinorun::input::map_key;
use dinorun::session::{Session, SessionControl};
use dinorun::ui;
use dinorun::utils::frame_clock::FrameClock;
use dinorun::utils::logging;
use dinorun::utils::persistence::HighScoreStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::Duration;

type DinoTerminal = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("dinorun {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("VIP Dino Game - terminal runner\n");
                println!("Usage: dinorun [--version | --help]\n");
                println!("Controls:");
                println!("  Space      Jump / restart after game over");
                println!("  Esc, q     Quit");
                println!("\nReads {} from the working directory if present.", CONFIG_FILE);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'dinorun --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    logging::init();
    log::info!("dinorun {} starting", env!("CARGO_PKG_VERSION"));

    let config = GameConfig::load(Path::new(CONFIG_FILE));
    let sprites = SpriteSet::load(&config.assets.image_dir);
    let audio = audio::open_audio(&config.assets);
    let store = HighScoreStore::new(config.high_score_file.clone());
    let mut session = Session::new(config, store, audio, StdRng::from_entropy());

    enable_raw_mode()?;
    if let Err(e) = io::stdout().execute(EnterAlternateScreen) {
        let _ = disable_raw_mode();
        session.shutdown();
        return Err(e);
    }

    let result = run(&mut session, &sprites);

    // Always restore the terminal, even if the loop failed
    session.shutdown();
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    if let Err(e) = &result {
        log::error!("Game loop failed: {}", e);
    }
    result
}

fn run<R: Rng>(session: &mut Session<R>, sprites: &SpriteSet) -> io::Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;

    let result = game_loop(&mut terminal, session, sprites);

    terminal.show_cursor()?;
    result
}

/// Fixed-rate loop: drain input, advance one frame, draw, wait.
fn game_loop<R: Rng>(
    terminal: &mut DinoTerminal,
    session: &mut Session<R>,
    sprites: &SpriteSet,
) -> io::Result<()> {
    let mut clock = FrameClock::new(FPS);

    loop {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key(key) {
                    if session.handle_input(input) == SessionControl::Quit {
                        return Ok(());
                    }
                }
            }
        }

        session.step();

        terminal.draw(|frame| ui::draw(frame, session.game(), sprites))?;

        clock.wait_for_next_frame();
    }
}
