use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::io::BufRead;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

use ai_or_not::config::Config;
use ai_or_not::game::error::{QuizError, QuizResult};
use ai_or_not::game::Game;
use ai_or_not::input::{self, Command};
use ai_or_not::output::terminal::TerminalOutput;
use ai_or_not::telemetry;

type GameHandle = Arc<Mutex<Game<TerminalOutput>>>;

fn main() {
    telemetry::init_tracing();
    if let Err(e) = run() {
        let reason = format!("{:#}", e);
        error!(error = %reason, "Exiting");
        eprintln!("{}", reason);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut config = Config::load()?;
    if let Some(path) = std::env::args_os().nth(1) {
        config.questions_path = path.into();
    }

    let output = TerminalOutput::new(config.category_labels()?);
    let game: GameHandle = Arc::new(Mutex::new(Game::new(config.round_settings(), output)));

    {
        let mut game = game.lock();
        if game.open(&config.questions_path, config.layout).is_ok() {
            game.start_round().ok();
        }
    }

    spawn_ticker(game.clone(), config.tick_duration());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Could not read from stdin")?;
        let command = match input::parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        let mut game = game.lock();
        if let Err(e) = execute(&mut game, command) {
            warn!(?command, error = %e, "Command failed");
            // Load and round-size failures were already shown by the game.
            if let QuizError::InvalidPhase(_) = e {
                println!("{}", e);
            }
        }
    }

    info!("Leaving the game");
    Ok(())
}

fn execute(game: &mut Game<TerminalOutput>, command: Command) -> QuizResult<()> {
    match command {
        Command::Answer(choice) => game.submit_answer(choice).map(|_| ()),
        Command::Next => game.advance(),
        Command::Restart => game.start_round(),
        Command::Help => {
            game.show_rules();
            Ok(())
        }
        Command::Quit => Ok(()),
    }
}

fn spawn_ticker(game: GameHandle, tick: Duration) {
    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            thread::sleep(tick);
            let now = Instant::now();
            game.lock().tick(now.duration_since(last_tick));
            last_tick = now;
        }
    });
}
