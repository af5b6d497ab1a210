mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use sequence_duel::build_info;
use sequence_duel::config::{default_config_path, GameConfig};
use sequence_duel::constants::{DEFAULT_TRIGGER_TAG, FRAME_MS};
use sequence_duel::display::TextPanel;
use sequence_duel::input::KeyQueue;
use sequence_duel::logging;
use sequence_duel::sequence::TurnSequenceEngine;
use sequence_duel::trigger::ZoneTrigger;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

type Engine = TurnSequenceEngine<TextPanel, StdRng>;

/// Command-line options for a game run.
#[derive(Debug, Default)]
struct CliOptions {
    config_path: Option<PathBuf>,
    log_path: Option<PathBuf>,
    verbosity: u8,
    write_default_config: bool,
}

fn print_help() {
    println!("Sequence Duel - two-player sequence memory minigame\n");
    println!("Usage: sequence-duel [options]\n");
    println!("Options:");
    println!("  --config <path>         Load settings from a JSON file");
    println!("  --write-default-config  Write the default settings and exit");
    println!("  --log-file <path>       Write logs to <path>");
    println!("  --verbose               More logging (repeat for debug/trace)");
    println!("  --version, -v           Show version information");
    println!("  --help, -h              Show this help message");
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--config" | "--log-file" => {
                let Some(value) = iter.next() else {
                    eprintln!("Missing value for {}", arg);
                    std::process::exit(1);
                };
                if arg == "--config" {
                    options.config_path = Some(PathBuf::from(value));
                } else {
                    options.log_path = Some(PathBuf::from(value));
                }
            }
            "--verbose" => options.verbosity = options.verbosity.saturating_add(1),
            "--write-default-config" => options.write_default_config = true,
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'sequence-duel --help' for usage.");
                std::process::exit(1);
            }
        }
    }
    options
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args);

    let log_path = match options.log_path.clone() {
        Some(path) => path,
        None => logging::default_log_path()?,
    };
    logging::init_logging(&log_path, options.verbosity)?;
    tracing::info!(version = %build_info::version_line(), "starting");

    let explicit_config = options.config_path.is_some();
    let config_path = match options.config_path.clone() {
        Some(path) => path,
        None => default_config_path()
            .map_err(|e| io::Error::new(io::ErrorKind::NotFound, e.to_string()))?,
    };

    if options.write_default_config {
        GameConfig::default().save(&config_path)?;
        println!("Wrote default config to {}", config_path.display());
        return Ok(());
    }

    let loaded = if explicit_config {
        GameConfig::load(&config_path)
    } else {
        GameConfig::load_or_default(&config_path)
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "could not load configuration");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let engine = match Engine::from_config(&config, TextPanel::new(), StdRng::from_entropy()) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!(error = %e, "configuration rejected");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let trigger = ZoneTrigger::new(config.trigger_tag.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, engine, trigger);

    // Restore terminal even if the game loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main loop: draw, collect key presses for one frame, then tick the engine.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut engine: Engine,
    mut trigger: ZoneTrigger,
) -> io::Result<()> {
    let frame_time = Duration::from_millis(FRAME_MS);
    let mut keys = KeyQueue::new();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &engine, &trigger))?;

        while last_frame.elapsed() < frame_time {
            let timeout = frame_time.saturating_sub(last_frame.elapsed());
            if !event::poll(timeout)? {
                continue;
            }
            let Event::Key(key_event) = event::read()? else {
                continue;
            };
            if key_event.kind != KeyEventKind::Press {
                continue;
            }
            match key_event.code {
                KeyCode::Esc => return Ok(()),
                // The hero steps onto the pad (or back onto it to restart)
                KeyCode::Enter => {
                    if !trigger.on_enter(DEFAULT_TRIGGER_TAG, &mut engine) {
                        tracing::debug!(tag = trigger.tag(), "trigger ignored hero tag");
                    }
                }
                _ => keys.push_event(key_event),
            }
        }

        let now = Instant::now();
        let delta = now.duration_since(last_frame);
        last_frame = now;

        engine.update(delta, &mut keys);
        // Presses are only good for the frame they happened in
        keys.clear();
    }
}
