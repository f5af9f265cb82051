mod ai;
mod config;
mod debug;
mod game;
mod game_modes;
mod ui;

use anyhow::Context;
use crossterm::{
    cursor::{Hide, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::process::ExitCode;

// Exit codes besides 0 (normal quit)
const EXIT_USAGE: u8 = 1;
const EXIT_TERMINAL: u8 = 2;
const EXIT_GAME: u8 = 3;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Options {
    debug: bool,
    seed: Option<u64>,
    help: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("fixpong");

    let options = match parse_args(args.get(1..).unwrap_or(&[])) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage(program);
            return ExitCode::from(EXIT_USAGE);
        }
    };
    if options.help {
        print_usage(program);
        return ExitCode::SUCCESS;
    }

    if let Err(e) = debug::init(options.debug) {
        eprintln!("Warning: debug logging unavailable: {}", e);
    }
    tracing::info!("Session start");

    let config = config::load_config().unwrap_or_else(|e| {
        tracing::warn!("Config unavailable, using defaults: {:#}", e);
        eprintln!("Warning: {:#}, using default configuration", e);
        config::Config::default()
    });

    let seed = options
        .seed
        .or(config.physics.seed)
        .unwrap_or_else(rand::random::<u64>);

    let (mut terminal, release_events) = match setup_terminal() {
        Ok(setup) => setup,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_TERMINAL);
        }
    };

    let result = game_modes::run_game_vs_ai(&mut terminal, &config, seed, release_events);

    if let Err(e) = restore_terminal(&mut terminal, release_events) {
        tracing::warn!("Terminal restore failed: {:#}", e);
    }
    tracing::info!("Session end");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::warn!("Game loop failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_GAME)
        }
    }
}

/// Parse the arguments after the program name
fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" | "-d" => options.debug = true,
            "--seed" | "-s" => {
                let value = iter.next().ok_or("--seed requires a number")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            "--help" | "-h" => options.help = true,
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(options)
}

fn print_usage(program: &str) {
    println!("Fixpong - fixed-point terminal pong against a tracking AI");
    println!();
    println!("Usage:");
    println!("  {} [--debug] [--seed <n>]", program);
    println!();
    println!("Options:");
    println!("  -d, --debug       Write a log to {}", debug::log_file_path().display());
    println!("  -s, --seed <n>    Fixed serve sequence (overrides physics.seed in the config)");
    println!("  -h, --help        Show this message");
    println!();
    println!(
        "Config file: {}",
        config::loader::get_config_path().display()
    );
}

/// Enter raw mode and the alternate screen.
/// Returns the terminal and whether key release events were enabled.
fn setup_terminal() -> anyhow::Result<(Tui, bool)> {
    enable_raw_mode().context("enabling raw mode")?;

    let setup = || -> anyhow::Result<(Tui, bool)> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide).context("entering alternate screen")?;

        let release_events = supports_keyboard_enhancement().unwrap_or(false);
        if release_events {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("enabling key release events")?;
        }
        tracing::info!("Key release events supported: {}", release_events);

        let terminal = Terminal::new(CrosstermBackend::new(stdout)).context("creating terminal")?;
        Ok((terminal, release_events))
    };

    setup().map_err(|e| {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
        e
    })
}

fn restore_terminal(terminal: &mut Tui, release_events: bool) -> anyhow::Result<()> {
    if release_events {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    terminal.show_cursor()?;
    Ok(())
}
