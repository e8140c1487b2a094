mod app;
mod config;
mod dropdown;
mod error;
mod events;
mod item;
mod log;
mod pointer;
mod tui;

use anyhow::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;

use app::App;
use config::Config;
use events::EventHandler;

/// Command line options. Anything not given here comes from the config file.
#[derive(Debug, Default)]
struct CliArgs {
    config_path: Option<PathBuf>,
    placeholder: Option<String>,
    width: Option<u16>,
    help: bool,
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--placeholder" | "-p" => {
                if let Some(value) = args.get(i + 1) {
                    cli.placeholder = Some(value.clone());
                    i += 1;
                } else {
                    eprintln!("Warning: --placeholder requires a value");
                }
            }
            "--config" | "-c" => {
                if let Some(value) = args.get(i + 1) {
                    cli.config_path = Some(PathBuf::from(value));
                    i += 1;
                } else {
                    eprintln!("Warning: --config requires a path argument");
                }
            }
            "--width" | "-w" => match args.get(i + 1).map(|v| v.parse::<u16>()) {
                Some(Ok(width)) => {
                    cli.width = Some(width);
                    i += 1;
                }
                Some(Err(_)) => {
                    eprintln!("Warning: '{}' is not a valid width", args[i + 1]);
                    i += 1;
                }
                None => eprintln!("Warning: --width requires a number"),
            },
            "--help" | "-h" => cli.help = true,
            other => eprintln!("Warning: ignoring unknown argument '{}'", other),
        }
        i += 1;
    }

    cli
}

const USAGE: &str = "\
Usage: selectbox [OPTIONS]

Options:
  -p, --placeholder <TEXT>  Header text shown while nothing is selected
  -c, --config <PATH>       Config file (default: ~/.config/selectbox/config.toml)
  -w, --width <COLUMNS>     Dropdown width
  -h, --help                Print this help";

/// Resolve the config file and apply CLI overrides on top of it.
fn load_config(cli: &CliArgs) -> Config {
    let config = match &cli.config_path {
        Some(path) => {
            log::log(&format!("Config: {}", path.display()));
            Config::load_or_default(path)
        }
        None => {
            log::log(&format!("Config: {}", Config::config_path().display()));
            Config::load()
        }
    };
    config.with_overrides(cli.placeholder.clone(), cli.width)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args);
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    // Precedence: CLI > env var > config file > default
    let config = load_config(&cli);

    let mut app = App::new(&config);

    // Setup terminal
    tui::setup_terminal()?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    tui::restore_terminal();
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::log(&format!("Exited with error: {}", e));
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        for action in EventHandler::handle_event(app, &event) {
                            app.dispatch(action);
                        }
                    }
                    Some(Err(e)) => {
                        log::log(&format!("Event stream error: {}", e));
                        return Err(e.into());
                    }
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                log::log_event("ctrl-c signal");
                break;
            }
        }

        if app.should_quit {
            break;
        }
    }

    log::log("=== selectbox exiting ===");
    Ok(())
}
