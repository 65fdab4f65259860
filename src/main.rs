//! termfolio - a portfolio that lives in a terminal
//!
//! termfolio draws a macOS-style terminal window inside your own terminal
//! and answers a small, fixed set of commands about its author.
//!
//! # Quick Start
//!
//! ```text
//! termfolio                      # Interactive session
//! echo about | termfolio -b      # Run commands from stdin and print the result
//! ```
//!
//! # Commands
//!
//! | Command | Output |
//! |---------|--------|
//! | help | List commands |
//! | clear | Clear the screen |
//! | echo | Print arguments |
//! | date | Current date and time |
//! | ls, whoami | Folder list, user name |
//! | about, skills, contact | Profile blocks |
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | Enter | Run the input line |
//! | Up/Down | Recall older/newer commands |
//! | PageUp/PageDown, wheel | Scroll back |
//! | Click | Focus the input line |
//! | Ctrl+C, Ctrl+D | Quit |

mod config;
mod core;
mod history;
mod ui;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::{Config, ConfigError, DisplayMode};
use crate::core::{Clock, EditOp, SessionState, SystemClock, TerminalEvent};
use crate::ui::{Action, KeyMapper, Renderer, TextRenderer};

/// Command line options
#[derive(Debug, Default, PartialEq)]
struct Args {
    /// Display mode from --dark/--light
    display_mode: Option<DisplayMode>,
    /// Config file from --config
    config_path: Option<PathBuf>,
    /// Read commands from stdin instead of running interactively
    batch: bool,
}

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    eprintln!("termfolio {}", VERSION);
}

fn print_help() {
    eprintln!("termfolio {} - A portfolio styled as a macOS terminal", VERSION);
    eprintln!();
    eprintln!("Usage: termfolio [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --dark                Dark display mode (default)");
    eprintln!("  --light               Light display mode (the terminal stays dark)");
    eprintln!("  -c, --config <PATH>   Config file (default: ~/.termfolio/config.toml)");
    eprintln!("  -b, --batch           Run commands from stdin, print the screen to stdout");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Type 'help' inside the terminal to list commands.");
    eprintln!("Exit: Ctrl+C, or Ctrl+D on an empty line");
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "--dark" => parsed.display_mode = Some(DisplayMode::Dark),
            "--light" => parsed.display_mode = Some(DisplayMode::Light),
            "-c" | "--config" => {
                let path = args.next().ok_or("Missing config path")?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            "-b" | "--batch" => parsed.batch = true,
            other => {
                return Err(format!("Unknown argument: {}. Use -h for help.", other));
            }
        }
    }

    Ok(parsed)
}

/// Read the config file, keeping the error to log once logging is up
fn load_config(args: &Args) -> (Config, Option<ConfigError>) {
    let path = args.config_path.clone().or_else(Config::default_path);
    let mut config = match path.as_deref().map(Config::load_from) {
        Some(Ok(config)) => config,
        Some(Err(e)) => return (Config::default(), Some(e)),
        None => Config::default(),
    };
    if let Some(mode) = args.display_mode {
        config.dark_mode = mode == DisplayMode::Dark;
    }
    (config, None)
}

/// Log to `~/.termfolio/termfolio.log`; the screen belongs to the terminal view
fn init_logging(config: &Config) {
    let log_path = config::data_dir()
        .map(|dir| dir.join("termfolio.log"))
        .unwrap_or_else(|| PathBuf::from("termfolio.log"));

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn main() -> anyhow::Result<()> {
    let args = match parse_args(env::args()) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    let (config, config_error) = load_config(&args);
    init_logging(&config);

    info!("termfolio {} starting...", VERSION);
    if let Some(e) = config_error {
        warn!("{}; using defaults", e);
    }
    info!(
        "Display mode: {:?} (terminal palette is always dark)",
        config.display_mode()
    );

    if args.batch {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_batch(stdin.lock(), &mut stdout.lock(), &SystemClock)?;
        return Ok(());
    }

    run_interactive(&config)
}

/// Run the full-screen terminal
fn run_interactive(config: &Config) -> anyhow::Result<()> {
    let clock = SystemClock;
    let state = SessionState::new(&clock);

    let (cols, rows) = Renderer::size()?;
    info!("Terminal size: {}x{}", cols, rows);

    let mut renderer = Renderer::new(config.view.cursor_blink);
    renderer.init()?;

    let result = run_main_loop(state, &mut renderer, &clock, config.poll_interval());

    let _ = renderer.cleanup();
    result
}

/// Main event loop
fn run_main_loop(
    mut state: SessionState,
    renderer: &mut Renderer,
    clock: &dyn Clock,
    poll_timeout: Duration,
) -> anyhow::Result<()> {
    renderer.render(&state)?;

    loop {
        if !event::poll(poll_timeout)? {
            continue;
        }

        let input = event::read()?;
        match KeyMapper::map_event(&input, state.input().is_empty()) {
            Some(Action::Quit) => {
                info!("Quit requested");
                break;
            }
            Some(Action::Redraw) => {}
            Some(Action::Session(ev)) => {
                debug!(?ev, "session event");
                state = state.apply(ev, clock);
            }
            None => continue,
        }

        state.clamp_scroll(Renderer::max_scroll(&state)?);
        renderer.render(&state)?;
    }

    Ok(())
}

/// Feed each stdin line as a submitted command and print the final screen
fn run_batch<R: BufRead, W: Write>(input: R, out: &mut W, clock: &dyn Clock) -> anyhow::Result<()> {
    let mut state = SessionState::new(clock);

    for line in input.lines() {
        let line = line?;
        state = state
            .apply(TerminalEvent::Edit(EditOp::InsertStr(line)), clock)
            .apply(TerminalEvent::Submit, clock);
    }

    info!("Batch run: {} commands", state.history().len());
    out.write_all(TextRenderer::render(&state).as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::test_clock;

    fn args(list: &[&str]) -> Result<Args, String> {
        parse_args(std::iter::once("termfolio").chain(list.iter().copied()).map(String::from))
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(args(&[]), Ok(Args::default()));

        let parsed = args(&["--light", "-c", "/tmp/t.toml", "--batch"]).unwrap();
        assert_eq!(parsed.display_mode, Some(DisplayMode::Light));
        assert_eq!(parsed.config_path, Some(PathBuf::from("/tmp/t.toml")));
        assert!(parsed.batch);
    }

    #[test]
    fn test_parse_args_errors() {
        assert_eq!(args(&["--config"]), Err("Missing config path".to_string()));
        assert!(args(&["--bogus"]).unwrap_err().starts_with("Unknown argument: --bogus"));
    }

    #[test]
    fn test_cli_display_mode_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "dark_mode = true\n").unwrap();

        let parsed = Args {
            display_mode: Some(DisplayMode::Light),
            config_path: Some(path),
            batch: false,
        };
        let (config, error) = load_config(&parsed);
        assert!(error.is_none());
        assert_eq!(config.display_mode(), DisplayMode::Light);
    }

    #[test]
    fn test_batch_run() {
        let input = "echo hello world\n\nHeLLo\n".as_bytes();
        let mut out = Vec::new();
        run_batch(input, &mut out, &test_clock()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected_tail = concat!(
            "agrim@macbook-pro ~ $ echo hello world\n",
            "\n",
            "hello world\n",
            "\n",
            "agrim@macbook-pro ~ $ HeLLo\n",
            "\n",
            "Command not found: hello\n",
            "Type \"help\" to see available commands\n",
            "\n",
            "agrim@macbook-pro ~ $ \n",
        );
        assert!(text.starts_with("Last login: 10/18/2026, 3:04:05 PM\n"));
        assert!(text.ends_with(expected_tail), "{}", text);
    }

    #[test]
    fn test_batch_clear() {
        let input = "about\nclear\n".as_bytes();
        let mut out = Vec::new();
        run_batch(input, &mut out, &test_clock()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nagrim@macbook-pro ~ $ \n");
    }
}
