use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use storefind::app::App;
use storefind::config::{self, Config, ConfigResult};

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Search a storefront with live suggestions and optional voice input
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Suggestion lookup endpoint (overrides config)
    #[arg(long)]
    endpoint: Option<String>,

    /// Search results page URL (overrides config)
    #[arg(long)]
    results_url: Option<String>,

    /// Speech recognition locale (overrides config)
    #[arg(long)]
    locale: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    /// Apply command-line overrides on top of loaded configuration
    fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.suggestions.endpoint = endpoint.clone();
        }
        if let Some(results_url) = &self.results_url {
            config.suggestions.results_url = results_url.clone();
        }
        if let Some(locale) = &self.locale {
            config.voice.locale = locale.clone();
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_debug_logging();

    let ConfigResult {
        mut config,
        warning,
    } = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    args.apply(&mut config);

    let mut app = App::new(&config)?;
    app.start_suggestion_worker(&config.suggestions.endpoint)?;
    if let Some(warning) = warning {
        app.notification.show_warning(&warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    with_terminal_restored(
        || execute!(stdout(), EnableMouseCapture),
        || run(terminal, &mut app),
        || {
            let released = execute!(stdout(), DisableMouseCapture);
            ratatui::restore();
            released
        },
    )?;

    if let Some(navigation) = app.navigation() {
        println!("{}", navigation.url);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.tick();

        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Run `body` between `enter` and `leave`
///
/// `leave` always runs, even when `enter` or `body` failed, so the terminal is
/// restored before any error reaches the caller. The first error wins.
fn with_terminal_restored<T>(
    enter: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> Result<T>,
    leave: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    let result = match enter() {
        Ok(()) => body(),
        Err(e) => Err(e.into()),
    };
    let left = leave();

    let value = result?;
    left?;
    Ok(value)
}

/// Write debug logs to a file in the temp dir, debug builds only
#[cfg(debug_assertions)]
fn init_debug_logging() {
    use std::io::Write;

    let path = std::env::temp_dir().join("storefind-debug.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
