use std::path::PathBuf;
use std::time::Duration;

use advisor::advice::{AdviceClient, AdviceController};
use advisor::app::App;
use advisor::config::{self, ConfigResult};
use advisor::error::AdvisorError;
use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use reqwest::Url;

/// Fetch a random piece of advice and browse the ones seen this session
#[derive(Parser, Debug)]
#[command(name = "advisor", version, about)]
struct Args {
    /// Advice endpoint, overriding the config file
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Initial value of the history count input
    #[arg(long, value_name = "N")]
    count: Option<u32>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Event poll timeout; also the tick that picks up finished fetches
const TICK: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_debug_log();

    let ConfigResult {
        mut config,
        warning,
    } = match &args.config {
        Some(path) => config::load_explicit_config(path)?,
        None => config::load_config(),
    };

    if let Some(endpoint) = args.endpoint {
        config.advice.endpoint = endpoint;
    }
    if let Some(count) = args.count {
        config.history.default_count = count;
    }

    let endpoint =
        Url::parse(&config.advice.endpoint).map_err(|e| AdvisorError::InvalidEndpoint {
            url: config.advice.endpoint.clone(),
            reason: e.to_string(),
        })?;
    let client =
        AdviceClient::new(endpoint).map_err(|e| AdvisorError::HttpClient(e.to_string()))?;
    log::debug!("Using advice endpoint {}", client.endpoint());

    let mut app = App::new(AdviceController::spawn(client), &config);
    app.warning = warning;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.poll_advice();

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events(TICK)?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Send debug logs to a file so they never land on the alternate screen
#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let path = std::env::temp_dir().join("advisor-debug.log");
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
