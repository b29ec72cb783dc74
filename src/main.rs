use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use searchbar::app::App;
use searchbar::config;
use searchbar::fetch::{SuggestClient, spawn_worker};
use searchbar::logging;

const EVENT_POLL_MS: u64 = 16;

/// Search box with live autocomplete suggestions
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Suggestion service base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Config file [default: ~/.config/searchbar/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    logging::init();

    let mut config = config::load_config(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        config.service.base_url = endpoint;
    }

    let client = SuggestClient::new(&config.service.base_url, config.service.timeout_ms)?;
    log::info!("Using suggestion service at {}", config.service.base_url);
    let app = App::new(&config, Some(spawn_worker(client)));

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = enable_input_modes().and_then(|()| run(terminal, app));

    // Restore terminal even if the loop failed
    if let Err(e) = execute!(io::stdout(), DisableBracketedPaste, DisableMouseCapture) {
        log::warn!("Failed to disable mouse capture and bracketed paste: {}", e);
    }
    ratatui::restore();

    if let Some(query) = result? {
        println!("{}", query);
    }

    Ok(())
}

fn enable_input_modes() -> Result<()> {
    execute!(io::stdout(), EnableMouseCapture, EnableBracketedPaste)?;
    Ok(())
}

/// Event loop; returns the last searched query
///
/// The app (and with it the fetch worker) is dropped when this returns.
fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Option<String>> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events(Duration::from_millis(EVENT_POLL_MS))?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app.last_search.take())
}
