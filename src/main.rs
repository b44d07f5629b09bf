use mathwhiz::app::{App, AppMessage};
use mathwhiz::config::{self, Config};
use mathwhiz::gateway::GeminiClient;
use mathwhiz::ui;

use color_eyre::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Animation tick interval. Drives the spinner while a call is in flight.
const TICK_MS: u64 = 100;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("mathwhiz {VERSION}");
        return Ok(());
    }

    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let gateway = Arc::new(GeminiClient::new(&config));
    let mut app = App::new(gateway);

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app).await;
    restore_terminal(&mut terminal)?;

    result
}

/// Route diagnostics to a log file; the terminal belongs to the TUI.
///
/// Logging is best-effort: a missing data directory disables it rather than
/// failing startup.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let Some(path) = config::log_file_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(version = VERSION, "mathwhiz starting");
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| {
                ui::render(frame, app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(TICK_MS));

        tokio::select! {
            // Animation tick (spinner, typing indicator)
            _ = timeout => {
                app.tick();
            }

            // Keyboard events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.handle_key(key);
                            if app.should_quit {
                                return Ok(());
                            }
                        }
                        _ => {}
                    }
                }
            }

            // Gateway completion messages
            message = recv_message(&mut message_rx) => {
                if let Some(message) = message {
                    app.apply_message(message);
                }
            }
        }
    }
}

/// Receive the next completion message, pending forever if the receiver was
/// taken (it never is; the option mirrors the ownership dance above).
async fn recv_message(
    rx: &mut Option<mpsc::UnboundedReceiver<AppMessage>>,
) -> Option<AppMessage> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
