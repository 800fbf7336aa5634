use starships::adapters::{ReqwestHttpClient, TracingDiagnostics};
use starships::api::StarshipApi;
use starships::app::{App, AppMessage};
use starships::cli::{parse_args, run_cli_command, CliCommand, EXIT_USAGE, USAGE};
use starships::config::AppConfig;
use starships::logging::init_logging;
use starships::terminal::{setup_panic_hook, TerminalManager};
use starships::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Animation tick, roughly 60 frames a second
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let args = match parse_args(std::env::args()) {
        Ok(CliCommand::Run(args)) => args,
        Ok(command) => std::process::exit(run_cli_command(&command)),
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(EXIT_USAGE);
        }
    };

    let config = match AppConfig::from_env().and_then(|config| config.apply_args(&args)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(EXIT_USAGE);
        }
    };

    color_eyre::install()?;

    if let Some(log_file) = &config.log_file {
        if let Err(e) = init_logging(config.log_level, log_file) {
            eprintln!("warning: logging disabled ({}: {})", log_file.display(), e);
        }
    }
    tracing::info!(
        "starting {} api={} path={}",
        starships::cli::version_line(),
        config.api_base,
        config.initial_path
    );

    // Installed after color-eyre so its hook runs once the terminal is back.
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let http = ReqwestHttpClient::with_timeout(config.timeout)?;
        let api = StarshipApi::new(Arc::new(http), config.api_base.as_str());
        let diagnostics = Arc::new(TracingDiagnostics::new(config.log_level));
        let mut app = App::new(api, diagnostics, &config.initial_path);

        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore()?;

        if let Err(e) = &result {
            tracing::error!("event loop failed: {}", e);
        }
        tracing::info!("exiting at {}", app.current_path());
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event = event_stream.next() => {
                match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            message = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                match message {
                    Some(message) => {
                        app.handle_message(message);
                    }
                    // The app holds a sender, so this only happens if it was dropped.
                    None => message_rx = None,
                }
            }
        }
    }
}
