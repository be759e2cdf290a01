use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use edux::app::{App, AppMessage};
use edux::cli::{parse_args, run_cli_command};
use edux::config::ShellConfig;
use edux::logging::init_logging;
use edux::terminal::{setup_panic_hook, TerminalManager};
use edux::ui;
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;

/// Redraw and tick cadence.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Informational flags exit before any initialization
    let options = match run_cli_command(parse_args(std::env::args())) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("edux: {message}");
            eprintln!("Try 'edux --help' for more information.");
            std::process::exit(2);
        }
    };
    let (env_config, rejected) = ShellConfig::read_env();
    let config = options.apply(env_config);

    let log_file = init_logging(&config.resolved_data_dir());
    color_eyre::install()?;
    setup_panic_hook();
    for entry in &rejected {
        entry.log();
    }

    tracing::info!(version = edux::cli::VERSION, log_file = ?log_file, "starting edux");

    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::new(config);

    let mut term_manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));
    term_manager.restore()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "run loop failed");
    }
    tracing::info!("edux exited");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the receiver so select! can await it alongside the event stream
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => {
                        app.handle_key(key);
                        // Apply completion effects before the next frame
                        if let Some(rx) = message_rx.as_mut() {
                            app.apply_pending(rx);
                        }
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "terminal event error");
                    }
                    None => {
                        tracing::warn!("terminal event stream closed");
                        app.quit();
                    }
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
