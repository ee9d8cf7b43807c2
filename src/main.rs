use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;

use cybersec_console::app::{App, AppMessage};
use cybersec_console::cli::{
    handle_help_command, handle_version_command, parse_args, CliCommand,
};
use cybersec_console::config::AppConfig;
use cybersec_console::logging;
use cybersec_console::terminal::{setup_panic_hook, TerminalManager};
use cybersec_console::ui;

fn main() -> Result<()> {
    // Version and help never touch the terminal
    let options = match parse_args(std::env::args()) {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui(options) => options,
    };

    color_eyre::install()?;
    setup_panic_hook();
    let log_path = logging::init();

    let mut config = AppConfig::from_env();
    if let Some(url) = options.api_url {
        config = config.with_api_url(url);
    }
    tracing::info!(
        api_url = %config.api_url,
        local_time = config.local_time,
        log_file = ?log_path,
        "configuration loaded"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(config));

    match &result {
        Ok(()) => tracing::info!("console exited"),
        Err(e) => tracing::error!("console exited with error: {:?}", e),
    }
    result
}

async fn run(config: AppConfig) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(config);
    app.check_connection();

    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;
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

    // Take the receiver so select! can own it
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let tick_rate = Duration::from_millis(app.config.tick_rate_ms);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(tick_rate);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key_event(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("terminal event stream failed: {}", e);
                        return Err(e.into());
                    }
                    None => return Ok(()),
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
