use rolodex::api::DirectoryClient;
use rolodex::app::{App, AppMessage};
use rolodex::cli::{parse_args, CliCommand, USAGE, VERSION};
use rolodex::config::ClientConfig;
use rolodex::terminal::{enter_tui_mode, leave_tui_mode, setup_panic_hook, Tui};
use rolodex::{logging, ui};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let options = match parse_args(std::env::args())? {
        CliCommand::Version => {
            println!("rolodex {}", VERSION);
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Run(options) => options,
    };

    let config = options.apply_to(ClientConfig::from_env()?)?;
    if let Some(path) = logging::init_tracing(config.log_path.as_deref()) {
        tracing::info!(path = %path.display(), base_url = %config.base_url, "rolodex starting");
    }

    let client = DirectoryClient::from_config(&config)?;
    let mut app = App::new(client);
    app.start_at(options.start_path())?;

    setup_panic_hook();
    let mut terminal = enter_tui_mode()?;
    let result = run_app(&mut terminal, app).await;
    leave_tui_mode(&mut io::stdout());

    result
}

async fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    let Some(mut message_rx) = app.message_rx.take() else {
        return Ok(());
    };

    let mut events = EventStream::new();
    terminal.draw(|frame| ui::render(frame, &app))?;

    loop {
        tokio::select! {
            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
                drain_messages(&mut app, &mut message_rx);
            }
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if key.modifiers.contains(KeyModifiers::CONTROL)
                            && key.code == KeyCode::Char('c')
                        {
                            app.should_quit = true;
                        } else {
                            app.handle_key(key.code);
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event stream error");
                    }
                    None => break,
                }
            }
        }

        if app.should_quit {
            break;
        }
        terminal.draw(|frame| ui::render(frame, &app))?;
    }

    tracing::info!("rolodex exiting");
    Ok(())
}

/// Apply every completion already queued so one redraw covers them all.
fn drain_messages(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppMessage>) {
    while let Ok(msg) = rx.try_recv() {
        app.handle_message(msg);
    }
}
