use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use ratatui::layout::{Constraint, Layout};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;

use quakes::action::Action;
use quakes::app::{App, Effect, Overlay};
use quakes::client::{QuakeSource, UsgsClient};
use quakes::config::{Cli, Settings};
use quakes::connectivity;
use quakes::event::{key_to_action, AppEvent, RawEventHandler};
use quakes::render::{PlainList, Render, NO_INTERNET};
use quakes::widgets;
use quakes::worker::{FeedHandle, FeedRequest, FeedWorker};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    let settings = Settings::load(&cli)?;
    tracing::info!(url = %settings.feed_url, "starting");

    let client = Arc::new(UsgsClient::new(settings.timeout)?);

    if settings.plain {
        run_plain(client, &settings).await
    } else {
        run_tui(client, settings).await
    }
}

/// The TUI owns stdout, so logs only go to a file when one is given.
/// Plain mode logs to stderr.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Some(ref log_file) = cli.log_file {
        let file = std::fs::File::create(log_file)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .with_env_filter(filter)
            .init();
        return Ok(Some(guard));
    }
    if cli.plain {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    }
    Ok(None)
}

async fn run_plain(client: Arc<UsgsClient>, settings: &Settings) -> Result<()> {
    if settings.check_connectivity
        && !connectivity::is_online(&settings.feed_url, connectivity::CHECK_TIMEOUT).await
    {
        println!("{}", NO_INTERNET);
        return Ok(());
    }
    let quakes = client.fetch(&settings.feed_url).await;
    PlainList::new(std::io::stdout().lock()).render(&quakes)?;
    Ok(())
}

async fn run_tui(client: Arc<UsgsClient>, settings: Settings) -> Result<()> {
    let mut app = App::new(settings.feed_label());

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let connectivity_timeout = settings
        .check_connectivity
        .then_some(connectivity::CHECK_TIMEOUT);
    let (worker, feed_handle) = FeedWorker::new(client, action_tx, connectivity_timeout);
    tokio::spawn(worker.run());

    // Initial load
    let effects = app.refresh();
    handle_effects(effects, &feed_handle, &settings, &mut app);

    let mut terminal = quakes::tui::init()?;
    let mut events = RawEventHandler::new(Duration::from_secs(1));

    loop {
        terminal.draw(|frame| render(&mut app, frame))?;

        tokio::select! {
            Some(event) = events.next() => {
                let action = match event {
                    AppEvent::Key(key) => key_to_action(key, &app.input_mode, &app.overlay),
                    AppEvent::Tick => Some(Action::Tick),
                };
                if let Some(action) = action {
                    let effects = app.update(action);
                    handle_effects(effects, &feed_handle, &settings, &mut app);
                }
            }
            Some(action) = action_rx.recv() => {
                let effects = app.update(action);
                handle_effects(effects, &feed_handle, &settings, &mut app);
            }
        }

        if app.should_quit {
            break;
        }
    }

    quakes::tui::restore()?;
    Ok(())
}

fn render(app: &mut App, frame: &mut ratatui::Frame) {
    let area = frame.area();

    frame.render_widget(
        ratatui::widgets::Block::default()
            .style(ratatui::style::Style::default().bg(quakes::theme::BG_DARK)),
        area,
    );

    let layout = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Fill(1),   // List
        Constraint::Length(1), // Selected event
        Constraint::Length(1), // Footer
    ])
    .split(area);

    widgets::title_bar::render(app, frame, layout[0]);
    widgets::quake_list::render(app, frame, layout[1]);
    widgets::status_bar::render(app, frame, layout[2]);
    widgets::footer::render(app, frame, layout[3]);

    if app.overlay == Overlay::Help {
        widgets::help_overlay::render(frame, area);
    }

    widgets::error_toast::render(app, frame, area);
}

fn handle_effects(
    effects: Vec<Effect>,
    feed_handle: &FeedHandle,
    settings: &Settings,
    app: &mut App,
) {
    for effect in effects {
        match effect {
            Effect::LoadQuakes { request_id } => {
                feed_handle.send(FeedRequest::Load {
                    request_id,
                    url: settings.feed_url.clone(),
                });
            }
            Effect::OpenUrl(url) => {
                if let Err(e) = quakes::opener::open_url(&url) {
                    tracing::error!(url, error = %e, "failed to open detail page");
                    app.update(Action::Error(format!("failed to open {}: {}", url, e)));
                }
            }
            Effect::Quit => {}
        }
    }
}
