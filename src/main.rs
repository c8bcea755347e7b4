use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use minidash::api::{ApiWorker, EventSink, UsersClient};
use minidash::cli::Cli;
use minidash::config::Config;
use minidash::logging::init_tracing;
use minidash::session::{FileStorage, MemoryStorage, SessionStore};
use minidash::shutdown::ShutdownHandle;
use minidash::ui::app::App;
use minidash::ui::events::{AppEvent, EventHandler};
use minidash::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_from(&cli.config_path())?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&cli.log_path());
    tracing::info!(base_url = %config.api.base_url, "starting minidash");

    let shutdown = ShutdownHandle::new();
    shutdown
        .register_signals()
        .context("failed to register signal handlers")?;

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let client = UsersClient::new(&config.api)?;
    let event_tx = events.sender();
    let sink: EventSink = Arc::new(move |event| {
        let _ = event_tx.send(AppEvent::Api(event));
    });
    let (api_sender, worker) = ApiWorker::new(client, sink);
    tokio_runtime.spawn(worker.run());

    let durable = FileStorage::new(config.session.resolve_dir());
    tracing::info!(dir = %durable.dir().display(), "session store");
    let session = SessionStore::restore(
        Box::new(durable),
        Box::new(MemoryStorage::new()),
    );
    let mut app = App::new(&config, session);
    app.set_api_sender(api_sender);

    runtime::run(app, events, tick_rate)?;

    shutdown.signal();
    tokio_runtime.shutdown_timeout(Duration::from_secs(1));
    tracing::info!("minidash stopped");
    Ok(())
}
