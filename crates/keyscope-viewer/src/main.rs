//! KeyScope viewer application entry point.
//!
//! Wires together the infrastructure services and starts the Tokio async
//! runtime. The presentation layer registers against the
//! [`infrastructure::ui_bridge`] module; the headless variant built here
//! runs the pumps and blocks until shutdown.
//!
//! ```text
//! main()
//!  └─ AppState::new()       -- loads config, builds services
//!  └─ start pumps
//!       ├─ FileLogSource    (reader thread, when a log path is configured)
//!       └─ Ctrl-C handler
//! ```

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use keyscope_viewer::infrastructure::log_source::{file::FileLogSource, LogSource};
use keyscope_viewer::infrastructure::storage::config::load_config;
use keyscope_viewer::infrastructure::ui_bridge::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load config, using defaults: {e}");
            Default::default()
        }
    };

    // Initialise structured logging. Level is overridden by `RUST_LOG`.
    let default_level = config.viewer.log_level.clone();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("KeyScope viewer starting");

    let log_path = config.log.path.clone();
    let poll_interval = std::time::Duration::from_millis(config.log.poll_interval_ms);
    let max_lines = config.log.max_lines;

    let state = AppState::new(config);

    // Shutdown flag shared across background pumps.
    let running = Arc::new(AtomicBool::new(true));

    // ── Log window pump ───────────────────────────────────────────────────────
    let log_source = log_path.map(|path| {
        info!(path = %path.display(), "log monitor enabled");
        FileLogSource::new(path, poll_interval, max_lines)
    });

    if let Some(ref source) = log_source {
        match source.start() {
            Ok(rx) => {
                let state_clone = Arc::clone(&state);
                // The pump thread is the serial consumer for log windows;
                // blocking_lock is safe off the async runtime.
                std::thread::spawn(move || {
                    while let Ok(window) = rx.recv() {
                        state_clone
                            .log_viewer
                            .blocking_lock()
                            .on_log_lines_refreshed(window);
                    }
                });
            }
            Err(e) => warn!("failed to start log source: {e}"),
        }
    }

    // ── Ctrl-C handler ────────────────────────────────────────────────────────
    let running_clone = Arc::clone(&running);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            running_clone.store(false, Ordering::Relaxed);
        }
    });

    info!("KeyScope viewer ready.  Press Ctrl-C to exit.");

    // In a full desktop build the native window would be created here and
    // bridge calls routed to `AppState`. The headless variant blocks until
    // the shutdown flag clears.
    loop {
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        if !running.load(Ordering::Relaxed) {
            break;
        }
    }

    if let Some(source) = log_source {
        source.stop();
    }

    info!("KeyScope viewer stopped");
    Ok(())
}
