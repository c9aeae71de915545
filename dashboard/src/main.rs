#![warn(clippy::pedantic)]
mod error;
mod health;
mod state;
mod v1;
mod views;


use crate::error::MainError;
use crate::health::health_check;
use crate::state::{AppState, Display, Fetcher, HealthState};
use axum::Router;
use axum::routing::get;
use chrono::{DateTime, TimeDelta, Utc};
use shared::error::InitializationError;
use shared::fetcher::{HttpFeed, SnapshotFetcher};
use shared::{aggregate, init_tracing, load_config, shutdown_listener};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<(), MainError> {
    init_tracing()?;

    let config = load_config().map_err(InitializationError::from)?;
    info!(name: "config.loaded", config = ?config, "config loaded");

    let timezone = config
        .dashboard
        .timezone()
        .map_err(InitializationError::from)?;
    let feed = HttpFeed::from_config(&config.feed).map_err(InitializationError::from)?;
    let ttl = Duration::from_secs(config.feed.cache_ttl_seconds);

    let interval = Duration::from_secs(config.dashboard.interval_seconds);
    let max_staleness = TimeDelta::from_std(interval * 2).unwrap_or(TimeDelta::MAX);
    let state = AppState {
        fetcher: Arc::new(SnapshotFetcher::new(feed, ttl)),
        display: Display {
            timezone,
            top_n: config.dashboard.top_n,
        },
        health: HealthState::new(max_staleness),
    };
    info!(
        name: "fetcher.initialized",
        url = state.fetcher.source().url(),
        ttl = %humantime::format_duration(ttl),
        "initialized parking feed fetcher"
    );

    let listener = TcpListener::bind(&config.dashboard.listen_addr).await?;

    // Cancellation token shared across tasks; listener cancels on SIGINT/SIGTERM.
    let shutdown_token = CancellationToken::new();
    let signal_handle = tokio::spawn(shutdown_listener(Some(shutdown_token.clone())));

    let axum_handle = tokio::spawn(run_server(
        state.clone(),
        listener,
        shutdown_token.clone(),
    ));

    let fetcher_handle = tokio::spawn(fetcher_loop(
        Arc::clone(&state.fetcher),
        state.health.clone(),
        interval,
        shutdown_token.clone(),
    ));

    supervise(axum_handle, fetcher_handle, signal_handle, shutdown_token).await
}

/// Waits for the first task to finish, cancels the others and then waits for
/// them too, so in-flight requests are drained before the process exits.
/// Returns the first error any task reported.
async fn supervise(
    mut axum_handle: JoinHandle<Result<(), std::io::Error>>,
    mut fetcher_handle: JoinHandle<()>,
    mut signal_handle: JoinHandle<()>,
    shutdown_token: CancellationToken,
) -> Result<(), MainError> {
    let mut first_err: Option<MainError> = None;
    let mut axum_done = false;
    let mut fetcher_done = false;

    tokio::select! {
        res = &mut axum_handle => {
            info!(name: "axum.completed", "axum task completed first, propagating cancellation token to other tasks");
            axum_done = true;
            shutdown_token.cancel();
            match res {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    warn!(name: "axum.completed", error = ?e, "axum task completed due to error");
                    first_err.get_or_insert(e.into());
                }
                Err(join) => {
                    warn!(name: "axum.completed", error = ?join, "axum task completed due to error");
                    first_err.get_or_insert(join.into());
                }
            }
        }
        res = &mut fetcher_handle => {
            info!(name: "fetcher_loop.completed", "fetcher task completed first, propagating cancellation token to other tasks");
            fetcher_done = true;
            shutdown_token.cancel();
            if let Err(join) = res {
                warn!(name: "fetcher_loop.completed", error = ?join, "fetcher task completed due to error");
                first_err.get_or_insert(join.into());
            }
        }
        res = &mut signal_handle => {
            info!(name: "listener.completed", "SIGINT/SIGTERM listener task completed first, propagating cancellation token to other tasks");
            shutdown_token.cancel();
            if let Err(join) = res {
                warn!(name: "listener.completed", error = ?join, "error with SIGINT/SIGTERM listener task");
                first_err.get_or_insert(join.into());
            }
        }
    }

    if !axum_done {
        info!(name: "axum.completion.awaiting", "awaiting completion of axum task");
        match axum_handle.await {
            Ok(Ok(())) => {
                info!(name: "axum.completed", "axum task completed successfully");
            }
            Ok(Err(e)) => {
                warn!(name: "axum.completed", error = ?e, "axum task completed with error");
                first_err.get_or_insert(e.into());
            }
            Err(join) => {
                warn!(name: "axum.completed", error = ?join, "axum task completed with error");
                first_err.get_or_insert(join.into());
            }
        }
    }
    if !fetcher_done {
        info!(name: "fetcher_loop.completion.awaiting", "awaiting completion of fetcher task");
        match fetcher_handle.await {
            Ok(()) => {
                info!(name: "fetcher_loop.completed", "fetcher task completed successfully");
            }
            Err(join) => {
                warn!(name: "fetcher_loop.completed", error = ?join, "fetcher task completed with error");
                first_err.get_or_insert(join.into());
            }
        }
    }

    first_err.map_or(Ok(()), Err)
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/v1", v1::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn run_server(
    state: AppState,
    listener: TcpListener,
    shutdown: CancellationToken,
) -> Result<(), std::io::Error> {
    info!(name: "axum.initialized", listen_addr = ?listener.local_addr()?, "starting dashboard server");
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;
    Ok(())
}

/// Refreshes the snapshot every `interval` so the cache stays warm and `/health`
/// reflects the feed. A failed cycle is only logged; the next cycle is the retry.
async fn fetcher_loop(
    fetcher: Arc<Fetcher>,
    health: HealthState,
    interval: Duration,
    shutdown: CancellationToken,
) {
    info!(name: "fetcher_loop.initialized", "initialized parking feed poll loop");
    let mut initial_loop = true;
    let mut previous_latest: Option<DateTime<Utc>> = None;
    loop {
        if initial_loop {
            initial_loop = false;
        } else {
            tokio::select! {
                () = sleep(interval) => {},
                () = shutdown.cancelled() => {
                    info!(name: "fetcher_loop.shutdown.requested", "shutdown requested, exiting fetcher loop");
                    break;
                }
            }
        }

        let now = Utc::now();
        health.record_attempt(now);
        let snapshot = match fetcher.fetch().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(name: "fetcher_loop.snapshot.failed", error = ?e, "failed to fetch parking snapshot");
                health.record_error(format!("could not fetch parking data: {e}"));
                continue;
            }
        };
        health.record_success(now);

        let stats = aggregate::summarize(&snapshot);
        if stats.latest_time.is_some() && stats.latest_time == previous_latest {
            debug!(
                name: "fetcher_loop.snapshot.unchanged",
                latest_time = ?stats.latest_time,
                "found no change to parking feed"
            );
            continue;
        }
        previous_latest = stats.latest_time;

        info!(
            name: "fetcher_loop.snapshot.updated",
            facilities = stats.total_stallingen,
            total = stats.totaal_plekken,
            free = stats.totaal_vrij,
            occupied = stats.totaal_bezet,
            latest_time = ?stats.latest_time,
            "parking snapshot updated"
        );
    }
}
