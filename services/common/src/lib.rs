use std::{
    env, fs, io,
    net::SocketAddr,
    panic,
    path::{Path, PathBuf},
    str::FromStr,
    thread,
    time::{Duration, SystemTime},
};
use tokio::net::TcpListener;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

pub struct TracingGuards {
    _file_guard: Option<WorkerGuard>,
}

pub fn init_tracing(service_name: &str) -> TracingGuards {
    // Stdout always; a daily rolling file only when LOG_DIR is set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_writer(io::stdout);

    let file_sink = env::var("LOG_DIR")
        .ok()
        .map(|dir| PathBuf::from(dir).join(service_name))
        .and_then(|root| open_file_sink(&root, service_name).map(|sink| (root, sink)));

    let Some((log_root, (writer, guard))) = file_sink else {
        let subscriber = Registry::default().with(filter).with(stdout_layer);
        let _ = tracing::subscriber::set_global_default(subscriber);
        return TracingGuards { _file_guard: None };
    };

    let subscriber = Registry::default()
        .with(filter)
        .with(stdout_layer)
        .with(fmt::layer().with_ansi(false).with_writer(writer));
    let _ = tracing::subscriber::set_global_default(subscriber);

    let retention_days = env_or("LOG_RETENTION_DAYS", 14u64);
    let cleanup_interval = env_or("LOG_CLEANUP_INTERVAL_MINUTES", 360u64);
    spawn_log_pruner(log_root, retention_days, cleanup_interval);

    TracingGuards {
        _file_guard: Some(guard),
    }
}

fn open_file_sink(
    root: &Path,
    service_name: &str,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    fs::create_dir_all(root).ok()?;
    // The rolling appender panics if the directory is unusable.
    let appender = panic::catch_unwind(|| {
        tracing_appender::rolling::daily(root, format!("{service_name}.log"))
    })
    .ok()?;
    Some(tracing_appender::non_blocking(appender))
}

pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    // Missing or malformed values fall back to the default.
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn spawn_log_pruner(log_root: PathBuf, retention_days: u64, interval_minutes: u64) {
    if retention_days == 0 || interval_minutes == 0 {
        return;
    }

    let retention = Duration::from_secs(retention_days * 24 * 60 * 60);
    let interval = Duration::from_secs(interval_minutes * 60);

    thread::spawn(move || loop {
        if let Some(cutoff) = SystemTime::now().checked_sub(retention) {
            let removed = prune_logs(&log_root, cutoff);
            if removed > 0 {
                tracing::debug!(removed, "pruned expired log files");
            }
        }
        thread::sleep(interval);
    });
}

pub fn prune_logs(root: &Path, cutoff: SystemTime) -> usize {
    let Ok(entries) = fs::read_dir(root) else {
        return 0;
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            removed += prune_logs(&path, cutoff);
            continue;
        }
        let expired = fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .map(|modified| modified < cutoff)
            .unwrap_or(false);
        if expired && fs::remove_file(&path).is_ok() {
            removed += 1;
        }
    }
    removed
}

pub async fn bind_listener(port: u16) -> io::Result<TcpListener> {
    // Bind on all interfaces for container compatibility.
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    TcpListener::bind(addr).await
}

pub async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {},
                    _ = sigterm.recv() => {},
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "sigterm handler unavailable");
                let _ = ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = ctrl_c.await;
    }

    tracing::info!("shutdown signal received");
}
