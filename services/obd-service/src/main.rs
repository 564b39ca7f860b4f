mod app;
mod catalog;
mod generator;
mod handlers;
mod models;

use std::process::ExitCode;

use mock_obd_common::{bind_listener, env_or, init_tracing, shutdown_signal};

const DEFAULT_PORT: u16 = 3011;

#[tokio::main]
async fn main() -> ExitCode {
    let _guards = init_tracing("obd-service");

    let port = env_or("PORT", DEFAULT_PORT);
    let listener = match bind_listener(port).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, port, "failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(port, "🚗 Mock OBD API rodando em http://localhost:{port}/obd");

    let app = app::build_router();
    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %err, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
