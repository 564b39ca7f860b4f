use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{car, healthz, index, obd, obd_data, readyz};

pub fn build_router() -> Router {
    // Mock data is public; any origin may read it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/obd", get(obd))
        .route("/car", get(car))
        .route("/obd-data", get(obd_data))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
