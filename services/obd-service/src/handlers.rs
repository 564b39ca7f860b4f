use axum::{http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use rand::Rng;

use crate::catalog;
use crate::generator;
use crate::models::{CarResponse, IndexResponse, ObdReport, TelemetrySnapshot};

pub const ENDPOINTS: [&str; 3] = ["/obd", "/car", "/obd-data"];

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "🚗 Mock OBD API está funcionando!",
        endpoints: &ENDPOINTS,
        status: "online",
    })
}

pub async fn obd() -> Json<ObdReport> {
    Json(build_obd_report(&mut rand::thread_rng()))
}

pub async fn car() -> Json<CarResponse> {
    let car = catalog::random_profile(&mut rand::thread_rng());
    tracing::debug!(vin = car.vin, "generated vehicle profile");
    Json(CarResponse {
        car,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

pub async fn obd_data() -> Json<TelemetrySnapshot> {
    Json(build_telemetry(&mut rand::thread_rng()))
}

// The thread RNG is not Send, so draws stay in these sync helpers.
fn build_obd_report<R: Rng + ?Sized>(rng: &mut R) -> ObdReport {
    let car = catalog::random_profile(rng);
    let telemetry = generator::generate_snapshot(rng, car.vin);
    log_snapshot(&telemetry);
    ObdReport { car, telemetry }
}

fn build_telemetry<R: Rng + ?Sized>(rng: &mut R) -> TelemetrySnapshot {
    let vin = catalog::random_profile(rng).vin;
    let telemetry = generator::generate_snapshot(rng, vin);
    log_snapshot(&telemetry);
    telemetry
}

fn log_snapshot(telemetry: &TelemetrySnapshot) {
    tracing::debug!(
        vin = telemetry.general.vin,
        dtc_count = telemetry.general.dtc_codes.len(),
        "generated telemetry snapshot"
    );
}
