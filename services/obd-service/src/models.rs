use serde::Serialize;

#[derive(Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: &'static [&'static str],
    pub status: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleProfile {
    pub brand: &'static str,
    pub model: &'static str,
    pub year: u16,
    pub color: &'static str,
    pub plate: &'static str,
    pub fuel_type: &'static str,
    pub transmission: &'static str,
    pub engine: &'static str,
    pub doors: u8,
    pub seats: u8,
    pub category: &'static str,
    pub vin: &'static str,
}

#[derive(Serialize)]
pub struct CarResponse {
    pub car: &'static VehicleProfile,
    pub timestamp: String,
}

// `/obd` payload: the chosen profile followed by the telemetry sections.
#[derive(Serialize)]
pub struct ObdReport {
    pub car: &'static VehicleProfile,
    #[serde(flatten)]
    pub telemetry: TelemetrySnapshot,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetrySnapshot {
    pub general: General,
    pub engine: Engine,
    pub fuel_system: FuelSystem,
    pub battery: Battery,
    pub air_intake: AirIntake,
    pub emissions: Emissions,
    pub environment: Environment,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct General {
    pub speed_kmh: u32,
    pub rpm: u32,
    pub gear: Gear,
    pub odometer_km: u32,
    pub vin: &'static str,
    pub dtc_codes: Vec<&'static str>,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gear {
    #[serde(rename = "P")]
    Park,
    #[serde(rename = "R")]
    Reverse,
    #[serde(rename = "N")]
    Neutral,
    #[serde(rename = "D")]
    Drive,
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
}

impl Gear {
    pub const ALL: [Gear; 7] = [
        Gear::Park,
        Gear::Reverse,
        Gear::Neutral,
        Gear::Drive,
        Gear::First,
        Gear::Second,
        Gear::Third,
    ];
}

#[derive(Debug, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Engine {
    pub load_percentage: u32,
    pub coolant_temp_c: i32,
    pub intake_air_temp_c: i32,
    pub oil_temp_c: i32,
    pub oil_pressure_psi: f64,
    pub manifold_pressure_kpa: u32,
    pub throttle_position_percent: u32,
    pub timing_advance_degrees: f64,
    pub runtime_seconds: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelSystem {
    pub fuel_level_percent: u32,
    pub fuel_pressure_psi: u32,
    pub fuel_rate_lph: f64,
    pub air_fuel_ratio: f64,
    pub short_term_fuel_trim_percent: f64,
    pub long_term_fuel_trim_percent: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Battery {
    pub voltage: f64,
    pub alternator_status: AlternatorStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlternatorStatus {
    Charging,
    Idle,
    Off,
}

impl AlternatorStatus {
    pub const ALL: [AlternatorStatus; 3] = [
        AlternatorStatus::Charging,
        AlternatorStatus::Idle,
        AlternatorStatus::Off,
    ];
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirIntake {
    pub maf_g_per_sec: f64,
    pub map_kpa: u32,
    pub iat_c: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Emissions {
    pub evap_system_vapor_pressure: f64,
    pub catalyst_temp_c: i32,
    pub egr_flow_percent: f64,
    pub o2_sensors: O2Sensors,
}

#[derive(Debug, Serialize)]
pub struct O2Sensors {
    #[serde(rename = "bank1-sensor1")]
    pub bank1_sensor1: O2Sensor,
    #[serde(rename = "bank1-sensor2")]
    pub bank1_sensor2: O2Sensor,
}

#[derive(Debug, Serialize)]
pub struct O2Sensor {
    pub voltage: f64,
    pub status: SensorStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SensorStatus {
    #[serde(rename = "ready")]
    Ready,
    #[serde(rename = "not ready")]
    NotReady,
}

impl SensorStatus {
    pub const ALL: [SensorStatus; 2] = [SensorStatus::Ready, SensorStatus::NotReady];
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub barometric_pressure_kpa: u32,
    pub ambient_air_temp_c: i32,
}
