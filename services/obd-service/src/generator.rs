use rand::{distributions::uniform::SampleUniform, Rng};

use crate::models::{
    AirIntake, AlternatorStatus, Battery, Emissions, Engine, Environment, FuelSystem, Gear,
    General, Location, O2Sensor, O2Sensors, SensorStatus, TelemetrySnapshot,
};

pub const DEFAULT_PRECISION: u32 = 2;

pub const TROUBLE_CODES: [&str; 8] = [
    "P0301", "P0171", "P0420", "P0128", "P0455", "P0500", "C1234", "U0100",
];

pub const MAX_TROUBLE_CODES: usize = 3;

const ODOMETER_BASE_KM: u32 = 45_231;
const BASE_LAT: f64 = -25.43;
const BASE_LNG: f64 = -49.27;
const LOCATION_JITTER: f64 = 0.01;

pub fn random_int<T, R>(rng: &mut R, min: T, max: T) -> T
where
    T: SampleUniform + PartialOrd,
    R: Rng + ?Sized,
{
    rng.gen_range(min..=max)
}

pub fn random_float<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64, precision: u32) -> f64 {
    // Empty range degenerates to its lower bound.
    if min >= max {
        return round_to(min, precision);
    }
    round_to(rng.gen_range(min..max), precision)
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    // Adding 0.0 turns -0.0 into 0.0 so it serializes as 0.
    (value * factor).round() / factor + 0.0
}

// Panics if `options` is empty.
pub fn pick_one<T: Copy, R: Rng + ?Sized>(rng: &mut R, options: &[T]) -> T {
    options[rng.gen_range(0..options.len())]
}

pub fn generate_trouble_codes<R: Rng + ?Sized>(rng: &mut R) -> Vec<&'static str> {
    let count = random_int(rng, 0, MAX_TROUBLE_CODES);
    (0..count).map(|_| pick_one(rng, &TROUBLE_CODES)).collect()
}

pub fn generate_snapshot<R: Rng + ?Sized>(rng: &mut R, vin: &'static str) -> TelemetrySnapshot {
    TelemetrySnapshot {
        general: General {
            speed_kmh: random_int(rng, 0, 200),
            rpm: random_int(rng, 700, 7000),
            gear: pick_one(rng, &Gear::ALL),
            odometer_km: ODOMETER_BASE_KM + random_int(rng, 0, 100),
            vin,
            dtc_codes: generate_trouble_codes(rng),
            location: Location {
                lat: BASE_LAT + rng.gen::<f64>() * LOCATION_JITTER,
                lng: BASE_LNG + rng.gen::<f64>() * LOCATION_JITTER,
            },
        },
        engine: Engine {
            load_percentage: random_int(rng, 0, 100),
            coolant_temp_c: random_int(rng, 70, 110),
            intake_air_temp_c: random_int(rng, 20, 50),
            oil_temp_c: random_int(rng, 80, 120),
            oil_pressure_psi: random_float(rng, 20.0, 80.0, DEFAULT_PRECISION),
            manifold_pressure_kpa: random_int(rng, 20, 100),
            throttle_position_percent: random_int(rng, 0, 100),
            timing_advance_degrees: random_float(rng, -10.0, 10.0, DEFAULT_PRECISION),
            runtime_seconds: random_int(rng, 0, 3600),
        },
        fuel_system: FuelSystem {
            fuel_level_percent: random_int(rng, 0, 100),
            fuel_pressure_psi: random_int(rng, 30, 60),
            fuel_rate_lph: random_float(rng, 0.5, 25.0, DEFAULT_PRECISION),
            air_fuel_ratio: random_float(rng, 12.0, 15.0, DEFAULT_PRECISION),
            short_term_fuel_trim_percent: random_float(rng, -10.0, 10.0, DEFAULT_PRECISION),
            long_term_fuel_trim_percent: random_float(rng, -10.0, 10.0, DEFAULT_PRECISION),
        },
        battery: Battery {
            voltage: random_float(rng, 12.0, 14.8, DEFAULT_PRECISION),
            alternator_status: pick_one(rng, &AlternatorStatus::ALL),
        },
        air_intake: AirIntake {
            maf_g_per_sec: random_float(rng, 1.0, 25.0, DEFAULT_PRECISION),
            map_kpa: random_int(rng, 30, 90),
            iat_c: random_int(rng, 20, 45),
        },
        emissions: Emissions {
            evap_system_vapor_pressure: random_float(rng, -1.5, 1.5, DEFAULT_PRECISION),
            catalyst_temp_c: random_int(rng, 100, 800),
            egr_flow_percent: random_float(rng, 0.0, 100.0, DEFAULT_PRECISION),
            o2_sensors: O2Sensors {
                bank1_sensor1: o2_sensor(rng),
                bank1_sensor2: o2_sensor(rng),
            },
        },
        environment: Environment {
            barometric_pressure_kpa: random_int(rng, 90, 105),
            ambient_air_temp_c: random_int(rng, 15, 40),
        },
    }
}

fn o2_sensor<R: Rng + ?Sized>(rng: &mut R) -> O2Sensor {
    O2Sensor {
        voltage: random_float(rng, 0.1, 1.0, DEFAULT_PRECISION),
        status: pick_one(rng, &SensorStatus::ALL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn has_precision(value: f64, precision: u32) -> bool {
        let factor = 10f64.powi(precision as i32);
        ((value * factor).round() - value * factor).abs() < 1e-6
    }

    fn in_range(value: f64, min: f64, max: f64) -> bool {
        (min..=max).contains(&value) && has_precision(value, DEFAULT_PRECISION)
    }

    #[test]
    fn random_int_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws: Vec<u32> = (0..500).map(|_| random_int(&mut rng, 0, 3)).collect();
        assert!(draws.iter().all(|value| *value <= 3));
        assert!(draws.contains(&0));
        assert!(draws.contains(&3));
    }

    #[test]
    fn random_int_handles_negative_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let value = random_int(&mut rng, -5i32, -1);
            assert!((-5..=-1).contains(&value));
        }
    }

    #[test]
    fn random_float_rounds_to_precision() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let value = random_float(&mut rng, 12.0, 14.8, 2);
            assert!((12.0..=14.8).contains(&value));
            assert!(has_precision(value, 2));

            let coarse = random_float(&mut rng, 0.0, 10.0, 0);
            assert_eq!(coarse, coarse.trunc());
        }
    }

    #[test]
    fn random_float_never_yields_negative_zero() {
        assert!(round_to(-0.004, 2).is_sign_positive());

        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..20_000 {
            let value = random_float(&mut rng, -1.5, 1.5, DEFAULT_PRECISION);
            assert!(value != 0.0 || value.is_sign_positive(), "got -0.0");
        }
    }

    #[test]
    fn random_float_collapses_empty_range() {
        let mut rng = StdRng::seed_from_u64(19);
        assert_eq!(random_float(&mut rng, 5.0, 5.0, 2), 5.0);
        assert_eq!(random_float(&mut rng, 3.456, 1.0, 2), 3.46);
    }

    #[test]
    fn pick_one_only_returns_options() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let status = pick_one(&mut rng, &AlternatorStatus::ALL);
            assert!(AlternatorStatus::ALL.contains(&status));
        }
        assert_eq!(pick_one(&mut rng, &["only"]), "only");
    }

    #[test]
    fn trouble_codes_come_from_catalog() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut lengths = [false; MAX_TROUBLE_CODES + 1];
        for _ in 0..500 {
            let codes = generate_trouble_codes(&mut rng);
            assert!(codes.len() <= MAX_TROUBLE_CODES);
            assert!(codes.iter().all(|code| TROUBLE_CODES.contains(code)));
            lengths[codes.len()] = true;
        }
        assert!(lengths.iter().all(|seen| *seen), "every length 0..=3 should occur");
    }

    #[test]
    fn snapshot_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..300 {
            let snapshot = generate_snapshot(&mut rng, "1HGCM82633A004352");

            let general = &snapshot.general;
            assert!(general.speed_kmh <= 200);
            assert!((700..=7000).contains(&general.rpm));
            assert!((45_231..=45_331).contains(&general.odometer_km));
            assert_eq!(general.vin, "1HGCM82633A004352");
            assert!((-25.43..=-25.42).contains(&general.location.lat));
            assert!((-49.27..=-49.26).contains(&general.location.lng));

            let engine = &snapshot.engine;
            assert!(engine.load_percentage <= 100);
            assert!((70..=110).contains(&engine.coolant_temp_c));
            assert!((20..=50).contains(&engine.intake_air_temp_c));
            assert!((80..=120).contains(&engine.oil_temp_c));
            assert!(in_range(engine.oil_pressure_psi, 20.0, 80.0));
            assert!((20..=100).contains(&engine.manifold_pressure_kpa));
            assert!(engine.throttle_position_percent <= 100);
            assert!(in_range(engine.timing_advance_degrees, -10.0, 10.0));
            assert!(engine.runtime_seconds <= 3600);

            let fuel = &snapshot.fuel_system;
            assert!(fuel.fuel_level_percent <= 100);
            assert!((30..=60).contains(&fuel.fuel_pressure_psi));
            assert!(in_range(fuel.fuel_rate_lph, 0.5, 25.0));
            assert!(in_range(fuel.air_fuel_ratio, 12.0, 15.0));
            assert!(in_range(fuel.short_term_fuel_trim_percent, -10.0, 10.0));
            assert!(in_range(fuel.long_term_fuel_trim_percent, -10.0, 10.0));

            assert!(in_range(snapshot.battery.voltage, 12.0, 14.8));

            let air = &snapshot.air_intake;
            assert!(in_range(air.maf_g_per_sec, 1.0, 25.0));
            assert!((30..=90).contains(&air.map_kpa));
            assert!((20..=45).contains(&air.iat_c));

            let emissions = &snapshot.emissions;
            assert!(in_range(emissions.evap_system_vapor_pressure, -1.5, 1.5));
            assert!((100..=800).contains(&emissions.catalyst_temp_c));
            assert!(in_range(emissions.egr_flow_percent, 0.0, 100.0));
            let sensors = &emissions.o2_sensors;
            for sensor in [&sensors.bank1_sensor1, &sensors.bank1_sensor2] {
                assert!(in_range(sensor.voltage, 0.1, 1.0));
            }

            assert!((90..=105).contains(&snapshot.environment.barometric_pressure_kpa));
            assert!((15..=40).contains(&snapshot.environment.ambient_air_temp_c));
        }
    }

    #[test]
    fn seeded_snapshots_are_reproducible() {
        let first = generate_snapshot(&mut StdRng::seed_from_u64(9), "VIN");
        let second = generate_snapshot(&mut StdRng::seed_from_u64(9), "VIN");
        assert_eq!(format!("{first:?}"), format!("{second:?}"));
    }
}
