use rand::Rng;

use crate::generator::random_int;
use crate::models::VehicleProfile;

pub static CATALOG: [VehicleProfile; 5] = [
    VehicleProfile {
        brand: "Honda",
        model: "Civic",
        year: 2020,
        color: "Prata",
        plate: "ABC1D23",
        fuel_type: "Flex",
        transmission: "CVT",
        engine: "2.0 i-VTEC",
        doors: 4,
        seats: 5,
        category: "Sedan",
        vin: "1HGCM82633A004352",
    },
    VehicleProfile {
        brand: "Toyota",
        model: "Corolla",
        year: 2022,
        color: "Branco",
        plate: "BRA2E19",
        fuel_type: "Flex",
        transmission: "CVT",
        engine: "2.0 Dynamic Force",
        doors: 4,
        seats: 5,
        category: "Sedan",
        vin: "9BRBDWHE3N0123456",
    },
    VehicleProfile {
        brand: "Volkswagen",
        model: "Golf GTI",
        year: 2019,
        color: "Vermelho",
        plate: "GTI7A21",
        fuel_type: "Gasolina",
        transmission: "Automática DSG 6 marchas",
        engine: "2.0 TSI",
        doors: 4,
        seats: 5,
        category: "Hatchback",
        vin: "WVWZZZAUZKW123456",
    },
    VehicleProfile {
        brand: "Ford",
        model: "Ranger",
        year: 2021,
        color: "Preto",
        plate: "RNG4F56",
        fuel_type: "Diesel",
        transmission: "Automática 6 marchas",
        engine: "3.2 Duratorq",
        doors: 4,
        seats: 5,
        category: "Picape",
        vin: "8AFAR23L1MJ123456",
    },
    VehicleProfile {
        brand: "Chevrolet",
        model: "Onix",
        year: 2023,
        color: "Azul",
        plate: "ONX8C90",
        fuel_type: "Flex",
        transmission: "Manual 6 marchas",
        engine: "1.0 Turbo",
        doors: 4,
        seats: 5,
        category: "Hatchback",
        vin: "9BGEA48A0PG123456",
    },
];

pub fn random_profile<R: Rng + ?Sized>(rng: &mut R) -> &'static VehicleProfile {
    let index = random_int(rng, 0, CATALOG.len() - 1);
    &CATALOG[index]
}
