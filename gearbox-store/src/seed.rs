use gearbox_catalog::CatalogRepository;
use rust_decimal::Decimal;
use tracing::info;

use crate::memory::MemoryStore;

const DEMO_CARS: [(&str, i32); 10] = [
    ("Civic", 2020),
    ("Corolla", 2019),
    ("Fusca", 1970),
    ("Gol", 2018),
    ("Onix", 2021),
    ("HB20", 2020),
    ("Polo", 2019),
    ("Fiesta", 2017),
    ("Uno", 2016),
    ("Palio", 2015),
];

// prices in cents
const GENERIC_PARTS: [(&str, i64); 8] = [
    ("Air Filter", 4250),
    ("Oil Filter", 2790),
    ("Fuel Filter", 5560),
    ("Front Brake Pads", 14550),
    ("Spark Plug", 3480),
    ("Timing Belt", 8990),
    ("Battery 60Ah", 28900),
    ("Engine Oil 5W30", 5790),
];

const SPECIAL_PARTS: [(&str, &str, i64); 6] = [
    ("Fusca", "Weber Carburetor", 64900),
    ("Fusca", "Master Cylinder", 22500),
    ("Fusca", "Vintage Fuse Box", 13900),
    ("Civic", "VTEC Clutch Kit", 89900),
    ("Civic", "MAP Sensor", 18500),
    ("Civic", "Ignition Coil", 26400),
];

const UNIVERSAL_PARTS: [(&str, i64); 5] = [
    ("Universal Engine Oil 20W50", 4500),
    ("Brake Fluid DOT4", 2500),
    ("Fuel Additive", 1800),
    ("Car Wax", 3500),
    ("Car Shampoo", 2200),
];

/// Load deterministic demo fixtures into an empty store: ten familiar
/// cars with a set of generic parts each, model-specific parts for a
/// couple of them, and a handful of universal parts with no owner.
pub async fn seed_demo_data(
    store: &MemoryStore,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut part_count = 0;

    for (model, year) in DEMO_CARS {
        let car = store.insert_car(model, year).await?;

        for (name, cents) in GENERIC_PARTS {
            store
                .insert_part(name, Decimal::new(cents, 2), Some(car.id))
                .await?;
            part_count += 1;
        }

        for (owner_model, name, cents) in SPECIAL_PARTS {
            if owner_model == model {
                store
                    .insert_part(name, Decimal::new(cents, 2), Some(car.id))
                    .await?;
                part_count += 1;
            }
        }
    }

    for (name, cents) in UNIVERSAL_PARTS {
        store.insert_part(name, Decimal::new(cents, 2), None).await?;
        part_count += 1;
    }

    info!(
        "Seeded {} demo cars and {} demo parts",
        DEMO_CARS.len(),
        part_count
    );
    Ok(())
}
