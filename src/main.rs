// Demo binary: seeds a garage, renders it, then walks one vehicle through a
// park/exit cycle. Set RUST_LOG=debug for store-level logging.

use parking_tower::display::print_garage;
use parking_tower::{seed, GarageConfig, ParkingStore};

fn main() {
    env_logger::init();

    let mut store = ParkingStore::new(GarageConfig::default());
    let mut rng = rand::thread_rng();
    let placed = seed::populate_demo(&mut store, &mut rng);
    println!("Seeded garage with {} vehicles", placed);

    print_garage(&store);

    if let Some((row, col)) = first_free_spot(&store) {
        match store.park_at(row, col, "7777", false) {
            Ok(message) => println!("{}", message),
            Err(error) => println!("Park failed: {}", error),
        }
        if let Some(record) = store.vehicle_info("7777") {
            match serde_json::to_string(&record) {
                Ok(json) => println!("Record: {}", json),
                Err(error) => println!("Record serialization failed: {}", error),
            }
        }
        match store.exit_by_number("7777") {
            Ok(receipt) => println!("{}", receipt),
            Err(error) => println!("Exit failed: {}", error),
        }
    } else {
        println!("Garage is full");
    }
}

/// First free spot in row-major order
fn first_free_spot(store: &ParkingStore) -> Option<(usize, usize)> {
    for (row, spots) in store.grid_snapshot().iter().enumerate() {
        for (col, spot) in spots.iter().enumerate() {
            if spot.available {
                return Some((row, col));
            }
        }
    }
    None
}
