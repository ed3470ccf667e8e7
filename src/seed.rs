// Best-effort random population for demo garages
// Running out of attempts only yields a smaller population, never an error

use log::{info, warn};
use rand::Rng;

use crate::store::ParkingStore;

/// Fewest and most vehicles a demo garage starts with, before capacity capping
const MIN_SEEDED: usize = 10;
const MAX_SEEDED: usize = 20;
/// Give up generating a unique id after this many collisions
const MAX_ID_ATTEMPTS: usize = 500;
/// Chance that a seeded vehicle is on the seasonal rate
const SEASONAL_RATE: f64 = 0.4;

/// Populate `store` with a random demo occupancy. Returns the number of
/// vehicles actually placed, which falls short of the target when the random
/// draws keep landing on used ids or taken spots.
pub fn populate_demo(store: &mut ParkingStore, rng: &mut impl Rng) -> usize {
    let capacity = store.config().capacity();
    let target = rng.gen_range(MIN_SEEDED..=MAX_SEEDED).min(capacity);
    let max_spot_attempts = capacity * 3;

    let mut placed = 0;
    for _ in 0..target {
        let vehicle = match random_vehicle_id(store, rng) {
            Some(id) => id,
            None => {
                warn!(
                    "no unique vehicle id after {} attempts, stopping seeding",
                    MAX_ID_ATTEMPTS
                );
                break;
            }
        };
        let seasonal = rng.gen_bool(SEASONAL_RATE);

        match random_free_spot(store, rng, max_spot_attempts) {
            Some((row, col)) => {
                // The drawn spot is free and the id is fresh, so this cannot fail.
                if store.park_at(row, col, &vehicle, seasonal).is_ok() {
                    placed += 1;
                }
            }
            None => {
                warn!(
                    "no free spot after {} attempts, stopping seeding",
                    max_spot_attempts
                );
                break;
            }
        }
    }

    info!("seeded {} of {} demo vehicles", placed, target);
    placed
}

/// Random 4-digit id not already parked in the store
fn random_vehicle_id(store: &ParkingStore, rng: &mut impl Rng) -> Option<String> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = rng.gen_range(1000..10000).to_string();
        if store.find_vehicle(&id).is_none() {
            return Some(id);
        }
    }
    None
}

/// Uniformly random free spot, by rejection sampling over the whole grid
fn random_free_spot(
    store: &ParkingStore,
    rng: &mut impl Rng,
    max_attempts: usize,
) -> Option<(usize, usize)> {
    let config = store.config();
    for _ in 0..max_attempts {
        let row = rng.gen_range(0..config.rows);
        let col = rng.gen_range(0..config.cols);
        let free = store
            .spot(row, col)
            .map(|view| view.available)
            .unwrap_or(false);
        if free {
            return Some((row, col));
        }
    }
    None
}
