// Parking Tower: multi-level parking garage allocation and billing engine
// The HTTP/UI layer is a separate concern; it drives this library through
// ParkingStore and formats the returned values for its own transport

pub mod billing;
pub mod clock;
pub mod config;
pub mod display;
pub mod errors;
pub mod grid;
pub mod seed;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::GarageConfig;
pub use errors::{safe_arc_lock, safe_lock, ParkingError, ParkingResult};
pub use grid::{SpotState, SpotView};
pub use store::{ExitReceipt, ParkingStore, VehicleRecord};

use std::sync::{Arc, Mutex};

/// Shared handle for a store reached from more than one thread. Every
/// read-modify-write of the grid and its indexes runs under this single
/// exclusive lock.
pub type SharedParkingStore = Arc<Mutex<ParkingStore>>;

/// Wrap a store for shared use
pub fn into_shared(store: ParkingStore) -> SharedParkingStore {
    Arc::new(Mutex::new(store))
}
