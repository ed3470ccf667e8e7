use log::warn;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Custom error types for ParkingStore operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkingError {
    /// Coordinates outside the configured grid
    InvalidPosition {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Target spot already holds a vehicle
    SpotOccupied { row: usize, col: usize },
    /// Vehicle id is already parked somewhere in the garage
    DuplicateVehicle(String),
    /// Exit or lookup referencing an id with no record
    VehicleNotFound(String),
    /// Store lock contention or poisoning
    LockError(String),
}

impl fmt::Display for ParkingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParkingError::InvalidPosition {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Invalid position ({}, {}) - garage is {}x{}",
                    row, col, rows, cols
                )
            }
            ParkingError::SpotOccupied { row, col } => {
                write!(f, "Spot ({}, {}) is already occupied", row, col)
            }
            ParkingError::DuplicateVehicle(vehicle) => {
                write!(f, "Vehicle {} is already parked", vehicle)
            }
            ParkingError::VehicleNotFound(vehicle) => write!(f, "Vehicle {} not found", vehicle),
            ParkingError::LockError(msg) => write!(f, "Parking store lock error: {}", msg),
        }
    }
}

impl std::error::Error for ParkingError {}

/// Result type alias for ParkingStore operations
pub type ParkingResult<T> = Result<T, ParkingError>;

/// Safe mutex lock wrapper
pub fn safe_lock<'a, T>(mutex: &'a Mutex<T>, context: &str) -> ParkingResult<MutexGuard<'a, T>> {
    mutex.lock().map_err(|_| {
        warn!("failed to acquire lock for {}", context);
        ParkingError::LockError(format!("Failed to acquire lock for {}", context))
    })
}

/// Safe Arc<Mutex<T>> lock wrapper
pub fn safe_arc_lock<'a, T>(
    arc_mutex: &'a Arc<Mutex<T>>,
    context: &str,
) -> ParkingResult<MutexGuard<'a, T>> {
    arc_mutex.lock().map_err(|_| {
        warn!("failed to acquire arc lock for {}", context);
        ParkingError::LockError(format!("Failed to acquire arc lock for {}", context))
    })
}
