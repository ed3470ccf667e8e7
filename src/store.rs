// ParkingStore - the occupancy and billing core
// The grid and the vehicle index stay bidirectionally consistent: every
// occupied cell has exactly one VehicleRecord pointing back at it

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

use crate::billing;
use crate::clock::{Clock, SystemClock};
use crate::config::GarageConfig;
use crate::display::column_label;
use crate::errors::{ParkingError, ParkingResult};
use crate::grid::{SpotState, SpotView};

/// Where and when a parked vehicle entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleRecord {
    pub row: usize,
    pub col: usize,
    #[serde(rename = "entryTime")]
    pub entry_time: DateTime<Utc>,
    #[serde(rename = "isSeasonal")]
    pub seasonal: bool,
}

/// Outcome of a successful exit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExitReceipt {
    pub row: usize,
    pub col: usize,
    pub minutes: i64,
    pub fee: i64,
    #[serde(rename = "entryTime")]
    pub entry_time: DateTime<Utc>,
    #[serde(rename = "exitTime")]
    pub exit_time: DateTime<Utc>,
}

impl fmt::Display for ExitReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parked for {} min, charged {}",
            self.minutes, self.fee
        )
    }
}

pub struct ParkingStore {
    config: GarageConfig,
    grid: Vec<Vec<SpotState>>,
    vehicles: HashMap<String, VehicleRecord>,
    seasonal: HashSet<String>,
    clock: Arc<dyn Clock>,
}

impl ParkingStore {
    pub fn new(config: GarageConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build a store reading time from the given clock
    pub fn with_clock(config: GarageConfig, clock: Arc<dyn Clock>) -> Self {
        let grid = vec![vec![SpotState::Free; config.cols]; config.rows];
        Self {
            config,
            grid,
            vehicles: HashMap::new(),
            seasonal: HashSet::new(),
            clock,
        }
    }

    pub fn config(&self) -> &GarageConfig {
        &self.config
    }

    fn validate_position(&self, row: usize, col: usize) -> ParkingResult<()> {
        if !self.config.contains(row, col) {
            return Err(ParkingError::InvalidPosition {
                row,
                col,
                rows: self.config.rows,
                cols: self.config.cols,
            });
        }
        Ok(())
    }

    /// Value snapshot of every spot, row-major. Callers get copies, never
    /// aliases into the store.
    pub fn grid_snapshot(&self) -> Vec<Vec<SpotView>> {
        self.grid
            .iter()
            .map(|row| row.iter().map(SpotState::view).collect())
            .collect()
    }

    /// Snapshot of a single spot
    pub fn spot(&self, row: usize, col: usize) -> ParkingResult<SpotView> {
        self.validate_position(row, col)?;
        Ok(self.grid[row][col].view())
    }

    /// Park a vehicle at the given spot. On success returns a locator
    /// message with the 1-indexed floor and the lettered column.
    pub fn park_at(
        &mut self,
        row: usize,
        col: usize,
        vehicle: &str,
        seasonal: bool,
    ) -> ParkingResult<String> {
        self.validate_position(row, col)?;
        if self.vehicles.contains_key(vehicle) {
            return Err(ParkingError::DuplicateVehicle(vehicle.to_string()));
        }
        if !self.grid[row][col].is_free() {
            return Err(ParkingError::SpotOccupied { row, col });
        }

        let entry_time = self.clock.now();
        self.grid[row][col] = SpotState::Occupied {
            vehicle: vehicle.to_string(),
            seasonal,
        };
        self.vehicles.insert(
            vehicle.to_string(),
            VehicleRecord {
                row,
                col,
                entry_time,
                seasonal,
            },
        );
        if seasonal {
            self.seasonal.insert(vehicle.to_string());
        }

        debug!(
            "parked {} at ({}, {}), seasonal: {}",
            vehicle, row, col, seasonal
        );
        Ok(format!(
            "Parked at floor {}, spot {}",
            row + 1,
            column_label(col)
        ))
    }

    pub fn find_vehicle(&self, vehicle: &str) -> Option<&VehicleRecord> {
        self.vehicles.get(vehicle)
    }

    /// Owned copy of a vehicle's record
    pub fn vehicle_info(&self, vehicle: &str) -> Option<VehicleRecord> {
        self.vehicles.get(vehicle).cloned()
    }

    /// Whether the given vehicle is parked on the seasonal rate
    pub fn is_seasonal(&self, vehicle: &str) -> bool {
        self.seasonal.contains(vehicle)
    }

    /// Release a vehicle's spot and bill the stay
    pub fn exit_by_number(&mut self, vehicle: &str) -> ParkingResult<ExitReceipt> {
        let record = match self.vehicles.remove(vehicle) {
            Some(record) => record,
            None => return Err(ParkingError::VehicleNotFound(vehicle.to_string())),
        };

        let exit_time = self.clock.now();
        let minutes = billing::billable_minutes(record.entry_time, exit_time);
        let fee = billing::parking_fee(minutes, record.seasonal);

        self.grid[record.row][record.col] = SpotState::Free;
        self.seasonal.remove(vehicle);

        info!(
            "{} exited ({}, {}) after {} min, charged {}",
            vehicle, record.row, record.col, minutes, fee
        );
        Ok(ExitReceipt {
            row: record.row,
            col: record.col,
            minutes,
            fee,
            entry_time: record.entry_time,
            exit_time,
        })
    }

    /// Number of spots currently holding a vehicle
    pub fn occupied_spots(&self) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|spot| !spot.is_free())
            .count()
    }

    /// Clear every spot and index back to the initial all-free state
    pub fn reset(&mut self) {
        self.grid = vec![vec![SpotState::Free; self.config.cols]; self.config.rows];
        self.vehicles.clear();
        self.seasonal.clear();
        info!("garage reset to empty");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_creation() {
        let store = ParkingStore::new(GarageConfig::default());
        assert_eq!(store.occupied_spots(), 0);
        assert_eq!(store.config().capacity(), 100);
        assert!(store.find_vehicle("1234").is_none());
    }

    #[test]
    fn test_park_marks_spot_and_index() {
        let mut store = ParkingStore::new(GarageConfig::new(5, 10));
        let message = store.park_at(2, 3, "1234", true).unwrap();
        assert_eq!(message, "Parked at floor 3, spot D");

        let view = store.spot(2, 3).unwrap();
        assert!(!view.available);
        assert_eq!(view.car_number.as_deref(), Some("1234"));
        assert!(view.is_seasonal);

        let record = store.find_vehicle("1234").unwrap();
        assert_eq!((record.row, record.col), (2, 3));
        assert!(store.is_seasonal("1234"));
    }

    #[test]
    fn test_exit_frees_spot_and_index() {
        let mut store = ParkingStore::new(GarageConfig::default());
        store.park_at(4, 2, "9876", true).unwrap();

        let receipt = store.exit_by_number("9876").unwrap();
        assert_eq!((receipt.row, receipt.col), (4, 2));
        assert!(receipt.minutes >= 1);
        assert!(receipt.fee >= 250);

        let view = store.spot(4, 2).unwrap();
        assert!(view.available);
        assert_eq!(view.car_number, None);
        assert!(!view.is_seasonal);
        assert!(store.find_vehicle("9876").is_none());
        assert!(!store.is_seasonal("9876"));
    }
}
