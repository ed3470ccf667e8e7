// Single-layer parking surface cells
// A spot either sits free or holds exactly one vehicle; the seasonal flag
// only exists while a vehicle is present

use serde::{Deserialize, Serialize};

/// State of one parking spot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpotState {
    /// No vehicle present
    Free,
    /// Vehicle present, with its seasonal-rate flag
    Occupied { vehicle: String, seasonal: bool },
}

impl SpotState {
    pub fn is_free(&self) -> bool {
        matches!(self, SpotState::Free)
    }

    pub fn occupant(&self) -> Option<&str> {
        match self {
            SpotState::Occupied { vehicle, .. } => Some(vehicle),
            SpotState::Free => None,
        }
    }

    /// Value snapshot of this cell for callers outside the store
    pub fn view(&self) -> SpotView {
        match self {
            SpotState::Free => SpotView {
                available: true,
                car_number: None,
                is_seasonal: false,
            },
            SpotState::Occupied { vehicle, seasonal } => SpotView {
                available: false,
                car_number: Some(vehicle.clone()),
                is_seasonal: *seasonal,
            },
        }
    }
}

/// Independent copy of a spot's state, shaped for the consuming layer's
/// row-major 2-D grid of {available, carNumber, isSeasonal} objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotView {
    pub available: bool,
    #[serde(rename = "carNumber")]
    pub car_number: Option<String>,
    #[serde(rename = "isSeasonal")]
    pub is_seasonal: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_spot_view() {
        let view = SpotState::Free.view();
        assert!(view.available);
        assert_eq!(view.car_number, None);
        assert!(!view.is_seasonal);
    }

    #[test]
    fn test_view_json_field_names() {
        let spot = SpotState::Occupied {
            vehicle: "1234".to_string(),
            seasonal: true,
        };
        let json = serde_json::to_value(spot.view()).unwrap();
        assert_eq!(json["available"], false);
        assert_eq!(json["carNumber"], "1234");
        assert_eq!(json["isSeasonal"], true);
    }
}
