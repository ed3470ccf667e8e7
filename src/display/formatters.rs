// Terminal formatting utilities for the parking grid

use crate::store::ParkingStore;

/// Alphabetic column label: 0 -> "A", 25 -> "Z", 26 -> "AA", 27 -> "AB".
/// Bijective base-26 keeps labels well-formed past 26 columns.
pub fn column_label(col: usize) -> String {
    let mut n = col + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Short cell tag for a parked vehicle (last two characters of its id)
pub fn format_vehicle_display(vehicle: &str) -> String {
    let chars: Vec<char> = vehicle.chars().collect();
    let start = chars.len().saturating_sub(2);
    let tail: String = chars[start..].iter().collect();
    format!("{:>2}", tail)
}

/// Print lettered column headers for a garage
pub fn print_column_headers(cols: usize) {
    print!("    ");
    for col in 0..cols {
        print!(" {:>2}", column_label(col));
    }
    println!();
}

/// Print the floor prefix for a grid row (floors are 1-indexed)
pub fn print_row_prefix(row: usize) {
    print!("{:2}: ", row + 1);
}

/// Print garage header with dimensions and occupancy
pub fn print_garage_header(store: &ParkingStore) {
    let config = store.config();
    println!();
    println!("=== PARKING TOWER ({} x {}) ===", config.rows, config.cols);
    println!(
        "Occupied: {} of {} spots",
        store.occupied_spots(),
        config.capacity()
    );
}

/// Render the whole garage. Occupied spots show the tail of the vehicle id;
/// seasonal vehicles are marked with '*'
pub fn print_garage(store: &ParkingStore) {
    print_garage_header(store);
    print_column_headers(store.config().cols);

    for (row, spots) in store.grid_snapshot().iter().enumerate() {
        print_row_prefix(row);
        for spot in spots {
            match &spot.car_number {
                Some(vehicle) if spot.is_seasonal => {
                    print!("{}*", format_vehicle_display(vehicle))
                }
                Some(vehicle) => print!(" {}", format_vehicle_display(vehicle)),
                None => print!("  ."),
            }
        }
        println!();
    }
    println!();
}
