// Fee arithmetic for the stepped 10-minute tariff

use chrono::{DateTime, Utc};

/// Billing increment in minutes; any partial block is billed in full
pub const BLOCK_MINUTES: i64 = 10;
/// Charge per block, in monetary units
pub const BLOCK_FEE: i64 = 500;

/// Whole minutes between entry and exit, rounded up, never below 1.
/// Zero or negative elapsed time still bills one minute so clock skew or a
/// same-instant exit cannot produce a free stay.
pub fn billable_minutes(entry: DateTime<Utc>, exit: DateTime<Utc>) -> i64 {
    let elapsed_ms = (exit - entry).num_milliseconds();
    if elapsed_ms <= 0 {
        return 1;
    }
    (elapsed_ms + 59_999) / 60_000
}

/// Fee for a stay of the given length. Seasonal vehicles pay half, applied
/// after block rounding with integer division, which truncates exactly like
/// the floor of a non-negative half.
pub fn parking_fee(minutes: i64, seasonal: bool) -> i64 {
    let blocks = (minutes + BLOCK_MINUTES - 1) / BLOCK_MINUTES;
    let fee = blocks * BLOCK_FEE;
    if seasonal {
        fee / 2
    } else {
        fee
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_minutes_round_up() {
        let entry = instant();
        assert_eq!(billable_minutes(entry, entry + Duration::seconds(1)), 1);
        assert_eq!(billable_minutes(entry, entry + Duration::seconds(60)), 1);
        assert_eq!(billable_minutes(entry, entry + Duration::seconds(61)), 2);
        assert_eq!(
            billable_minutes(entry, entry + Duration::milliseconds(60_500)),
            2
        );
        assert_eq!(billable_minutes(entry, entry + Duration::minutes(90)), 90);
    }

    #[test]
    fn test_minutes_floor_is_one() {
        let entry = instant();
        assert_eq!(billable_minutes(entry, entry), 1);
        // Entry after exit happens under clock skew; still one minute.
        assert_eq!(billable_minutes(entry, entry - Duration::minutes(5)), 1);
    }

    #[test]
    fn test_fee_block_boundaries() {
        assert_eq!(parking_fee(1, false), 500);
        assert_eq!(parking_fee(10, false), 500);
        assert_eq!(parking_fee(11, false), 1000);
        assert_eq!(parking_fee(20, false), 1000);
        assert_eq!(parking_fee(21, false), 1500);
    }

    #[test]
    fn test_seasonal_half_rate() {
        assert_eq!(parking_fee(10, true), 250);
        assert_eq!(parking_fee(11, true), 500);
        assert_eq!(parking_fee(30, true), 750);
    }

    #[test]
    fn test_fee_monotonic_in_minutes() {
        for seasonal in [false, true] {
            let mut previous = 0;
            for minutes in 1..=240 {
                let fee = parking_fee(minutes, seasonal);
                assert!(fee >= previous, "fee dropped at {} minutes", minutes);
                previous = fee;
            }
        }
    }

    #[test]
    fn test_integer_discount_matches_float_truncation() {
        for minutes in 1..=240 {
            let full = parking_fee(minutes, false);
            let discounted = parking_fee(minutes, true);
            assert_eq!(discounted, (full as f64 * 0.5).floor() as i64);
            assert!(discounted <= full);
        }
    }
}
