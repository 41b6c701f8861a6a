use chrono::NaiveDate;
use rworklog::utils::date::parse_range;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_single_periods() {
    assert_eq!(parse_range("2025").unwrap(), (d(2025, 1, 1), d(2025, 12, 31)));
    assert_eq!(parse_range("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
    assert_eq!(parse_range("2025-12").unwrap(), (d(2025, 12, 1), d(2025, 12, 31)));
    assert_eq!(parse_range("2025-10-20").unwrap(), (d(2025, 10, 20), d(2025, 10, 20)));
}

#[test]
fn test_custom_ranges() {
    assert_eq!(
        parse_range("2025-10-01:2025-10-15").unwrap(),
        (d(2025, 10, 1), d(2025, 10, 15))
    );
    assert_eq!(
        parse_range("2025-09:2025-10").unwrap(),
        (d(2025, 9, 1), d(2025, 10, 31))
    );
}

#[test]
fn test_invalid_ranges() {
    assert!(parse_range("2025-10-15:2025-10-01").is_err());
    assert!(parse_range("2025-10:2025-10-15").is_err());
    assert!(parse_range("20251").is_err());
    assert!(parse_range("2025-13").is_err());
}
