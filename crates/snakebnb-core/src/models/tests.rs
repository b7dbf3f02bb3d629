//! Tests for the domain models.

use jiff::civil::date;

use super::*;

fn open_window(check_in: jiff::civil::Date, check_out: jiff::civil::Date) -> Booking {
    Booking {
        id: 1,
        cage_id: 1,
        check_in,
        check_out,
        guest_owner_id: None,
        guest_snake_id: None,
        booked_at: None,
    }
}

fn cage(square_meters: f64, allow_dangerous: bool) -> Cage {
    Cage {
        id: 1,
        owner_id: 1,
        name: "Pit".to_string(),
        square_meters,
        is_carpeted: true,
        has_toys: false,
        allow_dangerous,
        price: 10.0,
        bookings: vec![],
    }
}

fn snake(length_m: f64, is_venomous: bool) -> Snake {
    Snake {
        id: 1,
        owner_id: 2,
        name: "Sly".to_string(),
        length_m,
        species: "Corn snake".to_string(),
        is_venomous,
    }
}

#[test]
fn test_window_covers_inner_range() {
    let window = open_window(date(2024, 1, 1), date(2024, 1, 10));
    assert!(window.covers(date(2024, 1, 2), date(2024, 1, 5)));
    assert!(window.covers(date(2024, 1, 1), date(2024, 1, 10)));
}

#[test]
fn test_window_does_not_cover_overhang() {
    let window = open_window(date(2024, 1, 1), date(2024, 1, 10));
    assert!(!window.covers(date(2023, 12, 31), date(2024, 1, 5)));
    assert!(!window.covers(date(2024, 1, 5), date(2024, 1, 11)));
}

#[test]
fn test_window_nights() {
    let window = open_window(date(2024, 1, 1), date(2024, 1, 10));
    assert_eq!(window.nights(), 9);
}

#[test]
fn test_booked_flag_follows_guest_snake() {
    let mut window = open_window(date(2024, 1, 1), date(2024, 1, 10));
    assert!(!window.is_booked());

    window.guest_owner_id = Some(7);
    window.guest_snake_id = Some(3);
    assert!(window.is_booked());
}

#[test]
fn test_min_cage_size_is_quarter_length() {
    assert_eq!(snake(2.0, false).min_cage_size(), 0.5);
    assert_eq!(snake(8.0, false).min_cage_size(), 2.0);
}

#[test]
fn test_cage_suits_size_constraint() {
    let small = cage(0.4, true);
    let big = cage(20.0, true);
    let two_meter = snake(2.0, false);

    assert!(!small.suits(&two_meter));
    assert!(big.suits(&two_meter));
}

#[test]
fn test_cage_rejects_venomous_unless_allowed() {
    let safe_only = cage(20.0, false);
    let danger_ok = cage(20.0, true);
    let viper = snake(2.0, true);

    assert!(!safe_only.suits(&viper));
    assert!(danger_ok.suits(&viper));
}
