//! Tests for the bnb operations module.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    error::BnbError,
    models::{Owner, Snake},
    params::{
        AddAvailability, AddSnake, AvailabilitySearch, BookCage, CreateAccount, Id, RegisterCage,
    },
};

/// Helper function to create a test instance over a throwaway database
async fn create_test_bnb() -> (TempDir, Bnb) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let bnb = BnbBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create bnb");
    (temp_dir, bnb)
}

async fn create_account(bnb: &Bnb, name: &str, email: &str) -> Owner {
    bnb.create_account(&CreateAccount {
        name: name.to_string(),
        email: email.to_string(),
    })
    .await
    .expect("Failed to create account")
}

async fn add_snake(bnb: &Bnb, owner: &Owner, name: &str, length_m: f64, venomous: bool) -> Snake {
    bnb.add_snake(&AddSnake {
        owner_id: owner.id,
        name: name.to_string(),
        length_m,
        species: "Corn snake".to_string(),
        is_venomous: venomous,
    })
    .await
    .expect("Failed to add snake")
}

/// Registers a cage with one availability window 2024-01-01..2024-01-10.
async fn register_cage_with_window(
    bnb: &Bnb,
    owner: &Owner,
    name: &str,
    square_meters: f64,
    allow_dangerous: bool,
    price: f64,
) -> u64 {
    let cage = bnb
        .register_cage(&RegisterCage {
            owner_id: owner.id,
            name: name.to_string(),
            square_meters,
            is_carpeted: true,
            has_toys: false,
            allow_dangerous,
            price,
        })
        .await
        .expect("Failed to register cage");

    bnb.add_availability(&AddAvailability {
        owner_id: owner.id,
        cage_id: cage.id,
        start: date(2024, 1, 1),
        days: 9,
    })
    .await
    .expect("Failed to add availability");

    cage.id
}

#[tokio::test]
async fn test_create_account_normalizes_email() {
    let (_temp_dir, bnb) = create_test_bnb().await;

    let owner = bnb
        .create_account(&CreateAccount {
            name: "Anna".to_string(),
            email: " Anna@Example.COM ".to_string(),
        })
        .await
        .expect("Failed to create account");

    assert_eq!(owner.email, "anna@example.com");
}

#[tokio::test]
async fn test_duplicate_email_rejected_case_insensitively() {
    let (_temp_dir, bnb) = create_test_bnb().await;

    create_account(&bnb, "Anna", "anna@example.com").await;

    let err = bnb
        .create_account(&CreateAccount {
            name: "Another Anna".to_string(),
            email: "ANNA@example.com".to_string(),
        })
        .await
        .expect_err("Duplicate email should be rejected");

    assert!(matches!(err, BnbError::EmailTaken { .. }));
}

#[tokio::test]
async fn test_find_account_by_email_is_idempotent() {
    let (_temp_dir, bnb) = create_test_bnb().await;

    let owner = create_account(&bnb, "Anna", "anna@example.com").await;

    let first = bnb
        .find_account_by_email("Anna@Example.com")
        .await
        .expect("Lookup failed")
        .expect("Account should exist");
    let second = bnb
        .find_account_by_email("anna@example.com")
        .await
        .expect("Lookup failed")
        .expect("Account should exist");

    assert_eq!(first.id, owner.id);
    assert_eq!(second.id, owner.id);

    let missing = bnb
        .find_account_by_email("nobody@example.com")
        .await
        .expect("Lookup failed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_snakes_for_owner_lists_only_own_snakes() {
    let (_temp_dir, bnb) = create_test_bnb().await;

    let anna = create_account(&bnb, "Anna", "anna@example.com").await;
    let ben = create_account(&bnb, "Ben", "ben@example.com").await;

    add_snake(&bnb, &anna, "Sly", 2.0, false).await;
    add_snake(&bnb, &ben, "Hiss", 1.0, false).await;

    let snakes = bnb
        .snakes_for_owner(&Id { id: anna.id })
        .await
        .expect("Failed to list snakes");

    assert_eq!(snakes.len(), 1);
    assert_eq!(snakes[0].name, "Sly");
}

#[tokio::test]
async fn test_add_availability_appends_window() {
    let (_temp_dir, bnb) = create_test_bnb().await;

    let host = create_account(&bnb, "Host", "host@example.com").await;
    let cage_id = register_cage_with_window(&bnb, &host, "Pit", 20.0, false, 10.0).await;

    let cages = bnb
        .cages_for_owner(&Id { id: host.id })
        .await
        .expect("Failed to list cages");

    assert_eq!(cages.len(), 1);
    assert_eq!(cages[0].id, cage_id);
    assert_eq!(cages[0].bookings.len(), 1);
    assert_eq!(cages[0].bookings[0].check_in, date(2024, 1, 1));
    assert_eq!(cages[0].bookings[0].check_out, date(2024, 1, 10));
    assert!(!cages[0].bookings[0].is_booked());
}

#[tokio::test]
async fn test_add_availability_rejects_foreign_cage() {
    let (_temp_dir, bnb) = create_test_bnb().await;

    let host = create_account(&bnb, "Host", "host@example.com").await;
    let other = create_account(&bnb, "Other", "other@example.com").await;
    let cage_id = register_cage_with_window(&bnb, &host, "Pit", 20.0, false, 10.0).await;

    let err = bnb
        .add_availability(&AddAvailability {
            owner_id: other.id,
            cage_id,
            start: date(2024, 2, 1),
            days: 3,
        })
        .await
        .expect_err("Foreign cage should be rejected");

    assert!(matches!(err, BnbError::CageNotFound { .. }));
}

#[tokio::test]
async fn test_add_availability_rejects_zero_days() {
    let (_temp_dir, bnb) = create_test_bnb().await;

    let host = create_account(&bnb, "Host", "host@example.com").await;
    let cage_id = register_cage_with_window(&bnb, &host, "Pit", 20.0, false, 10.0).await;

    let err = bnb
        .add_availability(&AddAvailability {
            owner_id: host.id,
            cage_id,
            start: date(2024, 2, 1),
            days: 0,
        })
        .await
        .expect_err("Zero-day window should be rejected");

    assert!(matches!(err, BnbError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_search_rejects_inverted_range_before_querying() {
    let (_temp_dir, bnb) = create_test_bnb().await;

    // Deliberately no snake registered: validation must fire first, so the
    // error is about the range, not the missing snake.
    let err = bnb
        .available_cages(&AvailabilitySearch {
            check_in: date(2024, 1, 5),
            check_out: date(2024, 1, 5),
            snake_id: 999,
        })
        .await
        .expect_err("Inverted range should be rejected");

    assert!(matches!(err, BnbError::InvalidInput { ref field, .. } if field == "check_out"));
}

#[tokio::test]
async fn test_matcher_scenario_pit_and_sly() {
    let (_temp_dir, bnb) = create_test_bnb().await;

    let host = create_account(&bnb, "Owner A", "a@example.com").await;
    let guest = create_account(&bnb, "Owner B", "b@example.com").await;
    register_cage_with_window(&bnb, &host, "Pit", 20.0, false, 10.0).await;

    let sly = add_snake(&bnb, &guest, "Sly", 2.0, false).await;
    let viper = add_snake(&bnb, &guest, "Viper", 2.0, true).await;

    let matches = bnb
        .available_cages(&AvailabilitySearch {
            check_in: date(2024, 1, 2),
            check_out: date(2024, 1, 5),
            snake_id: sly.id,
        })
        .await
        .expect("Search failed");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].cage.name, "Pit");
    assert!(matches[0].window.covers(date(2024, 1, 2), date(2024, 1, 5)));

    // Same length, venomous: Pit does not allow dangerous snakes
    let matches = bnb
        .available_cages(&AvailabilitySearch {
            check_in: date(2024, 1, 2),
            check_out: date(2024, 1, 5),
            snake_id: viper.id,
        })
        .await
        .expect("Search failed");
    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_matcher_excludes_undersized_cages() {
    let (_temp_dir, bnb) = create_test_bnb().await;

    let host = create_account(&bnb, "Host", "host@example.com").await;
    let guest = create_account(&bnb, "Guest", "guest@example.com").await;
    register_cage_with_window(&bnb, &host, "Shoebox", 0.4, true, 1.0).await;

    // 2m snake needs at least 0.5 square meters
    let snake = add_snake(&bnb, &guest, "Sly", 2.0, false).await;

    let matches = bnb
        .available_cages(&AvailabilitySearch {
            check_in: date(2024, 1, 2),
            check_out: date(2024, 1, 5),
            snake_id: snake.id,
        })
        .await
        .expect("Search failed");

    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_matcher_orders_by_price_then_size() {
    let (_temp_dir, bnb) = create_test_bnb().await;

    let host = create_account(&bnb, "Host", "host@example.com").await;
    let guest = create_account(&bnb, "Guest", "guest@example.com").await;

    register_cage_with_window(&bnb, &host, "Pricey", 30.0, false, 25.0).await;
    register_cage_with_window(&bnb, &host, "Cheap Small", 10.0, false, 10.0).await;
    register_cage_with_window(&bnb, &host, "Cheap Big", 20.0, false, 10.0).await;

    let snake = add_snake(&bnb, &guest, "Sly", 2.0, false).await;

    let matches = bnb
        .available_cages(&AvailabilitySearch {
            check_in: date(2024, 1, 2),
            check_out: date(2024, 1, 5),
            snake_id: snake.id,
        })
        .await
        .expect("Search failed");

    let names: Vec<&str> = matches.iter().map(|m| m.cage.name.as_str()).collect();
    assert_eq!(names, vec!["Cheap Big", "Cheap Small", "Pricey"]);
}

#[tokio::test]
async fn test_booked_window_excluded_from_future_matches() {
    let (_temp_dir, bnb) = create_test_bnb().await;

    let host = create_account(&bnb, "Host", "host@example.com").await;
    let guest = create_account(&bnb, "Guest", "guest@example.com").await;
    let cage_id = register_cage_with_window(&bnb, &host, "Pit", 20.0, false, 10.0).await;
    let snake = add_snake(&bnb, &guest, "Sly", 2.0, false).await;

    let booking = bnb
        .book_cage(&BookCage {
            owner_id: guest.id,
            snake_id: snake.id,
            cage_id,
            check_in: date(2024, 1, 2),
            check_out: date(2024, 1, 5),
        })
        .await
        .expect("Booking failed");

    assert_eq!(booking.guest_owner_id, Some(guest.id));
    assert_eq!(booking.guest_snake_id, Some(snake.id));
    assert!(booking.booked_at.is_some());

    // Any overlapping range must no longer match
    let matches = bnb
        .available_cages(&AvailabilitySearch {
            check_in: date(2024, 1, 3),
            check_out: date(2024, 1, 4),
            snake_id: snake.id,
        })
        .await
        .expect("Search failed");
    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_booking_consumed_window_reports_unavailable() {
    let (_temp_dir, bnb) = create_test_bnb().await;

    let host = create_account(&bnb, "Host", "host@example.com").await;
    let guest = create_account(&bnb, "Guest", "guest@example.com").await;
    let rival = create_account(&bnb, "Rival", "rival@example.com").await;
    let cage_id = register_cage_with_window(&bnb, &host, "Pit", 20.0, false, 10.0).await;
    let snake = add_snake(&bnb, &guest, "Sly", 2.0, false).await;
    let rival_snake = add_snake(&bnb, &rival, "Slick", 2.0, false).await;

    bnb.book_cage(&BookCage {
        owner_id: guest.id,
        snake_id: snake.id,
        cage_id,
        check_in: date(2024, 1, 2),
        check_out: date(2024, 1, 5),
    })
    .await
    .expect("First booking failed");

    // The rival selected the same cage before the first commit landed
    let err = bnb
        .book_cage(&BookCage {
            owner_id: rival.id,
            snake_id: rival_snake.id,
            cage_id,
            check_in: date(2024, 1, 3),
            check_out: date(2024, 1, 6),
        })
        .await
        .expect_err("Consumed window should be reported");

    assert!(matches!(err, BnbError::WindowUnavailable { cage_id: id } if id == cage_id));
}

#[tokio::test]
async fn test_bookings_for_guest_joins_cage_details() {
    let (_temp_dir, bnb) = create_test_bnb().await;

    let host = create_account(&bnb, "Host", "host@example.com").await;
    let guest = create_account(&bnb, "Guest", "guest@example.com").await;
    let cage_id = register_cage_with_window(&bnb, &host, "Pit", 20.0, false, 10.0).await;
    let snake = add_snake(&bnb, &guest, "Sly", 2.0, false).await;

    bnb.book_cage(&BookCage {
        owner_id: guest.id,
        snake_id: snake.id,
        cage_id,
        check_in: date(2024, 1, 2),
        check_out: date(2024, 1, 5),
    })
    .await
    .expect("Booking failed");

    let summaries = bnb
        .bookings_for_guest(&Id { id: guest.id })
        .await
        .expect("Failed to list bookings");

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].cage_name, "Pit");
    assert_eq!(summaries[0].price, 10.0);
    assert_eq!(summaries[0].booking.guest_snake_id, Some(snake.id));

    // Host has no guest-side bookings
    let host_view = bnb
        .bookings_for_guest(&Id { id: host.id })
        .await
        .expect("Failed to list bookings");
    assert!(host_view.is_empty());
}
