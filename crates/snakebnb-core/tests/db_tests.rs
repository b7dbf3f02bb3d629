use jiff::civil::date;
use snakebnb_core::{
    AddAvailability, AddSnake, BnbError, BookCage, Database, RegisterCage, Snake,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn seed_owner(db: &mut Database, email: &str) -> u64 {
    db.create_owner("Test Owner", email)
        .expect("Failed to create owner")
        .id
}

fn seed_cage(db: &mut Database, owner_id: u64, name: &str, sqm: f64, price: f64) -> u64 {
    db.register_cage(&RegisterCage {
        owner_id,
        name: name.to_string(),
        square_meters: sqm,
        is_carpeted: false,
        has_toys: true,
        allow_dangerous: true,
        price,
    })
    .expect("Failed to register cage")
    .id
}

fn seed_snake(db: &mut Database, owner_id: u64) -> Snake {
    db.add_snake(&AddSnake {
        owner_id,
        name: "Sly".to_string(),
        length_m: 2.0,
        species: "Corn snake".to_string(),
        is_venomous: false,
    })
    .expect("Failed to add snake")
}

#[test]
fn test_database_initialization() {
    let (_temp_file, _db) = create_test_db();

    // Schema applied without error; reopening runs migrations idempotently
    assert!(_temp_file.path().exists());
    let _reopened = Database::new(_temp_file.path()).expect("Failed to reopen database");
}

#[test]
fn test_create_owner_and_lookup() {
    let (_temp_file, mut db) = create_test_db();

    let owner = db
        .create_owner("Anna", "anna@example.com")
        .expect("Failed to create owner");
    assert!(owner.id > 0);

    let found = db
        .find_owner_by_email("anna@example.com")
        .expect("Lookup failed")
        .expect("Owner should exist");
    assert_eq!(found.id, owner.id);
    assert_eq!(found.name, "Anna");
}

#[test]
fn test_duplicate_email_is_rejected() {
    let (_temp_file, mut db) = create_test_db();

    seed_owner(&mut db, "anna@example.com");
    let err = db
        .create_owner("Anna Again", "anna@example.com")
        .expect_err("Duplicate email should fail");
    assert!(matches!(err, BnbError::EmailTaken { .. }));
}

#[test]
fn test_add_snake_requires_owner() {
    let (_temp_file, mut db) = create_test_db();

    let err = db
        .add_snake(&AddSnake {
            owner_id: 42,
            name: "Ghost".to_string(),
            length_m: 1.0,
            species: "Ball python".to_string(),
            is_venomous: false,
        })
        .expect_err("Unknown owner should fail");
    assert!(matches!(err, BnbError::OwnerNotFound { id: 42 }));
}

#[test]
fn test_availability_window_stored_in_order() {
    let (_temp_file, mut db) = create_test_db();

    let owner_id = seed_owner(&mut db, "host@example.com");
    let cage_id = seed_cage(&mut db, owner_id, "Pit", 20.0, 10.0);

    db.add_availability(&AddAvailability {
        owner_id,
        cage_id,
        start: date(2024, 3, 1),
        days: 5,
    })
    .expect("Failed to add later window");
    db.add_availability(&AddAvailability {
        owner_id,
        cage_id,
        start: date(2024, 1, 1),
        days: 9,
    })
    .expect("Failed to add earlier window");

    let windows = db
        .bookings_for_cage(cage_id)
        .expect("Failed to list windows");
    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0].check_in, date(2024, 1, 1));
    assert_eq!(windows[0].check_out, date(2024, 1, 10));
    assert_eq!(windows[1].check_in, date(2024, 3, 1));
}

#[test]
fn test_get_cage_loads_windows() {
    let (_temp_file, mut db) = create_test_db();

    let owner_id = seed_owner(&mut db, "host@example.com");
    let cage_id = seed_cage(&mut db, owner_id, "Pit", 20.0, 10.0);
    db.add_availability(&AddAvailability {
        owner_id,
        cage_id,
        start: date(2024, 1, 1),
        days: 9,
    })
    .expect("Failed to add window");

    let cage = db
        .get_cage(cage_id)
        .expect("Failed to get cage")
        .expect("Cage should exist");
    assert_eq!(cage.name, "Pit");
    assert_eq!(cage.bookings.len(), 1);
}

#[test]
fn test_available_cages_returns_covering_window() {
    let (_temp_file, mut db) = create_test_db();

    let host_id = seed_owner(&mut db, "host@example.com");
    let guest_id = seed_owner(&mut db, "guest@example.com");
    let cage_id = seed_cage(&mut db, host_id, "Pit", 20.0, 10.0);
    db.add_availability(&AddAvailability {
        owner_id: host_id,
        cage_id,
        start: date(2024, 1, 1),
        days: 9,
    })
    .expect("Failed to add window");
    let snake = seed_snake(&mut db, guest_id);

    let matches = db
        .available_cages(date(2024, 1, 2), date(2024, 1, 5), &snake)
        .expect("Search failed");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].cage.id, cage_id);
    assert_eq!(matches[0].window.check_in, date(2024, 1, 1));

    // Range the window does not cover
    let matches = db
        .available_cages(date(2024, 1, 8), date(2024, 1, 15), &snake)
        .expect("Search failed");
    assert!(matches.is_empty());
}

#[test]
fn test_book_cage_stamps_guest_and_time() {
    let (_temp_file, mut db) = create_test_db();

    let host_id = seed_owner(&mut db, "host@example.com");
    let guest_id = seed_owner(&mut db, "guest@example.com");
    let cage_id = seed_cage(&mut db, host_id, "Pit", 20.0, 10.0);
    db.add_availability(&AddAvailability {
        owner_id: host_id,
        cage_id,
        start: date(2024, 1, 1),
        days: 9,
    })
    .expect("Failed to add window");
    let snake = seed_snake(&mut db, guest_id);

    let booking = db
        .book_cage(&BookCage {
            owner_id: guest_id,
            snake_id: snake.id,
            cage_id,
            check_in: date(2024, 1, 2),
            check_out: date(2024, 1, 5),
        })
        .expect("Booking failed");

    assert_eq!(booking.guest_owner_id, Some(guest_id));
    assert_eq!(booking.guest_snake_id, Some(snake.id));
    assert!(booking.booked_at.is_some());

    // The window is mutated in place, not replaced
    let windows = db
        .bookings_for_cage(cage_id)
        .expect("Failed to list windows");
    assert_eq!(windows.len(), 1);
    assert!(windows[0].is_booked());
}

#[test]
fn test_book_cage_without_open_window_fails() {
    let (_temp_file, mut db) = create_test_db();

    let host_id = seed_owner(&mut db, "host@example.com");
    let guest_id = seed_owner(&mut db, "guest@example.com");
    let cage_id = seed_cage(&mut db, host_id, "Pit", 20.0, 10.0);
    let snake = seed_snake(&mut db, guest_id);

    // No availability registered at all
    let err = db
        .book_cage(&BookCage {
            owner_id: guest_id,
            snake_id: snake.id,
            cage_id,
            check_in: date(2024, 1, 2),
            check_out: date(2024, 1, 5),
        })
        .expect_err("Booking without a window should fail");

    assert!(matches!(err, BnbError::WindowUnavailable { cage_id: id } if id == cage_id));
}

#[test]
fn test_bookings_for_guest_empty_without_bookings() {
    let (_temp_file, mut db) = create_test_db();

    let guest_id = seed_owner(&mut db, "guest@example.com");
    let summaries = db
        .bookings_for_guest(guest_id)
        .expect("Failed to list bookings");
    assert!(summaries.is_empty());
}
