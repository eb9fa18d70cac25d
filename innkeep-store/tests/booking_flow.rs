use chrono::NaiveDate;
use innkeep_core::booking::{BookingStatus, CreateBooking};
use innkeep_core::guest::NewGuest;
use innkeep_core::repository::{
    BookingRepository, GuestRepository, ReportRepository, RoomRepository, ServiceRepository,
};
use innkeep_core::room::RoomStatus;
use innkeep_core::service::NewService;
use innkeep_core::stay::StayWindow;
use innkeep_core::Error;
use innkeep_store::{
    seed, DbClient, SqliteBookingRepository, SqliteGuestRepository, SqliteReportRepository,
    SqliteRoomRepository, SqliteServiceRepository,
};

async fn test_db() -> DbClient {
    let db = DbClient::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    seed::seed(&db.pool).await.unwrap();
    db
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn window(check_in: &str, check_out: &str) -> StayWindow {
    StayWindow::new(date(check_in), date(check_out)).unwrap()
}

fn guest(name: &str, passport: &str) -> NewGuest {
    NewGuest {
        full_name: name.into(),
        passport: passport.into(),
        phone: Some("+10000000000".into()),
        email: Some("guest@example.com".into()),
        preferences: None,
    }
}

async fn room_id_by_number(rooms: &SqliteRoomRepository, number: &str) -> i64 {
    rooms
        .list()
        .await
        .unwrap()
        .into_iter()
        .find(|r| r.number == number)
        .unwrap()
        .id
}

#[tokio::test]
async fn seed_populates_inventory_once() {
    let db = test_db().await;
    let rooms = SqliteRoomRepository::new(db.pool.clone());

    let all = rooms.list().await.unwrap();
    assert_eq!(all.len(), 5);
    assert!(all.iter().all(|r| r.status == RoomStatus::Free));

    // Second run must be a no-op.
    seed::seed(&db.pool).await.unwrap();
    assert_eq!(rooms.list().await.unwrap().len(), 5);

    let guests = SqliteGuestRepository::new(db.pool.clone());
    assert_eq!(guests.list_with_stays().await.unwrap().len(), 1);
}

#[tokio::test]
async fn search_excludes_room_after_booking() {
    let db = test_db().await;
    let rooms = SqliteRoomRepository::new(db.pool.clone());
    let bookings = SqliteBookingRepository::new(db.pool.clone());

    let w = window("2024-06-01", "2024-06-03");
    let available = rooms.search_available(w, None).await.unwrap();
    assert_eq!(available.len(), 5);

    let room_101 = room_id_by_number(&rooms, "101").await;
    bookings
        .create(&CreateBooking {
            room_id: room_101,
            window: w,
            guest: guest("Jane Doe", "P100"),
        })
        .await
        .unwrap();

    let available = rooms.search_available(w, None).await.unwrap();
    assert_eq!(available.len(), 4);
    assert!(available.iter().all(|r| r.number != "101"));
}

#[tokio::test]
async fn search_filters_by_room_type() {
    let db = test_db().await;
    let rooms = SqliteRoomRepository::new(db.pool.clone());

    let w = window("2024-06-01", "2024-06-03");
    let luxury = rooms.search_available(w, Some("luxury")).await.unwrap();
    let numbers: Vec<&str> = luxury.iter().map(|r| r.number.as_str()).collect();
    assert_eq!(numbers, ["201", "202"]);

    assert!(rooms
        .search_available(w, Some("penthouse"))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn legacy_search_predicate_misses_containing_booking() {
    // The search keeps the original boundary-only overlap test: a booking
    // that strictly contains the queried window has neither endpoint inside
    // it, so the room still shows as available once its status is free.
    let db = test_db().await;
    let rooms = SqliteRoomRepository::new(db.pool.clone());
    let bookings = SqliteBookingRepository::new(db.pool.clone());

    let room_101 = room_id_by_number(&rooms, "101").await;
    bookings
        .create(&CreateBooking {
            room_id: room_101,
            window: window("2024-06-01", "2024-06-10"),
            guest: guest("Jane Doe", "P100"),
        })
        .await
        .unwrap();
    sqlx::query("UPDATE rooms SET status = 'free' WHERE id = ?")
        .bind(room_101)
        .execute(&db.pool)
        .await
        .unwrap();

    let inner = rooms
        .search_available(window("2024-06-03", "2024-06-05"), None)
        .await
        .unwrap();
    assert!(inner.iter().any(|r| r.number == "101"));

    // A window touching a boundary is caught by the legacy test.
    let touching = rooms
        .search_available(window("2024-06-08", "2024-06-12"), None)
        .await
        .unwrap();
    assert!(touching.iter().all(|r| r.number != "101"));
}

#[tokio::test]
async fn booking_prices_three_nights_at_standard_rate() {
    let db = test_db().await;
    let rooms = SqliteRoomRepository::new(db.pool.clone());
    let bookings = SqliteBookingRepository::new(db.pool.clone());

    let room_101 = room_id_by_number(&rooms, "101").await;
    let booking = bookings
        .create(&CreateBooking {
            room_id: room_101,
            window: window("2024-06-01", "2024-06-04"),
            guest: guest("Jane Doe", "P100"),
        })
        .await
        .unwrap();

    assert_eq!(booking.total_price, 7500);
    assert_eq!(booking.status, BookingStatus::Active);

    let room = rooms.get(room_101).await.unwrap().unwrap();
    assert_eq!(room.status, RoomStatus::Booked);
}

#[tokio::test]
async fn total_price_is_fixed_at_creation_time() {
    let db = test_db().await;
    let rooms = SqliteRoomRepository::new(db.pool.clone());
    let bookings = SqliteBookingRepository::new(db.pool.clone());

    let room_101 = room_id_by_number(&rooms, "101").await;
    let booking = bookings
        .create(&CreateBooking {
            room_id: room_101,
            window: window("2024-06-01", "2024-06-04"),
            guest: guest("Jane Doe", "P100"),
        })
        .await
        .unwrap();

    sqlx::query("UPDATE rooms SET price_per_night = 9999 WHERE id = ?")
        .bind(room_101)
        .execute(&db.pool)
        .await
        .unwrap();

    let listed = bookings.list().await.unwrap();
    let line = listed.iter().find(|b| b.id == booking.id).unwrap();
    assert_eq!(line.total_price, 7500);
}

#[tokio::test]
async fn guest_is_reused_by_passport() {
    let db = test_db().await;
    let rooms = SqliteRoomRepository::new(db.pool.clone());
    let bookings = SqliteBookingRepository::new(db.pool.clone());
    let guests = SqliteGuestRepository::new(db.pool.clone());

    let room_101 = room_id_by_number(&rooms, "101").await;
    let room_102 = room_id_by_number(&rooms, "102").await;

    let first = bookings
        .create(&CreateBooking {
            room_id: room_101,
            window: window("2024-06-01", "2024-06-03"),
            guest: guest("Jane Doe", "P100"),
        })
        .await
        .unwrap();
    // Same passport, different name: the existing record wins.
    let second = bookings
        .create(&CreateBooking {
            room_id: room_102,
            window: window("2024-07-01", "2024-07-03"),
            guest: guest("J. Doe", "P100"),
        })
        .await
        .unwrap();

    assert_eq!(first.guest_id, second.guest_id);

    let all = guests.list_with_stays().await.unwrap();
    // Seed guest plus one created guest.
    assert_eq!(all.len(), 2);
    let jane = all.iter().find(|g| g.passport == "P100").unwrap();
    assert_eq!(jane.full_name, "Jane Doe");
    assert_eq!(jane.stays_count, 2);
}

#[tokio::test]
async fn check_in_then_check_out_frees_the_room() {
    let db = test_db().await;
    let rooms = SqliteRoomRepository::new(db.pool.clone());
    let bookings = SqliteBookingRepository::new(db.pool.clone());

    let room_101 = room_id_by_number(&rooms, "101").await;
    let booking = bookings
        .create(&CreateBooking {
            room_id: room_101,
            window: window("2024-06-01", "2024-06-03"),
            guest: guest("Jane Doe", "P100"),
        })
        .await
        .unwrap();

    let checked_in = bookings.check_in(booking.id).await.unwrap();
    assert_eq!(checked_in.status, BookingStatus::CheckedIn);
    assert_eq!(
        rooms.get(room_101).await.unwrap().unwrap().status,
        RoomStatus::Occupied
    );

    let completed = bookings.check_out(booking.id).await.unwrap();
    assert_eq!(completed.status, BookingStatus::Completed);
    assert_eq!(
        rooms.get(room_101).await.unwrap().unwrap().status,
        RoomStatus::Free
    );
}

#[tokio::test]
async fn out_of_order_transitions_are_rejected() {
    let db = test_db().await;
    let rooms = SqliteRoomRepository::new(db.pool.clone());
    let bookings = SqliteBookingRepository::new(db.pool.clone());

    let room_101 = room_id_by_number(&rooms, "101").await;
    let booking = bookings
        .create(&CreateBooking {
            room_id: room_101,
            window: window("2024-06-01", "2024-06-03"),
            guest: guest("Jane Doe", "P100"),
        })
        .await
        .unwrap();

    // Check-out before check-in.
    assert!(matches!(
        bookings.check_out(booking.id).await,
        Err(Error::Validation(_))
    ));

    bookings.check_in(booking.id).await.unwrap();
    // Double check-in.
    assert!(matches!(
        bookings.check_in(booking.id).await,
        Err(Error::Validation(_))
    ));

    bookings.check_out(booking.id).await.unwrap();
    // Completed bookings are terminal.
    assert!(matches!(
        bookings.check_in(booking.id).await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn booking_a_held_room_conflicts() {
    let db = test_db().await;
    let rooms = SqliteRoomRepository::new(db.pool.clone());
    let bookings = SqliteBookingRepository::new(db.pool.clone());

    let room_101 = room_id_by_number(&rooms, "101").await;
    bookings
        .create(&CreateBooking {
            room_id: room_101,
            window: window("2024-06-01", "2024-06-03"),
            guest: guest("Jane Doe", "P100"),
        })
        .await
        .unwrap();

    let err = bookings
        .create(&CreateBooking {
            room_id: room_101,
            window: window("2024-06-02", "2024-06-05"),
            guest: guest("John Roe", "P200"),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));
}

#[tokio::test]
async fn creation_guard_catches_overlap_even_when_room_reads_free() {
    // Room status and booking rows can disagree (the legacy schema had no
    // constraint tying them); the transactional guard still refuses.
    let db = test_db().await;
    let rooms = SqliteRoomRepository::new(db.pool.clone());
    let bookings = SqliteBookingRepository::new(db.pool.clone());

    let room_101 = room_id_by_number(&rooms, "101").await;
    bookings
        .create(&CreateBooking {
            room_id: room_101,
            window: window("2024-06-01", "2024-06-10"),
            guest: guest("Jane Doe", "P100"),
        })
        .await
        .unwrap();
    sqlx::query("UPDATE rooms SET status = 'free' WHERE id = ?")
        .bind(room_101)
        .execute(&db.pool)
        .await
        .unwrap();

    // Strictly contained window: invisible to the legacy search predicate,
    // caught by the full-overlap creation guard.
    let err = bookings
        .create(&CreateBooking {
            room_id: room_101,
            window: window("2024-06-03", "2024-06-05"),
            guest: guest("John Roe", "P200"),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    // Disjoint window on the same (now free) room is fine.
    bookings
        .create(&CreateBooking {
            room_id: room_101,
            window: window("2024-07-01", "2024-07-05"),
            guest: guest("John Roe", "P200"),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn unknown_ids_surface_as_not_found() {
    let db = test_db().await;
    let bookings = SqliteBookingRepository::new(db.pool.clone());
    let services = SqliteServiceRepository::new(db.pool.clone());
    let guests = SqliteGuestRepository::new(db.pool.clone());

    assert!(matches!(
        bookings
            .create(&CreateBooking {
                room_id: 999,
                window: window("2024-06-01", "2024-06-03"),
                guest: guest("Jane Doe", "P100"),
            })
            .await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        bookings.check_in(999).await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        bookings.check_out(999).await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        services
            .add(&NewService {
                booking_id: 999,
                service_name: "breakfast".into(),
                price: 500,
                quantity: None,
            })
            .await,
        Err(Error::NotFound(_))
    ));
    assert!(guests.get(999).await.unwrap().is_none());
}

#[tokio::test]
async fn service_defaults_quantity_and_leaves_total_price_alone() {
    let db = test_db().await;
    let rooms = SqliteRoomRepository::new(db.pool.clone());
    let bookings = SqliteBookingRepository::new(db.pool.clone());
    let services = SqliteServiceRepository::new(db.pool.clone());

    let room_101 = room_id_by_number(&rooms, "101").await;
    let booking = bookings
        .create(&CreateBooking {
            room_id: room_101,
            window: window("2024-06-01", "2024-06-04"),
            guest: guest("Jane Doe", "P100"),
        })
        .await
        .unwrap();

    let service = services
        .add(&NewService {
            booking_id: booking.id,
            service_name: "breakfast".into(),
            price: 500,
            quantity: None,
        })
        .await
        .unwrap();
    assert_eq!(service.quantity, 1);

    let service = services
        .add(&NewService {
            booking_id: booking.id,
            service_name: "spa".into(),
            price: 1200,
            quantity: Some(2),
        })
        .await
        .unwrap();
    assert_eq!(service.quantity, 2);

    // Service charges are never rolled up into the booking total.
    let listed = bookings.list().await.unwrap();
    assert_eq!(listed[0].total_price, 7500);
}

#[tokio::test]
async fn guest_detail_lists_bookings_newest_first() {
    let db = test_db().await;
    let rooms = SqliteRoomRepository::new(db.pool.clone());
    let bookings = SqliteBookingRepository::new(db.pool.clone());
    let guests = SqliteGuestRepository::new(db.pool.clone());

    let room_101 = room_id_by_number(&rooms, "101").await;
    let room_102 = room_id_by_number(&rooms, "102").await;
    let first = bookings
        .create(&CreateBooking {
            room_id: room_101,
            window: window("2024-06-01", "2024-06-03"),
            guest: guest("Jane Doe", "P100"),
        })
        .await
        .unwrap();
    bookings
        .create(&CreateBooking {
            room_id: room_102,
            window: window("2024-08-01", "2024-08-03"),
            guest: guest("Jane Doe", "P100"),
        })
        .await
        .unwrap();

    let history = guests.bookings_for(first.guest_id).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].room_number, "102");
    assert_eq!(history[1].room_number, "101");
}

#[tokio::test]
async fn dashboard_tracks_counts_and_upcoming_checkins() {
    let db = test_db().await;
    let rooms = SqliteRoomRepository::new(db.pool.clone());
    let bookings = SqliteBookingRepository::new(db.pool.clone());
    let reports = SqliteReportRepository::new(db.pool.clone());

    let summary = reports.dashboard().await.unwrap();
    assert_eq!(summary.free_rooms, 5);
    assert_eq!(summary.occupied_rooms, 0);
    assert_eq!(summary.active_bookings, 0);
    assert!(summary.upcoming_checkins.is_empty());

    let room_102 = room_id_by_number(&rooms, "102").await;
    let room_201 = room_id_by_number(&rooms, "201").await;
    bookings
        .create(&CreateBooking {
            room_id: room_201,
            window: window("2024-06-10", "2024-06-12"),
            guest: guest("John Roe", "P200"),
        })
        .await
        .unwrap();
    let early = bookings
        .create(&CreateBooking {
            room_id: room_102,
            window: window("2024-06-01", "2024-06-03"),
            guest: guest("Jane Doe", "P100"),
        })
        .await
        .unwrap();

    let summary = reports.dashboard().await.unwrap();
    assert_eq!(summary.free_rooms, 3);
    assert_eq!(summary.active_bookings, 2);
    // Soonest check-in first.
    assert_eq!(summary.upcoming_checkins[0].room_number, "102");
    assert_eq!(summary.upcoming_checkins[0].guest_name, "Jane Doe");

    bookings.check_in(early.id).await.unwrap();
    let summary = reports.dashboard().await.unwrap();
    assert_eq!(summary.occupied_rooms, 1);
    assert_eq!(summary.active_bookings, 1);
}
