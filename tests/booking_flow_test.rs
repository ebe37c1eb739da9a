use chrono::NaiveDate;
use hotel_desk::core::{BookingId, GuestId, RoomId, RoomType};
use hotel_desk::{FrontDesk, HotelError};
use std::sync::Arc;
use std::thread;
use test_case::test_case;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn desk_with_room_and_guest() -> (FrontDesk, RoomId, GuestId) {
    let desk = FrontDesk::new();
    let room = desk.rooms().add_room("101", 2, RoomType::Double).unwrap();
    let guest = desk.guests().add_guest("Ada Lovelace", "ada@example.com");
    (desk, room.id(), guest.id())
}

#[test_case("2025-01-10", "2025-01-15", true ; "identical stay")]
#[test_case("2025-01-12", "2025-01-20", true ; "overlaps the end")]
#[test_case("2025-01-05", "2025-01-11", true ; "overlaps the start")]
#[test_case("2025-01-11", "2025-01-12", true ; "inside")]
#[test_case("2025-01-01", "2025-01-31", true ; "encloses")]
#[test_case("2025-01-15", "2025-01-18", false ; "starts on check out day")]
#[test_case("2025-01-05", "2025-01-10", false ; "ends on check in day")]
fn test_second_booking_on_same_room(check_in: &str, check_out: &str, conflicts: bool) {
    let (desk, room_id, guest_id) = desk_with_room_and_guest();
    desk.bookings()
        .create_booking(room_id, guest_id, date("2025-01-10"), date("2025-01-15"))
        .unwrap();

    let result = desk
        .bookings()
        .create_booking(room_id, guest_id, date(check_in), date(check_out));

    if conflicts {
        assert!(matches!(
            result,
            Err(HotelError::RoomAlreadyBooked { ref room_number, room_id: id })
                if room_number == "101" && id == room_id
        ));
        assert_eq!(desk.bookings().all().len(), 1);
    } else {
        assert_eq!(result.unwrap().id(), BookingId::new(2));
    }
}

#[test]
fn test_same_dates_on_another_room_are_accepted() {
    let (desk, room_id, guest_id) = desk_with_room_and_guest();
    let other = desk.rooms().add_room("102", 1, RoomType::Single).unwrap();

    desk.bookings()
        .create_booking(room_id, guest_id, date("2025-01-10"), date("2025-01-15"))
        .unwrap();
    let second = desk
        .bookings()
        .create_booking(other.id(), guest_id, date("2025-01-10"), date("2025-01-15"))
        .unwrap();

    assert_eq!(second.room().number(), "102");
}

#[test]
fn test_checks_run_room_then_guest_then_conflict_then_range() {
    let (desk, room_id, guest_id) = desk_with_room_and_guest();
    desk.bookings()
        .create_booking(room_id, guest_id, date("2025-01-10"), date("2025-01-15"))
        .unwrap();
    let missing_room = RoomId::new(42);
    let missing_guest = GuestId::new(42);

    let err = desk
        .bookings()
        .create_booking(missing_room, missing_guest, date("2025-01-15"), date("2025-01-10"))
        .unwrap_err();
    assert!(matches!(err, HotelError::RoomNotFound { id } if id == missing_room));

    let err = desk
        .bookings()
        .create_booking(room_id, missing_guest, date("2025-01-15"), date("2025-01-10"))
        .unwrap_err();
    assert!(matches!(err, HotelError::GuestNotFound { id } if id == missing_guest));

    // reversed range that also overlaps the existing stay
    let err = desk
        .bookings()
        .create_booking(room_id, guest_id, date("2025-01-14"), date("2025-01-11"))
        .unwrap_err();
    assert!(matches!(err, HotelError::RoomAlreadyBooked { .. }));

    let err = desk
        .bookings()
        .create_booking(room_id, guest_id, date("2025-03-02"), date("2025-03-02"))
        .unwrap_err();
    assert!(matches!(err, HotelError::InvalidBookingDateRange { .. }));
}

#[test]
fn test_rejections_do_not_consume_ids() {
    let (desk, room_id, guest_id) = desk_with_room_and_guest();

    assert!(desk.rooms().add_room("101", 3, RoomType::Suite).is_err());
    let room = desk.rooms().add_room("102", 3, RoomType::Suite).unwrap();
    assert_eq!(room.id(), RoomId::new(2));

    assert!(desk
        .bookings()
        .create_booking(room_id, guest_id, date("2025-02-02"), date("2025-02-01"))
        .is_err());
    let booking = desk
        .bookings()
        .create_booking(room_id, guest_id, date("2025-02-01"), date("2025-02-02"))
        .unwrap();
    assert_eq!(booking.id(), BookingId::new(1));
}

#[test]
fn test_booking_snapshots_room_and_guest() {
    let (desk, room_id, guest_id) = desk_with_room_and_guest();

    let booking = desk
        .bookings()
        .create_booking(room_id, guest_id, date("2025-05-01"), date("2025-05-03"))
        .unwrap();
    let found = desk.bookings().find_by_id(booking.id()).unwrap();

    assert_eq!(found, booking);
    assert_eq!(found.room(), &desk.rooms().find_by_id(room_id).unwrap());
    assert_eq!(found.guest(), &desk.guests().find_by_id(guest_id).unwrap());
    assert_eq!(found.nights(), 2);
    assert!(matches!(
        desk.bookings().find_by_id(BookingId::new(9)),
        Err(HotelError::BookingNotFound { .. })
    ));
}

#[test]
fn test_guests_may_share_an_email() {
    let desk = FrontDesk::new();

    let first = desk.guests().add_guest("Ada Lovelace", "shared@example.com");
    let second = desk.guests().add_guest("Ada King", "shared@example.com");

    assert_ne!(first.id(), second.id());
    assert_eq!(desk.guests().all().len(), 2);
}

#[test]
fn test_concurrent_bookings_admit_one_per_period() {
    let (desk, room_id, guest_id) = desk_with_room_and_guest();
    let desk = Arc::new(desk);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let desk = Arc::clone(&desk);
            thread::spawn(move || {
                desk.bookings()
                    .create_booking(room_id, guest_id, date("2025-07-01"), date("2025-07-05"))
                    .is_ok()
            })
        })
        .collect();

    let admitted = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(admitted, 1);
    assert_eq!(desk.bookings().all()[0].id(), BookingId::new(1));
}
