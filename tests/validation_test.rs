use airport_booking_api::models::airport::Route;
use airport_booking_api::models::flight::Flight;
use airport_booking_api::models::order::Ticket;
use airport_booking_api::utils::error::AppError;
use chrono::{TimeZone, Utc};

fn assert_validation_error(result: Result<(), AppError>, expected_fragment: &str) {
    match result {
        Err(AppError::ValidationError(message)) => {
            assert!(
                message.contains(expected_fragment),
                "expected {:?} in {:?}",
                expected_fragment,
                message
            );
        }
        other => panic!("expected ValidationError, got {:?}", other),
    }
}

#[test]
fn seat_inside_grid_validates() {
    assert!(Ticket::validate_seat(1, 1, 5, 6).is_ok());
    assert!(Ticket::validate_seat(5, 6, 5, 6).is_ok());
    assert!(Ticket::validate_seat(3, 4, 5, 6).is_ok());
}

#[test]
fn seat_row_out_of_range_fails() {
    assert_validation_error(
        Ticket::validate_seat(0, 1, 5, 6),
        "row number must be in available range (1, 5)",
    );
    assert_validation_error(
        Ticket::validate_seat(6, 1, 5, 6),
        "row number must be in available range (1, 5)",
    );
}

#[test]
fn seat_number_out_of_range_fails() {
    assert_validation_error(
        Ticket::validate_seat(1, 0, 5, 6),
        "seat number must be in available range (1, 6)",
    );
    assert_validation_error(
        Ticket::validate_seat(1, 7, 5, 6),
        "seat number must be in available range (1, 6)",
    );
}

#[test]
fn seat_with_both_fields_invalid_reports_row_first() {
    // Row is checked before seat, and the first failing field wins
    assert_validation_error(
        Ticket::validate_seat(0, 0, 5, 6),
        "row number must be in available range (1, 5)",
    );
}

#[test]
fn route_with_distinct_airports_validates() {
    assert!(Route::validate_source_and_destination(1, 2).is_ok());
}

#[test]
fn route_with_same_airport_fails() {
    assert_validation_error(
        Route::validate_source_and_destination(7, 7),
        "source and destination airports must be different",
    );
}

#[test]
fn flight_departing_before_arrival_validates() {
    let departure = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
    let arrival = Utc.with_ymd_and_hms(2025, 6, 1, 14, 30, 0).unwrap();
    assert!(Flight::validate_departure_and_arrival(departure, arrival).is_ok());
}

#[test]
fn flight_departing_after_arrival_fails() {
    let departure = Utc.with_ymd_and_hms(2025, 6, 1, 14, 30, 0).unwrap();
    let arrival = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();

    match Flight::validate_departure_and_arrival(departure, arrival) {
        Err(AppError::ValidationError(message)) => {
            // The error cites both timestamps
            assert!(message.contains("2025-06-01 14:30:00 UTC"), "{}", message);
            assert!(message.contains("2025-06-01 10:00:00 UTC"), "{}", message);
        }
        other => panic!("expected ValidationError, got {:?}", other),
    }
}

#[test]
fn flight_with_equal_times_fails() {
    let moment = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
    assert!(Flight::validate_departure_and_arrival(moment, moment).is_err());
}
