#![allow(dead_code)]

use airport_booking_api::db;
use chrono::{DateTime, TimeZone, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::time::Duration;
use tempfile::TempDir;

// Each test context gets its own throwaway on-disk database, so concurrent
// submissions inside one test genuinely contend for the write lock while
// tests stay isolated from each other. The directory (and the database in
// it) disappears when the context is dropped.
pub struct TestDb {
    pub pool: SqlitePool,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self, sqlx::Error> {
        // The services mint JWTs during login; give them a secret
        std::env::set_var("JWT_SECRET", "test-secret");

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("airport_test.db");

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await?;

        db::init_schema(&pool).await?;

        Ok(TestDb { pool, _dir: dir })
    }
}

// Sample-data helpers, each returning the new row's id

pub async fn sample_user(pool: &SqlitePool, username: &str) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO user (username, password, role) VALUES (?, 'x', 'USER')")
        .bind(username)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn sample_airport(pool: &SqlitePool, name: &str, city: &str) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO airport (name, closest_big_city) VALUES (?, ?)")
        .bind(name)
        .bind(city)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn sample_airplane_type(pool: &SqlitePool, name: &str) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO airplane_type (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn sample_airplane(
    pool: &SqlitePool,
    name: &str,
    rows: i64,
    seats_in_row: i64,
) -> Result<i64, sqlx::Error> {
    let type_id = sample_airplane_type(pool, "Test Type").await?;
    let result = sqlx::query(
        "INSERT INTO airplane (name, rows, seats_in_row, airplane_type_id) VALUES (?, ?, ?, ?)",
    )
    .bind(name)
    .bind(rows)
    .bind(seats_in_row)
    .bind(type_id)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn sample_route(
    pool: &SqlitePool,
    source_id: i64,
    destination_id: i64,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO route (source_id, destination_id, distance) VALUES (?, ?, 500)")
        .bind(source_id)
        .bind(destination_id)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub fn departure_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()
}

pub fn arrival_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 14, 30, 0).unwrap()
}

pub async fn sample_flight(
    pool: &SqlitePool,
    route_id: i64,
    airplane_id: i64,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO flight (route_id, airplane_id, departure_time, arrival_time) VALUES (?, ?, ?, ?)",
    )
    .bind(route_id)
    .bind(airplane_id)
    .bind(departure_time())
    .bind(arrival_time())
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

// One call to stand up everything an order needs: two airports, a route
// between them, an airplane with the given seat grid, and a flight.
// Returns the flight id.
pub async fn sample_bookable_flight(
    pool: &SqlitePool,
    rows: i64,
    seats_in_row: i64,
) -> Result<i64, sqlx::Error> {
    let source = sample_airport(pool, "Boryspil", "Kyiv").await?;
    let destination = sample_airport(pool, "Danylo Halytskyi", "Lviv").await?;
    let route = sample_route(pool, source, destination).await?;
    let airplane = sample_airplane(pool, "Test Airplane", rows, seats_in_row).await?;
    sample_flight(pool, route, airplane).await
}
