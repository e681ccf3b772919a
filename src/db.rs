use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

// Database connection manager
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    // Create a new database connection pool.
    // Foreign keys must be enabled on every connection or the cascade
    // ownership rules (order -> tickets, flight -> tickets) are silently lost.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        Ok(Database { pool })
    }

    // Get a reference to the connection pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// Create the schema if it does not exist yet. The check constraints mirror
// the in-process validators on purpose: the validators give the caller a
// readable error, the constraints keep the data honest for writers that
// bypass them. The unique index on (flight_id, row, seat) is the single
// arbiter for concurrent submissions racing for one seat.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let tables = vec![
        "CREATE TABLE IF NOT EXISTS user (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL,
            password TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'USER' CHECK (role IN ('ADMIN', 'USER')),
            CONSTRAINT user_username_uindex UNIQUE (username)
        )",
        "CREATE TABLE IF NOT EXISTS airplane_type (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )",
        "CREATE TABLE IF NOT EXISTS airplane (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            rows INTEGER NOT NULL CHECK (rows >= 1),
            seats_in_row INTEGER NOT NULL CHECK (seats_in_row >= 1),
            airplane_type_id INTEGER NOT NULL,
            CONSTRAINT airplane_airplane_type_id_fk
                FOREIGN KEY (airplane_type_id) REFERENCES airplane_type(id)
                ON DELETE CASCADE
        )",
        "CREATE TABLE IF NOT EXISTS airport (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            closest_big_city TEXT NOT NULL
        )",
        "CREATE TABLE IF NOT EXISTS route (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            source_id INTEGER NOT NULL,
            destination_id INTEGER NOT NULL,
            distance INTEGER NOT NULL CHECK (distance >= 1),
            CONSTRAINT route_source_airport_id_fk
                FOREIGN KEY (source_id) REFERENCES airport(id)
                ON DELETE CASCADE,
            CONSTRAINT route_destination_airport_id_fk
                FOREIGN KEY (destination_id) REFERENCES airport(id)
                ON DELETE CASCADE,
            CONSTRAINT prevent_same_source_and_destination
                CHECK (source_id <> destination_id)
        )",
        "CREATE TABLE IF NOT EXISTS crew (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL
        )",
        "CREATE TABLE IF NOT EXISTS flight (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            route_id INTEGER NOT NULL,
            airplane_id INTEGER NOT NULL,
            departure_time TEXT NOT NULL,
            arrival_time TEXT NOT NULL,
            CONSTRAINT flight_route_id_fk
                FOREIGN KEY (route_id) REFERENCES route(id)
                ON DELETE CASCADE,
            CONSTRAINT flight_airplane_id_fk
                FOREIGN KEY (airplane_id) REFERENCES airplane(id)
                ON DELETE CASCADE,
            CONSTRAINT check_departure_before_arrival
                CHECK (departure_time < arrival_time)
        )",
        "CREATE TABLE IF NOT EXISTS flight_crew (
            flight_id INTEGER NOT NULL,
            crew_id INTEGER NOT NULL,
            PRIMARY KEY (flight_id, crew_id),
            CONSTRAINT flight_crew_flight_id_fk
                FOREIGN KEY (flight_id) REFERENCES flight(id)
                ON DELETE CASCADE,
            CONSTRAINT flight_crew_crew_id_fk
                FOREIGN KEY (crew_id) REFERENCES crew(id)
                ON DELETE CASCADE
        )",
        "CREATE TABLE IF NOT EXISTS orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created_time TEXT NOT NULL,
            user_id INTEGER NOT NULL,
            CONSTRAINT orders_user_id_fk
                FOREIGN KEY (user_id) REFERENCES user(id)
                ON DELETE CASCADE
        )",
        "CREATE TABLE IF NOT EXISTS ticket (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            row INTEGER NOT NULL CHECK (row >= 1),
            seat INTEGER NOT NULL CHECK (seat >= 1),
            flight_id INTEGER NOT NULL,
            order_id INTEGER NOT NULL,
            CONSTRAINT ticket_flight_id_fk
                FOREIGN KEY (flight_id) REFERENCES flight(id)
                ON DELETE CASCADE,
            CONSTRAINT ticket_order_id_fk
                FOREIGN KEY (order_id) REFERENCES orders(id)
                ON DELETE CASCADE,
            CONSTRAINT unique_ticket_seat_flight UNIQUE (flight_id, row, seat)
        )",
    ];

    for create_sql in tables {
        sqlx::query(create_sql).execute(pool).await?;
    }

    Ok(())
}
