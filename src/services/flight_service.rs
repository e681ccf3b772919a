use crate::models::airplane::AirplaneListItem;
use crate::models::airport::{
    Airport, Route, RouteCreateRequest, RouteDetail, RouteListItem,
};
use crate::models::crew::Crew;
use crate::models::flight::{
    Flight, FlightCreateRequest, FlightDetail, FlightListItem, FlightSeatBounds,
};
use crate::utils::error::{AppError, AppResult};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct FlightService {
    pool: SqlitePool,
}

impl FlightService {
    pub fn new(pool: SqlitePool) -> Self {
        FlightService { pool }
    }

    pub async fn create_route(&self, request: RouteCreateRequest) -> AppResult<RouteDetail> {
        // Re-validate before the write; the route handler already ran this
        // against the raw payload
        Route::validate_source_and_destination(request.source_id, request.destination_id)?;

        self.get_airport(request.source_id).await?;
        self.get_airport(request.destination_id).await?;

        let result = sqlx::query(
            "INSERT INTO route (source_id, destination_id, distance) VALUES (?, ?, ?)",
        )
        .bind(request.source_id)
        .bind(request.destination_id)
        .bind(request.distance)
        .execute(&self.pool)
        .await?;

        self.get_route(result.last_insert_rowid()).await
    }

    // List routes, filterable by source/destination city substring
    pub async fn list_routes(
        &self,
        source: Option<String>,
        destination: Option<String>,
    ) -> AppResult<Vec<RouteListItem>> {
        let mut sql = String::from(
            "SELECT r.id, src.closest_big_city AS source,
                    dst.closest_big_city AS destination, r.distance
             FROM route r
             JOIN airport src ON src.id = r.source_id
             JOIN airport dst ON dst.id = r.destination_id
             WHERE 1 = 1",
        );

        if source.is_some() {
            sql.push_str(" AND src.closest_big_city LIKE ?");
        }
        if destination.is_some() {
            sql.push_str(" AND dst.closest_big_city LIKE ?");
        }
        sql.push_str(" ORDER BY r.id");

        let mut query = sqlx::query_as::<_, RouteListItem>(&sql);
        if let Some(source) = &source {
            query = query.bind(format!("%{}%", source));
        }
        if let Some(destination) = &destination {
            query = query.bind(format!("%{}%", destination));
        }

        let routes = query.fetch_all(&self.pool).await?;

        Ok(routes)
    }

    pub async fn get_route(&self, id: i64) -> AppResult<RouteDetail> {
        let route = sqlx::query_as::<_, Route>(
            "SELECT id, source_id, destination_id, distance FROM route WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("route {} not found", id)))?;

        let source = self.get_airport(route.source_id).await?;
        let destination = self.get_airport(route.destination_id).await?;

        Ok(RouteDetail {
            id: route.id,
            source,
            destination,
            distance: route.distance,
        })
    }

    pub async fn update_route(&self, id: i64, request: RouteCreateRequest) -> AppResult<RouteDetail> {
        Route::validate_source_and_destination(request.source_id, request.destination_id)?;

        self.get_airport(request.source_id).await?;
        self.get_airport(request.destination_id).await?;

        let result = sqlx::query(
            "UPDATE route SET source_id = ?, destination_id = ?, distance = ? WHERE id = ?",
        )
        .bind(request.source_id)
        .bind(request.destination_id)
        .bind(request.distance)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("route {} not found", id)));
        }

        self.get_route(id).await
    }

    pub async fn create_flight(&self, request: FlightCreateRequest) -> AppResult<FlightDetail> {
        Flight::validate_departure_and_arrival(request.departure_time, request.arrival_time)?;

        self.get_route(request.route_id).await?;
        self.get_airplane_summary(request.airplane_id).await?;
        for crew_id in &request.crew_ids {
            self.ensure_crew_exists(*crew_id).await?;
        }

        // Flight and its crew assignments land together
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO flight (route_id, airplane_id, departure_time, arrival_time)
             VALUES (?, ?, ?, ?)",
        )
        .bind(request.route_id)
        .bind(request.airplane_id)
        .bind(request.departure_time)
        .bind(request.arrival_time)
        .execute(&mut *tx)
        .await?;

        let flight_id = result.last_insert_rowid();

        for crew_id in &request.crew_ids {
            sqlx::query("INSERT INTO flight_crew (flight_id, crew_id) VALUES (?, ?)")
                .bind(flight_id)
                .bind(crew_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        self.get_flight(flight_id).await
    }

    // List flights, filterable by "Source-Destination" city pair
    pub async fn list_flights(&self, route: Option<String>) -> AppResult<Vec<FlightListItem>> {
        let mut sql = String::from(
            "SELECT f.id,
                    src.closest_big_city || '-' || dst.closest_big_city AS route,
                    f.departure_time
             FROM flight f
             JOIN route r ON r.id = f.route_id
             JOIN airport src ON src.id = r.source_id
             JOIN airport dst ON dst.id = r.destination_id
             WHERE 1 = 1",
        );

        let cities = match &route {
            Some(filter) => {
                let (source, destination) = filter.split_once('-').ok_or_else(|| {
                    AppError::BadRequest(
                        "route filter must look like Source-Destination".into(),
                    )
                })?;
                sql.push_str(" AND src.closest_big_city LIKE ?");
                sql.push_str(" AND dst.closest_big_city LIKE ?");
                Some((source.to_string(), destination.to_string()))
            }
            None => None,
        };
        sql.push_str(" ORDER BY f.id");

        let mut query = sqlx::query_as::<_, FlightListItem>(&sql);
        if let Some((source, destination)) = &cities {
            query = query
                .bind(format!("%{}%", source))
                .bind(format!("%{}%", destination));
        }

        let flights = query.fetch_all(&self.pool).await?;

        Ok(flights)
    }

    pub async fn get_flight(&self, id: i64) -> AppResult<FlightDetail> {
        let flight = sqlx::query_as::<_, Flight>(
            "SELECT id, route_id, airplane_id, departure_time, arrival_time
             FROM flight WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("flight {} not found", id)))?;

        let route = self.get_route(flight.route_id).await?;
        let airplane = self.get_airplane_summary(flight.airplane_id).await?;

        let crews = sqlx::query_as::<_, Crew>(
            "SELECT c.id, c.first_name, c.last_name
             FROM crew c
             JOIN flight_crew fc ON fc.crew_id = c.id
             WHERE fc.flight_id = ?
             ORDER BY c.id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(FlightDetail {
            id: flight.id,
            route,
            airplane,
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            crews: crews.iter().map(Crew::full_name).collect(),
        })
    }

    pub async fn update_flight(&self, id: i64, request: FlightCreateRequest) -> AppResult<FlightDetail> {
        Flight::validate_departure_and_arrival(request.departure_time, request.arrival_time)?;

        self.get_route(request.route_id).await?;
        self.get_airplane_summary(request.airplane_id).await?;
        for crew_id in &request.crew_ids {
            self.ensure_crew_exists(*crew_id).await?;
        }

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE flight SET route_id = ?, airplane_id = ?, departure_time = ?, arrival_time = ?
             WHERE id = ?",
        )
        .bind(request.route_id)
        .bind(request.airplane_id)
        .bind(request.departure_time)
        .bind(request.arrival_time)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("flight {} not found", id)));
        }

        // Replace the crew set wholesale
        sqlx::query("DELETE FROM flight_crew WHERE flight_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        for crew_id in &request.crew_ids {
            sqlx::query("INSERT INTO flight_crew (flight_id, crew_id) VALUES (?, ?)")
                .bind(id)
                .bind(crew_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        self.get_flight(id).await
    }

    // Resolve a flight down to its airplane's seat grid; this is the read
    // side the order transaction manager validates tickets against.
    pub async fn get_seat_bounds(&self, flight_id: i64) -> AppResult<FlightSeatBounds> {
        sqlx::query_as::<_, FlightSeatBounds>(
            "SELECT f.id AS flight_id, a.rows, a.seats_in_row
             FROM flight f
             JOIN airplane a ON a.id = f.airplane_id
             WHERE f.id = ?",
        )
        .bind(flight_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("flight {} not found", flight_id)))
    }

    async fn get_airport(&self, id: i64) -> AppResult<Airport> {
        sqlx::query_as::<_, Airport>("SELECT id, name, closest_big_city FROM airport WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("airport {} not found", id)))
    }

    async fn get_airplane_summary(&self, id: i64) -> AppResult<AirplaneListItem> {
        sqlx::query_as::<_, AirplaneListItem>(
            "SELECT a.id, a.name, a.rows * a.seats_in_row AS capacity, t.name AS airplane_type
             FROM airplane a
             JOIN airplane_type t ON t.id = a.airplane_type_id
             WHERE a.id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("airplane {} not found", id)))
    }

    async fn ensure_crew_exists(&self, id: i64) -> AppResult<()> {
        let crew: Option<(i64,)> = sqlx::query_as("SELECT id FROM crew WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        crew.map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("crew {} not found", id)))
    }
}
