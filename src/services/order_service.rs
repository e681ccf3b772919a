use crate::models::order::{
    Order, OrderCreateRequest, OrderListResponse, OrderResponse, Ticket, TicketDetail,
};
use crate::services::flight_service::FlightService;
use crate::utils::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use sqlx::error::ErrorKind;
use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::{info, warn};

// The order/ticket transaction manager. An order and its tickets are
// created as one atomic unit; the unique index on (flight_id, row, seat)
// is the arbiter when two submissions race for the same seat.
#[derive(Clone)]
pub struct OrderService {
    pool: SqlitePool,
    flight_service: FlightService,
}

// Ticket joined out to its flight's city pair, as stored
#[derive(Debug, sqlx::FromRow)]
struct TicketRow {
    id: i64,
    seat: i64,
    flight_id: i64,
    order_id: i64,
    source_city: String,
    destination_city: String,
    departure_time: DateTime<Utc>,
    row: i64,
}

impl From<TicketRow> for TicketDetail {
    fn from(row: TicketRow) -> Self {
        TicketDetail {
            id: row.id,
            row: row.row,
            seat: row.seat,
            flight_id: row.flight_id,
            flight: format!("{}-{}", row.source_city, row.destination_city),
            departure_time: row.departure_time,
        }
    }
}

impl OrderService {
    pub fn new(pool: SqlitePool) -> Self {
        OrderService {
            flight_service: FlightService::new(pool.clone()),
            pool,
        }
    }

    /// Create an order owned by `user_id` together with every ticket in the
    /// request, or nothing at all.
    ///
    /// All validation happens before the transaction opens: each ticket's
    /// flight is resolved to its airplane's seat grid and bounds-checked.
    /// The transaction itself only writes, so the first INSERT takes the
    /// database write lock and a concurrent submission queues behind it;
    /// whichever commits second trips the unique seat index and is rejected
    /// whole, order row included.
    pub async fn create_order(
        &self,
        user_id: i64,
        request: OrderCreateRequest,
    ) -> AppResult<OrderResponse> {
        if request.tickets.is_empty() {
            return Err(AppError::ValidationError(
                "an order must contain at least one ticket".into(),
            ));
        }

        let mut seat_bounds = Vec::with_capacity(request.tickets.len());
        for spec in &request.tickets {
            let bounds = self.flight_service.get_seat_bounds(spec.flight_id).await?;
            Ticket::validate_seat(spec.row, spec.seat, bounds.rows, bounds.seats_in_row)?;
            seat_bounds.push(bounds);
        }

        let created_time = Utc::now();
        let mut tx = self.pool.begin().await?;

        let order_result = sqlx::query("INSERT INTO orders (created_time, user_id) VALUES (?, ?)")
            .bind(created_time)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        let order_id = order_result.last_insert_rowid();

        for (spec, bounds) in request.tickets.iter().zip(&seat_bounds) {
            // Second gate into the same validator, right at the insert
            Ticket::validate_seat(spec.row, spec.seat, bounds.rows, bounds.seats_in_row)?;

            let inserted = sqlx::query(
                "INSERT INTO ticket (row, seat, flight_id, order_id) VALUES (?, ?, ?, ?)",
            )
            .bind(spec.row)
            .bind(spec.seat)
            .bind(spec.flight_id)
            .bind(order_id)
            .execute(&mut *tx)
            .await;

            if let Err(sqlx::Error::Database(db_err)) = &inserted {
                if matches!(db_err.kind(), ErrorKind::UniqueViolation) {
                    warn!(
                        user_id,
                        flight_id = spec.flight_id,
                        row = spec.row,
                        seat = spec.seat,
                        "seat taken by an earlier commit, rolling back order"
                    );
                    return Err(AppError::Conflict(format!(
                        "row {}, seat {} on flight {} is already booked",
                        spec.row, spec.seat, spec.flight_id
                    )));
                }
            }
            inserted?;
        }

        tx.commit().await?;

        info!(
            order_id,
            user_id,
            tickets = request.tickets.len(),
            "order committed"
        );

        self.get_order(user_id, order_id).await
    }

    // The caller's orders, newest first, each with its tickets in
    // submission order
    pub async fn list_orders(&self, user_id: i64) -> AppResult<OrderListResponse> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, created_time, user_id FROM orders
             WHERE user_id = ?
             ORDER BY created_time DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, TicketRow>(
            "SELECT t.id, t.row, t.seat, t.flight_id, t.order_id,
                    src.closest_big_city AS source_city,
                    dst.closest_big_city AS destination_city,
                    f.departure_time
             FROM ticket t
             JOIN orders o ON o.id = t.order_id
             JOIN flight f ON f.id = t.flight_id
             JOIN route r ON r.id = f.route_id
             JOIN airport src ON src.id = r.source_id
             JOIN airport dst ON dst.id = r.destination_id
             WHERE o.user_id = ?
             ORDER BY t.id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut tickets_by_order: HashMap<i64, Vec<TicketDetail>> = HashMap::new();
        for row in rows {
            tickets_by_order
                .entry(row.order_id)
                .or_default()
                .push(TicketDetail::from(row));
        }

        let orders = orders
            .into_iter()
            .map(|order| OrderResponse {
                id: order.id,
                created_time: order.created_time,
                tickets: tickets_by_order.remove(&order.id).unwrap_or_default(),
            })
            .collect();

        Ok(OrderListResponse { orders })
    }

    // Orders are scoped to their owner; someone else's order id reads as
    // absent, not forbidden
    pub async fn get_order(&self, user_id: i64, order_id: i64) -> AppResult<OrderResponse> {
        let order = sqlx::query_as::<_, Order>(
            "SELECT id, created_time, user_id FROM orders WHERE id = ? AND user_id = ?",
        )
        .bind(order_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {} not found", order_id)))?;

        let rows = sqlx::query_as::<_, TicketRow>(
            "SELECT t.id, t.row, t.seat, t.flight_id, t.order_id,
                    src.closest_big_city AS source_city,
                    dst.closest_big_city AS destination_city,
                    f.departure_time
             FROM ticket t
             JOIN flight f ON f.id = t.flight_id
             JOIN route r ON r.id = f.route_id
             JOIN airport src ON src.id = r.source_id
             JOIN airport dst ON dst.id = r.destination_id
             WHERE t.order_id = ?
             ORDER BY t.id",
        )
        .bind(order.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(OrderResponse {
            id: order.id,
            created_time: order.created_time,
            tickets: rows.into_iter().map(TicketDetail::from).collect(),
        })
    }
}
