use crate::models::airplane::{
    Airplane, AirplaneCreateRequest, AirplaneDetail, AirplaneListItem, AirplaneType,
    AirplaneTypeCreateRequest,
};
use crate::models::airport::{Airport, AirportCreateRequest};
use crate::models::crew::{Crew, CrewCreateRequest, CrewResponse};
use crate::utils::error::{AppError, AppResult};
use sqlx::SqlitePool;

// Reference data: airplane types, airplanes, airports and crews. Plain
// lookup tables with field-level validation; flights and routes build on
// top of them.
#[derive(Clone)]
pub struct CatalogService {
    pool: SqlitePool,
}

// Converts a string of format "1,2,3" to a list of integers [1, 2, 3]
fn params_to_ints(query_string: &str) -> AppResult<Vec<i64>> {
    query_string
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| AppError::BadRequest("filter must be a comma-separated list of ids".into()))
        })
        .collect()
}

impl CatalogService {
    pub fn new(pool: SqlitePool) -> Self {
        CatalogService { pool }
    }

    pub async fn create_airplane_type(
        &self,
        request: AirplaneTypeCreateRequest,
    ) -> AppResult<AirplaneType> {
        let result = sqlx::query("INSERT INTO airplane_type (name) VALUES (?)")
            .bind(&request.name)
            .execute(&self.pool)
            .await?;

        self.get_airplane_type(result.last_insert_rowid()).await
    }

    pub async fn list_airplane_types(&self) -> AppResult<Vec<AirplaneType>> {
        let types = sqlx::query_as::<_, AirplaneType>(
            "SELECT id, name FROM airplane_type ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(types)
    }

    pub async fn get_airplane_type(&self, id: i64) -> AppResult<AirplaneType> {
        sqlx::query_as::<_, AirplaneType>("SELECT id, name FROM airplane_type WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("airplane type {} not found", id)))
    }

    pub async fn update_airplane_type(
        &self,
        id: i64,
        request: AirplaneTypeCreateRequest,
    ) -> AppResult<AirplaneType> {
        let result = sqlx::query("UPDATE airplane_type SET name = ? WHERE id = ?")
            .bind(&request.name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("airplane type {} not found", id)));
        }

        self.get_airplane_type(id).await
    }

    pub async fn create_airplane(&self, request: AirplaneCreateRequest) -> AppResult<AirplaneDetail> {
        // Resolve the type first so a dangling reference reads as not-found
        // instead of a foreign key failure
        self.get_airplane_type(request.airplane_type_id).await?;

        let result = sqlx::query(
            "INSERT INTO airplane (name, rows, seats_in_row, airplane_type_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&request.name)
        .bind(request.rows)
        .bind(request.seats_in_row)
        .bind(request.airplane_type_id)
        .execute(&self.pool)
        .await?;

        self.get_airplane(result.last_insert_rowid()).await
    }

    // List airplanes, optionally narrowed to a set of airplane type ids
    // given as "1,2,3"
    pub async fn list_airplanes(
        &self,
        airplane_types: Option<String>,
    ) -> AppResult<Vec<AirplaneListItem>> {
        let mut sql = String::from(
            "SELECT a.id, a.name, a.rows * a.seats_in_row AS capacity, t.name AS airplane_type
             FROM airplane a
             JOIN airplane_type t ON t.id = a.airplane_type_id",
        );

        if let Some(filter) = &airplane_types {
            let ids = params_to_ints(filter)?;
            let id_list = ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            sql.push_str(&format!(" WHERE a.airplane_type_id IN ({})", id_list));
        }

        sql.push_str(" ORDER BY a.id");

        let airplanes = sqlx::query_as::<_, AirplaneListItem>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(airplanes)
    }

    pub async fn get_airplane(&self, id: i64) -> AppResult<AirplaneDetail> {
        let airplane = sqlx::query_as::<_, Airplane>(
            "SELECT id, name, rows, seats_in_row, airplane_type_id FROM airplane WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("airplane {} not found", id)))?;

        let airplane_type = self.get_airplane_type(airplane.airplane_type_id).await?;
        let capacity = airplane.capacity();

        Ok(AirplaneDetail {
            id: airplane.id,
            name: airplane.name,
            rows: airplane.rows,
            seats_in_row: airplane.seats_in_row,
            capacity,
            airplane_type: airplane_type.name,
        })
    }

    pub async fn update_airplane(
        &self,
        id: i64,
        request: AirplaneCreateRequest,
    ) -> AppResult<AirplaneDetail> {
        self.get_airplane_type(request.airplane_type_id).await?;

        let result = sqlx::query(
            "UPDATE airplane SET name = ?, rows = ?, seats_in_row = ?, airplane_type_id = ?
             WHERE id = ?",
        )
        .bind(&request.name)
        .bind(request.rows)
        .bind(request.seats_in_row)
        .bind(request.airplane_type_id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("airplane {} not found", id)));
        }

        self.get_airplane(id).await
    }

    pub async fn create_airport(&self, request: AirportCreateRequest) -> AppResult<Airport> {
        let result = sqlx::query("INSERT INTO airport (name, closest_big_city) VALUES (?, ?)")
            .bind(&request.name)
            .bind(&request.closest_big_city)
            .execute(&self.pool)
            .await?;

        self.get_airport(result.last_insert_rowid()).await
    }

    pub async fn list_airports(&self) -> AppResult<Vec<Airport>> {
        let airports = sqlx::query_as::<_, Airport>(
            "SELECT id, name, closest_big_city FROM airport ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(airports)
    }

    pub async fn get_airport(&self, id: i64) -> AppResult<Airport> {
        sqlx::query_as::<_, Airport>("SELECT id, name, closest_big_city FROM airport WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("airport {} not found", id)))
    }

    pub async fn update_airport(&self, id: i64, request: AirportCreateRequest) -> AppResult<Airport> {
        let result = sqlx::query("UPDATE airport SET name = ?, closest_big_city = ? WHERE id = ?")
            .bind(&request.name)
            .bind(&request.closest_big_city)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("airport {} not found", id)));
        }

        self.get_airport(id).await
    }

    pub async fn create_crew(&self, request: CrewCreateRequest) -> AppResult<CrewResponse> {
        let result = sqlx::query("INSERT INTO crew (first_name, last_name) VALUES (?, ?)")
            .bind(&request.first_name)
            .bind(&request.last_name)
            .execute(&self.pool)
            .await?;

        self.get_crew(result.last_insert_rowid()).await
    }

    pub async fn list_crews(&self) -> AppResult<Vec<CrewResponse>> {
        let crews = sqlx::query_as::<_, Crew>(
            "SELECT id, first_name, last_name FROM crew ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(crews.into_iter().map(CrewResponse::from).collect())
    }

    pub async fn get_crew(&self, id: i64) -> AppResult<CrewResponse> {
        let crew = sqlx::query_as::<_, Crew>(
            "SELECT id, first_name, last_name FROM crew WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("crew {} not found", id)))?;

        Ok(CrewResponse::from(crew))
    }

    pub async fn update_crew(&self, id: i64, request: CrewCreateRequest) -> AppResult<CrewResponse> {
        let result = sqlx::query("UPDATE crew SET first_name = ?, last_name = ? WHERE id = ?")
            .bind(&request.first_name)
            .bind(&request.last_name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("crew {} not found", id)));
        }

        self.get_crew(id).await
    }
}
