#[macro_use]
extern crate rocket;

use airport_booking_api::db;
use airport_booking_api::db::Database;
use airport_booking_api::routes::{
    airplane_route, airport_route, crew_route, flight_route, order_route, user_route,
};
use airport_booking_api::services::catalog_service::CatalogService;
use airport_booking_api::services::flight_service::FlightService;
use airport_booking_api::services::order_service::OrderService;
use airport_booking_api::services::user_service::UserService;
use dotenv::dotenv;
use rocket::fairing::AdHoc;
use tracing::info;

#[launch]
async fn rocket() -> _ {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Connect to the database and make sure the schema is in place
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let database = Database::new(&database_url)
        .await
        .expect("Failed to connect to database");
    db::init_schema(database.get_pool())
        .await
        .expect("Failed to initialize database schema");

    info!(%database_url, "database ready");

    let pool = database.get_pool().clone();

    rocket::build()
        .manage(UserService::new(pool.clone()))
        .manage(CatalogService::new(pool.clone()))
        .manage(FlightService::new(pool.clone()))
        .manage(OrderService::new(pool))
        .mount(
            "/api",
            routes![
                user_route::register,
                user_route::login,
                airplane_route::list_airplane_types,
                airplane_route::create_airplane_type,
                airplane_route::get_airplane_type,
                airplane_route::update_airplane_type,
                airplane_route::list_airplanes,
                airplane_route::create_airplane,
                airplane_route::get_airplane,
                airplane_route::update_airplane,
                airport_route::list_airports,
                airport_route::create_airport,
                airport_route::get_airport,
                airport_route::update_airport,
                airport_route::list_routes,
                airport_route::create_route,
                airport_route::get_route,
                airport_route::update_route,
                crew_route::list_crews,
                crew_route::create_crew,
                crew_route::get_crew,
                crew_route::update_crew,
                flight_route::list_flights,
                flight_route::create_flight,
                flight_route::get_flight,
                flight_route::update_flight,
                order_route::list_orders,
                order_route::create_order,
                order_route::get_order,
            ],
        )
        .attach(AdHoc::on_response("CORS", |_, res| {
            Box::pin(async move {
                res.set_header(rocket::http::Header::new(
                    "Access-Control-Allow-Origin",
                    "*",
                ));
            })
        }))
}
