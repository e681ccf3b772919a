pub mod airplane_route;
pub mod airport_route;
pub mod crew_route;
pub mod flight_route;
pub mod order_route;
pub mod user_route;
