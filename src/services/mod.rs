pub mod catalog_service;
pub mod flight_service;
pub mod order_service;
pub mod user_service;
