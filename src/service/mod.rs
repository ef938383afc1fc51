pub mod errors;
pub mod hotel_service;

pub use errors::ServiceError;
pub use hotel_service::HotelService;
