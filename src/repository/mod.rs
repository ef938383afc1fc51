pub mod errors;
pub mod hotel_repository;
pub mod memory_hotel_repo;
pub mod pg_hotel_repo;

pub use errors::RepositoryError;
pub use hotel_repository::HotelRepository;
pub use memory_hotel_repo::InMemoryHotelRepository;
pub use pg_hotel_repo::PgHotelRepository;

#[cfg(test)]
pub use hotel_repository::MockHotelRepository;
