use async_trait::async_trait;

use crate::models::{Hotel, Page, PageRequest};
use crate::repository::RepositoryError;

/// Storage operations the hotel service relies on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, RepositoryError>;

    /// Every hotel, in storage iteration order.
    async fn find_all(&self) -> Result<Vec<Hotel>, RepositoryError>;

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Hotel>, RepositoryError>;

    /// Exact, case-sensitive match on `city`.
    async fn find_all_by_city(&self, city: &str) -> Result<Vec<Hotel>, RepositoryError>;

    /// Inserts the hotel, or replaces the row with the same id.
    async fn save(&self, hotel: &Hotel) -> Result<Hotel, RepositoryError>;

    async fn delete(&self, hotel: &Hotel) -> Result<(), RepositoryError>;
}
