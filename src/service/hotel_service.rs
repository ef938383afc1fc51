use std::sync::Arc;

use crate::constants::API_NAME;
use crate::models::{Hotel, HotelCreateResponse, HotelRequest, HotelResponse, Page, PageRequest};
use crate::repository::HotelRepository;
use crate::service::ServiceError;

const SAVE_FAILED: &str = "Saving hotel info into database was failed.";
const READ_FAILED: &str = "Reading hotel info from database was failed.";
const LIST_FAILED: &str = "Reading hotel list from database was failed.";
const UPDATE_FAILED: &str = "Updating hotel from database was failed.";
const DELETE_FAILED: &str = "Deleting a hotel by id from database was failed.";
const CITIES_FAILED: &str = "Getting hotel cities from database was failed.";
const BY_CITY_FAILED: &str = "Getting hotels by city from database was failed.";

#[derive(Clone)]
pub struct HotelService {
    repository: Arc<dyn HotelRepository>,
}

impl HotelService {
    pub fn new(repository: Arc<dyn HotelRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, request: HotelRequest) -> Result<HotelCreateResponse, ServiceError> {
        let log_json = request.to_log_json();
        let hotel = Hotel::new(request);

        let saved = self.repository.save(&hotel).await.map_err(|e| {
            tracing::error!("{} Error saving hotel due to: {}", API_NAME, e);
            ServiceError::StorageFailure { message: SAVE_FAILED, source: e }
        })?;

        tracing::info!("{} Successfully saved the hotel {}: {}", API_NAME, saved.id, log_json);
        Ok(HotelCreateResponse::from(saved))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Hotel, ServiceError> {
        let found = self.repository.find_by_id(id).await.map_err(|e| {
            tracing::error!("{} Error get hotel by id: {} due to: {}", API_NAME, id, e);
            ServiceError::StorageFailure { message: READ_FAILED, source: e }
        })?;

        match found {
            Some(hotel) => {
                tracing::info!("{} Returning hotel by id: {}", API_NAME, id);
                Ok(hotel)
            }
            None => {
                tracing::warn!("{} No hotel found for id: {}", API_NAME, id);
                Err(ServiceError::NotFound(format!("No hotel found for id: {}", id)))
            }
        }
    }

    pub async fn list_all(&self, request: PageRequest) -> Result<Page<Hotel>, ServiceError> {
        let page = self.repository.find_page(&request).await.map_err(|e| {
            tracing::error!("{} Error get hotel list due to: {}", API_NAME, e);
            ServiceError::StorageFailure { message: LIST_FAILED, source: e }
        })?;

        tracing::info!(
            "{} Returning page {} of hotel list ({} of {} hotels)",
            API_NAME,
            request.page,
            page.content.len(),
            page.total_elements
        );
        Ok(page)
    }

    pub async fn update(&self, id: &str, request: HotelRequest) -> Result<Hotel, ServiceError> {
        let mut hotel = self.get_by_id(id).await?;
        hotel.update(request);

        let saved = self.repository.save(&hotel).await.map_err(|e| {
            tracing::error!("{} Error updating hotel by id: {} due to: {}", API_NAME, id, e);
            ServiceError::StorageFailure { message: UPDATE_FAILED, source: e }
        })?;

        tracing::info!("{} Successfully updated the hotel by id: {}", API_NAME, id);
        Ok(saved)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let hotel = self.get_by_id(id).await?;

        self.repository.delete(&hotel).await.map_err(|e| {
            tracing::error!("{} Error deleting hotel by id: {} due to: {}", API_NAME, id, e);
            ServiceError::StorageFailure { message: DELETE_FAILED, source: e }
        })?;

        tracing::info!("{} Successfully deleted the hotel by id: {}", API_NAME, id);
        Ok(())
    }

    /// One entry per stored hotel, duplicates included.
    pub async fn list_cities(&self) -> Result<Vec<String>, ServiceError> {
        let hotels = self.repository.find_all().await.map_err(|e| {
            tracing::error!("{} Error getting hotel cities due to: {}", API_NAME, e);
            ServiceError::StorageFailure { message: CITIES_FAILED, source: e }
        })?;

        tracing::info!("{} Returning cities of {} hotels", API_NAME, hotels.len());
        Ok(hotels.into_iter().map(|hotel| hotel.city).collect())
    }

    pub async fn list_by_city(&self, city: &str) -> Result<Vec<HotelResponse>, ServiceError> {
        let hotels = self.repository.find_all_by_city(city).await.map_err(|e| {
            tracing::error!("{} Error getting hotels by city: {} due to: {}", API_NAME, city, e);
            ServiceError::StorageFailure { message: BY_CITY_FAILED, source: e }
        })?;

        tracing::info!("{} Returning {} hotels for city: {}", API_NAME, hotels.len(), city);
        Ok(hotels.into_iter().map(HotelResponse::from).collect())
    }
}
