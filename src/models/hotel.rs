use chrono::Utc;
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::HOTEL_ID_PREFIX;
use crate::models::HotelRequest;

/// Persisted hotel record, one row of the `hotel` table.
///
/// Required fields are checked by the caller before a request reaches
/// [`Hotel::new`] or [`Hotel::update`]; the entity itself accepts whatever it
/// is given.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    pub address: String,
    pub telephone: String,
    pub email: Option<String>,
    pub image_url: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Hotel {
    pub fn new(request: HotelRequest) -> Self {
        let now = now_millis();
        Self {
            id: format!("{}{}", HOTEL_ID_PREFIX, Uuid::new_v4()),
            name: request.name.unwrap_or_default(),
            description: request.description,
            city: request.city.unwrap_or_default(),
            address: request.address.unwrap_or_default(),
            telephone: request.telephone.unwrap_or_default(),
            email: request.email,
            image_url: request.image_url.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites every mutable field. `id` and `created_at` are left alone.
    pub fn update(&mut self, request: HotelRequest) {
        self.name = request.name.unwrap_or_default();
        self.description = request.description;
        self.city = request.city.unwrap_or_default();
        self.address = request.address.unwrap_or_default();
        self.telephone = request.telephone.unwrap_or_default();
        self.email = request.email;
        self.image_url = request.image_url.unwrap_or_default();
        // never step backwards if the wall clock does
        self.updated_at = now_millis().max(self.updated_at);
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, city: &str) -> HotelRequest {
        HotelRequest {
            name: Some(name.to_string()),
            description: Some("Sea facing rooms".to_string()),
            city: Some(city.to_string()),
            address: Some("12 Galle Road".to_string()),
            telephone: Some("0112345678".to_string()),
            email: Some("front@example.com".to_string()),
            image_url: Some(vec!["https://img.example.com/1.png".to_string()]),
        }
    }

    #[test]
    fn new_hotel_gets_prefixed_unique_id() {
        let first = Hotel::new(request("Ocean View", "Colombo"));
        let second = Hotel::new(request("Ocean View", "Colombo"));

        assert!(first.id.starts_with(HOTEL_ID_PREFIX));
        assert_eq!(first.id.len(), HOTEL_ID_PREFIX.len() + 36);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn new_hotel_copies_fields_and_stamps_both_timestamps() {
        let hotel = Hotel::new(request("Ocean View", "Colombo"));

        assert_eq!(hotel.name, "Ocean View");
        assert_eq!(hotel.city, "Colombo");
        assert_eq!(hotel.address, "12 Galle Road");
        assert_eq!(hotel.image_url.len(), 1);
        assert_eq!(hotel.created_at, hotel.updated_at);
        assert!(hotel.created_at > 0);
    }

    #[test]
    fn missing_image_list_becomes_empty() {
        let mut req = request("Ocean View", "Colombo");
        req.image_url = None;

        assert!(Hotel::new(req).image_url.is_empty());
    }

    #[test]
    fn update_overwrites_fields_but_keeps_identity() {
        let mut hotel = Hotel::new(request("Ocean View", "Colombo"));
        let id = hotel.id.clone();
        let created_at = hotel.created_at;
        let previous_update = hotel.updated_at;

        let mut req = request("Hill Top", "Kandy");
        req.email = None;
        req.image_url = None;
        hotel.update(req);

        assert_eq!(hotel.id, id);
        assert_eq!(hotel.created_at, created_at);
        assert!(hotel.updated_at >= previous_update);
        assert_eq!(hotel.name, "Hill Top");
        assert_eq!(hotel.city, "Kandy");
        assert_eq!(hotel.email, None);
        assert!(hotel.image_url.is_empty());
    }

    #[test]
    fn update_never_moves_updated_at_backwards() {
        let mut hotel = Hotel::new(request("Ocean View", "Colombo"));
        let future = hotel.updated_at + 60_000;
        hotel.updated_at = future;

        hotel.update(request("Ocean View", "Colombo"));

        assert_eq!(hotel.updated_at, future);
    }
}
