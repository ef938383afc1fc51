use serde::Serialize;

use crate::models::{Hotel, Page};

/// Read projection of a hotel. Address and timestamps stay internal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    pub telephone: String,
    pub email: Option<String>,
    pub image_url: Vec<String>,
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            description: hotel.description,
            city: hotel.city,
            telephone: hotel.telephone,
            email: hotel.email,
            image_url: hotel.image_url,
        }
    }
}

/// Returned from the create endpoint; unlike reads it echoes the address.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelCreateResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    pub address: String,
    pub telephone: String,
    pub email: Option<String>,
    pub image_urls: Vec<String>,
}

impl From<Hotel> for HotelCreateResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            description: hotel.description,
            city: hotel.city,
            address: hotel.address,
            telephone: hotel.telephone,
            email: hotel.email,
            image_urls: hotel.image_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelListResponse {
    pub hotel_list: Vec<HotelResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelPageResponse {
    #[serde(rename = "hotelResponseDto")]
    pub hotel_list: Vec<HotelResponse>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub current_page: u32,
    pub page_size: u32,
}

impl From<Page<Hotel>> for HotelPageResponse {
    fn from(page: Page<Hotel>) -> Self {
        let page = page.map(HotelResponse::from);
        Self {
            hotel_list: page.content,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            current_page: page.page,
            page_size: page.size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityListResponse {
    pub cities: Vec<String>,
}
