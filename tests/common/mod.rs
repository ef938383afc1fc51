use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hotel_api_rust::{
    handlers::{build_router, AppState},
    models::{Hotel, Page, PageRequest},
    repository::{HotelRepository, RepositoryError},
    service::HotelService,
};
use serde_json::json;
use tokio::net::TcpListener;

pub const PAGE_MAX_SIZE: u32 = 50;

/// Storage that fails every call, for exercising the 500 paths.
pub struct FailingHotelRepository;

fn down() -> RepositoryError {
    RepositoryError::Unavailable("database is down".to_string())
}

#[async_trait]
impl HotelRepository for FailingHotelRepository {
    async fn find_by_id(&self, _id: &str) -> Result<Option<Hotel>, RepositoryError> {
        Err(down())
    }

    async fn find_all(&self) -> Result<Vec<Hotel>, RepositoryError> {
        Err(down())
    }

    async fn find_page(&self, _request: &PageRequest) -> Result<Page<Hotel>, RepositoryError> {
        Err(down())
    }

    async fn find_all_by_city(&self, _city: &str) -> Result<Vec<Hotel>, RepositoryError> {
        Err(down())
    }

    async fn save(&self, _hotel: &Hotel) -> Result<Hotel, RepositoryError> {
        Err(down())
    }

    async fn delete(&self, _hotel: &Hotel) -> Result<(), RepositoryError> {
        Err(down())
    }
}

pub async fn create_test_server(repository: Arc<dyn HotelRepository>) -> SocketAddr {
    let service = HotelService::new(repository);
    let app = build_router(AppState::new(service, PAGE_MAX_SIZE));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut retries = 0;
    while retries < 10 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
        retries += 1;
    }

    addr
}

pub fn hotel_body(name: &str, city: &str) -> serde_json::Value {
    json!({
        "name": name,
        "description": "Beachfront property",
        "city": city,
        "address": "12 Galle Road",
        "telephone": "0112345678",
        "email": "stay@example.com",
        "imageUrl": ["https://img.example.com/1.png", "https://img.example.com/2.png"]
    })
}
