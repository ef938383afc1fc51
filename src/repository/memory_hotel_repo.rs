use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Hotel, Page, PageRequest};
use crate::repository::{HotelRepository, RepositoryError};

/// Process-local store. Iteration order is insertion order.
#[derive(Default)]
pub struct InMemoryHotelRepository {
    hotels: RwLock<Vec<Hotel>>,
}

impl InMemoryHotelRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.hotels.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.hotels.read().await.is_empty()
    }
}

#[async_trait]
impl HotelRepository for InMemoryHotelRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, RepositoryError> {
        let hotels = self.hotels.read().await;
        Ok(hotels.iter().find(|h| h.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Hotel>, RepositoryError> {
        Ok(self.hotels.read().await.clone())
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Hotel>, RepositoryError> {
        let mut sorted = self.hotels.read().await.clone();
        sorted.sort_by(|a, b| {
            let ordering = request.sort.compare(a, b).then_with(|| a.id.cmp(&b.id));
            if request.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });

        let total = sorted.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content: Vec<Hotel> = sorted
            .into_iter()
            .skip(offset)
            .take(request.size as usize)
            .collect();

        Ok(Page::new(content, total, request))
    }

    async fn find_all_by_city(&self, city: &str) -> Result<Vec<Hotel>, RepositoryError> {
        let hotels = self.hotels.read().await;
        Ok(hotels.iter().filter(|h| h.city == city).cloned().collect())
    }

    async fn save(&self, hotel: &Hotel) -> Result<Hotel, RepositoryError> {
        let mut hotels = self.hotels.write().await;
        match hotels.iter_mut().find(|h| h.id == hotel.id) {
            Some(existing) => *existing = hotel.clone(),
            None => hotels.push(hotel.clone()),
        }
        Ok(hotel.clone())
    }

    async fn delete(&self, hotel: &Hotel) -> Result<(), RepositoryError> {
        self.hotels.write().await.retain(|h| h.id != hotel.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HotelRequest, SortField};

    fn hotel(name: &str, city: &str, updated_at: i64) -> Hotel {
        let mut hotel = Hotel::new(HotelRequest {
            name: Some(name.to_string()),
            city: Some(city.to_string()),
            address: Some("1 Main Street".to_string()),
            telephone: Some("0110000000".to_string()),
            ..Default::default()
        });
        hotel.updated_at = updated_at;
        hotel
    }

    #[tokio::test]
    async fn save_inserts_then_replaces_in_place() {
        let repo = InMemoryHotelRepository::new();
        let mut first = hotel("A", "Colombo", 1);
        repo.save(&first).await.unwrap();
        repo.save(&hotel("B", "Kandy", 2)).await.unwrap();

        first.name = "A2".to_string();
        repo.save(&first).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "A2");
        assert_eq!(all[1].name, "B");
    }

    #[tokio::test]
    async fn find_all_by_city_is_exact_match() {
        let repo = InMemoryHotelRepository::new();
        repo.save(&hotel("A", "Colombo", 1)).await.unwrap();
        repo.save(&hotel("B", "colombo", 2)).await.unwrap();
        repo.save(&hotel("C", "Colombo 7", 3)).await.unwrap();

        let found = repo.find_all_by_city("Colombo").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "A");
    }

    #[tokio::test]
    async fn find_page_sorts_and_slices() {
        let repo = InMemoryHotelRepository::new();
        for (i, name) in ["A", "B", "C", "D", "E"].iter().enumerate() {
            repo.save(&hotel(name, "Galle", i as i64)).await.unwrap();
        }

        let page = repo.find_page(&PageRequest::new(1, 2)).await.unwrap();
        let names: Vec<_> = page.content.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B"]);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);

        let ascending = PageRequest {
            sort: SortField::Name,
            descending: false,
            ..PageRequest::new(0, 3)
        };
        let page = repo.find_page(&ascending).await.unwrap();
        let names: Vec<_> = page.content.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let repo = InMemoryHotelRepository::new();
        repo.save(&hotel("A", "Galle", 1)).await.unwrap();

        let page = repo.find_page(&PageRequest::new(4, 10)).await.unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 1);
    }

    #[tokio::test]
    async fn delete_removes_only_that_hotel() {
        let repo = InMemoryHotelRepository::new();
        let a = hotel("A", "Galle", 1);
        repo.save(&a).await.unwrap();
        repo.save(&hotel("B", "Galle", 2)).await.unwrap();

        repo.delete(&a).await.unwrap();

        assert_eq!(repo.len().await, 1);
        assert!(repo.find_by_id(&a.id).await.unwrap().is_none());
    }
}
