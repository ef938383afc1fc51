use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Hotel, Page, PageRequest};
use crate::repository::{HotelRepository, RepositoryError};

const HOTEL_COLUMNS: &str =
    "id, name, description, city, address, telephone, email, image_url, created_at, updated_at";

#[derive(Clone)]
pub struct PgHotelRepository {
    pool: PgPool,
}

impl PgHotelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelRepository for PgHotelRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, RepositoryError> {
        let query = format!("SELECT {} FROM hotel WHERE id = $1", HOTEL_COLUMNS);
        let hotel = sqlx::query_as::<_, Hotel>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(hotel)
    }

    async fn find_all(&self) -> Result<Vec<Hotel>, RepositoryError> {
        let query = format!("SELECT {} FROM hotel", HOTEL_COLUMNS);
        let hotels = sqlx::query_as::<_, Hotel>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(hotels)
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Hotel>, RepositoryError> {
        // count and slice must come from the same snapshot
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hotel")
            .fetch_one(&mut *tx)
            .await?;

        // column comes from SortField, never from user input; id keeps ties stable
        let query = format!(
            "SELECT {} FROM hotel ORDER BY {} {}, id LIMIT $1 OFFSET $2",
            HOTEL_COLUMNS,
            request.sort.column(),
            if request.descending { "DESC" } else { "ASC" },
        );
        let content = sqlx::query_as::<_, Hotel>(&query)
            .bind(i64::from(request.size))
            .bind(request.offset() as i64)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Page::new(content, total.max(0) as u64, request))
    }

    async fn find_all_by_city(&self, city: &str) -> Result<Vec<Hotel>, RepositoryError> {
        let query = format!("SELECT {} FROM hotel WHERE city = $1", HOTEL_COLUMNS);
        let hotels = sqlx::query_as::<_, Hotel>(&query)
            .bind(city)
            .fetch_all(&self.pool)
            .await?;
        Ok(hotels)
    }

    async fn save(&self, hotel: &Hotel) -> Result<Hotel, RepositoryError> {
        let query = format!(
            "INSERT INTO hotel ({cols}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                city = EXCLUDED.city,
                address = EXCLUDED.address,
                telephone = EXCLUDED.telephone,
                email = EXCLUDED.email,
                image_url = EXCLUDED.image_url,
                updated_at = EXCLUDED.updated_at
             RETURNING {cols}",
            cols = HOTEL_COLUMNS
        );
        let saved = sqlx::query_as::<_, Hotel>(&query)
            .bind(&hotel.id)
            .bind(&hotel.name)
            .bind(&hotel.description)
            .bind(&hotel.city)
            .bind(&hotel.address)
            .bind(&hotel.telephone)
            .bind(&hotel.email)
            .bind(&hotel.image_url)
            .bind(hotel.created_at)
            .bind(hotel.updated_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(saved)
    }

    async fn delete(&self, hotel: &Hotel) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM hotel WHERE id = $1")
            .bind(&hotel.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
