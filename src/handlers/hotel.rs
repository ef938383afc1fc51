use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{Json, Response},
    routing::{get, post},
    Router,
};

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::handlers::response::{success, SuccessStatus};
use crate::handlers::AppState;
use crate::models::{
    CityListResponse, HotelListResponse, HotelPageResponse, HotelRequest, HotelResponse,
    PageRequest,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_hotel))
        .route("/cities", get(list_cities))
        .route("/city/:city", get(list_hotels_by_city))
        .route(
            "/:id",
            get(get_hotel).put(update_hotel).delete(delete_hotel),
        )
        // first segment is the page index; it shares its name with `/:id`
        .route("/:id/:size", get(list_hotels))
}

/// Unwraps the body and rejects it unless every required field is present.
fn checked_request(
    payload: Result<Json<HotelRequest>, JsonRejection>,
) -> Result<HotelRequest, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequestBody(e.body_text()))?;

    let missing = request.missing_required_fields();
    if !missing.is_empty() {
        tracing::warn!("{} Missing required fields to save a hotel: {:?}", API_NAME, missing);
        return Err(AppError::MissingRequiredFields(missing));
    }
    Ok(request)
}

pub(crate) fn parse_page_request(
    page: &str,
    size: &str,
    max_size: u32,
) -> Result<PageRequest, AppError> {
    let page: u32 = page
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidPageRequest(format!("page must be a number >= 0, got '{}'", page)))?;
    let size: u32 = size
        .trim()
        .parse()
        .ok()
        .filter(|size| (1..=max_size).contains(size))
        .ok_or_else(|| {
            AppError::InvalidPageRequest(format!(
                "size must be between 1 and {}, got '{}'",
                max_size, size
            ))
        })?;
    Ok(PageRequest::new(page, size))
}

async fn create_hotel(
    State(state): State<AppState>,
    payload: Result<Json<HotelRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let request = checked_request(payload)?;
    tracing::info!("{} Received create hotel request", API_NAME);

    let created = state.hotel_service.create(request).await?;
    Ok(success(SuccessStatus::CreateHotel, Some(created)))
}

async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let hotel = state.hotel_service.get_by_id(&id).await?;
    Ok(success(SuccessStatus::ReadHotel, Some(HotelResponse::from(hotel))))
}

async fn list_hotels(
    State(state): State<AppState>,
    Path((page, size)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let request = parse_page_request(&page, &size, state.page_max_size)?;

    let page = state.hotel_service.list_all(request).await?;
    Ok(success(SuccessStatus::ReadHotelList, Some(HotelPageResponse::from(page))))
}

async fn update_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<HotelRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let request = checked_request(payload)?;
    tracing::info!("{} Received update request for hotel: {}", API_NAME, id);

    let hotel = state.hotel_service.update(&id, request).await?;
    Ok(success(SuccessStatus::UpdateHotel, Some(HotelResponse::from(hotel))))
}

async fn delete_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    state.hotel_service.delete(&id).await?;
    Ok(success::<()>(SuccessStatus::DeleteHotel, None))
}

async fn list_cities(State(state): State<AppState>) -> Result<Response, AppError> {
    let cities = state.hotel_service.list_cities().await?;
    Ok(success(SuccessStatus::ReadHotelCities, Some(CityListResponse { cities })))
}

async fn list_hotels_by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Response, AppError> {
    let hotel_list = state.hotel_service.list_by_city(&city).await?;
    Ok(success(
        SuccessStatus::ReadHotelsByCity,
        Some(HotelListResponse { hotel_list }),
    ))
}
