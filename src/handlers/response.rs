use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    /// Client-class failure.
    Error,
    /// Server-class failure.
    Fail,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub status: ResponseStatus,
    pub message: &'static str,
    pub payload: Option<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub error_code: u16,
    pub message: String,
}

/// Successful outcome of each endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessStatus {
    CreateHotel,
    ReadHotel,
    ReadHotelList,
    UpdateHotel,
    DeleteHotel,
    ReadHotelCities,
    ReadHotelsByCity,
}

impl SuccessStatus {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SuccessStatus::CreateHotel => StatusCode::CREATED,
            _ => StatusCode::OK,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SuccessStatus::CreateHotel => "Successfully created the hotel.",
            SuccessStatus::ReadHotel => "Successfully returned the hotel.",
            SuccessStatus::ReadHotelList => "Successfully returned the hotel list.",
            SuccessStatus::UpdateHotel => "Successfully updated the hotel.",
            SuccessStatus::DeleteHotel => "Successfully deleted the hotel.",
            SuccessStatus::ReadHotelCities => "Successfully returned the hotel cities.",
            SuccessStatus::ReadHotelsByCity => "Successfully returned the hotels by city.",
        }
    }
}

pub fn success<T: Serialize>(kind: SuccessStatus, payload: Option<T>) -> Response {
    let body = Json(SuccessResponse {
        status: ResponseStatus::Success,
        message: kind.message(),
        payload,
    });
    (kind.status_code(), body).into_response()
}
