use crate::models::booking::{BookingDetail, BookingRequest, BookingResponse};
use crate::services::booking_service::BookingService;
use crate::utils::error::AppError;
use crate::utils::jwt::AuthenticatedUser;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

/// Reserve a seat on a train
#[openapi(tag = "Bookings")]
#[post("/bookings", format = "json", data = "<request>")]
pub async fn create_booking(
    request: Json<BookingRequest>,
    auth: AuthenticatedUser,
    booking_service: &State<BookingService>,
) -> Result<Json<BookingResponse>, AppError> {
    let response = booking_service
        .reserve(&auth.user_id, request.into_inner())
        .await?;

    Ok(Json(response))
}

/// List the caller's confirmed bookings
#[openapi(tag = "Bookings")]
#[get("/bookings")]
pub async fn list_bookings(
    auth: AuthenticatedUser,
    booking_service: &State<BookingService>,
) -> Result<Json<Vec<BookingDetail>>, AppError> {
    let bookings = booking_service.list_bookings(&auth.user_id).await?;
    Ok(Json(bookings))
}

/// Fetch one of the caller's bookings by id
#[openapi(tag = "Bookings")]
#[get("/bookings/<booking_id>")]
pub async fn get_booking(
    booking_id: String,
    auth: AuthenticatedUser,
    booking_service: &State<BookingService>,
) -> Result<Json<BookingDetail>, AppError> {
    let booking = booking_service
        .get_booking(&booking_id, &auth.user_id)
        .await?;

    Ok(Json(booking))
}
