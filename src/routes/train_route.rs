use crate::models::train::{TrainAvailability, TrainCreateRequest, TrainCreateResponse};
use crate::services::train_service::TrainService;
use crate::utils::error::AppError;
use crate::utils::jwt::{AdminUser, AuthenticatedUser};
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use validator::Validate;

/// Add a train (admin only)
#[openapi(tag = "Trains")]
#[post("/trains", format = "json", data = "<request>")]
pub async fn add_train(
    request: Json<TrainCreateRequest>,
    _admin: AdminUser,
    train_service: &State<TrainService>,
) -> Result<Json<TrainCreateResponse>, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let train_id = train_service.create_train(request).await?;
    Ok(Json(TrainCreateResponse {
        message: "Train added successfully".to_string(),
        train_id,
    }))
}

/// List trains with seats available between two stations
#[openapi(tag = "Trains")]
#[get("/trains/availability?<source>&<destination>")]
pub async fn train_availability(
    source: String,
    destination: String,
    _auth: AuthenticatedUser,
    train_service: &State<TrainService>,
) -> Result<Json<Vec<TrainAvailability>>, AppError> {
    let trains = train_service.list_available(&source, &destination).await?;
    Ok(Json(trains))
}
