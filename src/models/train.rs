use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, sqlx::FromRow)]
pub struct Train {
    pub id: String,
    pub train_name: String,
    pub source: String,
    pub destination: String,
    pub total_seats: i32,
    pub available_seats: i32,
}

#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct TrainCreateRequest {
    #[validate(length(min = 1))]
    pub train_name: String,
    #[validate(length(min = 1))]
    pub source: String,
    #[validate(length(min = 1))]
    pub destination: String,
    #[validate(range(min = 1))]
    pub total_seats: i32,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct TrainCreateResponse {
    pub message: String,

    #[schemars(title = "Train ID")]
    pub train_id: String,
}

// Single entry in the availability listing; `available_seats` is a snapshot and
// may be stale by the time the caller reserves.
#[derive(Debug, Serialize, JsonSchema, sqlx::FromRow)]
pub struct TrainAvailability {
    pub id: String,
    pub train_name: String,
    pub source: String,
    pub destination: String,
    pub available_seats: i32,
}
