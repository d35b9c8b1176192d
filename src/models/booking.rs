use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[allow(dead_code)]
#[derive(Debug, sqlx::FromRow)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub train_id: String,
    pub seat_number: i32,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, sqlx::Type, Display)]
#[sqlx(type_name = "ENUM")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[sqlx(rename = "confirmed")]
    #[strum(serialize = "confirmed")]
    Confirmed,
    #[sqlx(rename = "cancelled")]
    #[strum(serialize = "cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BookingRequest {
    pub train_id: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct BookingResponse {
    pub message: String,

    #[schemars(title = "Booking ID")]
    pub booking_id: String,

    #[schemars(title = "Seat Number")]
    pub seat_number: i32,
}

// Confirmed booking joined with its train summary, as returned by the lookup
// endpoints.
#[derive(Debug, Serialize, JsonSchema, sqlx::FromRow)]
pub struct BookingDetail {
    pub id: String,
    pub seat_number: i32,
    pub created_at: NaiveDateTime,
    pub train_name: String,
    pub source: String,
    pub destination: String,
}
