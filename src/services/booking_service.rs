use crate::models::booking::{BookingDetail, BookingRequest, BookingResponse, BookingStatus};
use crate::models::train::Train;
use crate::utils::error::{AppError, AppResult};
use chrono::Utc;
use sqlx::MySqlPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct BookingService {
    pool: MySqlPool,
}

impl BookingService {
    pub fn new(pool: MySqlPool) -> Self {
        BookingService { pool }
    }

    // Seats are handed out in confirmation order, 1-based, with no reuse of
    // numbers freed by cancellation.
    fn next_seat_number(total_seats: i32, available_seats: i32) -> i32 {
        total_seats - available_seats + 1
    }

    /// Reserve one seat on a train for a user.
    ///
    /// The whole unit runs inside a single transaction with the train row held
    /// under `FOR UPDATE`: reserves on the same train serialize, reserves on
    /// different trains proceed in parallel. Any early return drops the
    /// transaction, which rolls it back in full.
    pub async fn reserve(
        &self,
        user_id: &str,
        request: BookingRequest,
    ) -> AppResult<BookingResponse> {
        let mut tx = self.pool.begin().await?;

        let train = sqlx::query_as::<_, Train>(
            r#"SELECT id, train_name, source, destination, total_seats, available_seats
            FROM train WHERE id = ? FOR UPDATE"#,
        )
        .bind(&request.train_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Train not found".into()))?;

        if train.available_seats <= 0 {
            return Err(AppError::Conflict("No seats available on this train".into()));
        }

        // Must run under the same lock as the seat check, otherwise two
        // requests from one user can both pass before either commits.
        let existing = sqlx::query_scalar::<_, String>(
            r#"SELECT id FROM booking
            WHERE user_id = ? AND train_id = ? AND status = 'confirmed'"#,
        )
        .bind(user_id)
        .bind(&train.id)
        .fetch_optional(&mut *tx)
        .await?;

        if existing.is_some() {
            return Err(AppError::Conflict(
                "You have already booked a seat on this train".into(),
            ));
        }

        let booking_id = Uuid::new_v4().to_string();
        let seat_number = Self::next_seat_number(train.total_seats, train.available_seats);

        sqlx::query(
            r#"INSERT INTO booking (id, user_id, train_id, seat_number, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&booking_id)
        .bind(user_id)
        .bind(&train.id)
        .bind(seat_number)
        .bind(BookingStatus::Confirmed)
        .bind(Utc::now().naive_utc())
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE train SET available_seats = available_seats - 1 WHERE id = ?")
            .bind(&train.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(BookingResponse {
            message: "Booking successful".to_string(),
            booking_id,
            seat_number,
        })
    }

    // Confirmed bookings for a user with their train summaries, oldest first.
    pub async fn list_bookings(&self, user_id: &str) -> AppResult<Vec<BookingDetail>> {
        let bookings = sqlx::query_as::<_, BookingDetail>(
            r#"
            SELECT
                b.id,
                b.seat_number,
                b.created_at,
                t.train_name,
                t.source,
                t.destination
            FROM booking b
            INNER JOIN train t ON b.train_id = t.id
            WHERE b.user_id = ? AND b.status = 'confirmed'
            ORDER BY b.created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    // Ownership is part of the lookup: a booking that exists but belongs to
    // someone else is indistinguishable from one that does not exist.
    pub async fn get_booking(&self, booking_id: &str, user_id: &str) -> AppResult<BookingDetail> {
        let booking = sqlx::query_as::<_, BookingDetail>(
            r#"
            SELECT
                b.id,
                b.seat_number,
                b.created_at,
                t.train_name,
                t.source,
                t.destination
            FROM booking b
            INNER JOIN train t ON b.train_id = t.id
            WHERE b.id = ? AND b.user_id = ? AND b.status = 'confirmed'
            "#,
        )
        .bind(booking_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".into()))?;

        Ok(booking)
    }
}
