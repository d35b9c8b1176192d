use crate::models::train::{TrainAvailability, TrainCreateRequest};
use crate::utils::error::{AppError, AppResult};
use sqlx::MySqlPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct TrainService {
    pool: MySqlPool,
}

impl TrainService {
    pub fn new(pool: MySqlPool) -> Self {
        TrainService { pool }
    }

    // Create a train with its full seat pool available
    pub async fn create_train(&self, request: TrainCreateRequest) -> AppResult<String> {
        let train_id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"INSERT INTO train (id, train_name, source, destination, total_seats, available_seats)
            VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&train_id)
        .bind(&request.train_name)
        .bind(&request.source)
        .bind(&request.destination)
        .bind(request.total_seats)
        .bind(request.total_seats)
        .execute(&self.pool)
        .await?;

        Ok(train_id)
    }

    // List trains with seats left on an exact source/destination pair.
    // Read-only snapshot: a listed seat may already be gone by the time the
    // caller reserves.
    pub async fn list_available(
        &self,
        source: &str,
        destination: &str,
    ) -> AppResult<Vec<TrainAvailability>> {
        if source.trim().is_empty() || destination.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Source and destination are required".into(),
            ));
        }

        let trains = sqlx::query_as::<_, TrainAvailability>(
            r#"
            SELECT id, train_name, source, destination, available_seats
            FROM train
            WHERE source = ? AND destination = ? AND available_seats > 0
            "#,
        )
        .bind(source)
        .bind(destination)
        .fetch_all(&self.pool)
        .await?;

        Ok(trains)
    }
}
