use crate::config::AppConfig;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

// Database connection manager. The acquire timeout bounds how long a request
// waits behind reservation transactions holding the train row lock; expiry
// surfaces as a transient error.
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    // Create a new database connection pool
    pub async fn connect(config: &AppConfig) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await?;

        Ok(Database { pool })
    }

    // Get a reference to the connection pool
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}
