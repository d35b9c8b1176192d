use dotenv::dotenv;
use once_cell::sync::OnceCell;
use sqlx::mysql::MySqlPool as Pool;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::Error;
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

static TEST_DB: OnceCell<Mutex<Option<TestDb>>> = OnceCell::new();
static DB_NAME: OnceCell<String> = OnceCell::new();

#[derive(Debug)]
pub struct TestDb {
    pub pool: Pool,
    pub db_name: String,
}

// Create a connection pool without a database, used to create a new database
async fn create_connection_pool_without_db() -> Result<Pool, Error> {
    dotenv().ok();
    let db_url =
        env::var("ADMIN_DATABASE_URL").expect("ADMIN_DATABASE_URL must be set in .env file");

    let base_url = db_url.split("/").collect::<Vec<&str>>()[..3].join("/");

    MySqlPoolOptions::new()
        .max_connections(10)
        .connect(&base_url)
        .await
}

// Create a connection pool with a test database
async fn create_connection_pool_with_db(db_name: &str) -> Result<Pool, Error> {
    dotenv().ok();
    let db_url =
        env::var("ADMIN_DATABASE_URL").expect("ADMIN_DATABASE_URL must be set in .env file");

    let base_url = db_url.split("/").collect::<Vec<&str>>()[..3].join("/");

    MySqlPoolOptions::new()
        .max_connections(10)
        .connect(&format!("{}/{}", base_url, db_name))
        .await
}

impl TestDb {
    // One throwaway database per test binary; `test_file` keeps the names of
    // concurrently running binaries from colliding.
    pub async fn get_instance(test_file: &str) -> Result<Pool, Error> {
        let test_db = TEST_DB.get_or_init(|| Mutex::new(None));
        let mut guard = test_db.lock().await;

        if let Some(db) = guard.as_ref() {
            return Ok(db.pool.clone());
        }

        let db = Self::setup_database(test_file).await?;
        let pool = db.pool.clone();
        *guard = Some(db);
        Ok(pool)
    }

    async fn setup_database(test_file: &str) -> Result<Self, Error> {
        let db_name = DB_NAME
            .get_or_init(|| {
                let stem = std::path::Path::new(test_file)
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("test")
                    .replace(|c: char| !c.is_ascii_alphanumeric(), "_");
                let timestamp = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap()
                    .as_secs();
                format!("train_test_{}_{}", stem, timestamp)
            })
            .clone();

        println!("Setting up test database: {}", db_name);
        let admin_pool = create_connection_pool_without_db().await?;

        sqlx::query(&format!("CREATE DATABASE {}", db_name))
            .execute(&admin_pool)
            .await?;

        let pool = create_connection_pool_with_db(&db_name).await?;
        Self::create_tables(&pool).await?;

        Ok(Self { pool, db_name })
    }

    async fn create_tables(pool: &Pool) -> Result<(), Error> {
        let tables = vec![
            "CREATE TABLE IF NOT EXISTS user (
                id CHAR(36) NOT NULL PRIMARY KEY,
                username VARCHAR(255) NOT NULL,
                email VARCHAR(255) NOT NULL,
                password VARCHAR(255) NOT NULL,
                role ENUM('user', 'admin') DEFAULT 'user' NOT NULL,
                CONSTRAINT user_username_uindex UNIQUE (username),
                CONSTRAINT user_email_uindex UNIQUE (email)
            )",
            "CREATE TABLE IF NOT EXISTS train (
                id CHAR(36) NOT NULL PRIMARY KEY,
                train_name VARCHAR(255) NOT NULL,
                source VARCHAR(255) NOT NULL,
                destination VARCHAR(255) NOT NULL,
                total_seats INT NOT NULL,
                available_seats INT NOT NULL,
                INDEX train_source_destination_index (source, destination)
            )",
            "CREATE TABLE IF NOT EXISTS booking (
                id CHAR(36) NOT NULL PRIMARY KEY,
                user_id CHAR(36) NOT NULL,
                train_id CHAR(36) NOT NULL,
                seat_number INT NOT NULL,
                status ENUM('confirmed', 'cancelled') DEFAULT 'confirmed' NOT NULL,
                created_at DATETIME(6) NOT NULL,
                CONSTRAINT booking_user_id_fk
                    FOREIGN KEY (user_id) REFERENCES user(id)
                    ON DELETE CASCADE,
                CONSTRAINT booking_train_id_fk
                    FOREIGN KEY (train_id) REFERENCES train(id)
                    ON DELETE CASCADE,
                CONSTRAINT booking_train_seat_uindex UNIQUE (train_id, seat_number),
                INDEX booking_user_id_index (user_id)
            )",
        ];

        for create_sql in tables {
            sqlx::query(create_sql).execute(pool).await?;
        }

        Ok(())
    }

    // Teardown function to drop the database after the test run (not after each test)
    pub async fn cleanup_database() -> Result<(), Error> {
        if let Some(test_db) = TEST_DB.get() {
            if let Some(db) = test_db.lock().await.take() {
                println!("Dropping test database: {}", db.db_name);
                let admin_pool = create_connection_pool_without_db().await?;
                sqlx::query(&format!("DROP DATABASE IF EXISTS {}", db.db_name))
                    .execute(&admin_pool)
                    .await?;
            }
        }
        Ok(())
    }

    // Destructors run outside any async context, so spin up a runtime just for
    // the drop.
    pub fn cleanup_database_sync() -> anyhow::Result<()> {
        if TEST_DB.get().is_none() {
            return Ok(());
        }
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(Self::cleanup_database())?;
        Ok(())
    }
}
